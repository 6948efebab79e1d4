//! Placeholder data and database seeding for the invoicing dashboard.
//!
//! This crate creates the `users`, `customers`, `invoices` and `revenue`
//! tables and fills them with a fixed data set. Seeding is idempotent: rows
//! whose key already exists are skipped.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let options = DatabaseConfig::from_env()?.connect_options()?;
//! let summary = seed_database(&options, &Fixtures::placeholder()).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod password;
pub mod schema;
pub mod store;

pub use error::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, DatabaseConfig};
    pub use crate::db::{Seeder, seed_database};
    pub use crate::error::SeedError;
    pub use crate::fixtures::Fixtures;
    pub use crate::models::{SeedSummary, TableSummary};
    pub use crate::schema::Table;
    pub use crate::store::{PgSeedStore, SeedStore};
}
