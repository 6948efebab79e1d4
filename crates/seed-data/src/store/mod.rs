//! Storage backends the [`Seeder`](crate::db::Seeder) writes through.
//!
//! A store knows how to create the seeded tables and how to insert a row
//! only when no row with the same unique key is present. The `insert_*`
//! methods return `true` when a row was written and `false` when it was
//! skipped.

#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub use postgres::PgSeedStore;

use async_trait::async_trait;

use crate::{
    error::SeedError,
    models::{Customer, HashedUser, Invoice, Revenue},
    schema::Table,
};

#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Installs the UUID generation extension if it is missing.
    async fn ensure_uuid_extension(&self) -> Result<(), SeedError>;

    /// Creates `table` if it does not exist yet.
    async fn ensure_table(&self, table: Table) -> Result<(), SeedError>;

    async fn insert_user(&self, user: &HashedUser<'_>) -> Result<bool, SeedError>;

    async fn insert_customer(&self, customer: &Customer) -> Result<bool, SeedError>;

    async fn insert_invoice(&self, invoice: &Invoice) -> Result<bool, SeedError>;

    async fn insert_revenue(&self, revenue: &Revenue) -> Result<bool, SeedError>;
}
