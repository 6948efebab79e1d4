//! Database seeding.
//!
//! The [`Seeder`] fills any [`SeedStore`](crate::store::SeedStore);
//! [`seed_database`] wraps it in a Postgres session with a transaction.

mod seeder;
mod session;

pub use seeder::Seeder;
pub use session::seed_database;
