//! Record types for the four seeded tables.

use serde::Serialize;
use time::Date;
use uuid::Uuid;

/// A dashboard login. `password` is plaintext and must be hashed before it
/// reaches the store.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    #[serde(skip_serializing)]
    pub password: &'static str,
    pub profile_pic: Option<&'static str>,
}

/// A user whose password has been replaced by its bcrypt hash.
#[derive(Debug, Clone)]
pub struct HashedUser<'a> {
    pub user: &'a User,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

/// An invoice billed to a customer. `customer_id` is not checked against the
/// customers table.
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: &'static str,
    pub date: Date,
}

/// Monthly revenue keyed by a short month code such as `"Jan"`.
#[derive(Debug, Clone, Serialize)]
pub struct Revenue {
    pub month: &'static str,
    pub revenue: i32,
}

/// Per-table outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Fixture rows offered to the store.
    pub attempted: usize,
    /// Rows actually written; the rest already existed.
    pub inserted: usize,
}

impl TableSummary {
    pub fn skipped(&self) -> usize {
        self.attempted - self.inserted
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: TableSummary,
    pub customers: TableSummary,
    pub invoices: TableSummary,
    pub revenue: TableSummary,
}
