//! In-memory store used by the seeding tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use super::SeedStore;
use crate::{
    error::SeedError,
    models::{Customer, HashedUser, Invoice, Revenue},
    schema::{Table, UUID_EXTENSION},
};

/// A user row as it would sit in the `users` table.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_pic: Option<String>,
}

#[derive(Default)]
struct State {
    uuid_extension: bool,
    tables: HashSet<Table>,
    users: HashMap<Uuid, StoredUser>,
    customers: HashMap<Uuid, Customer>,
    invoices: HashMap<Uuid, Invoice>,
    revenue: HashMap<String, i32>,
    /// Table touched by every statement, in execution order.
    log: Vec<Table>,
    pending_writes: usize,
    peak_pending_writes: usize,
}

/// Store that mirrors the Postgres schema rules in process memory.
///
/// Tables must be ensured before rows can be written, and tables with
/// generated UUID keys need the UUID extension first, as in Postgres.
/// Every insert suspends once before it executes, like a statement waiting
/// on the server, so concurrent callers interleave. Cloning shares the
/// underlying state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
    extension_unavailable: bool,
    failing_table: Option<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every attempt to install the UUID extension fail.
    pub fn without_uuid_extension(mut self) -> Self {
        self.extension_unavailable = true;
        self
    }

    /// Makes every row insert into `table` fail.
    pub fn fail_writes_to(mut self, table: Table) -> Self {
        self.failing_table = Some(table);
        self
    }

    /// Number of rows in `table`, or `None` if it was never created.
    pub async fn row_count(&self, table: Table) -> Option<usize> {
        let state = self.state.lock().await;
        if !state.tables.contains(&table) {
            return None;
        }
        let count = match table {
            Table::Users => state.users.len(),
            Table::Customers => state.customers.len(),
            Table::Invoices => state.invoices.len(),
            Table::Revenue => state.revenue.len(),
        };
        Some(count)
    }

    pub async fn user(&self, user_id: Uuid) -> Option<StoredUser> {
        self.state.lock().await.users.get(&user_id).cloned()
    }

    pub async fn revenue(&self, month: &str) -> Option<i32> {
        self.state.lock().await.revenue.get(month).copied()
    }

    /// Tables touched by each executed statement, oldest first.
    pub async fn statement_log(&self) -> Vec<Table> {
        self.state.lock().await.log.clone()
    }

    /// Most inserts that were waiting to execute at the same time.
    pub async fn peak_pending_writes(&self) -> usize {
        self.state.lock().await.peak_pending_writes
    }

    async fn start_write(&self) -> MutexGuard<'_, State> {
        {
            let mut state = self.state.lock().await;
            state.pending_writes += 1;
            state.peak_pending_writes = state.peak_pending_writes.max(state.pending_writes);
        }
        tokio::task::yield_now().await;

        let mut state = self.state.lock().await;
        state.pending_writes -= 1;
        state
    }

    fn check_write(&self, state: &State, table: Table) -> Result<(), SeedError> {
        if !state.tables.contains(&table) {
            return Err(SeedError::MissingTable(table.name()));
        }
        if self.failing_table == Some(table) {
            return Err(SeedError::Database(sqlx::Error::Protocol(format!(
                "write to {} rejected",
                table.name()
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn ensure_uuid_extension(&self) -> Result<(), SeedError> {
        if self.extension_unavailable {
            return Err(SeedError::MissingExtension(UUID_EXTENSION));
        }
        self.state.lock().await.uuid_extension = true;
        Ok(())
    }

    async fn ensure_table(&self, table: Table) -> Result<(), SeedError> {
        let mut state = self.state.lock().await;
        if table.uses_generated_uuid() && !state.uuid_extension {
            return Err(SeedError::MissingExtension(UUID_EXTENSION));
        }
        state.tables.insert(table);
        state.log.push(table);
        Ok(())
    }

    async fn insert_user(&self, user: &HashedUser<'_>) -> Result<bool, SeedError> {
        let mut state = self.start_write().await;
        self.check_write(&state, Table::Users)?;
        state.log.push(Table::Users);

        let taken = state.users.contains_key(&user.user.id)
            || state.users.values().any(|u| u.email == user.user.email);
        if taken {
            return Ok(false);
        }

        state.users.insert(
            user.user.id,
            StoredUser {
                user_id: user.user.id,
                name: user.user.name.to_string(),
                email: user.user.email.to_string(),
                password: user.password_hash.clone(),
                profile_pic: user.user.profile_pic.map(str::to_string),
            },
        );
        Ok(true)
    }

    async fn insert_customer(&self, customer: &Customer) -> Result<bool, SeedError> {
        let mut state = self.start_write().await;
        self.check_write(&state, Table::Customers)?;
        state.log.push(Table::Customers);

        if state.customers.contains_key(&customer.id) {
            return Ok(false);
        }
        state.customers.insert(customer.id, customer.clone());
        Ok(true)
    }

    async fn insert_invoice(&self, invoice: &Invoice) -> Result<bool, SeedError> {
        let mut state = self.start_write().await;
        self.check_write(&state, Table::Invoices)?;
        state.log.push(Table::Invoices);

        if state.invoices.contains_key(&invoice.id) {
            return Ok(false);
        }
        state.invoices.insert(invoice.id, invoice.clone());
        Ok(true)
    }

    async fn insert_revenue(&self, revenue: &Revenue) -> Result<bool, SeedError> {
        let mut state = self.start_write().await;
        self.check_write(&state, Table::Revenue)?;
        state.log.push(Table::Revenue);

        if state.revenue.contains_key(revenue.month) {
            return Ok(false);
        }
        state.revenue.insert(revenue.month.to_string(), revenue.revenue);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[tokio::test]
    async fn test_insert_requires_table() {
        let store = MemoryStore::new();
        let customer = &Fixtures::placeholder().customers[0];

        let err = store.insert_customer(customer).await.unwrap_err();

        assert!(matches!(err, SeedError::MissingTable("customers")));
        assert_eq!(store.row_count(Table::Customers).await, None);
    }

    #[tokio::test]
    async fn test_uuid_table_requires_extension() {
        let store = MemoryStore::new();

        let err = store.ensure_table(Table::Invoices).await.unwrap_err();
        assert!(matches!(err, SeedError::MissingExtension(UUID_EXTENSION)));

        // revenue has no generated key
        store.ensure_table(Table::Revenue).await.unwrap();
        assert_eq!(store.row_count(Table::Revenue).await, Some(0));
    }

    #[tokio::test]
    async fn test_duplicate_key_is_skipped() {
        let store = MemoryStore::new();
        store.ensure_table(Table::Revenue).await.unwrap();
        let jan = Revenue {
            month: "Jan",
            revenue: 2000,
        };
        let jan_again = Revenue {
            month: "Jan",
            revenue: 9999,
        };

        assert!(store.insert_revenue(&jan).await.unwrap());
        assert!(!store.insert_revenue(&jan_again).await.unwrap());
        assert_eq!(store.revenue("Jan").await, Some(2000));
    }

    #[tokio::test]
    async fn test_user_email_conflict_is_skipped() {
        let store = MemoryStore::new();
        store.ensure_uuid_extension().await.unwrap();
        store.ensure_table(Table::Users).await.unwrap();

        let first = &Fixtures::placeholder().users[0];
        let same_email = crate::models::User {
            id: Uuid::new_v4(),
            ..first.clone()
        };

        let inserted = store
            .insert_user(&HashedUser {
                user: first,
                password_hash: "hash-a".to_string(),
            })
            .await
            .unwrap();
        let duplicate = store
            .insert_user(&HashedUser {
                user: &same_email,
                password_hash: "hash-b".to_string(),
            })
            .await
            .unwrap();

        assert!(inserted);
        assert!(!duplicate);
        assert_eq!(store.row_count(Table::Users).await, Some(1));
    }
}
