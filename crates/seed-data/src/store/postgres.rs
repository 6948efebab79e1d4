use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use tokio::sync::Mutex;
use tracing::debug;

use super::SeedStore;
use crate::{
    error::SeedError,
    models::{Customer, HashedUser, Invoice, Revenue},
    schema::{Table, UUID_EXTENSION},
};

/// Postgres store bound to a single open transaction.
///
/// The transaction is one connection, so concurrent callers take turns on
/// the mutex and their statements interleave one at a time.
pub struct PgSeedStore<'c> {
    tx: Mutex<Transaction<'c, Postgres>>,
}

impl<'c> PgSeedStore<'c> {
    pub fn new(tx: Transaction<'c, Postgres>) -> Self {
        Self { tx: Mutex::new(tx) }
    }

    pub async fn commit(self) -> Result<(), SeedError> {
        self.tx.into_inner().commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), SeedError> {
        self.tx.into_inner().rollback().await?;
        Ok(())
    }
}

#[async_trait]
impl<'c> SeedStore for PgSeedStore<'c> {
    async fn ensure_uuid_extension(&self) -> Result<(), SeedError> {
        let mut tx = self.tx.lock().await;
        sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
            .execute(&mut **tx)
            .await?;
        debug!(extension = UUID_EXTENSION, "Extension ensured");
        Ok(())
    }

    async fn ensure_table(&self, table: Table) -> Result<(), SeedError> {
        let mut tx = self.tx.lock().await;
        sqlx::query(table.create_sql()).execute(&mut **tx).await?;
        debug!(table = table.name(), "Table ensured");
        Ok(())
    }

    async fn insert_user(&self, user: &HashedUser<'_>) -> Result<bool, SeedError> {
        let mut tx = self.tx.lock().await;
        // No conflict target: both user_id and email are unique.
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_id, name, email, password, profile_pic)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user.user.id)
        .bind(user.user.name)
        .bind(user.user.email)
        .bind(&user.password_hash)
        .bind(user.user.profile_pic)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn insert_customer(&self, customer: &Customer) -> Result<bool, SeedError> {
        let mut tx = self.tx.lock().await;
        let result = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.image_url)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn insert_invoice(&self, invoice: &Invoice) -> Result<bool, SeedError> {
        let mut tx = self.tx.lock().await;
        let result = sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(invoice.id)
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status)
        .bind(invoice.date)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn insert_revenue(&self, revenue: &Revenue) -> Result<bool, SeedError> {
        let mut tx = self.tx.lock().await;
        let result = sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(revenue.month)
        .bind(revenue.revenue)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
