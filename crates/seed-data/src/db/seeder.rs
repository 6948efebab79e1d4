//! Table seeding routines.

use futures::future::try_join_all;
use tracing::info;

use crate::{
    error::SeedError,
    fixtures::Fixtures,
    models::{Customer, HashedUser, Invoice, Revenue, SeedSummary, TableSummary, User},
    password::hash_password,
    schema::Table,
    store::SeedStore,
};

/// Creates the dashboard tables and fills them with fixture rows.
///
/// Every routine issues its inserts concurrently and skips rows whose key is
/// already present, so seeding the same store twice leaves it unchanged.
pub struct Seeder<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: SeedStore + ?Sized> Seeder<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Runs all four table routines concurrently and waits for every one.
    ///
    /// The first failure aborts the whole run.
    pub async fn seed_all(&self, fixtures: &Fixtures<'_>) -> Result<SeedSummary, SeedError> {
        let (users, customers, invoices, revenue) = tokio::try_join!(
            self.seed_users(fixtures.users),
            self.seed_customers(fixtures.customers),
            self.seed_invoices(fixtures.invoices),
            self.seed_revenue(fixtures.revenue),
        )?;

        Ok(SeedSummary {
            users,
            customers,
            invoices,
            revenue,
        })
    }

    /// Seeds users, hashing each password before its insert is issued.
    pub async fn seed_users(&self, users: &[User]) -> Result<TableSummary, SeedError> {
        info!("Seeding {} users...", users.len());
        self.store.ensure_uuid_extension().await?;
        self.store.ensure_table(Table::Users).await?;

        let inserted = try_join_all(users.iter().map(|user| async move {
            let password_hash = hash_password(user.password).await?;
            self.store
                .insert_user(&HashedUser {
                    user,
                    password_hash,
                })
                .await
        }))
        .await?;

        Ok(summarize(Table::Users, &inserted))
    }

    /// Seeds customers, keyed by their fixed ids.
    pub async fn seed_customers(&self, customers: &[Customer]) -> Result<TableSummary, SeedError> {
        info!("Seeding {} customers...", customers.len());
        self.store.ensure_uuid_extension().await?;
        self.store.ensure_table(Table::Customers).await?;

        let inserted = try_join_all(
            customers
                .iter()
                .map(|customer| self.store.insert_customer(customer)),
        )
        .await?;

        Ok(summarize(Table::Customers, &inserted))
    }

    /// Seeds invoices. Customer ids are written as given, without checking
    /// that the customer exists.
    pub async fn seed_invoices(&self, invoices: &[Invoice]) -> Result<TableSummary, SeedError> {
        info!("Seeding {} invoices...", invoices.len());
        self.store.ensure_uuid_extension().await?;
        self.store.ensure_table(Table::Invoices).await?;

        let inserted = try_join_all(
            invoices
                .iter()
                .map(|invoice| self.store.insert_invoice(invoice)),
        )
        .await?;

        Ok(summarize(Table::Invoices, &inserted))
    }

    /// Seeds the monthly revenue rows. The table has no generated key, so
    /// the UUID extension is not required.
    pub async fn seed_revenue(&self, revenue: &[Revenue]) -> Result<TableSummary, SeedError> {
        info!("Seeding {} revenue months...", revenue.len());
        self.store.ensure_table(Table::Revenue).await?;

        let inserted =
            try_join_all(revenue.iter().map(|rev| self.store.insert_revenue(rev))).await?;

        Ok(summarize(Table::Revenue, &inserted))
    }
}

fn summarize(table: Table, inserted: &[bool]) -> TableSummary {
    let summary = TableSummary {
        attempted: inserted.len(),
        inserted: inserted.iter().filter(|&&written| written).count(),
    };
    info!(
        "Seeded {}: {} inserted, {} already present",
        table.name(),
        summary.inserted,
        summary.skipped()
    );
    summary
}
