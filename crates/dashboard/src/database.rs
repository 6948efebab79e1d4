use seed_data::{
    db::seed_database,
    fixtures::Fixtures,
    models::SeedSummary,
};
use sqlx::postgres::PgConnectOptions;

use crate::errors::AppError;

/// Connection settings shared by every request.
///
/// Holds no open connection; each seeding run opens its own and closes it
/// when done.
#[derive(Clone)]
pub struct Database {
    options: PgConnectOptions,
}

impl Database {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub fn host(&self) -> &str {
        self.options.get_host()
    }

    pub async fn seed(&self, fixtures: &Fixtures<'_>) -> Result<SeedSummary, AppError> {
        let summary = seed_database(&self.options, fixtures).await?;
        Ok(summary)
    }
}
