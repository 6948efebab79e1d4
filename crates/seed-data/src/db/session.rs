//! One seeding run against Postgres, scoped to a single connection.

use sqlx::{ConnectOptions, Connection, PgConnection, postgres::PgConnectOptions};
use tracing::{info, warn};

use super::Seeder;
use crate::{error::SeedError, fixtures::Fixtures, models::SeedSummary, store::PgSeedStore};

/// Opens a connection, seeds every table inside one transaction, and closes
/// the connection again.
///
/// The transaction is committed only if all four routines succeed; any error
/// rolls it back before being returned.
pub async fn seed_database(
    options: &PgConnectOptions,
    fixtures: &Fixtures<'_>,
) -> Result<SeedSummary, SeedError> {
    let mut conn = options.connect().await?;
    info!("Connected to database");

    let result = seed_in_transaction(&mut conn, fixtures).await;

    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection: {e}");
    }

    result
}

async fn seed_in_transaction(
    conn: &mut PgConnection,
    fixtures: &Fixtures<'_>,
) -> Result<SeedSummary, SeedError> {
    let store = PgSeedStore::new(conn.begin().await?);

    let outcome = Seeder::new(&store).seed_all(fixtures).await;

    match outcome {
        Ok(summary) => {
            store.commit().await?;
            info!("Seed transaction committed");
            Ok(summary)
        }
        Err(e) => {
            if let Err(rollback_err) = store.rollback().await {
                warn!("Rollback failed: {rollback_err}");
            }
            Err(e)
        }
    }
}
