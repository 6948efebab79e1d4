//! Seeds the dashboard database without going through the HTTP server.
//!
//! Run with:
//! ```
//! POSTGRES_URL=postgres://... cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = DatabaseConfig::from_env()?.connect_options()?;

    tracing::info!("Seeding database at {}", options.get_host());

    let summary = seed_database(&options, &Fixtures::placeholder()).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Users: {} inserted", summary.users.inserted);
    tracing::info!("  Customers: {} inserted", summary.customers.inserted);
    tracing::info!("  Invoices: {} inserted", summary.invoices.inserted);
    tracing::info!("  Revenue: {} inserted", summary.revenue.inserted);

    Ok(())
}
