//! The seeding endpoint.

use axum::{Extension, response::Json};
use seed_data::fixtures::Fixtures;
use serde::Serialize;
use tracing::info;

use crate::{database::Database, errors::AppError, request_span::record_seed_summary};

pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
}

/// Creates the dashboard tables and inserts the placeholder data.
///
/// Safe to call repeatedly: rows that already exist are left alone. All four
/// tables are seeded in one transaction, so a failure leaves no partial data.
pub async fn seed(Extension(db): Extension<Database>) -> Result<Json<SeedResponse>, AppError> {
    let summary = db.seed(&Fixtures::placeholder()).await?;

    record_seed_summary(&summary);
    info!("Database seeded");

    Ok(Json(SeedResponse {
        message: SEED_SUCCESS_MESSAGE,
    }))
}
