pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod request_span;

use axum::{
    Extension, Router,
    http::{HeaderValue, header},
    middleware,
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    database::Database,
    handlers::{health_check, seed},
    request_span::request_span_middleware,
};

pub fn create_router(db: Database) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/seed", get(seed))
        .layer(Extension(db))
        .layer(middleware::from_fn(request_span_middleware))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

pub async fn run_server(db: Database, port: u16) -> anyhow::Result<()> {
    let app = create_router(db);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
