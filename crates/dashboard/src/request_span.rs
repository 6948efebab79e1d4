//! Per-request tracing span.
//!
//! Every request runs inside a `request` span keyed by a correlation id,
//! taken from the `x-request-id` header or generated when the caller sent
//! none. The id is echoed on the response. The span also holds the response
//! status and, for seed requests, the rows inserted per table, so the
//! `Request completed` event reports what the request did.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use seed_data::models::SeedSummary;
use tracing::{Instrument, Span, field, info, info_span};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

fn correlation_id(request: &Request) -> String {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Records the insert counts of a finished seeding run on the request span.
///
/// Outside a request span this does nothing.
pub fn record_seed_summary(summary: &SeedSummary) {
    let span = Span::current();
    span.record("users", summary.users.inserted as u64);
    span.record("customers", summary.customers.inserted as u64);
    span.record("invoices", summary.invoices.inserted as u64);
    span.record("revenue", summary.revenue.inserted as u64);
}

pub async fn request_span_middleware(request: Request, next: Next) -> Response {
    let request_id = correlation_id(&request);
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        status = field::Empty,
        users = field::Empty,
        customers = field::Empty,
        invoices = field::Empty,
        revenue = field::Empty,
    );

    let mut response = next.run(request).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    span.record("status", response.status().as_u16());
    span.in_scope(|| info!("Request completed"));

    response
}
