//! Prometheus metrics endpoint handler.
//!
//! # Security
//!
//! This endpoint is unauthenticated to allow Prometheus to scrape metrics.
//! No PII or secrets are exposed; only operational data with bounded
//! cardinality labels.

use crate::handlers::auth_handler::AppState;
use crate::observability::metrics::refresh_timeout_gauges;
use axum::extract::State;
use axum::response::IntoResponse;
use std::sync::Arc;

/// Handler for GET /metrics
///
/// Refreshes the timeout gauges from the live registry before rendering,
/// so every scrape reports the delays as currently configured rather than
/// a copy stored at set time.
#[tracing::instrument(skip_all, name = "auth.metrics.scrape")]
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    refresh_timeout_gauges(&state.timeouts);
    state.metrics_handle.render()
}
