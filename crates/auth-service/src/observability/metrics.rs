//! Metrics definitions for the authentication service.
//!
//! All metrics follow Prometheus naming conventions:
//! - `bankapp_auth_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms and gauges
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `operation`: 7 values (the five delay-bearing kinds plus `set_timeout`
//!   and `clients`)
//! - `category`: 4 values (error categories)
//!
//! Recording is best-effort observability: with no recorder installed the
//! `metrics` facade no-ops, and nothing here can fail the operation being
//! instrumented.

use crate::models::OperationKind;
use crate::services::TimeoutRegistry;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Metric label for the timeout-setter operation (no configurable delay).
pub const OP_SET_TIMEOUT: &str = "set_timeout";

/// Metric label for the client-list passthrough (no configurable delay).
pub const OP_CLIENTS: &str = "clients";

/// Initialize Prometheus metrics recorder and return the handle
/// for serving metrics via HTTP.
///
/// Request-duration buckets reach into the tens of seconds because the
/// injected artificial delay is part of the measured request.
///
/// # Errors
///
/// Returns error if the Prometheus recorder fails to install (e.g., already
/// installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix("bankapp_auth_request".to_string()),
            &[
                0.001, 0.005, 0.010, 0.050, 0.100, 0.500, 1.000, 2.500, 5.000, 10.000, 30.000,
                60.000,
            ],
        )
        .map_err(|e| format!("Failed to set request duration buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

/// Count one call attempt for `operation`.
///
/// Metric: `bankapp_auth_calls_total`
///
/// Incremented before anything else happens to the request, so the counter
/// reflects attempts, not successes.
pub fn record_call(operation: &'static str) {
    counter!("bankapp_auth_calls_total", "operation" => operation).increment(1);
}

/// Record the full request duration for `operation`, injected delay included.
///
/// Metric: `bankapp_auth_request_duration_seconds`
pub fn record_request(operation: &'static str, duration: Duration) {
    histogram!("bankapp_auth_request_duration_seconds", "operation" => operation)
        .record(duration.as_secs_f64());
}

/// Count a failed request by bounded error category.
///
/// Metric: `bankapp_auth_errors_total`
/// Labels: `operation`, `category`
pub fn record_auth_failure(operation: &'static str, category: &'static str) {
    counter!("bankapp_auth_errors_total", "operation" => operation, "category" => category)
        .increment(1);
}

/// Mirror the current registry values into the timeout gauges.
///
/// Metric: `bankapp_auth_timeout_seconds`
///
/// Called by the scrape handler right before rendering, so the gauges
/// report the live registry state rather than a stored copy.
pub fn refresh_timeout_gauges(timeouts: &TimeoutRegistry) {
    for kind in OperationKind::ALL {
        gauge!("bankapp_auth_timeout_seconds", "operation" => kind.metric_label())
            .set(timeouts.delay_seconds(kind));
    }
}
