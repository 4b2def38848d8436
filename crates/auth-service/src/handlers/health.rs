//! Liveness probe.

/// Handler for GET /health
///
/// The service has no external collaborators to ping; reachable means alive.
pub async fn health_check() -> &'static str {
    "OK"
}
