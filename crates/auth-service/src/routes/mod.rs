//! HTTP routes for the authentication service.
//!
//! Defines the Axum router over the shared application state.

use crate::handlers::auth_handler::{self, AppState};
use crate::handlers::{health, metrics};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application routes.
///
/// No outer request timeout layer is applied: the injected artificial
/// delay is part of the service contract and must run to completion, so an
/// upper bound here would cut the feature off.
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Authentication endpoints
        .route("/auth/setTimeout", post(auth_handler::set_timeout))
        .route("/auth/register", post(auth_handler::register))
        .route("/auth/login", post(auth_handler::login))
        .route("/auth/logout", post(auth_handler::logout))
        .route("/auth/loggedUser", get(auth_handler::logged_user))
        .route("/auth/isLogged", get(auth_handler::is_logged))
        .route("/auth/clients", get(auth_handler::clients))

        // Operational endpoints
        .route("/metrics", get(metrics::metrics_handler))
        .route("/health", get(health::health_check))

        // Request logging middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
