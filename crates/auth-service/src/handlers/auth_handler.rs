use crate::config::Config;
use crate::errors::AuthError;
use crate::models::Client;
use crate::services::{AuthGateway, TimeoutRegistry};
use axum::extract::{Query, State};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: AuthGateway,
    pub timeouts: Arc<TimeoutRegistry>,
    pub metrics_handle: PrometheusHandle,
    pub config: Config,
}

#[derive(Debug, Deserialize)]
pub struct SetTimeoutParams {
    #[serde(rename = "type")]
    pub kind: String,
    pub timeout: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParams {
    pub full_name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// Set the artificial response delay for one request kind
///
/// POST /auth/setTimeout?type=&timeout=
///
/// Responds with a confirmation message and the current delays for all
/// request kinds, in seconds.
pub async fn set_timeout(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SetTimeoutParams>,
) -> Result<Json<Value>, AuthError> {
    let timeouts = state.gateway.set_timeout(&params.kind, params.timeout).await?;

    Ok(Json(json!({
        "message": format!(
            "Установлен таймаут для запроса {} на {} сек",
            params.kind, params.timeout
        ),
        "timeouts": timeouts,
    })))
}

/// Register a new client
///
/// POST /auth/register?fullName=&phone=&username=&password=
#[tracing::instrument(skip_all, name = "auth.register")]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegisterParams>,
) -> Result<Json<Client>, AuthError> {
    let client = state
        .gateway
        .register(
            &params.full_name,
            &params.phone,
            &params.username,
            &params.password,
        )
        .await?;

    Ok(Json(client))
}

/// Log a client in
///
/// POST /auth/login?username=&password=
#[tracing::instrument(skip_all, name = "auth.login")]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LoginParams>,
) -> Result<String, AuthError> {
    let client = state
        .gateway
        .login(&params.username, &params.password)
        .await?;

    Ok(format!("✅ Успешный вход: {}", client.username))
}

/// Username of the currently logged-in client
///
/// GET /auth/loggedUser
pub async fn logged_user(State(state): State<Arc<AppState>>) -> Result<String, AuthError> {
    let client = state.gateway.logged_user().await?;

    Ok(client.username)
}

/// Whether any client is currently logged in
///
/// GET /auth/isLogged
pub async fn is_logged(State(state): State<Arc<AppState>>) -> Result<Json<bool>, AuthError> {
    Ok(Json(state.gateway.is_logged().await?))
}

/// Log the current client out
///
/// POST /auth/logout
///
/// Always succeeds, logged in or not.
pub async fn logout(State(state): State<Arc<AppState>>) -> Result<String, AuthError> {
    state.gateway.logout().await?;

    Ok("✅ Успешный выход".to_string())
}

/// Full snapshot of all registered clients
///
/// GET /auth/clients
pub async fn clients(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Client>>, AuthError> {
    Ok(Json(state.gateway.list_clients().await?))
}
