use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the authentication gateway.
///
/// Every variant is recovered at the HTTP boundary and turned into a
/// structured response; none propagates as an unhandled fault. Display
/// strings are the user-visible message texts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Operation name outside the closed set accepted by the timeout setter.
    #[error("Неверный тип запроса.")]
    InvalidOperation,

    /// Negative delay passed to the timeout setter.
    #[error("Таймаут должен быть положительным числом")]
    InvalidTimeout,

    /// Unknown username or wrong password.
    #[error("❌ Ошибка: Неверный логин или пароль")]
    InvalidCredentials,

    /// No client is currently logged in.
    #[error("❌ Ошибка: Отсутствует авторизованный пользователь")]
    NoActiveSession,

    /// Registration username is already taken.
    #[error("Пользователь с таким логином уже существует")]
    UsernameTaken,

    /// Unexpected collaborator failure; details stay in the logs.
    #[error("Внутренняя ошибка сервера")]
    Internal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::InvalidOperation | AuthError::InvalidTimeout => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AuthError::InvalidCredentials | AuthError::NoActiveSession => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            AuthError::UsernameTaken => (
                StatusCode::CONFLICT,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AuthError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}
