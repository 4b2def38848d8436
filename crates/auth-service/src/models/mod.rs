use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A registered client.
///
/// `password_hash` is a bcrypt hash and is excluded from serialization;
/// credential material never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Request kinds that carry a configurable artificial delay.
///
/// Wire names match the public API (the `type` query parameter and the keys
/// of the `timeouts` object): `login`, `logout`, `loggedUser`, `isLogged`,
/// `register`. Any other name is rejected before any registry access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Login,
    Logout,
    LoggedUser,
    IsLogged,
    Register,
}

/// Marker error for an operation name outside the closed set.
///
/// Carries no payload; callers map it straight to `AuthError::InvalidOperation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl OperationKind {
    /// All delay-bearing kinds, in the order the public API reports them.
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Login,
        OperationKind::Logout,
        OperationKind::LoggedUser,
        OperationKind::IsLogged,
        OperationKind::Register,
    ];

    /// Wire name as it appears in the public API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Login => "login",
            OperationKind::Logout => "logout",
            OperationKind::LoggedUser => "loggedUser",
            OperationKind::IsLogged => "isLogged",
            OperationKind::Register => "register",
        }
    }

    /// Metric label value (snake_case per prometheus naming conventions).
    ///
    /// Bounded cardinality: five values, plus `set_timeout` and `clients`
    /// for the two instrumented operations without a configurable delay.
    pub fn metric_label(&self) -> &'static str {
        match self {
            OperationKind::Login => "login",
            OperationKind::Logout => "logout",
            OperationKind::LoggedUser => "logged_user",
            OperationKind::IsLogged => "is_logged",
            OperationKind::Register => "register",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(OperationKind::Login),
            "logout" => Ok(OperationKind::Logout),
            "loggedUser" => Ok(OperationKind::LoggedUser),
            "isLogged" => Ok(OperationKind::IsLogged),
            "register" => Ok(OperationKind::Register),
            _ => Err(UnknownOperation),
        }
    }
}

/// Point-in-time view of all configured delays, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSnapshot {
    pub login: u64,
    pub logout: u64,
    #[serde(rename = "loggedUser")]
    pub logged_user: u64,
    #[serde(rename = "isLogged")]
    pub is_logged: u64,
    pub register: u64,
}
