//! Observability module for the authentication service.
//!
//! # Privacy by Default
//!
//! Log fields are explicitly allow-listed. Usernames never appear in logs
//! in plaintext; they are reduced to a short correlation hash. Passwords
//! and hashes never appear at all.

pub mod metrics;

use sha2::{Digest, Sha256};

/// Hash a field value for correlation in logs (SHA-256, first 8 hex chars)
///
/// This is NOT cryptographically secure for secrets - it's a one-way hash
/// for correlation purposes only. The truncation to 8 chars provides
/// sufficient uniqueness for debugging while limiting reversibility.
pub fn hash_for_correlation(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    // First 4 bytes (32 bits) - enough for correlation, limits reversibility
    hex::encode(digest.get(..4).unwrap_or_default())
}

/// Error categories for metrics labels (bounded cardinality)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Credential failures and missing sessions
    Authentication,
    /// Request validation failures (unknown operation, bad timeout)
    Validation,
    /// Registration conflicts
    Conflict,
    /// Unexpected internal failures
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Conflict => "conflict",
            ErrorCategory::Internal => "internal",
        }
    }
}

impl From<&crate::errors::AuthError> for ErrorCategory {
    fn from(err: &crate::errors::AuthError) -> Self {
        use crate::errors::AuthError;
        match err {
            AuthError::InvalidCredentials | AuthError::NoActiveSession => {
                ErrorCategory::Authentication
            }
            AuthError::InvalidOperation | AuthError::InvalidTimeout => ErrorCategory::Validation,
            AuthError::UsernameTaken => ErrorCategory::Conflict,
            AuthError::Internal => ErrorCategory::Internal,
        }
    }
}
