//! Credential checking and registration.

use crate::errors::AuthError;
use crate::models::Client;
use crate::observability::hash_for_correlation;
use crate::repositories::ClientRepository;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Business logic for client registration and credential validation.
///
/// Passwords are stored only as bcrypt hashes; usernames appear in logs
/// only as correlation hashes.
pub struct ClientService {
    repo: Arc<ClientRepository>,
    bcrypt_cost: u32,
}

impl ClientService {
    pub fn new(repo: Arc<ClientRepository>, bcrypt_cost: u32) -> Self {
        Self { repo, bcrypt_cost }
    }

    /// Register a new client. Usernames are unique.
    pub async fn register(
        &self,
        full_name: &str,
        phone: &str,
        username: &str,
        password: &str,
    ) -> Result<Client, AuthError> {
        let password_hash = bcrypt::hash(password, self.bcrypt_cost).map_err(|e| {
            error!("Failed to hash password: {}", e);
            AuthError::Internal
        })?;

        let client = Client {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            username: username.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        if !self.repo.insert_if_absent(client.clone()).await {
            warn!(
                username = %hash_for_correlation(username),
                "Registration rejected: username already taken"
            );
            return Err(AuthError::UsernameTaken);
        }

        info!(
            client_id = %client.id,
            username = %hash_for_correlation(username),
            "Client registered"
        );

        Ok(client)
    }

    /// Validate credentials.
    ///
    /// `None` means unknown username or wrong password; the caller decides
    /// how to surface that. Hash verification failures other than a plain
    /// mismatch are unexpected and surface as `Internal`.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<Client>, AuthError> {
        let Some(client) = self.repo.find_by_username(username).await else {
            return Ok(None);
        };

        let matches = bcrypt::verify(password, &client.password_hash).map_err(|e| {
            error!("Failed to verify password hash: {}", e);
            AuthError::Internal
        })?;

        Ok(matches.then_some(client))
    }
}
