//! Single-slot session state.

use crate::models::Client;
use tokio::sync::RwLock;

/// Holds the one process-wide session slot.
///
/// Last-writer-wins: `login` unconditionally replaces whatever was there
/// and `logout` clears from either state. Readers always observe a fully
/// written slot; the lock is never held across foreign awaits.
#[derive(Debug, Default)]
pub struct SessionManager {
    current: RwLock<Option<Client>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `client` as the logged-in principal, replacing any previous one.
    pub async fn login(&self, client: Client) {
        *self.current.write().await = Some(client);
    }

    /// Clear the slot. Idempotent; succeeds from either state.
    pub async fn logout(&self) {
        *self.current.write().await = None;
    }

    /// The currently logged-in client, if any.
    pub async fn current(&self) -> Option<Client> {
        self.current.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current.read().await.is_some()
    }
}
