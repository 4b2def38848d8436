//! In-memory client store.

use crate::models::Client;
use tokio::sync::RwLock;

/// Registered clients, in insertion order.
#[derive(Debug, Default)]
pub struct ClientRepository {
    clients: RwLock<Vec<Client>>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `client` unless its username is already taken.
    ///
    /// Uniqueness check and insert happen under one write lock, so two
    /// concurrent registrations of the same username cannot both land.
    pub async fn insert_if_absent(&self, client: Client) -> bool {
        let mut clients = self.clients.write().await;
        if clients.iter().any(|c| c.username == client.username) {
            return false;
        }
        clients.push(client);
        true
    }

    /// Find a client by exact username.
    pub async fn find_by_username(&self, username: &str) -> Option<Client> {
        self.clients
            .read()
            .await
            .iter()
            .find(|c| c.username == username)
            .cloned()
    }

    /// Full snapshot of all registered clients.
    pub async fn all(&self) -> Vec<Client> {
        self.clients.read().await.clone()
    }
}
