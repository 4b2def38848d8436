//! Request orchestration: delay injection, domain delegation, session
//! mutation, and metrics recording for every operation.

use crate::errors::AuthError;
use crate::models::{Client, OperationKind, TimeoutSnapshot};
use crate::observability::metrics::{self, OP_CLIENTS, OP_SET_TIMEOUT};
use crate::observability::ErrorCategory;
use crate::repositories::ClientRepository;
use crate::services::{ClientService, SessionManager, TimeoutRegistry};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Orchestrates one logical operation end to end.
///
/// Shared component instances are injected; each is mutated only through
/// its own contract methods. The instrumented sequence for every operation:
/// count the attempt, start the clock, wait out any configured delay,
/// delegate, record the duration whatever the outcome.
#[derive(Clone)]
pub struct AuthGateway {
    timeouts: Arc<TimeoutRegistry>,
    session: Arc<SessionManager>,
    clients: Arc<ClientService>,
    repository: Arc<ClientRepository>,
}

impl AuthGateway {
    pub fn new(
        timeouts: Arc<TimeoutRegistry>,
        session: Arc<SessionManager>,
        clients: Arc<ClientService>,
        repository: Arc<ClientRepository>,
    ) -> Self {
        Self {
            timeouts,
            session,
            clients,
            repository,
        }
    }

    /// Update the artificial delay for one operation kind.
    ///
    /// The raw operation name is validated against the closed enumeration
    /// before the registry is touched; the attempt is counted either way.
    pub async fn set_timeout(
        &self,
        raw_kind: &str,
        seconds: i64,
    ) -> Result<TimeoutSnapshot, AuthError> {
        self.run(OP_SET_TIMEOUT, None, async {
            let kind: OperationKind = raw_kind.parse().map_err(|_| AuthError::InvalidOperation)?;
            self.timeouts.set(kind, seconds)
        })
        .await
    }

    /// Register a new client after the configured `register` delay.
    pub async fn register(
        &self,
        full_name: &str,
        phone: &str,
        username: &str,
        password: &str,
    ) -> Result<Client, AuthError> {
        let kind = OperationKind::Register;
        self.run(kind.metric_label(), Some(kind), async {
            self.clients
                .register(full_name, phone, username, password)
                .await
        })
        .await
    }

    /// Validate credentials and store the client in the session slot.
    ///
    /// The slot is only touched on success; a failed login leaves any
    /// existing session exactly as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<Client, AuthError> {
        let kind = OperationKind::Login;
        self.run(kind.metric_label(), Some(kind), async {
            let client = self
                .clients
                .login(username, password)
                .await?
                .ok_or(AuthError::InvalidCredentials)?;
            self.session.login(client.clone()).await;
            Ok(client)
        })
        .await
    }

    /// Clear the session slot. Succeeds whether or not anyone was logged in.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let kind = OperationKind::Logout;
        self.run(kind.metric_label(), Some(kind), async {
            self.session.logout().await;
            Ok(())
        })
        .await
    }

    /// The currently logged-in client; an empty slot is an error here.
    pub async fn logged_user(&self) -> Result<Client, AuthError> {
        let kind = OperationKind::LoggedUser;
        self.run(kind.metric_label(), Some(kind), async {
            self.session.current().await.ok_or(AuthError::NoActiveSession)
        })
        .await
    }

    /// Whether anyone is logged in; an empty slot is a plain `false`.
    pub async fn is_logged(&self) -> Result<bool, AuthError> {
        let kind = OperationKind::IsLogged;
        self.run(kind.metric_label(), Some(kind), async {
            Ok(self.session.is_logged_in().await)
        })
        .await
    }

    /// Read-only snapshot of every registered client.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AuthError> {
        self.run(OP_CLIENTS, None, async { Ok(self.repository.all().await) })
            .await
    }

    /// Instrumented execution of one operation.
    ///
    /// The call counter is incremented unconditionally and the duration
    /// spans the whole request including the injected delay. The delay is a
    /// per-request sleep on a value captured up front: it holds no lock,
    /// and a concurrent registry write does not retroactively affect a
    /// request already waiting.
    async fn run<T>(
        &self,
        operation: &'static str,
        delay: Option<OperationKind>,
        action: impl Future<Output = Result<T, AuthError>>,
    ) -> Result<T, AuthError> {
        metrics::record_call(operation);
        let started = Instant::now();

        if let Some(kind) = delay {
            let wait = self.timeouts.delay(kind);
            if !wait.is_zero() {
                debug!(operation, ?wait, "Injecting configured delay");
                tokio::time::sleep(wait).await;
            }
        }

        let result = action.await;

        metrics::record_request(operation, started.elapsed());
        if let Err(err) = &result {
            metrics::record_auth_failure(operation, ErrorCategory::from(err).as_str());
        }

        result
    }
}
