//! Test server harness for E2E testing
//!
//! Provides `TestAuthServer` for spawning real service instances in tests.

use anyhow::anyhow;
use auth_service::config::Config;
use auth_service::handlers::auth_handler::AppState;
use auth_service::observability::metrics::init_metrics_recorder;
use auth_service::repositories::ClientRepository;
use auth_service::routes;
use auth_service::services::{AuthGateway, ClientService, SessionManager, TimeoutRegistry};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

// Minimum bcrypt cost keeps password hashing fast in tests.
const TEST_BCRYPT_COST: u32 = 4;

/// Test harness for spawning the authentication service in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_login_flow() -> Result<(), anyhow::Error> {
///     let server = TestAuthServer::spawn().await?;
///
///     let response = server
///         .client()
///         .post(format!("{}/auth/login", server.url()))
///         .query(&[("username", "user11"), ("password", "pass11")])
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 401);
///     Ok(())
/// }
/// ```
pub struct TestAuthServer {
    addr: SocketAddr,
    client: reqwest::Client,
    state: Arc<AppState>,
    _handle: JoinHandle<()>,
}

impl TestAuthServer {
    /// Spawn a new test server instance
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start with empty session, zero delays, and an empty client store
    /// - Serve HTTP in the background until the handle is dropped
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let config = Config {
            bind_address: "127.0.0.1:0".to_string(),
            bcrypt_cost: TEST_BCRYPT_COST,
        };

        // Initialize metrics recorder for the test server.
        // The global recorder can only be installed once per process; later
        // spawns fall back to a standalone recorder so each still renders.
        let metrics_handle = match init_metrics_recorder() {
            Ok(handle) => handle,
            Err(_) => PrometheusBuilder::new().build_recorder().handle(),
        };

        let timeouts = Arc::new(TimeoutRegistry::new());
        let repository = Arc::new(ClientRepository::new());
        let clients = Arc::new(ClientService::new(
            Arc::clone(&repository),
            config.bcrypt_cost,
        ));
        let gateway = AuthGateway::new(
            Arc::clone(&timeouts),
            Arc::new(SessionManager::new()),
            clients,
            Arc::clone(&repository),
        );

        let state = Arc::new(AppState {
            gateway,
            timeouts,
            metrics_handle,
            config,
        });

        let app = routes::build_routes(Arc::clone(&state));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow!("Failed to bind test server: {e}"))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow!("Failed to get local address: {e}"))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {e}");
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            state,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the shared HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Direct access to the timeout registry, for asserting on internal
    /// state after API calls
    pub fn timeouts(&self) -> &Arc<TimeoutRegistry> {
        &self.state.timeouts
    }

    /// Fetch the raw prometheus exposition text from `/metrics`
    pub async fn scrape_metrics(&self) -> Result<String, anyhow::Error> {
        let response = self
            .client
            .get(format!("{}/metrics", self.url()))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Metrics scrape failed: {}", response.status()));
        }

        Ok(response.text().await?)
    }

    /// Register a client through the public API
    pub async fn register_client(
        &self,
        full_name: &str,
        phone: &str,
        username: &str,
        password: &str,
    ) -> Result<reqwest::Response, anyhow::Error> {
        Ok(self
            .client
            .post(format!("{}/auth/register", self.url()))
            .query(&[
                ("fullName", full_name),
                ("phone", phone),
                ("username", username),
                ("password", password),
            ])
            .send()
            .await?)
    }

    /// Log in through the public API
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<reqwest::Response, anyhow::Error> {
        Ok(self
            .client
            .post(format!("{}/auth/login", self.url()))
            .query(&[("username", username), ("password", password)])
            .send()
            .await?)
    }

    /// Set a per-operation delay through the public API
    pub async fn set_timeout(
        &self,
        kind: &str,
        timeout: i64,
    ) -> Result<reqwest::Response, anyhow::Error> {
        let timeout = timeout.to_string();
        Ok(self
            .client
            .post(format!("{}/auth/setTimeout", self.url()))
            .query(&[("type", kind), ("timeout", timeout.as_str())])
            .send()
            .await?)
    }
}
