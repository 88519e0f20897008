//! Test server harness for E2E testing
//!
//! Provides `TestRomanServer` for spawning real service instances in tests.

use metrics_exporter_prometheus::PrometheusBuilder;
use roman_service::config::Config;
use roman_service::routes;
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Test harness for spawning the Roman service in E2E tests.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health_flow_e2e() -> Result<(), anyhow::Error> {
///     let server = TestRomanServer::spawn().await?;
///
///     let response = reqwest::get(format!("{}/health", server.url())).await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestRomanServer {
    addr: SocketAddr,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestRomanServer {
    /// Spawn a new test server instance with default configuration.
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        Self::spawn_with_vars(&[]).await
    }

    /// Spawn a test server with extra environment-style configuration.
    ///
    /// # Arguments
    /// * `overrides` - `(VARIABLE, value)` pairs layered over the test defaults
    pub async fn spawn_with_vars(overrides: &[(&str, &str)]) -> Result<Self, anyhow::Error> {
        let mut vars = HashMap::from([
            ("BIND_ADDRESS".to_string(), "127.0.0.1:0".to_string()),
            ("SERVICE_NAME".to_string(), "roman-service-test".to_string()),
            ("DRAIN_SECONDS".to_string(), "0".to_string()),
        ]);
        for (key, value) in overrides {
            vars.insert(key.to_string(), value.to_string());
        }

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        // Build a recorder without installing it globally, so each test
        // server gets its own handle and servers can coexist in one process.
        let metrics_handle = PrometheusBuilder::new().build_recorder().handle();

        // Build routes using roman-service's real route builder
        let app = routes::build_routes(&config, metrics_handle);

        let listener = tokio::net::TcpListener::bind(config.bind_address)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            config,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get reference to the server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestRomanServer {
    fn drop(&mut self) {
        // Abort the server task so each test cleans up its listener.
        self._handle.abort();
    }
}
