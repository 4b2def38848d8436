//! E2E tests for the operational endpoints.

use auth_test_utils::server_harness::TestAuthServer;
use reqwest::StatusCode;

/// The liveness probe answers as soon as the server is up.
#[tokio::test]
async fn test_health_returns_ok() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .get(format!("{}/health", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "OK");

    Ok(())
}

/// The metrics endpoint serves prometheus text exposition format.
#[tokio::test]
async fn test_metrics_endpoint_serves_exposition_text() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .get(format!("{}/metrics", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
