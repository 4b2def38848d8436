//! E2E tests for the artificial-latency injector.
//!
//! These tests use real wall-clock delays (1-2 seconds) because they drive
//! the full HTTP stack; the fine-grained timing behavior is covered with
//! paused time in the gateway unit tests.

use auth_test_utils::server_harness::TestAuthServer;
use auth_service::models::OperationKind;
use reqwest::StatusCode;
use std::time::{Duration, Instant};

// ============================================================================
// Validation Tests
// ============================================================================

/// Setting a delay returns the confirmation message and a snapshot of all
/// five delays in seconds.
#[tokio::test]
async fn test_set_timeout_returns_message_and_snapshot() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server.set_timeout("login", 5).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body["message"].as_str(),
        Some("Установлен таймаут для запроса login на 5 сек")
    );
    assert_eq!(body["timeouts"]["login"], 5);
    assert_eq!(body["timeouts"]["logout"], 0);
    assert_eq!(body["timeouts"]["loggedUser"], 0);
    assert_eq!(body["timeouts"]["isLogged"], 0);
    assert_eq!(body["timeouts"]["register"], 0);

    // A second set leaves the first value in place.
    let response = server.set_timeout("logout", 2).await?;
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["timeouts"]["login"], 5);
    assert_eq!(body["timeouts"]["logout"], 2);

    Ok(())
}

/// A negative delay is rejected with the validation message and no cell is
/// updated.
#[tokio::test]
async fn test_set_timeout_negative_rejected_without_update() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    server.set_timeout("register", 3).await?;

    let response = server.set_timeout("register", -1).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body["error"].as_str(),
        Some("Таймаут должен быть положительным числом")
    );

    assert_eq!(
        server.timeouts().delay(OperationKind::Register),
        Duration::from_secs(3),
        "The previous value must survive a rejected set"
    );

    Ok(())
}

/// An operation name outside the closed set is rejected before the registry
/// is touched.
#[tokio::test]
async fn test_set_timeout_unknown_type_rejected() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server.set_timeout("bogus", 5).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"].as_str(), Some("Неверный тип запроса."));

    for kind in OperationKind::ALL {
        assert_eq!(
            server.timeouts().delay(kind),
            Duration::ZERO,
            "No cell may be mutated by a rejected set"
        );
    }

    Ok(())
}

// ============================================================================
// Delay Behavior Tests
// ============================================================================

/// A request against an operation with a configured delay takes at least
/// that long end to end.
#[tokio::test]
async fn test_delayed_request_takes_at_least_configured_delay() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    server.set_timeout("isLogged", 1).await?;

    let started = Instant::now();
    let response = server
        .client()
        .get(format!("{}/auth/isLogged", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        started.elapsed() >= Duration::from_secs(1),
        "request finished in {:?}, before the configured delay",
        started.elapsed()
    );

    Ok(())
}

/// A delayed request does not serialize requests against other operations:
/// while a 2-second login is in flight, an undelayed read completes quickly.
#[tokio::test]
async fn test_delayed_request_does_not_block_other_operations() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    server
        .register_client("Lada Mills", "+79001234567", "user11", "pass11")
        .await?;
    server.set_timeout("login", 2).await?;

    let slow = {
        let client = server.client().clone();
        let url = format!("{}/auth/login", server.url());
        tokio::spawn(async move {
            client
                .post(url)
                .query(&[("username", "user11"), ("password", "pass11")])
                .send()
                .await
        })
    };

    // Give the slow request time to reach its sleep.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = Instant::now();
    let fast = server
        .client()
        .get(format!("{}/auth/isLogged", server.url()))
        .send()
        .await?;
    assert_eq!(fast.status(), StatusCode::OK);
    assert!(
        started.elapsed() < Duration::from_secs(1),
        "undelayed request was serialized behind the delayed one ({:?})",
        started.elapsed()
    );

    let slow_response = slow.await??;
    assert_eq!(slow_response.status(), StatusCode::OK);

    Ok(())
}

/// Lowering a delay while a request is already waiting does not shorten
/// that request; only requests issued after the write see the new value.
#[tokio::test]
async fn test_set_during_in_flight_request_does_not_shorten_it() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    server.set_timeout("isLogged", 2).await?;

    let started = Instant::now();
    let in_flight = {
        let client = server.client().clone();
        let url = format!("{}/auth/isLogged", server.url());
        tokio::spawn(async move { client.get(url).send().await })
    };

    // Let the request capture the 2s delay, then clear it.
    tokio::time::sleep(Duration::from_millis(100)).await;
    server.set_timeout("isLogged", 0).await?;

    let response = in_flight.await??;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        started.elapsed() >= Duration::from_secs(2),
        "in-flight request was shortened to {:?}",
        started.elapsed()
    );

    // A fresh request sees the cleared delay immediately.
    let fresh_started = Instant::now();
    server
        .client()
        .get(format!("{}/auth/isLogged", server.url()))
        .send()
        .await?;
    assert!(fresh_started.elapsed() < Duration::from_secs(1));

    Ok(())
}
