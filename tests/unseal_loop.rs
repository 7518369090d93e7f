//! Integration tests for the unseal loop against a mock Vault HTTP API.
//!
//! A wiremock server stands in for Vault's `sys/seal-status` and
//! `sys/unseal` endpoints, so the full controller → `VaultClient` → HTTP
//! path runs without a real Vault.

use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vault_autounseal::secrets::UnsealKey;
use vault_autounseal::unseal::{IterationOutcome, UnsealController};
use vault_autounseal::vault::VaultClient;

// ============================================================================
// Mock Vault helpers
// ============================================================================

fn seal_status_body(sealed: bool) -> serde_json::Value {
    json!({
        "type": "shamir",
        "initialized": true,
        "sealed": sealed,
        "t": 1,
        "n": 1,
        "progress": 0,
        "version": "1.17.2"
    })
}

async fn mock_seal_status(server: &MockServer, sealed: bool) {
    Mock::given(method("GET"))
        .and(path("/v1/sys/seal-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seal_status_body(sealed)))
        .mount(server)
        .await;
}

fn controller(server: &MockServer, interval: Duration) -> UnsealController<VaultClient> {
    let client = VaultClient::new(&server.uri()).unwrap();
    UnsealController::new(client, UnsealKey::new("abc123"), interval)
}

// ============================================================================
// Single iterations
// ============================================================================

#[tokio::test]
async fn sealed_vault_is_unsealed_with_resolved_key() {
    let server = MockServer::start().await;
    mock_seal_status(&server, true).await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/unseal"))
        .and(body_json(json!({ "key": "abc123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(seal_status_body(false)))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = controller(&server, Duration::ZERO).check_once().await;
    assert!(matches!(outcome, IterationOutcome::Unsealed));
}

#[tokio::test]
async fn rejected_key_is_a_soft_failure() {
    let server = MockServer::start().await;
    mock_seal_status(&server, true).await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/unseal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seal_status_body(true)))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = controller(&server, Duration::ZERO).check_once().await;
    assert!(matches!(outcome, IterationOutcome::Rejected(_)));
}

#[tokio::test]
async fn unsealed_vault_gets_no_unseal_call() {
    let server = MockServer::start().await;
    mock_seal_status(&server, false).await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/unseal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seal_status_body(false)))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = controller(&server, Duration::ZERO).check_once().await;
    assert!(matches!(outcome, IterationOutcome::AlreadyUnsealed));
}

#[tokio::test]
async fn invalid_key_error_is_absorbed() {
    let server = MockServer::start().await;
    mock_seal_status(&server, true).await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/unseal"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": ["Unseal failed, invalid key"]
        })))
        .mount(&server)
        .await;

    let outcome = controller(&server, Duration::ZERO).check_once().await;
    match outcome {
        IterationOutcome::UnsealFailed(e) => {
            assert!(e.to_string().contains("invalid key"));
        }
        other => panic!("expected UnsealFailed, got {other:?}"),
    }
}

// ============================================================================
// Full loop
// ============================================================================

#[tokio::test]
async fn loop_recovers_after_status_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/sys/seal-status"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": ["local node not active"]
        })))
        .up_to_n_times(3)
        .mount(&server)
        .await;
    mock_seal_status(&server, true).await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/unseal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seal_status_body(false)))
        .mount(&server)
        .await;

    let controller = controller(&server, Duration::from_millis(10));
    let shutdown = CancellationToken::new();
    let stopper = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            shutdown.cancel();
        })
    };

    let stats = controller.run(shutdown).await;
    stopper.await.unwrap();

    assert_eq!(stats.poll_errors, 3);
    assert!(stats.unsealed >= 1, "stats: {stats:?}");
    assert_eq!(stats.iterations, stats.poll_errors + stats.unsealed);
}

#[tokio::test]
async fn unreachable_vault_keeps_loop_alive() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = VaultClient::new(&format!("http://{addr}")).unwrap();
    let controller = UnsealController::new(client, UnsealKey::new("k"), Duration::from_millis(10));
    let shutdown = CancellationToken::new();
    let stopper = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            shutdown.cancel();
        })
    };

    let stats = controller.run(shutdown).await;
    stopper.await.unwrap();

    assert!(stats.iterations >= 2, "stats: {stats:?}");
    assert_eq!(stats.poll_errors, stats.iterations);
    assert_eq!(stats.unseal_attempts(), 0);
}
