#![allow(clippy::unwrap_used)]
//! HTTP transport and client tests against a local stub server.

mod common;

use std::time::Duration;

use common::{StubServer, closed_port_url, silent_server};
use gtl_cli::translation::{
    GenerationTransport, HttpTransport, TranslationClient, TranslationError, TransportError,
};

fn client_for(url: &str, timeout_secs: u64) -> TranslationClient<HttpTransport> {
    let transport =
        HttpTransport::new(url.to_string(), "gemini-2.0-flash".to_string(), timeout_secs).unwrap();
    TranslationClient::new(transport, Some("test-key".to_string()), "GEMINI_API_KEY")
}

#[tokio::test]
async fn test_request_shape() {
    let server = StubServer::candidate("こんにちお元気ですか");
    let client = client_for(&server.url, 5);

    let translated = client
        .translate("Hello, how are you?", "Japanese")
        .await
        .unwrap();
    assert_eq!(translated, "こんにちお元気ですか");

    let request = server.captured();
    assert_eq!(
        request.request_line,
        "POST /models/gemini-2.0-flash:generateContent HTTP/1.1"
    );
    assert_eq!(request.header("x-goog-api-key"), Some("test-key"));
    assert!(
        request
            .header("content-type")
            .unwrap()
            .starts_with("application/json")
    );
    assert_eq!(request.json()["contents"][0]["role"], "user");
    assert_eq!(
        request.prompt(),
        "Translate the following text to Japanese: Hello, how are you?"
    );
}

#[tokio::test]
async fn test_key_is_not_in_url() {
    let server = StubServer::candidate("Hola");
    let client = client_for(&server.url, 5);

    client.translate("Hello", "Spanish").await.unwrap();

    let request = server.captured();
    assert!(!request.request_line.contains("test-key"));
    assert!(!request.request_line.contains("key="));
}

#[tokio::test]
async fn test_transport_returns_error_statuses() {
    let server = StubServer::respond(429, r#"{"error":{"code":429,"message":"quota"}}"#);
    let transport =
        HttpTransport::new(server.url.clone(), "gemini-2.0-flash".to_string(), 5).unwrap();

    let response = transport
        .send_generation_request("test-key", "prompt")
        .await
        .unwrap();

    assert_eq!(response.status, 429);
    assert!(response.body.contains("quota"));
}

#[tokio::test]
async fn test_server_error_is_upstream() {
    let server = StubServer::respond(
        500,
        r#"{"error":{"code":500,"message":"Internal error encountered.","status":"INTERNAL"}}"#,
    );
    let client = client_for(&server.url, 5);

    let err = client.translate("Hello", "Japanese").await.unwrap_err();

    match err {
        TranslationError::Upstream { status, message } => {
            assert_eq!(status, Some(500));
            assert!(message.contains("Internal error encountered."));
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_upstream() {
    let server = StubServer::respond(200, "this is not json");
    let client = client_for(&server.url, 5);

    let err = client.translate("Hello", "Japanese").await.unwrap_err();

    assert!(matches!(err, TranslationError::Upstream { status: None, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = client_for(&closed_port_url(), 5);

    let err = client.translate("Hello", "Japanese").await.unwrap_err();

    assert!(matches!(err, TranslationError::Network(_)));
    assert!(err.to_string().starts_with("Translation unavailable"));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let url = silent_server(Duration::from_secs(5));
    let transport = HttpTransport::new(url, "gemini-2.0-flash".to_string(), 1).unwrap();

    let err = transport
        .send_generation_request("test-key", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout(1)));
}
