//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::time::Duration;

use api_call::{ApiCall, FixedIdentity};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HOST: &str = "test-host";
pub const CLIENT_IP: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 7);

/// Envelope body used by most backends.
pub const ECHO_ENVELOPE: &str =
    r#"{"auditInfo":{},"items":[{"echo":"Hello World"}],"interfaceSettings":{}}"#;

/// Start a backend answering every request with `status` and `body`.
pub async fn start_backend(status: u16, body: &str) -> MockServer {
    start_delayed_backend(status, body, Duration::ZERO).await
}

/// Start a backend that waits `delay` before answering.
pub async fn start_delayed_backend(status: u16, body: &str, delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "application/json")
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

/// Transport client that never goes through an environment proxy.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build reqwest client")
}

/// Executor with a deterministic identity and a direct transport.
pub fn api_call() -> ApiCall {
    ApiCall::new()
        .with_client(direct_client())
        .with_identity(FixedIdentity::new(HOST, CLIENT_IP))
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Start a raw backend that sends headers announcing `content_length` bytes,
/// writes `partial_body`, then holds the connection open without finishing.
///
/// Returns the base URL of the backend.
pub async fn start_stalling_backend(content_length: usize, partial_body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut request = [0u8; 4096];
                        let _ = socket.read(&mut request).await;
                        let head = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {content_length}\r\n\r\n{partial_body}"
                        );
                        let _ = socket.write_all(head.as_bytes()).await;
                        let _ = socket.flush().await;
                        tokio::time::sleep(Duration::from_secs(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    format!("http://{addr}")
}
