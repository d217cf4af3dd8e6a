//! `HttpApi` against a loopback server that answers one canned response.
//!
//! Each test checks the request line and JSON body the client sends and how
//! the response body is interpreted.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use labdeck_client::api::ContainerApi;
use labdeck_client::error::ApiError;
use labdeck_client::http::HttpApi;
use labdeck_common::types::ContainerId;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the loopback server.
struct Captured {
    request_line: String,
    body: String,
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Accepts one connection, replies with `status` and `body`, and returns the
/// captured request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let base = format!("http://{}", listener.local_addr().expect("no local addr"));

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.expect("read failed");
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let wanted = header_end + content_length(&head);
        while buf.len() < wanted {
            let n = socket.read(&mut chunk).await.expect("read failed");
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.expect("write failed");
        socket.shutdown().await.expect("shutdown failed");

        Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[header_end..wanted]).into_owned(),
        }
    });

    (base, handle)
}

#[tokio::test]
async fn create_posts_count_and_decodes_created_ids() {
    let (base, server) = serve_once("200 OK", r#"{"created": ["a1", "b2"]}"#).await;
    let api = HttpApi::new(&base).expect("valid url");

    let response = api.create(2).await.expect("create failed");
    let captured = server.await.expect("server panicked");

    assert_eq!(captured.request_line, "POST /create HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&captured.body).expect("json body");
    assert_eq!(body, serde_json::json!({"count": 2}));
    assert_eq!(response.created.len(), 2);
    assert!(response.error_message().is_none());
}

#[tokio::test]
async fn create_error_body_on_400_is_a_response_not_a_failure() {
    let (base, server) =
        serve_once("400 Bad Request", r#"{"error": "no free port in range"}"#).await;
    let api = HttpApi::new(&base).expect("valid url");

    let response = api.create(1).await.expect("create failed");
    let _ = server.await.expect("server panicked");

    assert_eq!(response.error_message(), Some("no free port in range"));
}

#[tokio::test]
async fn list_returns_raw_json() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"id": "a1", "name": "hlab_10000", "status": "running", "ports": {}}]"#,
    )
    .await;
    let api = HttpApi::new(&base).expect("valid url");

    let value = api.list().await.expect("list failed");
    let captured = server.await.expect("server panicked");

    assert_eq!(captured.request_line, "GET /list HTTP/1.1");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn delete_sends_ids_in_body() {
    let (base, server) = serve_once("200 OK", r#"{"removed": ["a1"], "errors": []}"#).await;
    let api = HttpApi::new(&base).expect("valid url");

    let ids = vec![ContainerId::new("a1"), ContainerId::new("b2")];
    let response = api.delete(&ids).await.expect("delete failed");
    let captured = server.await.expect("server panicked");

    assert_eq!(captured.request_line, "DELETE /delete HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&captured.body).expect("json body");
    assert_eq!(body, serde_json::json!({"ids": ["a1", "b2"]}));
    assert_eq!(response.removed, vec![ContainerId::new("a1")]);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (base, server) = serve_once("500 Internal Server Error", "<html>oops</html>").await;
    let api = HttpApi::new(&base).expect("valid url");

    let err = api.list().await.expect_err("should fail");
    let _ = server.await.expect("server panicked");

    assert!(matches!(err, ApiError::Decode { endpoint: "/list", .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let base = format!("http://{}", listener.local_addr().expect("no local addr"));
    drop(listener);

    let api = HttpApi::new(&base).expect("valid url");
    let err = api.create(1).await.expect_err("should fail");

    assert!(matches!(err, ApiError::Transport { endpoint: "/create", .. }));
}
