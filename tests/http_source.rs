//! Tests for the HTTP data source against a canned one-shot server.
//! Binds a local listener on a random port, serves a single fixed
//! response, and lets the source consume it.

use std::time::Duration;

use datarev::source::{DataSource, HttpDataSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one connection with a fixed HTTP response; returns the URL to hit.
async fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            // Drain the request before answering.
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{addr}/api/data")
}

fn source(url: String) -> HttpDataSource {
    HttpDataSource::new(url, Duration::from_secs(5))
}

#[tokio::test]
async fn fetches_and_deserializes_records() {
    let body = r#"{
        "records": [
            {
                "id": 1,
                "name": "Ann",
                "email": "a@x.com",
                "street": "1 Elm",
                "city": "Springfield",
                "zipcode": "00000",
                "phone": "555",
                "status": "reviewed",
                "errors": {
                    "zipcode": { "message": "Invalid format", "severity": "critical" }
                }
            }
        ]
    }"#;
    let url = serve_once("HTTP/1.1 200 OK", body).await;

    let records = source(url).fetch().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].name, "Ann");
    assert_eq!(
        records[0].errors.zipcode.as_ref().unwrap().severity.as_deref(),
        Some("critical")
    );
}

#[tokio::test]
async fn payload_without_records_key_is_an_empty_collection() {
    let url = serve_once("HTTP/1.1 200 OK", "{}").await;
    let records = source(url).fetch().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn non_success_status_fails() {
    let url = serve_once("HTTP/1.1 500 Internal Server Error", "oops").await;
    let err = source(url).fetch().await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn malformed_body_fails_with_context() {
    let url = serve_once("HTTP/1.1 200 OK", "this is not json").await;
    let err = source(url).fetch().await.unwrap_err();
    assert!(err.to_string().contains("malformed record payload"));
}

#[tokio::test]
async fn unreachable_host_fails() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(format!("http://{addr}/api/data"))
        .fetch()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed"));
}
