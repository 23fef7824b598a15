// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for the region directory fetch against a local socket.

use terramap::directory::{fetch_regions, Region};
use terramap::error::{DirectoryError, Error};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves exactly one canned HTTP response and returns the endpoint URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/api/regions", addr)
}

#[tokio::test]
async fn fetch_decodes_region_listing() {
    let endpoint = serve_once(
        "200 OK",
        r#"{"status":"success","count":1,"data":[{"id":"a","name":"Alpha"}]}"#,
    )
    .await;

    let regions = fetch_regions(endpoint).await.expect("fetch should succeed");
    assert_eq!(
        regions,
        vec![Region {
            id: "a".to_string(),
            name: "Alpha".to_string(),
        }]
    );
}

#[tokio::test]
async fn fetch_treats_missing_data_as_empty_listing() {
    let endpoint = serve_once("200 OK", r#"{"status":"success"}"#).await;

    let regions = fetch_regions(endpoint).await.expect("fetch should succeed");
    assert!(regions.is_empty());
}

#[tokio::test]
async fn fetch_reports_server_error_status() {
    let endpoint = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let err = fetch_regions(endpoint).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Directory(DirectoryError::Status(500))
    ));
}

#[tokio::test]
async fn fetch_reports_malformed_body() {
    let endpoint = serve_once("200 OK", "<html>not json</html>").await;

    let err = fetch_regions(endpoint).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Directory(DirectoryError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn fetch_reports_unreachable_service() {
    // Bind then drop a listener so the port is very likely unused.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    drop(listener);

    let err = fetch_regions(format!("http://{}/api/regions", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Directory(DirectoryError::Transport(_))));
}
