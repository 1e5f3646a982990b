//! Tests for batch download ordering and fail-fast behavior.
//!
//! Each test serves canned responses from a local listener so no external
//! network access is needed.

use pictor_error::FetchErrorKind;
use pictor_fetch::ContentFetcher;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

type Route = (&'static str, u16, &'static str, Vec<u8>);

/// Serve canned responses on an ephemeral port, returning the base URL.
async fn spawn_server(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, content_type, body) = routes
                    .iter()
                    .find(|(p, ..)| *p == path)
                    .map(|(_, s, c, b)| (*s, *c, b.clone()))
                    .unwrap_or((404, "text/plain", b"not found".to_vec()));

                let header = format!(
                    "HTTP/1.1 {} OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status,
                    content_type,
                    body.len()
                );
                let _ = socket.write_all(header.as_bytes()).await;
                let _ = socket.write_all(&body).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn assets_come_back_in_input_order() {
    let base = spawn_server(vec![
        ("/a.png", 200, "image/png", b"first".to_vec()),
        ("/b.jpg", 200, "image/jpeg; charset=binary", b"second".to_vec()),
        ("/c.webp", 200, "image/webp", b"third".to_vec()),
    ])
    .await;

    let urls = vec![
        format!("{}/a.png", base),
        format!("{}/b.jpg", base),
        format!("{}/c.webp", base),
    ];

    let fetcher = ContentFetcher::new();
    let assets = fetcher.fetch_all(&urls).await.unwrap();

    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].data(), b"first");
    assert_eq!(assets[0].mime(), "image/png");
    assert_eq!(assets[1].data(), b"second");
    assert_eq!(assets[1].mime(), "image/jpeg");
    assert_eq!(assets[2].data(), b"third");
    assert_eq!(assets[2].mime(), "image/webp");
}

#[tokio::test]
async fn one_failure_fails_the_whole_batch() {
    let base = spawn_server(vec![
        ("/ok1.png", 200, "image/png", b"ok".to_vec()),
        ("/boom", 500, "text/plain", b"server error".to_vec()),
        ("/ok2.png", 200, "image/png", b"ok".to_vec()),
    ])
    .await;

    let urls = vec![
        format!("{}/ok1.png", base),
        format!("{}/boom", base),
        format!("{}/ok2.png", base),
    ];

    let fetcher = ContentFetcher::new();
    let err = fetcher.fetch_all(&urls).await.unwrap_err();

    assert!(matches!(err.kind, FetchErrorKind::Network { .. }));
    assert_eq!(err.kind.status_code(), 400);
    assert_eq!(err.kind.url(), urls[1]);
}

#[tokio::test]
async fn reported_error_follows_input_order_not_completion_order() {
    let base = spawn_server(vec![
        ("/fail1", 500, "text/plain", b"first failure".to_vec()),
        ("/ok.png", 200, "image/png", b"ok".to_vec()),
        ("/fail2", 404, "text/plain", b"second failure".to_vec()),
    ])
    .await;

    let urls = vec![
        format!("{}/fail1", base),
        format!("{}/ok.png", base),
        format!("{}/fail2", base),
    ];

    let fetcher = ContentFetcher::new();
    let err = fetcher.fetch_all(&urls).await.unwrap_err();

    assert_eq!(err.kind.url(), urls[0]);
}

#[tokio::test]
async fn missing_content_type_defaults_to_jpeg() {
    // The canned server always sends a Content-Type, so exercise the default
    // through an empty header value instead.
    let base = spawn_server(vec![("/bare", 200, "", b"bytes".to_vec())]).await;

    let urls = vec![format!("{}/bare", base)];
    let fetcher = ContentFetcher::new();
    let assets = fetcher.fetch_all(&urls).await.unwrap();

    assert_eq!(assets[0].mime(), "image/jpeg");
}

#[tokio::test]
async fn empty_url_list_yields_empty_asset_list() {
    let fetcher = ContentFetcher::new();
    let assets = fetcher.fetch_all(&[]).await.unwrap();
    assert!(assets.is_empty());
}
