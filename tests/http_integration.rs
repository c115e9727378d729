//! Integration tests for the Opinet HTTP path.
//!
//! A throwaway TCP listener plays the Opinet server so the real reqwest
//! transport, decoding and state publishing run end to end.
//!
//! The live test is `#[ignore]` because it needs network access and a key:
//! ```bash
//! API_KEY=... cargo test --test http_integration -- --ignored
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use opinet_sdk::prelude::*;

const KEY: &str = "F240101TEST";

const BODY: &str = r#"{"RESULT":{"OIL":[{"TRADE_DT":"20240101","PRODCD":"B027","PRODNM":"보통휘발유","PRICE":"1650.00","DIFF":"-2.10"},{"TRADE_DT":"20240101","PRODCD":"D047","PRODNM":"자동차용경유","PRICE":"1520.43","DIFF":"+0.87"}]}}"#;

/// What the fake server saw.
#[derive(Debug)]
struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve exactly one request with `status` and `body`, then close.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (SocketAddr, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        let content_length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);

        let mut body_bytes = buf[header_end + 4..].to_vec();
        while body_bytes.len() < content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            body_bytes.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(Captured {
            request_line,
            headers,
            body: String::from_utf8(body_bytes).unwrap(),
        });
    });

    (addr, rx)
}

fn client_for(addr: SocketAddr) -> OpinetClient {
    OpinetClient::builder()
        .base_url(&format!("http://{}/api/avgAllPrice.do?", addr))
        .credential(Credential::new(KEY).unwrap())
        .loading_delay(Duration::ZERO)
        .build()
        .expect("client should build")
}

/// An address nothing listens on.
async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn request_is_form_post_with_key_and_format() {
    let (addr, captured) = serve_once("200 OK", BODY).await;
    let client = client_for(addr);

    let raw = client.oil_prices().get_raw().await.unwrap();
    assert_eq!(raw, BODY);

    let req = captured.await.unwrap();
    assert!(
        req.request_line.starts_with("POST /api/avgAllPrice.do"),
        "unexpected request line: {}",
        req.request_line
    );
    assert_eq!(
        req.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(req.body, format!("code={}&out=json", KEY));
}

#[tokio::test]
async fn get_decodes_entries_verbatim() {
    let (addr, _captured) = serve_once("200 OK", BODY).await;
    let entries = client_for(addr).oil_prices().get().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].trade_date, "20240101");
    assert_eq!(entries[0].product_code, "B027");
    assert_eq!(entries[0].product_name, "보통휘발유");
    assert_eq!(entries[0].price, "1650.00");
    assert_eq!(entries[0].diff, "-2.10");
    assert_eq!(entries[1].product_code, "D047");
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let (addr, _captured) = serve_once("500 Internal Server Error", "boom").await;
    let err = client_for(addr).oil_prices().get().await.unwrap_err();

    match &err {
        SdkError::Http(http) => assert_eq!(http.status(), Some(500)),
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn board_publishes_loading_then_success() {
    let (addr, _captured) = serve_once("200 OK", BODY).await;
    let board = client_for(addr).board();
    let mut states = board.subscribe().await;
    assert_eq!(states.recv().await, Some(OperationState::Loading));

    board.launch().await.unwrap();

    assert_eq!(states.recv().await, Some(OperationState::Loading));
    let done = states.recv().await.unwrap();
    assert_eq!(done.entries().map(|e| e.len()), Some(2));
    assert!(states.try_recv().is_none());

    let view = ListView::render(&done);
    assert!(view.list_visible);
    assert_eq!(view.rows[1].price, "1520.43");
}

#[tokio::test]
async fn board_non_success_status_yields_one_error() {
    let (addr, _captured) = serve_once("503 Service Unavailable", "").await;
    let board = client_for(addr).board();
    let mut states = board.subscribe().await;
    states.drain();

    board.launch().await.unwrap();

    let published = states.drain();
    assert_eq!(published.len(), 2);
    assert!(published[0].is_loading());
    let failure = published[1].failure().expect("terminal state should be an error");
    assert_eq!(failure.kind, FailureKind::Network);
    assert!(failure.message.contains("503"));
}

#[tokio::test]
async fn board_connection_refused_yields_one_error() {
    let addr = refused_addr().await;
    let board = client_for(addr).board();
    let mut states = board.subscribe().await;
    states.drain();

    let outcome = board.refresh().await;

    let published = states.drain();
    assert_eq!(published.len(), 2);
    assert!(published[0].is_loading());
    assert_eq!(published[1], outcome);
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::Network);
    assert!(!failure.message.is_empty());
}

#[tokio::test]
async fn board_malformed_body_yields_parse_error() {
    let (addr, _captured) = serve_once("200 OK", r#"{"RESULT":{"OIL":"unavailable"}}"#).await;
    let board = client_for(addr).board();

    let outcome = board.refresh().await;
    let failure = outcome.failure().expect("terminal state should be an error");
    assert_eq!(failure.kind, FailureKind::Parse);
    assert_eq!(
        ListView::render(&outcome).error.as_deref(),
        Some(failure.message.as_str())
    );
}

#[tokio::test]
#[ignore]
async fn live_avg_all_price() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let key = std::env::var("API_KEY").expect("API_KEY must be set for live tests");
    let client = OpinetClient::builder()
        .credential(Credential::new(key).expect("API_KEY must not be empty"))
        .build()
        .unwrap();

    let entries = client.oil_prices().get().await.unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| !e.product_code.is_empty()));
}
