//! Tests for the listing engine

use super::*;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{Transport, TransportRequest, TransportResponse};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use test_case::test_case;
use tokio_test::{assert_err, assert_ok};
use url::Url;

const BASE: &str = "https://api.goshippo.com";

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    id: u32,
}

/// Serves canned bodies keyed by full URL and records every request
#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<HashMap<String, (StatusCode, String)>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
    latency: Option<Duration>,
}

impl ScriptedTransport {
    fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    fn respond(&self, url: &str, status: StatusCode, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), (status, body.into()));
    }

    /// Script `pages` full pages of `per_page` items, then an empty page
    /// with no next cursor
    fn paged(pages: u32, per_page: u32) -> Self {
        let transport = Self::default();
        for page in 1..=pages + 1 {
            let url = page_url(page);
            let previous = (page > 1).then(|| page_url(page - 1));
            let (results, next) = if page <= pages {
                let ids: Vec<_> = (0..per_page)
                    .map(|i| json!({"id": (page - 1) * per_page + i}))
                    .collect();
                (ids, Some(page_url(page + 1)))
            } else {
                (Vec::new(), None)
            };
            let body = json!({
                "count": pages * per_page,
                "previous": previous,
                "next": next,
                "results": results
            });
            transport.respond(&url, StatusCode::OK, body.to_string());
        }
        transport
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let url = request.url.to_string();
        self.seen.lock().unwrap().push(url.clone());
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let scripted = self.responses.lock().unwrap().get(&url).cloned();
        match scripted {
            Some((status, body)) => Ok(TransportResponse::new(status, body)),
            None => Err(Error::transport(format!("no script for {url}"))),
        }
    }
}

fn page_url(page: u32) -> String {
    format!("{BASE}/items/?page={page}")
}

fn client(transport: &Arc<ScriptedTransport>) -> Client {
    let config = ClientConfig::builder().base_url(BASE).build().unwrap();
    Client::with_transport(config, "shippo_test_key", transport.clone())
}

fn fast() -> ListRequest {
    ListRequest::new().throttle(Throttle::Disabled)
}

async fn drain(pager: Pager<Item>) -> Vec<Page<Item>> {
    pager.pages.collect().await
}

// ============================================================================
// Throttle and ListRequest
// ============================================================================

#[test_case(-1, Throttle::Disabled ; "sentinel disables")]
#[test_case(0, Throttle::Default ; "zero is default")]
#[test_case(-25, Throttle::Default ; "other negatives are default")]
#[test_case(40, Throttle::Custom(Duration::from_millis(40)) ; "positive is used verbatim")]
fn test_throttle_from_millis(ms: i64, want: Throttle) {
    assert_eq!(Throttle::from_millis(ms), want);
}

#[test]
fn test_throttle_delay() {
    assert_eq!(Throttle::Default.delay(), Some(DEFAULT_THROTTLE));
    assert_eq!(Throttle::Disabled.delay(), None);
    assert_eq!(Throttle::Custom(Duration::ZERO).delay(), Some(DEFAULT_THROTTLE));
    assert_eq!(
        Throttle::Custom(Duration::from_millis(5)).delay(),
        Some(Duration::from_millis(5))
    );
    assert_eq!(DEFAULT_THROTTLE, Duration::from_millis(150));
}

#[test]
fn test_list_request_normalization() {
    let request = ListRequest::new().page_token("   ");
    assert_eq!(request.start_page(), 1);
    assert_eq!(request.token(), None);
    assert_eq!(ListRequest::new().page(4).start_page(), 4);
}

// ============================================================================
// URL construction and origin checks
// ============================================================================

#[test]
fn test_first_page_url() {
    let config = ClientConfig::default();
    let url = build_first_page_url(&config, "addresses", &ListRequest::new()).unwrap();
    assert_eq!(url.as_str(), "https://api.goshippo.com/addresses/?page=1");

    let url = build_first_page_url(&config, "parcels", &ListRequest::new().page(3).limit(25))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.goshippo.com/parcels/?page=3&limit=25"
    );
}

#[test_case("https://api.goshippo.com/addresses/?page=2", &[] ; "same origin")]
#[test_case("https://API.goshippo.com/x", &[] ; "host case is normalized")]
#[test_case("https://api.goshippo.com:443/x", &[] ; "default port is implied")]
#[test_case("http://api.goshippo.com/x", &["scheme"] ; "scheme only")]
#[test_case("https://evil.example/x", &["host"] ; "host only")]
#[test_case("http://evil.example/x", &["host", "scheme"] ; "host and scheme")]
#[test_case("https://api.goshippo.com:8443/x", &["host"] ; "explicit port differs")]
fn test_validate_origin(candidate: &str, mismatched: &[&str]) {
    let base = Url::parse(BASE).unwrap();
    let result = validate_origin(&base, &Url::parse(candidate).unwrap());
    if mismatched.is_empty() {
        assert_ok!(result);
        return;
    }
    match assert_err!(result) {
        Error::UntrustedPageToken { mismatches } => {
            assert_eq!(mismatches.len(), mismatched.len());
            for (got, want) in mismatches.iter().zip(mismatched) {
                assert!(got.starts_with(want), "'{got}' should mention {want}");
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Engine
// ============================================================================

#[tokio::test]
async fn test_walks_all_pages_then_stops_on_empty_page() {
    let transport = Arc::new(ScriptedTransport::paged(3, 2));
    let pager = start_listing::<Item>(&client(&transport), "items", fast()).unwrap();

    let pages = drain(pager).await;

    assert_eq!(pages.len(), 4);
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i as u64 + 1);
        assert!(page.error.is_none());
    }
    assert_eq!(pages[0].items, vec![Item { id: 0 }, Item { id: 1 }]);
    assert_eq!(pages[2].items, vec![Item { id: 4 }, Item { id: 5 }]);
    assert!(pages[3].items.is_empty());
    assert!(pages[3].is_last());
    assert_eq!(pages[0].previous_token, "");
    assert_eq!(pages[1].previous_token, page_url(1));
    assert_eq!(pages[1].next_token, page_url(3));
    assert_eq!(transport.calls(), 4);
    assert_eq!(
        transport.seen(),
        (1..=4).map(page_url).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_empty_page_ends_run_despite_next_cursor() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        &page_url(1),
        StatusCode::OK,
        json!({"next": page_url(2), "results": []}).to_string(),
    );
    transport.respond(
        &page_url(2),
        StatusCode::OK,
        json!({"next": null, "results": [{"id": 9}]}).to_string(),
    );

    let pages = drain(start_listing(&client(&transport), "items", fast()).unwrap()).await;

    assert_eq!(pages.len(), 1);
    assert!(pages[0].items.is_empty());
    assert_eq!(pages[0].next_token, page_url(2));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_missing_next_cursor_ends_run() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        &page_url(1),
        StatusCode::OK,
        json!({"count": 1, "previous": null, "next": null, "results": [{"id": 1}]}).to_string(),
    );

    let pages = drain(start_listing(&client(&transport), "items", fast()).unwrap()).await;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].items, vec![Item { id: 1 }]);
    assert_eq!(transport.calls(), 1);
}

#[test_case(1 ; "one page")]
#[test_case(2 ; "two pages")]
#[test_case(5 ; "five pages")]
#[tokio::test]
async fn test_ceiling_delivers_exactly_max_pages(max_pages: u64) {
    let transport = Arc::new(ScriptedTransport::paged(10, 1));
    let request = fast().max_pages(max_pages);

    let pages = drain(start_listing(&client(&transport), "items", request).unwrap()).await;

    assert_eq!(pages.len() as u64, max_pages);
    assert_eq!(pages.last().unwrap().page_number, max_pages);
    assert_eq!(transport.calls() as u64, max_pages);
}

#[tokio::test]
async fn test_transport_error_terminates_with_error_page() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        &page_url(1),
        StatusCode::OK,
        json!({"next": page_url(2), "results": [{"id": 1}]}).to_string(),
    );

    let pages = drain(start_listing(&client(&transport), "items", fast()).unwrap()).await;

    assert_eq!(pages.len(), 2);
    assert!(pages[0].error.is_none());
    assert_eq!(pages[1].page_number, 2);
    assert!(pages[1].items.is_empty());
    assert!(matches!(pages[1].error, Some(Error::Transport { .. })));
}

#[tokio::test]
async fn test_http_status_terminates_with_error_page() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(&page_url(1), StatusCode::UNAUTHORIZED, "invalid token");

    let mut pager = start_listing::<Item>(&client(&transport), "items", fast()).unwrap();

    let page = pager.next().await.unwrap();
    assert_eq!(page.page_number, 1);
    let err = page.into_result().unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
    assert!(err.to_string().contains("invalid token"));
    assert!(pager.next().await.is_none());
}

#[tokio::test]
async fn test_decode_error_terminates_with_error_page() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(&page_url(1), StatusCode::OK, "<html>oops</html>");

    let pages = drain(start_listing(&client(&transport), "items", fast()).unwrap()).await;

    assert_eq!(pages.len(), 1);
    assert!(matches!(pages[0].error, Some(Error::Decode { .. })));
}

#[tokio::test]
async fn test_untrusted_next_cursor_is_not_followed() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        &page_url(1),
        StatusCode::OK,
        json!({"next": "https://evil.example/items/?page=2", "results": [{"id": 1}]}).to_string(),
    );

    let pages = drain(start_listing(&client(&transport), "items", fast()).unwrap()).await;

    assert_eq!(pages.len(), 2);
    assert!(matches!(
        pages[1].error,
        Some(Error::UntrustedPageToken { .. })
    ));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_untrusted_next_cursor_fails_before_throttle_wait() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        &page_url(1),
        StatusCode::OK,
        json!({"next": "http://api.goshippo.com/items/?page=2", "results": [{"id": 1}]}).to_string(),
    );
    let request = ListRequest::new().throttle(Throttle::Custom(Duration::from_secs(30)));

    let pages = tokio::time::timeout(
        Duration::from_secs(5),
        drain(start_listing(&client(&transport), "items", request).unwrap()),
    )
    .await
    .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].page_number, 2);
    assert!(matches!(
        pages[1].error,
        Some(Error::UntrustedPageToken { .. })
    ));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_page_token_resumes_from_cursor() {
    let transport = Arc::new(ScriptedTransport::paged(3, 1));
    let request = fast().page(1).limit(99).page_token(page_url(3));

    let pages = drain(start_listing(&client(&transport), "items", request).unwrap()).await;

    assert_eq!(transport.seen()[0], page_url(3));
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].page_number, 1);
    assert_eq!(pages[0].items, vec![Item { id: 2 }]);
}

#[test_case("https://evil.example/items/?page=1" ; "foreign host")]
#[test_case("http://api.goshippo.com/items/?page=1" ; "downgraded scheme")]
#[tokio::test]
async fn test_untrusted_page_token_makes_no_request(token: &str) {
    let transport = Arc::new(ScriptedTransport::paged(1, 1));

    let err = start_listing::<Item>(&client(&transport), "items", fast().page_token(token))
        .unwrap_err();

    assert!(matches!(err, Error::UntrustedPageToken { .. }));
    tokio::task::yield_now().await;
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_unparseable_page_token() {
    let transport = Arc::new(ScriptedTransport::default());

    let err = start_listing::<Item>(&client(&transport), "items", fast().page_token("not a url"))
        .unwrap_err();

    assert!(matches!(err, Error::InvalidPageToken { .. }));
    assert!(err.is_fatal_input());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_scheme_mismatch_message() {
    let transport = Arc::new(ScriptedTransport::default());
    let config = ClientConfig::builder()
        .base_url("https://svc.example")
        .build()
        .unwrap();
    let client = Client::with_transport(config, "k", transport.clone());

    let err = start_listing::<Item>(
        &client,
        "list",
        fast().page_token("http://svc.example/list?page=1"),
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("scheme mismatch"), "{message}");
    assert!(!message.contains("host mismatch"), "{message}");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_same_origin_token_on_custom_base() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.respond(
        "https://svc.example/list?page=1",
        StatusCode::OK,
        json!({"results": [{"id": 3}]}).to_string(),
    );
    let config = ClientConfig::builder()
        .base_url("https://svc.example")
        .build()
        .unwrap();
    let client = Client::with_transport(config, "k", transport.clone());

    let pager = start_listing::<Item>(
        &client,
        "list",
        fast().page_token("https://svc.example/list?page=1"),
    )
    .unwrap();
    let pages = drain(pager).await;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].items, vec![Item { id: 3 }]);
}

#[tokio::test]
async fn test_no_prefetch_ahead_of_consumer() {
    let transport = Arc::new(ScriptedTransport::paged(5, 1));
    let mut pager = start_listing::<Item>(&client(&transport), "items", fast()).unwrap();

    let first = pager.next().await.unwrap();
    assert_eq!(first.page_number, 1);

    // The engine may fetch page 2 into the free slot, never page 3
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(transport.calls() <= 2, "calls = {}", transport.calls());

    let second = pager.next().await.unwrap();
    assert_eq!(second.page_number, 2);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(transport.calls() <= 3, "calls = {}", transport.calls());
}

#[tokio::test]
async fn test_disabled_throttle_is_fast() {
    let transport = Arc::new(ScriptedTransport::paged(20, 1));
    let started = Instant::now();

    let pages = drain(start_listing(&client(&transport), "items", fast()).unwrap()).await;

    assert_eq!(pages.len(), 21);
    // 20 default waits would take three seconds
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_custom_throttle_spaces_fetches() {
    let transport = Arc::new(ScriptedTransport::paged(2, 1));
    let request = ListRequest::new().throttle(Throttle::Custom(Duration::from_millis(40)));
    let started = Instant::now();

    let pages = drain(start_listing(&client(&transport), "items", request).unwrap()).await;

    assert_eq!(pages.len(), 3);
    assert!(started.elapsed() >= Duration::from_millis(80));
}

#[tokio::test]
async fn test_cancel_during_throttle_wait_stops_run() {
    let transport = Arc::new(ScriptedTransport::paged(5, 1));
    let request = ListRequest::new().throttle(Throttle::Custom(Duration::from_secs(30)));
    let mut pager = start_listing::<Item>(&client(&transport), "items", request).unwrap();

    let first = pager.next().await.unwrap();
    assert_eq!(first.page_number, 1);

    assert_ok!(pager.cancel.close());
    let rest = tokio::time::timeout(Duration::from_secs(5), drain(pager))
        .await
        .unwrap();

    assert!(rest.is_empty());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_cancel_right_after_start_delivers_at_most_one_page() {
    let transport = Arc::new(ScriptedTransport::with_latency(Duration::from_millis(20)));
    for page in 1..=3 {
        transport.respond(
            &page_url(page),
            StatusCode::OK,
            json!({"next": page_url(page + 1), "results": [{"id": page}]}).to_string(),
        );
    }

    let pager = start_listing::<Item>(&client(&transport), "items", ListRequest::new()).unwrap();
    assert_ok!(pager.cancel.close());

    let pages = tokio::time::timeout(Duration::from_secs(5), drain(pager))
        .await
        .unwrap();

    assert!(pages.len() <= 1);
    if let Some(page) = pages.first() {
        assert_eq!(page.page_number, 1);
    }
    assert!(transport.calls() <= 1);
}

#[tokio::test]
async fn test_cancel_with_disabled_throttle() {
    let transport = Arc::new(ScriptedTransport::paged(50, 1));
    let mut pager = start_listing::<Item>(&client(&transport), "items", fast()).unwrap();

    let first = pager.next().await.unwrap();
    assert_eq!(first.page_number, 1);
    pager.cancel.close().unwrap();

    let rest = drain(pager).await;
    // The fetch already committed to the free slot may still arrive
    assert!(rest.len() <= 1, "got {} extra pages", rest.len());
    assert!(transport.calls() <= 2);
}

#[tokio::test]
async fn test_dropping_pages_stops_run() {
    let transport = Arc::new(ScriptedTransport::paged(50, 1));
    let (mut pages, cancel) = start_listing::<Item>(&client(&transport), "items", fast())
        .unwrap()
        .into_parts();

    assert!(pages.next().await.is_some());
    drop(pages);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(transport.calls() <= 2);
    assert_ok!(cancel.close());
}

#[tokio::test]
async fn test_dropping_cancel_handle_does_not_cancel() {
    let transport = Arc::new(ScriptedTransport::paged(3, 1));
    let (pages, cancel) = start_listing::<Item>(&client(&transport), "items", fast())
        .unwrap()
        .into_parts();
    drop(cancel);

    let pages: Vec<_> = pages.collect().await;
    assert_eq!(pages.len(), 4);
}

// ============================================================================
// CancelHandle
// ============================================================================

#[test]
fn test_close_twice() {
    let handle = CancelHandle::new();
    assert!(!handle.is_closed());
    assert_ok!(handle.close());
    assert!(handle.is_closed());
    assert!(matches!(handle.close(), Err(Error::AlreadyClosed)));
    assert!(matches!(handle.close(), Err(Error::AlreadyClosed)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_close_succeeds_exactly_once() {
    let handle = CancelHandle::new();
    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let handle = handle.clone();
            tokio::spawn(async move { handle.close() })
        })
        .collect();

    let mut ok = 0;
    let mut already = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => ok += 1,
            Err(Error::AlreadyClosed) => already += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(already, 31);
}

#[tokio::test]
async fn test_listener_observes_close() {
    let handle = CancelHandle::new();
    let mut listener = handle.listener();
    assert!(!listener.is_cancelled());

    handle.close().unwrap();
    tokio::time::timeout(Duration::from_secs(1), listener.cancelled())
        .await
        .unwrap();
    assert!(listener.is_cancelled());
}
