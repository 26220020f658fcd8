//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: client → reqwest transport → mock Shippo
//! API → decoded objects and page sequences

use futures::StreamExt;
use serde_json::json;
use shippo_client::http::HttpTransportConfig;
use shippo_client::models::{DistanceUnit, MassUnit};
use shippo_client::types::BackoffType;
use shippo_client::{Address, Client, ClientConfig, Error, ListRequest, Parcel, Throttle};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "shippo_test_5f1c";

async fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    Client::with_config(config, [TOKEN]).unwrap()
}

fn address(id: &str, city: &str) -> serde_json::Value {
    json!({
        "object_purpose": "QUOTE",
        "object_id": id,
        "object_owner": "shippotle@goshippo.com",
        "city": city,
        "country": "US",
        "test": true
    })
}

async fn mount_address_pages(server: &MockServer) {
    let next = |page: u32| format!("{}/addresses/?page={page}&limit=2", server.uri());
    let pages = [
        (1, vec![address("a1", "Boston"), address("a2", "Denver")], Some(next(2))),
        (2, vec![address("a3", "Austin"), address("a4", "Tampa")], Some(next(3))),
        (3, vec![address("a5", "Reno")], None),
    ];

    for (page, results, next) in pages {
        Mock::given(method("GET"))
            .and(path("/addresses/"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", "2"))
            .and(header("Authorization", format!("ShippoToken {TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 5,
                "previous": null,
                "next": next,
                "results": results
            })))
            .expect(1)
            .mount(server)
            .await;
    }
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_addresses_walks_every_page() {
    let server = MockServer::start().await;
    mount_address_pages(&server).await;

    let client = client_for(&server).await;
    let request = ListRequest::new().limit(2).throttle(Throttle::Disabled);
    let pager = client.list_addresses(request).unwrap();

    let pages: Vec<_> = pager.pages.collect().await;

    assert_eq!(pages.len(), 3);
    let ids: Vec<_> = pages
        .iter()
        .flat_map(|p| p.items.iter().map(|a| a.id.clone()))
        .collect();
    assert_eq!(ids, ["a1", "a2", "a3", "a4", "a5"]);
    assert!(pages.iter().all(|p| p.error.is_none()));
    assert_eq!(
        pages.iter().map(|p| p.page_number).collect::<Vec<_>>(),
        [1, 2, 3]
    );
    assert!(pages[2].is_last());
    assert!(pages[0].items[0].in_test_mode);
}

#[tokio::test]
async fn test_list_addresses_with_ceiling_and_default_throttle() {
    let server = MockServer::start().await;
    let next = format!("{}/addresses/?page=2&limit=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/addresses/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": next,
            "results": [address("a1", "Boston")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut pager = client
        .list_addresses(ListRequest::new().limit(2).max_pages(1))
        .unwrap();

    let page = pager.next().await.unwrap();
    assert_eq!(page.next_token, next);
    assert!(pager.next().await.is_none());
}

#[tokio::test]
async fn test_resume_listing_from_page_token() {
    let server = MockServer::start().await;
    mount_address_pages_from_three(&server).await;

    let client = client_for(&server).await;
    let token = format!("{}/addresses/?page=3&limit=2", server.uri());
    let mut pager = client
        .list_addresses(ListRequest::new().page_token(token).throttle(Throttle::Disabled))
        .unwrap();

    let page = pager.next().await.unwrap();
    assert_eq!(page.page_number, 1);
    assert_eq!(page.items[0].id, "a5");
    assert!(pager.next().await.is_none());
}

async fn mount_address_pages_from_three(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/addresses/"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "previous": format!("{}/addresses/?page=2&limit=2", server.uri()),
            "next": null,
            "results": [address("a5", "Reno")]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_untrusted_page_token_sends_no_request() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let result = client.list_addresses(
        ListRequest::new().page_token("https://api.goshippo.com/addresses/?page=2"),
    );

    let err = result.unwrap_err();
    assert!(matches!(err, Error::UntrustedPageToken { .. }));
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_parcels_server_error_ends_with_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/parcels/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut pager = client.list_parcels(ListRequest::new()).unwrap();

    let page = pager.next().await.unwrap();
    assert!(page.items.is_empty());
    assert!(matches!(
        page.error,
        Some(Error::HttpStatus { status: 500, .. })
    ));
    assert!(pager.next().await.is_none());
}

#[tokio::test]
async fn test_cancel_between_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": format!("{}/addresses/?page=2&limit=2", server.uri()),
            "results": [address("a1", "Boston")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = ListRequest::new()
        .limit(2)
        .throttle(Throttle::Custom(Duration::from_secs(10)));
    let mut pager = client.list_addresses(request).unwrap();

    assert!(pager.next().await.is_some());
    pager.cancel.close().unwrap();
    assert!(matches!(pager.cancel.close(), Err(Error::AlreadyClosed)));
    assert!(pager.next().await.is_none());
}

// ============================================================================
// Single-object calls
// ============================================================================

#[tokio::test]
async fn test_address_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/addresses/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(address("a9", "Miami")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/addresses/a9/validate/"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut body = address("a9", "Miami");
            body["validation_results"] = json!({"is_valid": true, "messages": []});
            body
        }))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = client
        .create_address(&Address {
            purpose: "QUOTE".into(),
            city: "Miami".into(),
            country: "US".into(),
            ..Address::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "a9");
    assert_eq!(created.owner_username, "shippotle@goshippo.com");

    let validated = client.validate_address(&created.id).await.unwrap();
    assert!(validated.is_valid());
}

#[tokio::test]
async fn test_parcel_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parcels/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "object_state": "VALID",
            "object_id": "p1",
            "length": "10.0000",
            "width": "8.0000",
            "height": "4.0000",
            "distance_unit": "in",
            "weight": "2.0000",
            "mass_unit": "lb"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let parcel = Parcel {
        length: 10.0,
        width: 8.0,
        height: 4.0,
        distance_unit: Some(DistanceUnit::Inch),
        weight: 2.0,
        mass_unit: Some(MassUnit::Pound),
        ..Parcel::default()
    };
    let created = client.create_parcel(&parcel).await.unwrap();

    assert_eq!(created.id, "p1");
    assert!((created.width - 8.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_transport_retries_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/parcels/p1/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parcels/p1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object_id": "p1"})))
        .mount(&server)
        .await;

    let http = HttpTransportConfig::builder()
        .max_retries(1)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(5),
        )
        .build();
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .http(http)
        .build()
        .unwrap();
    let client = Client::with_config(config, [TOKEN]).unwrap();

    let parcel = client.parcel_by_id("p1").await.unwrap();
    assert_eq!(parcel.id, "p1");
}

#[tokio::test]
async fn test_missing_token_is_reported() {
    // Only meaningful when the variable is absent from the test environment
    if std::env::var(shippo_client::TOKEN_ENV_VAR).is_ok() {
        return;
    }
    let err = Client::new(["", "  "]).unwrap_err();
    assert!(matches!(err, Error::MissingToken { .. }));
}
