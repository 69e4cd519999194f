//! Integration tests using mock HTTP server
//!
//! Tests the full flow: coordinator → HTTP → Link header → cursor store

use async_trait::async_trait;
use pagelink::http::{HttpClient, RawResponse, Transport};
use pagelink::pagination::to_link_header;
use pagelink::{
    parse_link_header, ClientConfig, Error, FetchCoordinator, LinkRelation, PageToken,
    RelationMap, Result,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_users(server: &MockServer) {
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"login": "u3"}, {"login": "u4"}]))
                .insert_header(
                    "Link",
                    format!("<{uri}/users?page=1>; rel=\"prev\", <{uri}/users?page=1>; rel=\"first\"")
                        .as_str(),
                )
                .set_delay(Duration::from_millis(500)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"login": "u1"}, {"login": "u2"}]))
                .insert_header(
                    "Link",
                    format!("<{uri}/users?page=2>; rel=\"next\", <{uri}/users?page=2>; rel=\"last\"")
                        .as_str(),
                ),
        )
        .mount(server)
        .await;
}

fn coordinator(server: &MockServer) -> FetchCoordinator<HttpClient> {
    FetchCoordinator::from_config(ClientConfig::with_api_url(server.uri())).unwrap()
}

// ============================================================================
// End-to-end Tests
// ============================================================================

#[tokio::test]
async fn test_first_page_end_to_end() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    let client = coordinator(&server);

    let page = client.load_page("first").await.unwrap();

    assert_eq!(page.items, vec![json!({"login": "u1"}), json!({"login": "u2"})]);
    assert!(client.navigation_available("next").await);
    assert!(!client.navigation_available("prev").await);
}

#[tokio::test]
async fn test_walk_pages_end_to_end() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    let client = coordinator(&server);

    client.load_page(PageToken::First).await.unwrap();
    let second = client.load_page(PageToken::Last).await.unwrap();
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.items[0]["login"], "u3");
    assert!(client.navigation_available("prev").await);
    assert!(!client.navigation_available("next").await);

    let back = client.load_page(PageToken::Prev).await.unwrap();
    assert_eq!(back.items[0]["login"], "u1");
}

#[tokio::test]
async fn test_followers_end_to_end() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/u1/followers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "f1"}])))
        .mount(&server)
        .await;
    let client = coordinator(&server);

    let followers = client.load_sub_resource("u1").await.unwrap();

    assert_eq!(followers, vec![json!({"login": "f1"})]);
    assert!(client.current_page().await.is_none());
    assert!(!client.navigation_available("next").await);
}

#[tokio::test]
async fn test_stale_response_end_to_end() {
    let server = MockServer::start().await;
    mount_users(&server).await;
    let client = coordinator(&server);
    client.load_page("first").await.unwrap();

    // page 2 is delayed by the mock; "first" answers immediately
    let (stale, fresh) = tokio::join!(client.load_page("next"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        client.load_page("first").await
    });

    assert!(matches!(stale, Err(Error::Superseded { .. })));
    assert_eq!(fresh.unwrap().items[0]["login"], "u1");

    let current = client.current_page().await.unwrap();
    assert_eq!(current.items[0]["login"], "u1");
    assert!(client.navigation_available("next").await);
    assert!(!client.navigation_available("prev").await);
}

#[tokio::test]
async fn test_http_error_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
        .mount(&server)
        .await;
    let client = coordinator(&server);

    let err = client.load_page("first").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("API rate limit exceeded"));
}

// ============================================================================
// Transport Seam Tests
// ============================================================================

#[derive(Default)]
struct CountingTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl Transport for CountingTransport {
    async fn get(&self, _url: &str) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse::new(200, "[]"))
    }
}

#[tokio::test]
async fn test_unavailable_direction_makes_no_request() {
    let transport = Arc::new(CountingTransport::default());
    let client =
        FetchCoordinator::new(ClientConfig::default(), Arc::clone(&transport)).unwrap();

    let err = client.load_page("prev").await.unwrap_err();

    assert!(matches!(err, Error::NoSuchPage { .. }));
    assert!(err.is_local());
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Parser Tests
// ============================================================================

#[test]
fn test_parser_round_trip_public_api() {
    let relations: RelationMap = ["first", "prev", "next", "last"]
        .iter()
        .enumerate()
        .map(|(i, rel)| {
            LinkRelation::new(format!("https://api.example.com/users?page={i}"), *rel)
                .with_attribute("type", "application/json")
        })
        .collect();

    let header = to_link_header(&relations);
    assert_eq!(parse_link_header(&header), relations);
}

#[test]
fn test_parser_quoted_separators_public_api() {
    let relations = parse_link_header(r#"<https://x/a>; rel="next"; title="a, b; c""#);
    assert_eq!(relations.len(), 1);
    assert_eq!(
        relations.get("next").unwrap().attribute("title"),
        Some("a, b; c")
    );
}
