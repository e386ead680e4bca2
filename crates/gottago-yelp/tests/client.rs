//! Integration tests for `YelpClient` using wiremock HTTP mocks.

use gottago_core::place::Coordinates;
use gottago_yelp::types::UserContext;
use gottago_yelp::{ChatRequest, YelpClient, YelpError};
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YelpClient {
    YelpClient::with_base_url("test-key", 30, "gottago-test", base_url)
        .expect("client construction should not fail")
}

fn new_search(query: &str) -> ChatRequest {
    ChatRequest::new_search(
        query,
        UserContext::en_us(Coordinates {
            latitude: 40.7128,
            longitude: -74.006,
        }),
    )
}

#[tokio::test]
async fn chat_sends_bearer_credential_and_parses_response() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "chat_id": "conv-42",
        "entities": [{
            "businesses": [{
                "id": "cafe-1",
                "name": "Downtown Community Cafe",
                "categories": [{ "title": "Cafe" }],
                "rating": 4.7,
                "price": "$",
                "coordinates": { "latitude": 40.7128, "longitude": -74.006 }
            }]
        }]
    });

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "query": "find restrooms",
            "user_context": { "locale": "en_US" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .chat(&new_search("find restrooms"))
        .await
        .expect("should parse response");

    assert_eq!(response.chat_id.as_deref(), Some("conv-42"));
    let entity = response.business_entity().expect("business entity");
    assert_eq!(entity.businesses.len(), 1);
}

#[tokio::test]
async fn chat_follow_up_sends_chat_id_without_user_context() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "query": "which is closest?",
            "chat_id": "conv-42"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "chat_id": "conv-42", "entities": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = ChatRequest::follow_up("which is closest?", "conv-42");
    let serialized = serde_json::to_value(&request).expect("serialize");
    assert!(serialized.get("user_context").is_none());

    let response = client.chat(&request).await.expect("should parse response");
    assert!(response.entities.is_empty());
}

#[tokio::test]
async fn chat_surfaces_upstream_error_with_details() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "code": "TOO_MANY_REQUESTS" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .chat(&new_search("find water"))
        .await
        .expect_err("non-2xx should be an error");

    match err {
        YelpError::Api { status, details } => {
            assert_eq!(status, 429);
            assert_eq!(details["error"]["code"], "TOO_MANY_REQUESTS");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_raw_passes_non_2xx_through_without_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({ "error": "upstream down" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client
        .chat_raw(&new_search("find air"))
        .await
        .expect("transport succeeded");

    assert_eq!(outcome.status.as_u16(), 503);
    assert!(!outcome.is_success());
    assert_eq!(outcome.body["error"], "upstream down");
}

#[tokio::test]
async fn chat_raw_wraps_non_json_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client
        .chat_raw(&new_search("find food"))
        .await
        .expect("transport succeeded");

    assert!(outcome.is_success());
    assert_eq!(outcome.body["raw"], "<html>gateway timeout</html>");
}
