//! Search endpoint tests

use crate::common::*;
use crate::{assert_err, assert_ok};
use factual::egui_app::ApiError;
use factual::shared::sort_by_match;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_posts_query_under_text_url_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({ "text/URL": "the moon is made of cheese" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "Match": "10%", "sources": "https://a.example/x" },
            { "Match": "90.12%", "sources": "https://b.example/y" },
            { "Match": "50%", "sources": "https://c.example/z" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut results = assert_ok!(client.search("the moon is made of cheese").await);
    assert_eq!(results.len(), 3);

    sort_by_match(&mut results);
    let percents: Vec<_> = results.iter().map(|r| r.percent()).collect();
    assert_eq!(percents, vec![Some(90.12), Some(50.0), Some(10.0)]);
    assert_eq!(results[0].source_host().as_deref(), Some("b.example"));
}

#[tokio::test]
async fn test_search_tolerates_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}, { "Match": 42 }])))
        .mount(&server)
        .await;

    let results = assert_ok!(client_for(&server).search("q").await);
    assert!(results[0].match_value.is_none());
    assert!(results[0].source_url.is_none());
    assert_eq!(results[1].percent(), Some(42.0));
}

#[tokio::test]
async fn test_search_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    assert_err!(client_for(&server).search("q").await, ApiError::Status { .. });
}

#[tokio::test]
async fn test_search_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert_err!(client_for(&server).search("q").await, ApiError::Decode(_));
}
