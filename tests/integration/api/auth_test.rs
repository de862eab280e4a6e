//! Login, refresh and registration endpoint tests

use crate::common::*;
use crate::{assert_err, assert_ok};
use factual::egui_app::{ApiError, Session};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_is_form_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=reader%40example.com"))
        .and(body_string_contains("password=Abcdef1%21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("a1", "r1")))
        .expect(1)
        .mount(&server)
        .await;

    let session = assert_ok!(client_for(&server).login(TEST_EMAIL, TEST_PASSWORD).await);
    assert_eq!(session, Session::new("a1", "r1"));
}

#[tokio::test]
async fn test_login_rejections_map_to_variants() {
    let cases = [
        (json!({ "username": ["Invalid email"] }), "email"),
        (json!({ "user_active_status": ["Not active."] }), "inactive"),
        (json!({ "password": ["Invalid password"] }), "password"),
    ];

    for (body, case) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/account/login/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(body))
            .mount(&server)
            .await;

        let result = client_for(&server).login(TEST_EMAIL, TEST_PASSWORD).await;
        match case {
            "email" => assert_err!(result, ApiError::InvalidEmail),
            "inactive" => assert_err!(result, ApiError::AccountInactive),
            _ => assert_err!(result, ApiError::InvalidPassword),
        }
    }
}

#[tokio::test]
async fn test_login_without_refresh_token_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "a1" })))
        .mount(&server)
        .await;

    assert_err!(
        client_for(&server).login(TEST_EMAIL, TEST_PASSWORD).await,
        ApiError::Decode(_)
    );
}

#[tokio::test]
async fn test_refresh_sends_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/token/refresh/"))
        .and(body_json(json!({ "refresh": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2")))
        .expect(1)
        .mount(&server)
        .await;

    let session = assert_ok!(client_for(&server).refresh(&test_session()).await);
    assert_eq!(session, Session::new("access-2", "refresh-2"));
}

#[tokio::test]
async fn test_refresh_keeps_unrotated_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "access-2" })))
        .mount(&server)
        .await;

    let session = assert_ok!(client_for(&server).refresh(&test_session()).await);
    assert_eq!(session, Session::new("access-2", "refresh-1"));
}

#[tokio::test]
async fn test_register_sends_full_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/register/"))
        .and(body_json(json!({
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
            "full_name": "Ada Reader",
            "is_journalist": false,
            "type_of_employment": null,
            "organization_name": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "email": TEST_EMAIL })))
        .expect(1)
        .mount(&server)
        .await;

    let request = assert_ok!(valid_draft().to_request());
    assert_ok!(client_for(&server).register(&request).await);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/register/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "email": ["user with this email already exists."] })),
        )
        .mount(&server)
        .await;

    let request = assert_ok!(valid_draft().to_request());
    assert_err!(client_for(&server).register(&request).await, ApiError::Status { .. });
}
