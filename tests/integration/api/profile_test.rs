//! Authenticated endpoint tests

use crate::common::*;
use crate::{assert_err, assert_ok};
use factual::egui_app::ApiError;
use factual::shared::{EmploymentType, ProfileUpdate};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_profile_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/get_profile/"))
        .and(header("authorization", auth_header("access-1").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body(TEST_EMAIL, "Ada Reader")))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session();
    let profile = assert_ok!(client_for(&server).get_profile(Some(&session)).await);
    assert_eq!(profile.user.email, TEST_EMAIL);
    assert_eq!(profile.user_profile.full_name, "Ada Reader");
    assert!(!profile.user_profile.is_journalist);
}

#[tokio::test]
async fn test_authenticated_calls_need_a_session() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = ProfileUpdate::new("Ada", false, None, None);
    assert_err!(client.get_profile(None).await, ApiError::NotAuthenticated);
    assert_err!(client.update_profile(None, &update).await, ApiError::NotAuthenticated);
    assert_err!(client.change_password(None, "a", "b").await, ApiError::NotAuthenticated);
    assert_err!(client.update_email(None, TEST_EMAIL).await, ApiError::NotAuthenticated);
}

#[tokio::test]
async fn test_update_profile_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/account/update-profile/"))
        .and(header("authorization", auth_header("access-1").as_str()))
        .and(body_json(json!({
            "full_name": "Ada Reader",
            "is_journalist": true,
            "type_of_employment": "employed",
            "organization_name": "Daily Planet"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProfileUpdate::new(
        "Ada Reader",
        true,
        Some(EmploymentType::Employed),
        Some("Daily Planet".to_string()),
    );
    let session = test_session();
    assert_ok!(client_for(&server).update_profile(Some(&session), &update).await);
}

#[tokio::test]
async fn test_change_password_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/account/change-password/"))
        .and(body_json(json!({ "old_password": TEST_PASSWORD, "new_password": "Ghijkl2?" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session();
    assert_ok!(
        client_for(&server)
            .change_password(Some(&session), TEST_PASSWORD, "Ghijkl2?")
            .await
    );
}

#[tokio::test]
async fn test_change_password_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/account/change-password/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "old_password": ["Wrong password."] })))
        .mount(&server)
        .await;

    let session = test_session();
    assert_err!(
        client_for(&server).change_password(Some(&session), "x", "y").await,
        ApiError::Status { .. }
    );
}

#[tokio::test]
async fn test_update_email_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/account/update-email/"))
        .and(header("authorization", auth_header("access-1").as_str()))
        .and(body_json(json!({ "email": "new@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session();
    assert_ok!(client_for(&server).update_email(Some(&session), "new@example.com").await);
}
