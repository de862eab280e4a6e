/**
 * Backend API Client
 *
 * One async method per backend endpoint. Every call returns a typed
 * `Result`; nothing is swallowed here, callers decide what to show.
 */

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::session::Session;
use crate::shared::profile::{ProfileResponse, ProfileUpdate, RegisterRequest};
use crate::shared::search::{SearchRequest, SearchResult};

pub const SEARCH_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/account/login/";
pub const REFRESH_PATH: &str = "/account/token/refresh/";
pub const REGISTER_PATH: &str = "/account/register/";
pub const PROFILE_PATH: &str = "/account/get_profile/";
pub const UPDATE_PROFILE_PATH: &str = "/account/update-profile/";
pub const CHANGE_PASSWORD_PATH: &str = "/account/change-password/";
pub const UPDATE_EMAIL_PATH: &str = "/account/update-email/";

/// Errors returned by [`ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status the caller has no special handling for
    #[error("Request failed: {status} - {body}")]
    Status { status: StatusCode, body: String },

    /// Success status with a body that does not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("No account exists for this email.")]
    InvalidEmail,

    #[error("Incorrect password.")]
    InvalidPassword,

    #[error("Your account activation is currently under review.")]
    AccountInactive,

    #[error("Login failed: {0}")]
    LoginRejected(String),

    #[error("You need to be logged in.")]
    NotAuthenticated,
}

impl ApiError {
    /// Transport errors are logged and shown generically.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateEmailRequest<'a> {
    email: &'a str,
}

/// HTTP client for the factual backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    http: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Submit a statement or URL and return the ranked sources, in the
    /// order the backend sent them.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        tracing::debug!("POST {}", SEARCH_PATH);
        let request = SearchRequest { query: query.to_string() };
        let response = self
            .http
            .post(self.config.api_url(SEARCH_PATH))
            .json(&request)
            .send()
            .await?;
        decode(expect_success(response).await?).await
    }

    /// Exchange credentials for a token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        tracing::debug!("POST {}", LOGIN_PATH);
        let response = self
            .http
            .post(self.config.api_url(LOGIN_PATH))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(login_rejection(status, &body));
        }

        let pair: TokenPair = decode(response).await?;
        let refresh = pair
            .refresh
            .ok_or_else(|| ApiError::Decode("login response has no refresh token".to_string()))?;
        Ok(Session::new(pair.access, refresh))
    }

    /// Trade the refresh token for a fresh access token. The refresh token
    /// is kept when the backend does not rotate it.
    pub async fn refresh(&self, session: &Session) -> Result<Session, ApiError> {
        tracing::debug!("POST {}", REFRESH_PATH);
        let response = self
            .http
            .post(self.config.api_url(REFRESH_PATH))
            .json(&RefreshRequest { refresh: &session.refresh })
            .send()
            .await?;
        let pair: TokenPair = decode(expect_success(response).await?).await?;
        Ok(Session::new(
            pair.access,
            pair.refresh.unwrap_or_else(|| session.refresh.clone()),
        ))
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        tracing::debug!("POST {}", REGISTER_PATH);
        let response = self
            .http
            .post(self.config.api_url(REGISTER_PATH))
            .json(request)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn get_profile(&self, session: Option<&Session>) -> Result<ProfileResponse, ApiError> {
        tracing::debug!("GET {}", PROFILE_PATH);
        let request = authorized(self.http.get(self.config.api_url(PROFILE_PATH)), session)?;
        decode(expect_success(request.send().await?).await?).await
    }

    pub async fn update_profile(
        &self,
        session: Option<&Session>,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError> {
        tracing::debug!("PUT {}", UPDATE_PROFILE_PATH);
        let request = authorized(self.http.put(self.config.api_url(UPDATE_PROFILE_PATH)), session)?;
        expect_success(request.json(update).send().await?).await?;
        Ok(())
    }

    pub async fn change_password(
        &self,
        session: Option<&Session>,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        tracing::debug!("PUT {}", CHANGE_PASSWORD_PATH);
        let request =
            authorized(self.http.put(self.config.api_url(CHANGE_PASSWORD_PATH)), session)?;
        let body = ChangePasswordRequest { old_password, new_password };
        expect_success(request.json(&body).send().await?).await?;
        Ok(())
    }

    pub async fn update_email(&self, session: Option<&Session>, email: &str) -> Result<(), ApiError> {
        tracing::debug!("PUT {}", UPDATE_EMAIL_PATH);
        let request = authorized(self.http.put(self.config.api_url(UPDATE_EMAIL_PATH)), session)?;
        expect_success(request.json(&UpdateEmailRequest { email }).send().await?).await?;
        Ok(())
    }
}

fn authorized(builder: RequestBuilder, session: Option<&Session>) -> Result<RequestBuilder, ApiError> {
    let session = session.ok_or(ApiError::NotAuthenticated)?;
    Ok(builder.header(reqwest::header::AUTHORIZATION, session.bearer()))
}

async fn expect_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a rejected login to the case the UI distinguishes. The backend
/// reports one field per response: `username`, `user_active_status` or
/// `password`, each holding a list of messages.
fn login_rejection(status: StatusCode, body: &str) -> ApiError {
    let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) else {
        return ApiError::Status { status, body: body.to_string() };
    };

    let first_message = |key: &str| -> Option<String> {
        match fields.get(key)? {
            serde_json::Value::Array(items) => items.first()?.as_str().map(str::to_string),
            serde_json::Value::String(text) => Some(text.clone()),
            _ => None,
        }
    };

    if let Some(message) = first_message("username") {
        return match message.as_str() {
            "Invalid email" => ApiError::InvalidEmail,
            _ => ApiError::LoginRejected(message),
        };
    }
    if let Some(message) = first_message("user_active_status") {
        return match message.as_str() {
            "Not active." => ApiError::AccountInactive,
            _ => ApiError::LoginRejected(message),
        };
    }
    if let Some(message) = first_message("password") {
        return match message.as_str() {
            "Invalid password" => ApiError::InvalidPassword,
            _ => ApiError::LoginRejected(message),
        };
    }
    ApiError::LoginRejected(status.to_string())
}
