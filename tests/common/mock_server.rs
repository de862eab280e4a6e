//! Mock backend helpers for integration tests

use std::time::Duration;

use factual::egui_app::{ApiClient, AppState, Config, MemorySessionStore};
use factual::shared::AppConfig;
use serde_json::{json, Value};
use tokio::runtime::Handle;
use wiremock::MockServer;

/// Client configuration pointing at the mock backend
pub fn config_for(server: &MockServer) -> Config {
    config_with_refresh(server, Duration::from_secs(240))
}

pub fn config_with_refresh(server: &MockServer, refresh_interval: Duration) -> Config {
    Config::with_builder(
        AppConfig::builder()
            .server_url(server.uri())
            .refresh_interval(refresh_interval)
            .request_timeout(Duration::from_secs(2)),
    )
    .expect("mock server uri is a valid config")
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(config_for(server)).expect("client builds")
}

/// App state wired to the mock backend and an in-memory session store
pub fn app_state_for(server: &MockServer, store: MemorySessionStore) -> AppState {
    app_state_with(config_for(server), store)
}

pub fn app_state_with(config: Config, store: MemorySessionStore) -> AppState {
    AppState::new(config, Box::new(store), Handle::current()).expect("state builds")
}

pub fn token_body(access: &str, refresh: &str) -> Value {
    json!({ "access": access, "refresh": refresh })
}

pub fn profile_body(email: &str, full_name: &str) -> Value {
    json!({
        "user": { "id": 1, "username": email, "email": email },
        "user_profile": {
            "user": 1,
            "full_name": full_name,
            "is_journalist": false,
            "type_of_employment": null,
            "organization_name": null
        }
    })
}

/// Drive the event loop until `count` background results have been applied.
pub async fn wait_for_events(state: &mut AppState, count: usize) {
    let mut applied = 0;
    for _ in 0..300 {
        applied += state.poll_events();
        if applied >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("expected {} events, got {}", count, applied);
}

/// Drive the event loop until `done` holds.
pub async fn wait_until(state: &mut AppState, done: impl Fn(&AppState) -> bool) {
    for _ in 0..300 {
        state.poll_events();
        if done(state) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached after polling");
}
