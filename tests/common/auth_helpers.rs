//! Session and credential fixtures

use factual::egui_app::Session;
use factual::shared::RegistrationDraft;

pub const TEST_EMAIL: &str = "reader@example.com";
pub const TEST_PASSWORD: &str = "Abcdef1!";

/// A session as the backend would issue it
pub fn test_session() -> Session {
    Session::new("access-1", "refresh-1")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Registration draft that passes every client-side check
pub fn valid_draft() -> RegistrationDraft {
    RegistrationDraft {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        confirmation_password: TEST_PASSWORD.to_string(),
        full_name: "Ada Reader".to_string(),
        ..Default::default()
    }
}
