//! Common test utilities and helpers
//!
//! - Mock backend helpers (wiremock)
//! - Session and credential fixtures
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod mock_server;

pub use auth_helpers::*;
pub use mock_server::*;
