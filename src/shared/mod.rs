//! Shared Module
//!
//! Types and pure logic that do not depend on the UI toolkit or the
//! network stack. Everything here is deterministic and unit-testable in
//! isolation.

/// Form field validators
pub mod validation;

/// User and profile types
pub mod profile;

/// Search results and match ordering
pub mod search;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use profile::{EmploymentType, ProfileUpdate, RegistrationDraft, User, UserProfile};
pub use search::{sort_by_match, MatchValue, SearchResult};
pub use validation::{passwords_match, validate_email, validate_password_strength, ValidationError};
