//! Form Field Validators
//!
//! Pure predicates used by the registration wizard and the profile
//! dialogs. All of them are total over any string input, including the
//! empty string.
//!
//! # Usage
//!
//! ```rust
//! use factual::shared::validation::{check_credentials, ValidationError};
//!
//! let result = check_credentials("reader@example.com", "short", "short");
//! assert_eq!(result, Err(ValidationError::WeakPassword));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A client-side validation failure, displayed inline next to the field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error(
        "Password must meet all criteria: at least 8 characters, including one uppercase letter, \
         one lowercase letter, one number, and one special symbol."
    )]
    WeakPassword,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("{0} is required.")]
    MissingField(&'static str),
}

/// True iff `candidate` has a `local@domain.tld` shape with no whitespace.
pub fn validate_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// True iff `candidate` has at least [`MIN_PASSWORD_LENGTH`] characters and
/// contains an upper-case letter, a lower-case letter, a digit and a
/// character outside `[A-Za-z0-9]`.
pub fn validate_password_strength(candidate: &str) -> bool {
    let long_enough = candidate.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = candidate.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = candidate.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_special = candidate.chars().any(|c| !c.is_ascii_alphanumeric());

    long_enough && has_upper && has_lower && has_digit && has_special
}

/// Strict equality of a password and its confirmation.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// Run the email, strength and match checks in that order and report the
/// first one that fails.
pub fn check_credentials(
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    check_new_password(password, confirmation)
}

/// Strength and match checks for a new password (registration and the
/// change-password dialog).
pub fn check_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if !validate_password_strength(password) {
        return Err(ValidationError::WeakPassword);
    }
    if !passwords_match(password, confirmation) {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Reject blank input for a required text field.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
