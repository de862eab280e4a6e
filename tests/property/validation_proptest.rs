//! Property-based tests for the form validators

use factual::shared::validation::{check_credentials, MIN_PASSWORD_LENGTH};
use factual::shared::{passwords_match, validate_email, validate_password_strength, ValidationError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_well_formed_emails_pass(
        local in "[a-z0-9._%+-]{1,16}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(validate_email(&email), "rejected {}", email);
    }

    #[test]
    fn prop_emails_without_at_fail(candidate in "[a-z0-9.]{0,30}") {
        prop_assert!(!validate_email(&candidate));
    }

    #[test]
    fn prop_short_passwords_fail(candidate in ".{0,7}") {
        prop_assume!(candidate.chars().count() < MIN_PASSWORD_LENGTH);
        prop_assert!(!validate_password_strength(&candidate));
    }

    #[test]
    fn prop_passwords_with_every_class_pass(
        upper in "[A-Z]{1,4}",
        lower in "[a-z]{1,4}",
        digit in "[0-9]{1,4}",
        special in "[!@#$%^&*?]{1,4}",
        padding in "[a-z]{4}",
    ) {
        let password = format!("{}{}{}{}{}", upper, lower, digit, special, padding);
        prop_assert!(validate_password_strength(&password));
    }

    #[test]
    fn prop_passwords_without_digit_fail(candidate in "[A-Za-z!?]{8,20}") {
        prop_assert!(!validate_password_strength(&candidate));
    }

    #[test]
    fn prop_password_matches_itself(candidate in ".{0,40}") {
        prop_assert!(passwords_match(&candidate, &candidate));
    }

    #[test]
    fn prop_invalid_email_reported_first(password in ".{0,20}", confirmation in ".{0,20}") {
        prop_assert_eq!(
            check_credentials("not-an-email", &password, &confirmation),
            Err(ValidationError::InvalidEmail)
        );
    }
}
