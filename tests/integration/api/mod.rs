//! API client tests, one module per endpoint group

pub mod auth_test;
pub mod profile_test;
pub mod search_test;
