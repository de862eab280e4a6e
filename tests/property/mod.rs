//! Property-based tests

pub mod search_proptest;
pub mod validation_proptest;
