//! Integration tests against a mock backend

pub mod api;
