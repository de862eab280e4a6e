//! Factual - Desktop Client Library
//!
//! Factual is a fact-checking client: users submit a statement or URL and
//! get back a ranked list of matching sources from the factual backend.
//! Accounts (login, registration, profile) are managed by the same backend.
//!
//! # Overview
//!
//! The backend owns every business rule. This library is the client side:
//!
//! - Client-side form validation (email shape, password strength)
//! - The login / registration modal workflow
//! - Session lifecycle (persisted tokens, periodic refresh, logout)
//! - A typed HTTP client for every backend endpoint
//! - Search result ordering and view routing
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types and pure logic
//!   - Validators, profile and search types
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - API client, session store, auth state, refresh timer
//!   - Modal state machine and view routing
//!   - egui views
//!
//! # Usage
//!
//! ```rust,no_run
//! use factual::shared::validation::{validate_email, validate_password_strength};
//!
//! assert!(validate_email("reader@example.com"));
//! assert!(validate_password_strength("Abcdef1!"));
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode; all state lives on the UI thread
//! - **Network**: requests run on a tokio runtime and report back over a channel
//!
//! # Error Handling
//!
//! - `Result<T, E>` at every async boundary
//! - Custom error types in `shared::error`, `shared::validation` and `egui_app::api`

/// Shared types and pure client logic
pub mod shared;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
