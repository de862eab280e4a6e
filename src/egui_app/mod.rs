//! egui Native Desktop App Module
//!
//! The desktop client for the factual backend: search, login and
//! registration, and profile management.
//!
//! # Architecture
//!
//! - **`config`** - Configuration wrapper and endpoint URLs
//! - **`api`** - Async HTTP client, one method per backend endpoint
//! - **`session`** - Token pair and its persistence
//! - **`auth`** - Logged-in state, cached user and profile
//! - **`refresh`** - Fixed-period token refresh timer
//! - **`modal`** - Login / registration dialog state machine
//! - **`types`** - View routing
//! - **`state`** - Application state and background request plumbing
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Binary entry point
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin factual_app
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod modal;
pub mod refresh;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use auth::AuthState;
pub use config::Config;
pub use modal::{Modal, ModalController, RegisterStep};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use state::{AppEvent, AppState};
pub use theme::styles;
pub use types::AppView;
