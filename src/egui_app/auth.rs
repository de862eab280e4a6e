/**
 * Authentication State
 *
 * Holds the session, the logged-in flag and the cached user/profile.
 * The session is only ever changed through the methods below so the
 * persisted copy and the in-memory copy move together.
 *
 * Every new session (restore, login, logout) bumps a generation counter.
 * Background results carry the generation they were started under and
 * are dropped when it no longer matches.
 */

use chrono::{DateTime, Utc};

use crate::egui_app::session::{Session, SessionStore};
use crate::shared::error::SharedError;
use crate::shared::profile::{ProfileResponse, User, UserProfile};

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    session: Option<Session>,
    generation: u64,
    pub user: Option<User>,
    pub profile: Option<UserProfile>,
    pub last_refreshed: Option<DateTime<Utc>>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted session. Returns true when one was found.
    ///
    /// A store that cannot be read is treated as logged out.
    pub fn restore(&mut self, store: &dyn SessionStore) -> bool {
        match store.load() {
            Ok(Some(session)) => {
                tracing::info!("restored persisted session");
                self.session = Some(session);
                self.generation += 1;
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("failed to read persisted session: {}", e);
                false
            }
        }
    }

    /// Install a freshly issued session and persist it.
    pub fn establish(&mut self, session: Session, store: &dyn SessionStore) -> Result<(), SharedError> {
        let persisted = store.save(&session);
        self.session = Some(session);
        self.generation += 1;
        self.user = None;
        self.profile = None;
        self.last_refreshed = None;
        self.error = None;
        tracing::info!("session established");
        persisted
    }

    /// Generation of the current session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when a result started under `generation` still belongs to
    /// the live session.
    pub fn is_current(&self, generation: u64) -> bool {
        self.session.is_some() && self.generation == generation
    }

    /// Replace the tokens after a successful refresh started under
    /// `generation`.
    pub fn apply_refresh(
        &mut self,
        generation: u64,
        session: Session,
        store: &dyn SessionStore,
    ) -> Result<(), SharedError> {
        if !self.is_current(generation) {
            tracing::debug!(generation, "dropping refresh result for a closed session");
            return Ok(());
        }
        let persisted = store.save(&session);
        self.session = Some(session);
        self.last_refreshed = Some(Utc::now());
        persisted
    }

    /// Cache the profile fetched under `generation`. Returns false when
    /// the result is stale and was dropped.
    pub fn apply_profile(&mut self, generation: u64, response: ProfileResponse) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(generation, "dropping profile for a closed session");
            return false;
        }
        self.user = Some(response.user);
        self.profile = Some(response.user_profile);
        true
    }

    /// Drop the session everywhere. The in-memory state is cleared even
    /// when the store fails.
    pub fn logout(&mut self, store: &dyn SessionStore) -> Result<(), SharedError> {
        *self = AuthState {
            generation: self.generation + 1,
            ..AuthState::new()
        };
        tracing::info!("logged out");
        store.clear()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Logged in exactly when an access token is held.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}
