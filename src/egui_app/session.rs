//! Session tokens and their persistence
//!
//! The session is a pair of JWTs issued by the backend. It is persisted as
//! a small JSON document with the keys `token` (access) and
//! `refresh_token` so a restarted client comes back logged in.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Access and refresh token pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "token")]
    pub access: String,
    #[serde(rename = "refresh_token")]
    pub refresh: String,
}

impl Session {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// Authorization header value for authenticated calls.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access)
    }
}

// Tokens stay out of logs and debug output.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// Persistence for the current session.
pub trait SessionStore: Send {
    /// Read the persisted session; `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<Session>, SharedError>;
    fn save(&self, session: &Session) -> Result<(), SharedError>;
    /// Remove the persisted session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SharedError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SharedError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session: Session = serde_json::from_str(&text)?;
        if session.access.is_empty() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SharedError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SharedError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(session))),
        }
    }

    /// Snapshot of the stored session.
    pub fn current(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SharedError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| SharedError::storage("session store lock poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, session: &Session) -> Result<(), SharedError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| SharedError::storage("session store lock poisoned"))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SharedError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| SharedError::storage("session store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}
