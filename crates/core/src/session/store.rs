//! Persisted session descriptor and its on-disk store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use onepay_protocol::User;

use crate::error::Result;

/// The persisted session: token and profile, written and cleared together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// File-backed store for the session descriptor.
///
/// The descriptor is replaced as a whole on every save, so no partial state
/// is observable across invocations. A `None` path disables persistence
/// entirely: load reports nothing, save and clear are no-ops.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Creates a store from an optional descriptor path.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Returns the descriptor path when persistence is enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the persisted session, if any.
    ///
    /// A missing or unreadable descriptor reports no stored session rather
    /// than an error: a corrupt file must not wedge startup.
    pub fn load(&self) -> Option<StoredSession> {
        let path = self.path()?;
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persists the session descriptor, replacing any previous one.
    pub fn save(&self, session: &StoredSession) -> Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the descriptor file if present. Returns whether a file was
    /// actually removed.
    pub fn clear(&self) -> Result<bool> {
        let Some(path) = self.path() else {
            return Ok(false);
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
