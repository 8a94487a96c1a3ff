//! Shared execution context resolved from flags and environment.

use std::path::{Path, PathBuf};

use onepay::{ApiClient, SessionManager, SessionStore};

use crate::error::Result;

/// API base used when neither `--api-base` nor `ONEPAY_API_BASE` is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Immutable per-invocation context handed to every command.
#[derive(Debug)]
pub struct CommandContext {
    api_base: String,
    session_file: Option<PathBuf>,
}

impl CommandContext {
    /// Resolves the context from CLI flags, falling back to the environment
    /// and defaults.
    pub fn new(api_base: Option<String>, session_file: Option<PathBuf>) -> Self {
        let api_base = api_base
            .or_else(|| std::env::var("ONEPAY_API_BASE").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let session_file = session_file.or_else(default_session_path);
        Self {
            api_base,
            session_file,
        }
    }

    /// The resolved API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The session descriptor path, when one could be resolved.
    pub fn session_file(&self) -> Option<&Path> {
        self.session_file.as_deref()
    }

    /// Builds the remote service client.
    pub fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::from_base_url(&self.api_base)?)
    }

    /// Builds a session manager over the resolved descriptor path.
    pub fn session_manager(&self) -> SessionManager {
        SessionManager::new(SessionStore::new(self.session_file.clone()))
    }
}

fn default_session_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("onepay").join("session.json"))
}
