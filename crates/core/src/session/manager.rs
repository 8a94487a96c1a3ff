//! Authentication state machine over the persisted session store.

use tracing::{debug, info, warn};

use onepay_protocol::{LoginPayload, RegisterPayload, User};

use crate::error::Result;
use crate::gateway::ApiClient;
use crate::session::store::{SessionStore, StoredSession};

/// The client's identity state for the current process lifetime.
///
/// Invariant: a profile is present iff the session is authenticated.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        user: User,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The bearer token, when authenticated.
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }

    /// The cached profile, when authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user, .. } => Some(user),
        }
    }
}

/// Owns the session and keeps it in lockstep with the persisted store on
/// every transition. The only writer of both.
#[derive(Debug)]
pub struct SessionManager {
    store: SessionStore,
    session: Session,
}

impl SessionManager {
    /// Creates a manager over the given store. The session starts
    /// `Anonymous`; call [`restore`](Self::restore) or
    /// [`load_cached`](Self::load_cached) to pick up persisted credentials.
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            session: Session::Anonymous,
        }
    }

    /// The current session state.
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Adopts persisted credentials without contacting the identity
    /// service.
    ///
    /// This is the optimistic half of startup: the cached token and profile
    /// are used as-is, and the server remains the authority on every
    /// subsequent bearer call. Use [`restore`](Self::restore) for the
    /// fail-closed validation.
    pub fn load_cached(&mut self) -> &Session {
        if let Some(stored) = self.store.load() {
            self.session = Session::Authenticated {
                token: stored.token,
                user: stored.user,
            };
        }
        &self.session
    }

    /// Restores the persisted session and re-validates it against the
    /// identity service.
    ///
    /// Validation success replaces the cached profile with the fresh one and
    /// persists it. Validation failure of any kind clears both in-memory and
    /// persisted state: a stale or revoked token must never leave the user
    /// silently logged in. Only the store-write path can return an error.
    pub async fn restore(&mut self, api: &ApiClient) -> Result<&Session> {
        let Some(stored) = self.store.load() else {
            self.session = Session::Anonymous;
            return Ok(&self.session);
        };

        match api.me(&stored.token).await {
            Ok(user) => {
                debug!(target = "onepay", user = user.id, "stored session validated");
                self.install(stored.token, user)?;
            }
            Err(err) => {
                info!(target = "onepay", error = %err, "stored session failed validation; clearing");
                if let Err(err) = self.store.clear() {
                    warn!(target = "onepay", error = %err, "failed to clear session descriptor");
                }
                self.session = Session::Anonymous;
            }
        }
        Ok(&self.session)
    }

    /// Logs in with mobile and password. On success the session becomes
    /// `Authenticated` and is persisted; on failure state is unchanged and
    /// the raw error surfaces for classification.
    pub async fn login(&mut self, api: &ApiClient, mobile: &str, password: &str) -> Result<User> {
        let auth = api
            .login(&LoginPayload {
                mobile: mobile.to_string(),
                password: password.to_string(),
            })
            .await?;
        info!(target = "onepay", user = auth.user.id, "logged in");
        let user = auth.user;
        self.install(auth.access_token, user.clone())?;
        Ok(user)
    }

    /// Registers a new account. Transitions exactly like
    /// [`login`](Self::login).
    pub async fn register(&mut self, api: &ApiClient, payload: &RegisterPayload) -> Result<User> {
        let auth = api.register(payload).await?;
        info!(target = "onepay", user = auth.user.id, "registered");
        let user = auth.user;
        self.install(auth.access_token, user.clone())?;
        Ok(user)
    }

    /// Clears in-memory and persisted state unconditionally. Purely local:
    /// no server-side token revocation exists.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.session = Session::Anonymous;
        info!(target = "onepay", "logged out");
        Ok(())
    }

    /// Persists then adopts the credentials, so a failed write leaves the
    /// observable state unchanged.
    fn install(&mut self, token: String, user: User) -> Result<()> {
        let stored = StoredSession { token, user };
        self.store.save(&stored)?;
        self.session = Session::Authenticated {
            token: stored.token,
            user: stored.user,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(token: &str) -> StoredSession {
        StoredSession {
            token: token.into(),
            user: User {
                id: 7,
                full_name: "Someone".into(),
                mobile: "09120000000".into(),
                email: None,
                created_at: "2026-01-05T10:00:00Z".into(),
            },
        }
    }

    #[test]
    fn starts_anonymous() {
        let manager = SessionManager::new(SessionStore::new(None));
        assert!(!manager.current().is_authenticated());
        assert!(manager.current().token().is_none());
        assert!(manager.current().user().is_none());
    }

    #[test]
    fn load_cached_adopts_persisted_credentials_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(Some(dir.path().join("session.json")));
        store.save(&stored("tok-abc")).unwrap();

        let mut manager = SessionManager::new(store);
        let session = manager.load_cached();
        assert_eq!(session.token(), Some("tok-abc"));
        assert_eq!(session.user().map(|u| u.id), Some(7));
    }

    #[test]
    fn load_cached_without_descriptor_stays_anonymous() {
        let mut manager = SessionManager::new(SessionStore::new(None));
        assert!(!manager.load_cached().is_authenticated());
    }

    #[test]
    fn logout_clears_store_and_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(Some(path.clone()));
        store.save(&stored("tok-abc")).unwrap();

        let mut manager = SessionManager::new(store);
        manager.load_cached();
        manager.logout().unwrap();

        assert!(!manager.current().is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn logout_when_already_anonymous_is_fine() {
        let mut manager = SessionManager::new(SessionStore::new(None));
        manager.logout().unwrap();
        assert!(!manager.current().is_authenticated());
    }
}
