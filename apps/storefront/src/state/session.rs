//! # Session State
//!
//! Who is logged in. Restored from the session scope on startup and written
//! back on every login/logout.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  init(storage) ──► token + user present and valid? ──► authenticated   │
//! │                          │                                              │
//! │                          └── otherwise: clear keys ──► anonymous       │
//! │                                                                         │
//! │  login(token, identity) ──► authenticated (always)                     │
//! │  logout()               ──► anonymous (idempotent)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures never reach the caller; memory stays authoritative.

use tracing::{debug, info, warn};

use market_core::{authorize_view, Access, CoreResult, Identity, ProtectedView, Role};
use market_store::{KeyValueStore, SessionRepository, StoredSession};

/// Authentication state for one storefront session.
#[derive(Debug)]
pub struct SessionStore<S> {
    repo: SessionRepository<S>,
    token: Option<String>,
    identity: Option<Identity>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restores the session from `store`.
    ///
    /// A missing half of the pair or an unreadable user record clears both
    /// keys and starts anonymous.
    pub fn init(store: S) -> Self {
        let mut repo = SessionRepository::new(store);

        let restored = match repo.load() {
            Ok(Some(session)) => Some(session),
            Ok(None) => {
                debug!("No stored session");
                None
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session");
                None
            }
        };

        let (token, identity) = match restored {
            Some(StoredSession { token, identity }) => {
                info!(user_id = %identity.id, role = %identity.role, "Session restored");
                (Some(token), Some(identity))
            }
            None => {
                if let Err(e) = repo.clear() {
                    warn!(error = %e, "Failed to clear session storage");
                }
                (None, None)
            }
        };

        SessionStore {
            repo,
            token,
            identity,
        }
    }

    /// Replaces the current session. The token is not checked here.
    pub fn login(&mut self, token: impl Into<String>, identity: Identity) {
        let token = token.into();

        if let Err(e) = self.repo.save(&token, &identity) {
            warn!(error = %e, "Failed to persist session");
        }

        info!(user_id = %identity.id, role = %identity.role, "Logged in");
        self.token = Some(token);
        self.identity = Some(identity);
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.repo.clear() {
            warn!(error = %e, "Failed to clear session storage");
        }

        if let Some(identity) = self.identity.take() {
            info!(user_id = %identity.id, "Logged out");
        }
        self.token = None;
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.identity.is_some()
    }

    /// Current identity, only while authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref().filter(|_| self.token.is_some())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|_| self.identity.is_some())
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {t}"))
    }

    pub fn authorize(&self, view: ProtectedView) -> Access {
        authorize_view(self.identity(), view)
    }

    /// Checks `view` and hands back the token for the backend call.
    pub fn require(&self, view: ProtectedView) -> CoreResult<&str> {
        self.authorize(view).into_result(view.path())?;
        // Granted implies both halves are present.
        self.token().ok_or(market_core::CoreError::Unauthenticated)
    }

    pub fn storage(&self) -> &S {
        self.repo.store()
    }
}
