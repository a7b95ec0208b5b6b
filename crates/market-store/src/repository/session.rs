//! # Session Repository
//!
//! Reads and writes the `token` / `user` pair in the session scope.
//!
//! ## Stored Layout
//! ```text
//! token → eyJhbGciOi...                       (raw string)
//! user  → {"id":"u1","email":"..","role":"vendor"}  (JSON Identity)
//! ```
//!
//! The pair is only meaningful together: a lone token or a lone user is
//! reported as "no session".

use market_core::Identity;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// A token and identity restored from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub identity: Identity,
}

/// Typed access to the session scope.
#[derive(Debug)]
pub struct SessionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        SessionRepository { store }
    }

    /// Loads the persisted session.
    ///
    /// ## Returns
    /// - `Ok(Some(..))` when both keys are present and `user` parses
    /// - `Ok(None)` when either key is missing
    /// - `Err(StoreError::Corrupt)` when `user` is not a valid identity
    pub fn load(&self) -> StoreResult<Option<StoredSession>> {
        let token = self.store.get(TOKEN_KEY)?;
        let user = self.store.get(USER_KEY)?;

        let (Some(token), Some(user)) = (token, user) else {
            return Ok(None);
        };

        let identity: Identity =
            serde_json::from_str(&user).map_err(|e| StoreError::corrupt(USER_KEY, e))?;

        Ok(Some(StoredSession { token, identity }))
    }

    /// Persists both keys.
    pub fn save(&mut self, token: &str, identity: &Identity) -> StoreResult<()> {
        let user = serde_json::to_string(identity)?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user)?;

        debug!(user_id = %identity.id, role = %identity.role, "Session saved");
        Ok(())
    }

    /// Removes both keys. Other keys in the scope are left alone.
    pub fn clear(&mut self) -> StoreResult<()> {
        // Attempt both removals even if the first fails.
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token.and(user)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
