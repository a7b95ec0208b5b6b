//! # Key-Value Storage
//!
//! The storage seam shared by every backend.
//!
//! ## Scopes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Scope::Session  ─► token, user        (cleared on logout)              │
//! │  Scope::Local    ─► cartItems          (survives logout)                │
//! │                                                                         │
//! │  Each scope is an independent store instance. The session and cart      │
//! │  repositories never share one.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::StoreResult;

/// Key holding the raw bearer token (session scope).
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-encoded identity (session scope).
pub const USER_KEY: &str = "user";

/// Key holding the JSON-encoded array of cart lines (local scope).
pub const CART_ITEMS_KEY: &str = "cartItems";

/// A storage namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Authentication state.
    Session,
    /// Long-lived browsing state such as the cart.
    Local,
}

impl Scope {
    /// File name used by [`crate::FileStore`] for this scope.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Scope::Session => "session.json",
            Scope::Local => "local.json",
        }
    }
}

/// String-to-string storage with browser storage semantics.
///
/// Writes take `&mut self`: a store has exactly one owner and no interior
/// locking.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Inserts or replaces the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Removes every key in the scope.
    fn clear(&mut self) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> StoreResult<()> {
        (**self).clear()
    }
}
