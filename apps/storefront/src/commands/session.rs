//! # Session Commands
//!
//! Login, logout and the route guard.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use market_core::{nav_links, Access, Identity, NavLink, ProtectedView};
use market_store::KeyValueStore;

use crate::state::SessionStore;

/// What the navigation bar needs to know about the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub authenticated: bool,
    pub identity: Option<Identity>,
    pub nav_links: Vec<NavLink>,
}

impl SessionInfo {
    fn from_store<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        SessionInfo {
            authenticated: session.is_authenticated(),
            identity: session.identity().cloned(),
            nav_links: nav_links(session.identity()),
        }
    }
}

/// Stores the token and identity returned by the auth backend.
pub fn login<S: KeyValueStore>(
    session: &mut SessionStore<S>,
    token: String,
    identity: Identity,
) -> SessionInfo {
    debug!(user_id = %identity.id, "login command");
    session.login(token, identity);
    SessionInfo::from_store(session)
}

pub fn logout<S: KeyValueStore>(session: &mut SessionStore<S>) -> SessionInfo {
    debug!("logout command");
    session.logout();
    SessionInfo::from_store(session)
}

pub fn current_session<S: KeyValueStore>(session: &SessionStore<S>) -> SessionInfo {
    SessionInfo::from_store(session)
}

/// Route guard. Paths that are not protected are always granted.
pub fn check_access<S: KeyValueStore>(session: &SessionStore<S>, path: &str) -> Access {
    let access = match ProtectedView::from_path(path) {
        Some(view) => session.authorize(view),
        None => Access::Granted,
    };
    debug!(path, ?access, "check_access command");
    access
}
