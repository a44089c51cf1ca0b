//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for who is signed in. It
//! restores the identity from durable storage at startup, records login and
//! logout, and hands the bearer token to the request layer. Route guards and
//! user-aware components only ever read the state; every mutation goes
//! through the store.
//!
//! ERROR HANDLING
//! ==============
//! Corrupted or half-written storage is recovered here: the offending keys
//! are wiped and the session settles signed-out. Nothing in this module
//! raises, so consumers can treat the state machine as total.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;
use crate::util::storage::{BrowserStorage, SessionStorage};

/// Primary storage key for the bearer token.
const TOKEN_KEY: &str = "token";
/// Legacy alias for the token. Older builds and external readers key on
/// this name, so login writes it and restore falls back to it. Both names
/// always carry the same value.
const LEGACY_TOKEN_KEY: &str = "authToken";
/// Storage key for the JSON-serialized identity.
const USER_KEY: &str = "user";

/// Where the session is in its lifecycle.
///
/// Starts `Unresolved` on every page load, settles to `Anonymous` or
/// `Authenticated` exactly once during [`SessionStore::hydrate`], and
/// afterwards moves only via explicit login/logout.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Storage has not been consulted yet; no render decision may be made.
    #[default]
    Unresolved,
    /// No valid identity/token pair exists.
    Anonymous,
    /// A valid pair is held in memory and mirrored in durable storage.
    Authenticated {
        identity: Identity,
        credential: String,
    },
}

/// Owns the session lifecycle: restore-on-start, login, logout, and bearer
/// token retrieval.
///
/// Generic over the storage seam so tests drive it with an in-memory map;
/// the application uses the `BrowserStorage` default.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: SessionStorage = BrowserStorage> {
    storage: S,
    state: SessionState,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::Unresolved,
        }
    }

    /// Restore the session from durable storage. Run once at startup,
    /// before any guarded route renders.
    ///
    /// Always settles to a terminal state. A token stored under either key
    /// name counts, with `token` preferred. An identity that fails to parse
    /// (malformed JSON, unknown role) or a token/identity half missing its
    /// partner is wiped from storage and the session settles signed-out;
    /// an unpaired credential is never trusted.
    pub fn hydrate(&mut self) {
        let token = self
            .storage
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .or_else(|| self.storage.get(LEGACY_TOKEN_KEY).filter(|t| !t.is_empty()));
        let stored_identity = self.storage.get(USER_KEY);

        self.state = match (token, stored_identity) {
            (Some(credential), Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => SessionState::Authenticated {
                    identity,
                    credential,
                },
                Err(err) => {
                    log::warn!("clearing corrupted stored identity: {err}");
                    self.clear_stored_session();
                    SessionState::Anonymous
                }
            },
            (None, None) => SessionState::Anonymous,
            _ => {
                // One half of the pair without the other is stale residue.
                self.clear_stored_session();
                SessionState::Anonymous
            }
        };
    }

    /// Record a successful authentication.
    ///
    /// Persists the pair before committing it in memory, so a reload
    /// immediately after login observes the same identity. The token is
    /// written under both key names. An empty credential or identity id is
    /// a caller bug; the call is a no-op rather than poisoning state.
    /// Persistence failures do not block the in-memory transition: the
    /// current tab stays signed in even if the session won't survive a
    /// reload.
    pub fn login(&mut self, identity: Identity, credential: String) {
        if identity.id.is_empty() || credential.is_empty() {
            return;
        }
        if let Ok(raw) = serde_json::to_string(&identity) {
            self.storage.set(TOKEN_KEY, &credential);
            self.storage.set(LEGACY_TOKEN_KEY, &credential);
            self.storage.set(USER_KEY, &raw);
        }
        self.state = SessionState::Authenticated {
            identity,
            credential,
        };
    }

    /// Drop the session from storage and memory. Safe to call in any state.
    pub fn logout(&mut self) {
        self.clear_stored_session();
        self.state = SessionState::Anonymous;
    }

    /// Bearer token for outbound requests, or `None` when signed out.
    pub fn current_credential(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { credential, .. } => Some(credential),
            SessionState::Unresolved | SessionState::Anonymous => None,
        }
    }

    /// Identity of the signed-in user, or `None` when signed out.
    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated { identity, .. } => Some(identity),
            SessionState::Unresolved | SessionState::Anonymous => None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn clear_stored_session(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(LEGACY_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
