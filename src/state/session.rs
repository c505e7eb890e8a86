//! Session state machine.
//!
//! DESIGN
//! ======
//! Two states, keyed entirely on token presence:
//!
//!   ANONYMOUS       access_token = None
//!   AUTHENTICATED   access_token = Some(_)
//!
//! Every transition writes through a [`TokenStore`] before returning, so the
//! persisted copy can never disagree with the in-memory one. The token field
//! is private; the only way in or out of a state is a transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::RwSignal;
use leptos::prelude::Set;

use crate::net::error::ApiError;
use crate::net::types::TokenPair;
use crate::util::session_store::{LocalStorageStore, TokenStore};

/// Authentication state for the whole app, provided once as reactive context
/// at the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Raw bearer token, present exactly when the session is authenticated.
    access_token: Option<String>,
}

impl SessionState {
    /// Rebuild the session from whatever the store persisted. Runs once at
    /// startup; a missing token restores the anonymous state.
    pub fn restore(store: &impl TokenStore) -> Self {
        Self { access_token: store.load() }
    }

    /// ANONYMOUS -> AUTHENTICATED. Persists the access token before
    /// returning. The refresh token is dropped; the backend hands one out
    /// but nothing on this side redeems it yet.
    pub fn establish(store: &impl TokenStore, tokens: &TokenPair) -> Self {
        store.save(&tokens.access);
        Self { access_token: Some(tokens.access.clone()) }
    }

    /// AUTHENTICATED -> ANONYMOUS. Clears the persisted token as well.
    pub fn clear(store: &impl TokenStore) -> Self {
        store.clear();
        Self { access_token: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Raw token for request building.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Tear the session down when a request fails with 401.
///
/// The cleared session flips the route guard, which then navigates back to
/// the login page. Returns whether the session was torn down so callers can
/// skip surfacing an error the redirect is about to hide.
pub fn expire_on_unauthorized(session: RwSignal<SessionState>, err: &ApiError) -> bool {
    if err.is_unauthorized() {
        session.set(SessionState::clear(&LocalStorageStore));
        true
    } else {
        false
    }
}
