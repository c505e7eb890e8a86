//! Persisted session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One localStorage key holds the raw access token, the only client-side
//! state that survives a reload. The session state machine writes through an
//! adapter trait so the contract stays testable without a browser.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;

/// localStorage key holding the raw access token.
#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "petcare_access_token";

/// Persistence adapter for the session token.
///
/// The session state machine invokes an implementation synchronously on
/// every transition; that is what keeps the in-memory token and the
/// persisted one from diverging.
pub trait TokenStore {
    /// Current persisted token. A missing key yields `None`, never an error.
    fn load(&self) -> Option<String>;
    /// Persist `token` under the fixed key, replacing any previous value.
    fn save(&self, token: &str);
    /// Delete the persisted key.
    fn clear(&self);
}

/// Browser `localStorage` store. The token is stored as plain text under a
/// fixed key, with no expiry. Outside the browser every operation is a no-op
/// and `load` yields `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory store for unit tests and headless builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated as if a previous session had persisted `token`.
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
