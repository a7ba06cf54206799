//! Session store: where the bearer token lives between page loads.
//!
//! The browser implementation keeps the token in the origin's
//! `localStorage`. Outside a browser every operation is a no-op and the
//! token reads as absent.

use std::fmt;
use std::sync::{Arc, Mutex};

const TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// Token persisted in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn get_local_storage() -> Option<web_sys::Storage> {
    None
}

impl TokenStore for LocalStorageTokenStore {
    fn get_token(&self) -> Option<String> {
        get_local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Token held in memory only (tests, headless use)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut t) = self.token.lock() {
            *t = Some(token.to_string());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut t) = self.token.lock() {
            *t = None;
        }
    }
}

/// Explicit session handle injected into the API client.
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by browser `localStorage`
    pub fn browser() -> Self {
        Self::new(LocalStorageTokenStore)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Stored token; an empty string counts as no token
    pub fn token(&self) -> Option<String> {
        self.store.get_token().filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set_token(token);
    }

    pub fn clear(&self) {
        self.store.clear_token();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let session = Session::in_memory();
        assert_eq!(session.token(), None);

        session.set_token("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.set_token("t1");
        assert_eq!(other.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::new(MemoryTokenStore::with_token(""));
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_browser_store_is_noop_without_window() {
        let store = LocalStorageTokenStore;
        store.set_token("ignored");
        assert_eq!(store.get_token(), None);
        store.clear_token();
    }
}
