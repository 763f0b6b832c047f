//! # localStorage session store: browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It keeps
//! the token in `window.localStorage` under [`SESSION_TOKEN_KEY`].
//!
//! All methods swallow storage errors (private browsing, quota, disabled
//! storage). A failed read degrades to "not logged in"; a failed write only
//! loses the token on the next reload.

use crate::session::{SessionStore, SessionToken, SESSION_TOKEN_KEY};
use web_sys::Storage;

/// `window.localStorage`-backed SessionStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<SessionToken> {
        let raw = Self::storage()?.get_item(SESSION_TOKEN_KEY).ok()??;
        SessionToken::new(raw)
    }

    fn save(&self, token: &SessionToken) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_TOKEN_KEY, token.as_str());
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_TOKEN_KEY);
        }
    }
}
