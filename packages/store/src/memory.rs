use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, SessionToken};

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<SessionToken>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<SessionToken> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &SessionToken) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_token() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.load().is_none());

        let token = SessionToken::new("jwt-1").unwrap();
        store.save(&token);
        assert_eq!(store.load(), Some(token));
    }

    #[test]
    fn test_save_replaces_previous_token() {
        let store = MemoryStore::new();

        store.save(&SessionToken::new("first").unwrap());
        store.save(&SessionToken::new("second").unwrap());

        assert_eq!(store.load().unwrap().as_str(), "second");
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&SessionToken::new("shared").unwrap());
        assert_eq!(other.load().unwrap().as_str(), "shared");

        other.clear();
        assert!(store.load().is_none());
    }
}
