use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::{KeyValueStore, StoreError};

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    persistent: Arc<Mutex<HashMap<String, String>>>,
    transient: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a tab-scoped value (the `sessionStorage` counterpart).
    pub fn set_transient(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.transient.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    pub fn transient_len(&self) -> usize {
        self.transient.lock().map(|m| m.len()).unwrap_or(0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.persistent.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.persistent
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.persistent.lock() {
            map.remove(key);
        }
    }

    fn clear_transient(&self) {
        if let Ok(mut map) = self.transient.lock() {
            map.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserSession;
    use crate::session::{Session, USER_KEY};

    #[test]
    fn test_save_and_load_session() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        // Initially absent
        assert!(session.load().is_none());
        assert!(!session.is_logged_in());

        session.save(&UserSession::new("Ana", "ana@shop.com")).unwrap();

        let loaded = session.load().unwrap();
        assert_eq!(loaded.name, "Ana");
        assert_eq!(loaded.email, "ana@shop.com");
        assert!(store.get(USER_KEY).unwrap().contains("ana@shop.com"));
    }

    #[test]
    fn test_clear_removes_user_and_transient_state() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.save(&UserSession::new("Ana", "ana@shop.com")).unwrap();
        store.set_transient("last_page", "/products");

        session.clear();

        assert!(session.load().is_none());
        assert_eq!(store.transient_len(), 0);
    }

    #[test]
    fn test_unreadable_session_is_discarded() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json").unwrap();

        let session = Session::new(store.clone());
        assert!(session.load().is_none());
        // The broken value is removed, not re-parsed on every page
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemoryStore::new();
        let a = Session::new(store.clone());
        let b = Session::new(store);

        a.save(&UserSession::new("Ana", "ana@shop.com")).unwrap();
        assert!(b.is_logged_in());
    }
}
