//! # Web Storage backend: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Persistent values live in `window.localStorage`; [`KeyValueStore::clear_transient`]
//! empties `window.sessionStorage`.
//!
//! Like the rest of the client, reads degrade to "absent" when storage is
//! unavailable (private browsing, disabled cookies). Only writes report an error.

use crate::session::{KeyValueStore, StoreError};

/// `localStorage`-backed store. Zero-sized; the storage handle is looked up
/// on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn session() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::local()
            .ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear_transient(&self) {
        if let Some(storage) = Self::session() {
            let _ = storage.clear();
        }
    }
}
