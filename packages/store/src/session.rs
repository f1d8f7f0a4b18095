//! # Session persistence over a key-value store
//!
//! The portal keeps exactly one piece of client state between page views: the
//! logged-in [`UserSession`], serialised as JSON under [`USER_KEY`]. Storage
//! goes through the [`KeyValueStore`] trait so the same [`Session`] logic runs
//! against `localStorage` in the browser and against [`crate::MemoryStore`]
//! in tests and native builds.
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | [`Session::load`] | Returns the stored profile. A value that fails to parse is logged, removed and reported as absent. |
//! | [`Session::save`] | Serialises and writes the profile. |
//! | [`Session::clear`] | Removes the profile and drops tab-scoped transient state. |

use crate::models::UserSession;

/// Storage key holding the serialised [`UserSession`].
pub const USER_KEY: &str = "user";

/// Errors raised while persisting client state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to serialise value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string key-value storage (mirrors the Web Storage API).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
    /// Drop tab-scoped state (`sessionStorage` in the browser).
    fn clear_transient(&self);
}

/// Typed access to the persisted user profile.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<UserSession> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    pub fn save(&self, user: &UserSession) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &raw)
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.clear_transient();
    }

    pub fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }
}
