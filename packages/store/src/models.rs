//! # Client-persisted models
//!
//! [`UserSession`] is the profile the server hands back after a successful
//! login. The client only needs `name` and `email` for display; every other
//! field the server sends is kept verbatim in [`UserSession::extra`] so that
//! writing the profile back to storage never loses data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logged-in user profile stored under the `user` key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Server fields the client does not interpret (id, role, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSession {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Header greeting shown on every authenticated page.
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.display_name())
    }
}
