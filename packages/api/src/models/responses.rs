//! Response envelopes. Every flag and message is optional on the wire, so all
//! fields carry `serde(default)` and an absent flag reads as failure.

use serde::{Deserialize, Serialize};
use store::UserSession;

use super::Product;
use crate::error::ApiError;

/// Reply of `POST /api/validate_user`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub user: Option<UserSession>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// The profile to persist, or a refusal carrying the server message.
    pub fn into_user(self) -> Result<UserSession, ApiError> {
        match (self.valid, self.user) {
            (true, Some(user)) => Ok(user),
            (true, None) => Err(ApiError::Malformed(
                "login accepted without a user profile".to_string(),
            )),
            (false, _) => Err(ApiError::refused(self.message)),
        }
    }
}

/// Generic `{success, message?}` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn refused(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
        }
    }

    /// Turn `success: false` into [`ApiError::Rejected`].
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::refused(self.message))
        }
    }
}

/// Reply of `GET /api/get_products`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProductList {
    pub fn into_products(self) -> Result<Vec<Product>, ApiError> {
        if self.success {
            Ok(self.products)
        } else {
            Err(ApiError::refused(self.message))
        }
    }
}

/// Reply of `GET /api/check_db`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DbStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_count: Option<u64>,
}

/// Reply of `GET /api/categories`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}
