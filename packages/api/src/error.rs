//! Errors returned by [`crate::PortalApi`] calls.

/// Message shown when the server cannot be reached at all.
pub const CONNECTION_ERROR: &str = "Error connecting to server";

/// Failure of a single API request.
///
/// Every variant is terminal for the user action that triggered it; nothing is
/// retried automatically.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status or `success: false`.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Application-level refusal carried in a 2xx body.
    pub fn refused(message: Option<String>) -> Self {
        Self::Rejected {
            status: 200,
            message,
        }
    }

    /// Server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }

    /// Text to show the user: the server message verbatim when present, the
    /// connectivity message for transport failures, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            Self::Network(_) => CONNECTION_ERROR.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Malformed(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_verbatim() {
        let err = ApiError::Rejected {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid email or password");
    }

    #[test]
    fn test_fallbacks() {
        let network = ApiError::Network("dns".to_string());
        assert_eq!(network.user_message("Login failed"), CONNECTION_ERROR);

        let silent = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(silent.user_message("Login failed"), "Login failed");

        let blank = ApiError::refused(Some("   ".to_string()));
        assert_eq!(blank.user_message("Login failed"), "Login failed");

        let malformed = ApiError::Malformed("eof".to_string());
        assert_eq!(malformed.user_message("Login failed"), "Login failed");
    }
}
