//! Error types for remote API calls.

use thiserror::Error;

use crate::model::RecordKind;

/// Errors that can occur while talking to the records API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Failed to connect or the transport broke mid-request
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status
    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body was not what the endpoint promises
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request body for '{path}': {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Authenticated endpoint called without a stored token
    #[error("Not logged in")]
    MissingToken,

    /// Update or delete addressed at a record that was never saved
    #[error("Cannot address unsaved {kind} record")]
    UnsavedRecord { kind: RecordKind },

    /// Base URL and endpoint path do not form a valid URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl GatewayError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403)) || matches!(self, GatewayError::MissingToken)
    }

    /// Short machine-readable category, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::Connection { .. } => "connection_error",
            GatewayError::Timeout { .. } => "request_timeout",
            GatewayError::Status { .. } => "status_error",
            GatewayError::Decode { .. } => "decode_error",
            GatewayError::Encode { .. } => "encode_error",
            GatewayError::MissingToken => "missing_token",
            GatewayError::UnsavedRecord { .. } => "unsaved_record",
            GatewayError::InvalidUrl { .. } => "invalid_url",
            GatewayError::Client(_) => "client_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses() {
        let err = GatewayError::Status {
            status: 401,
            message: "Invalid token.".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.error_type(), "status_error");
        assert!(GatewayError::MissingToken.is_unauthorized());
    }

    #[test]
    fn test_server_errors_are_not_auth_failures() {
        let err = GatewayError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Server error: 500 - boom");
    }

    #[test]
    fn test_timeout_has_no_status() {
        let err = GatewayError::Timeout { duration: 30 };
        assert_eq!(err.status(), None);
        assert_eq!(err.error_type(), "request_timeout");
    }
}
