//! Error types for remote calls
//!
//! Every failed call to the agent-management API is represented by [`ApiError`].
//! The view never surfaces these to the operator; they are logged where they occur.

use thiserror::Error;

/// Errors returned by the workspace and agent services
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server rejected the credentials (HTTP 401)
    #[error("Unauthorized operation trying to reach {0}")]
    Unauthorized(String),

    /// The server answered with a non-success status
    #[error("Unable to {context} (HTTP {status}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// What the request was trying to do
        context: String,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded
        context: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The service reported a failure without a transport-level cause
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// True if the failure was an authorization rejection
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 500,
            context: "delete agent".to_string(),
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Unable to delete agent (HTTP 500): boom");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_error() {
        let err = ApiError::Unauthorized("agents".to_string());
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("agents"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ApiError::Decode {
            context: "agent list".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Failed to decode agent list"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
