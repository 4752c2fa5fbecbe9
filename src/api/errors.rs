//! api::errors
//!
//! Error types for platform API requests.

use thiserror::Error;

/// Errors from the platform API client.
///
/// Messages never include the access token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No API endpoint is configured.
    #[error("No API endpoint set. Use '{binary} api' to set an endpoint")]
    NoApiEndpoint {
        /// Binary name for the hint
        binary: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to initialize API client: {0}")]
    Client(String),

    /// The token was rejected (401).
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),

    /// The user lacks permission (403).
    #[error("You are not authorized to perform the requested action: {0}")]
    Forbidden(String),

    /// The requested resource was not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("failed to decode API response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formatting() {
        assert_eq!(
            ApiError::NoApiEndpoint {
                binary: "cfw".into()
            }
            .to_string(),
            "No API endpoint set. Use 'cfw api' to set an endpoint"
        );
        assert_eq!(
            ApiError::Status {
                status: 422,
                message: "Name must be unique".into()
            }
            .to_string(),
            "API error: 422 - Name must be unique"
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }
}
