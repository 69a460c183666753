//! Error types for the Messages API quickstart.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Main error type for the Messages API client.
///
/// Variants match the failure categories observable at the call boundary:
/// rate limiting, API-level errors, transport failures, and content
/// extraction failures.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// Configuration error (missing credential, invalid settings)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// API error from Anthropic (non-2xx response with an error envelope)
    #[error("API error: {error_type} - {message} (status {status})")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Error type tag from the API error envelope
        error_type: String,
        /// Error message from the API
        message: String,
    },

    /// Rate limit error (HTTP 429, quota exceeded)
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Error message describing the rate limit condition
        message: String,
        /// Duration to wait before retrying (if provided by the API)
        retry_after: Option<Duration>,
    },

    /// Network error (connection failed, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization issue
        message: String,
    },

    /// The response carried no content blocks at all
    #[error("Response contained no content blocks")]
    EmptyContent,

    /// The first content block was not text
    #[error("Expected a text content block, got '{kind}'")]
    UnexpectedContent {
        /// The kind of block that was found instead
        kind: String,
    },
}

impl ClientError {
    /// Returns a stable category name for this error.
    ///
    /// Used by the failure reporter to label errors that fall outside the
    /// rate-limit and API-error categories.
    pub fn category(&self) -> &'static str {
        match self {
            ClientError::Configuration { .. } => "Configuration",
            ClientError::Api { .. } => "Api",
            ClientError::RateLimit { .. } => "RateLimit",
            ClientError::Network { .. } => "Network",
            ClientError::Timeout => "Timeout",
            ClientError::Serialization { .. } => "Serialization",
            ClientError::EmptyContent => "EmptyContent",
            ClientError::UnexpectedContent { .. } => "UnexpectedContent",
        }
    }

    /// Returns the retry-after duration if available.
    ///
    /// This is typically set in rate limit errors when the API provides
    /// a Retry-After header.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ClientError::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

// Conversions from common error types
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            ClientError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

/// API error envelope returned by Anthropic on non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Envelope type tag (always "error")
    #[serde(rename = "type")]
    pub error_type: String,
    /// The error detail
    pub error: ApiErrorDetail,
}

/// Detail payload inside an API error envelope
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorDetail {
    /// Error type tag (e.g. "invalid_request_error")
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
}
