//! Network-related error types.
//!
//! Errors raised while talking to the portfolio backend: transport
//! failures, non-2xx statuses and bodies that do not decode.

use thiserror::Error;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Connection to the server failed.
    #[error("Connection to {url} failed: {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Generic transport error.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } | NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the portfolio server.".to_string()
            }
            NetworkError::Timeout { .. } => "The server took too long to respond.".to_string(),
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "Not found.".to_string(),
                403 => "Access denied.".to_string(),
                s if s >= 500 => "The server ran into a problem.".to_string(),
                s => format!("Request failed ({}).", s),
            },
            NetworkError::InvalidResponse { .. } => {
                "The server sent an unexpected response.".to_string()
            }
            NetworkError::Other { .. } => "Network error.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Status code if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Classify a transport-level error for the given URL.
pub fn classify_http_error(url: &str, err: HttpError) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            url: url.to_string(),
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus { status, message },
        HttpError::InvalidUrl(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}
