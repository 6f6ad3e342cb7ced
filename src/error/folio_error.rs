//! Unified error type for termfolio.
//!
//! `FolioError` folds the domain errors into one enum so that every
//! fallible operation in the client can be reported through the same
//! status-line path.

use thiserror::Error;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::command::CommandError;
use super::network::NetworkError;

/// Unified error type for the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolioError {
    /// Network-related errors (connections, HTTP, decoding).
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Authentication/authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Colon-command dispatch errors.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Filesystem or OS errors.
    #[error("System error: {message}")]
    System { message: String },
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Network(NetworkError::HttpStatus { status, .. }) if *status >= 500 => {
                ErrorCategory::Server
            }
            FolioError::Network(NetworkError::HttpStatus { status: 401, .. }) => {
                ErrorCategory::Auth
            }
            FolioError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Server,
            FolioError::Network(_) => ErrorCategory::Network,
            FolioError::Auth(AuthError::CredentialsLoadFailed { .. })
            | FolioError::Auth(AuthError::CredentialsSaveFailed { .. }) => ErrorCategory::System,
            FolioError::Auth(_) => ErrorCategory::Auth,
            FolioError::Command(_) => ErrorCategory::User,
            FolioError::System { .. } => ErrorCategory::System,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            FolioError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Network(err) => err.user_message(),
            FolioError::Auth(err) => err.user_message(),
            FolioError::Command(err) => err.user_message(),
            FolioError::System { message } => format!("System error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Network(err) => err.error_code(),
            FolioError::Auth(err) => err.error_code(),
            FolioError::Command(err) => err.error_code(),
            FolioError::System { .. } => "E_SYS",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Check if this error requires signing in again.
    pub fn requires_reauth(&self) -> bool {
        match self {
            FolioError::Auth(err) => err.requires_reauth(),
            FolioError::Network(NetworkError::HttpStatus { status: 401, .. }) => true,
            _ => false,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::System {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
