//! Authentication-related error types.

use thiserror::Error;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend rejected the username/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// `login` was issued while a session is already active.
    #[error("Already authenticated")]
    AlreadyAuthenticated,

    /// An admin-only action was attempted without a session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// An authenticated request came back with 401.
    #[error("Session expired")]
    SessionExpired,

    /// Stored credentials could not be read.
    #[error("Failed to load credentials: {message}")]
    CredentialsLoadFailed { message: String },

    /// Credentials could not be written.
    #[error("Failed to save credentials: {message}")]
    CredentialsSaveFailed { message: String },
}

impl AuthError {
    /// Check if this error is resolved by signing in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::SessionExpired
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "Invalid username or password.".to_string(),
            AuthError::AlreadyAuthenticated => {
                "Already logged in. Use :logout first.".to_string()
            }
            AuthError::NotAuthenticated => "You must be logged in to do that.".to_string(),
            AuthError::SessionExpired => {
                "Your session has expired. Please log in again.".to_string()
            }
            AuthError::CredentialsLoadFailed { .. } => {
                "Could not load saved credentials.".to_string()
            }
            AuthError::CredentialsSaveFailed { .. } => {
                "Could not save credentials. Check file permissions.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "E_AUTH_INVALID",
            AuthError::AlreadyAuthenticated => "E_AUTH_ALREADY",
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
            AuthError::SessionExpired => "E_AUTH_EXPIRED",
            AuthError::CredentialsLoadFailed { .. } => "E_AUTH_CRED_LOAD",
            AuthError::CredentialsSaveFailed { .. } => "E_AUTH_CRED_SAVE",
        }
    }
}
