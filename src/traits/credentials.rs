//! Credentials provider trait abstraction.
//!
//! Admin sessions survive restarts by persisting the bearer token and the
//! signed-in user. The provider hides where that lives.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Credentials;

/// Credentials operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Failed to load credentials: {0}")]
    LoadFailed(String),
    #[error("Failed to save credentials: {0}")]
    SaveFailed(String),
    #[error("Failed to clear credentials: {0}")]
    ClearFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for credentials storage and retrieval.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Load stored credentials.
    ///
    /// `Ok(None)` means nothing is stored, which is the normal
    /// signed-out state.
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError>;

    /// Persist credentials, replacing any stored ones.
    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError>;

    /// Remove stored credentials. Succeeds when nothing is stored.
    async fn clear(&self) -> Result<(), CredentialsError>;
}
