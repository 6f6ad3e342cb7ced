use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::lock;
use crate::auth::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

/// In-memory credentials store with switchable failures.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    stored: Arc<Mutex<Option<Credentials>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
    fail_clear: Arc<Mutex<bool>>,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(creds: Credentials) -> Self {
        let store = Self::default();
        *lock(&store.stored) = Some(creds);
        store
    }

    /// What is currently stored, bypassing the trait.
    pub fn stored(&self) -> Option<Credentials> {
        lock(&self.stored).clone()
    }

    pub fn set_fail_load(&self, fail: bool) {
        *lock(&self.fail_load) = fail;
    }

    pub fn set_fail_save(&self, fail: bool) {
        *lock(&self.fail_save) = fail;
    }

    pub fn set_fail_clear(&self, fail: bool) {
        *lock(&self.fail_clear) = fail;
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        if *lock(&self.fail_load) {
            return Err(CredentialsError::LoadFailed("mock load failure".into()));
        }
        Ok(lock(&self.stored).clone())
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        if *lock(&self.fail_save) {
            return Err(CredentialsError::SaveFailed("mock save failure".into()));
        }
        *lock(&self.stored) = Some(creds.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        if *lock(&self.fail_clear) {
            return Err(CredentialsError::ClearFailed("mock clear failure".into()));
        }
        *lock(&self.stored) = None;
        Ok(())
    }
}
