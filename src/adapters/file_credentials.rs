//! File-based credentials provider adapter.

use async_trait::async_trait;
use std::path::Path;

use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// Credentials stored as JSON in the data directory.
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    manager: CredentialsManager,
}

impl FileCredentialsProvider {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            manager: CredentialsManager::new(data_dir),
        }
    }

    pub fn credentials_path(&self) -> &Path {
        self.manager.credentials_path()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        let creds = self
            .manager
            .load()
            .map_err(|e| CredentialsError::LoadFailed(e.to_string()))?;
        if creds.is_empty() {
            Ok(None)
        } else {
            Ok(Some(creds))
        }
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        self.manager
            .save(creds)
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.manager
            .clear()
            .map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_through_provider() {
        let dir = TempDir::new().unwrap();
        let provider = FileCredentialsProvider::new(dir.path());
        assert!(provider.load().await.unwrap().is_none());

        let creds = Credentials::new(
            "tok",
            User {
                username: "alice".to_string(),
                ..Default::default()
            },
        );
        provider.save(&creds).await.unwrap();
        assert_eq!(provider.load().await.unwrap(), Some(creds));

        provider.clear().await.unwrap();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_load_failure() {
        let dir = TempDir::new().unwrap();
        let provider = FileCredentialsProvider::new(dir.path());
        std::fs::write(provider.credentials_path(), "garbage").unwrap();
        assert!(matches!(
            provider.load().await,
            Err(CredentialsError::LoadFailed(_))
        ));
    }
}
