//! Credentials storage for the admin session.
//!
//! The bearer token and the signed-in user are written to
//! `<data dir>/credentials.json` so that a restart keeps the session.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::token::token_is_expired;
use crate::models::User;

/// The credentials file name inside the data directory.
const CREDENTIALS_FILE: &str = "credentials.json";

/// A persisted admin session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Bearer token returned by `POST /auth/login`.
    pub token: Option<String>,
    /// The user the token belongs to.
    pub user: Option<User>,
}

impl Credentials {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the stored token can still be used at `now` (Unix seconds).
    pub fn is_usable(&self, now: i64) -> bool {
        match &self.token {
            Some(token) => !token_is_expired(token, now),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// Reads and writes the credentials file.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Manage `credentials.json` inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            credentials_path: data_dir.as_ref().join(CREDENTIALS_FILE),
        }
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Load stored credentials. A missing file yields empty credentials.
    pub fn load(&self) -> std::io::Result<Credentials> {
        if !self.credentials_path.exists() {
            return Ok(Credentials::default());
        }

        let file = File::open(&self.credentials_path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save credentials, creating the data directory if needed.
    pub fn save(&self, credentials: &Credentials) -> std::io::Result<()> {
        if let Some(parent) = self.credentials_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.credentials_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, credentials)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writer.flush()
    }

    /// Remove the credentials file. Succeeds if it does not exist.
    pub fn clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.credentials_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
