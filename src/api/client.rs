//! Typed client for the portfolio backend.
//!
//! Every body crosses [`super::case`] on its way in and out, so models
//! only ever see camelCase keys while the backend only sees snake_case.

use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, RwLock};

use super::case::{keys_to_camel, keys_to_snake};
use super::resource::{Resource, LOGIN_PATH, PROFILE_PATH};
use crate::error::{classify_http_error, AuthError, FolioResult, NetworkError};
use crate::models::{LoginRequest, LoginResponse, Profile};
use crate::traits::{HttpClient, Method, Request, Response};

/// Longest slice of an error body kept in [`NetworkError::HttpStatus`].
const MAX_ERROR_BODY: usize = 200;

pub struct PortfolioApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl PortfolioApi {
    pub fn new(http: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Raw JSON ──────────────────────────────────────────────────────────

    /// GET `path` and return the body with camelCase keys.
    pub async fn get_json(&self, path: &str) -> FolioResult<Value> {
        self.request(Method::Get, path, None).await
    }

    /// Send an authenticated request and interpret the status.
    ///
    /// A 401 while holding a token drops the token and reports
    /// [`AuthError::SessionExpired`]; without a token it is
    /// [`AuthError::NotAuthenticated`]. An empty success body reads as
    /// `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> FolioResult<Value> {
        let url = self.url(path);
        let token = self.token();

        let mut request = Request::new(method, url.clone());
        if let Some(token) = &token {
            request = request.bearer(token);
        }
        if let Some(body) = body {
            request = request.json_body(keys_to_snake(body).to_string());
        }

        tracing::debug!(%method, %url, "api request");
        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| classify_http_error(&url, e))?;

        if response.status == 401 {
            return if token.is_some() {
                tracing::warn!(%url, "session rejected by server, dropping token");
                self.set_token(None);
                Err(AuthError::SessionExpired.into())
            } else {
                Err(AuthError::NotAuthenticated.into())
            };
        }

        parse_body(response)
    }

    // ── Collections ───────────────────────────────────────────────────────

    pub async fn list<R: Resource>(&self) -> FolioResult<Vec<R>> {
        let value = self.get_json(&R::collection_path()).await?;
        decode(value)
    }

    pub async fn get<R: Resource>(&self, id: &str) -> FolioResult<R> {
        let value = self.get_json(&R::item_path(id)).await?;
        decode(value)
    }

    /// Create `item`. A bodiless reply echoes the input back.
    pub async fn create<R: Resource>(&self, item: &R) -> FolioResult<R> {
        let value = self
            .request(Method::Post, &R::collection_path(), Some(encode(item)?))
            .await?;
        decode_or(value, item)
    }

    pub async fn update<R: Resource>(&self, id: &str, item: &R) -> FolioResult<R> {
        let value = self
            .request(Method::Put, &R::item_path(id), Some(encode(item)?))
            .await?;
        decode_or(value, item)
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> FolioResult<()> {
        self.request(Method::Delete, &R::item_path(id), None)
            .await
            .map(|_| ())
    }

    // ── Profile ───────────────────────────────────────────────────────────

    pub async fn profile(&self) -> FolioResult<Profile> {
        decode(self.get_json(PROFILE_PATH).await?)
    }

    pub async fn update_profile(&self, profile: &Profile) -> FolioResult<Profile> {
        let value = self
            .request(Method::Put, PROFILE_PATH, Some(encode(profile)?))
            .await?;
        decode_or(value, profile)
    }

    // ── Auth ──────────────────────────────────────────────────────────────

    /// Exchange credentials for a token and keep it for later calls.
    ///
    /// Any non-2xx reply is [`AuthError::InvalidCredentials`]; transport
    /// failures stay [`NetworkError`]s so the caller can word them apart.
    pub async fn login(&self, username: &str, password: &str) -> FolioResult<LoginResponse> {
        let url = self.url(LOGIN_PATH);
        let body = keys_to_snake(serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?);

        let response = self
            .http
            .send(Request::new(Method::Post, url.clone()).json_body(body.to_string()))
            .await
            .map_err(|e| classify_http_error(&url, e))?;

        if !response.is_success() {
            tracing::info!(username, status = response.status, "login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        let login: LoginResponse = decode(parse_body(response)?)?;
        self.set_token(Some(login.token.clone()));
        tracing::info!(username = %login.user.username, "logged in");
        Ok(login)
    }

    /// Forget the token. The backend keeps no session to tear down.
    pub fn logout(&self) {
        self.set_token(None);
    }
}

fn parse_body(response: Response) -> FolioResult<Value> {
    if !response.is_success() {
        let text = response.text();
        let message: String = text.trim().chars().take(MAX_ERROR_BODY).collect();
        return Err(NetworkError::HttpStatus {
            status: response.status,
            message,
        }
        .into());
    }

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let value: Value = serde_json::from_slice(&response.body)?;
    Ok(keys_to_camel(value))
}

fn encode<T: Serialize>(item: &T) -> FolioResult<Value> {
    Ok(serde_json::to_value(item)?)
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> FolioResult<T> {
    Ok(serde_json::from_value(value)?)
}

fn decode_or<T: serde::de::DeserializeOwned + Clone>(value: Value, fallback: &T) -> FolioResult<T> {
    if value.is_null() {
        Ok(fallback.clone())
    } else {
        decode(value)
    }
}
