use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::lock;
use crate::traits::{HttpClient, HttpError, Method, Request, Response};

/// What the mock hands back for a matched request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(Response),
    Fail(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Reply(Response::json(status, &value))
    }

    pub fn status(status: u16) -> Self {
        MockResponse::Reply(Response::new(status, bytes::Bytes::new()))
    }
}

/// Scriptable [`HttpClient`] that records every request it sees.
///
/// Responses are keyed by method and exact URL. Unmatched requests get the
/// default response, or a 404 when none is set.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.on(Method::Get, "http://api/projects", MockResponse::json(200, json!([])));
/// let response = http.send(Request::new(Method::Get, "http://api/projects")).await?;
/// assert_eq!(http.call_count(Method::Get, "http://api/projects"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<(Method, String), MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for `method url`, replacing any earlier one.
    pub fn on(&self, method: Method, url: impl Into<String>, response: MockResponse) {
        lock(&self.responses).insert((method, url.into()), response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    pub fn requests(&self) -> Vec<Request> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        lock(&self.requests).last().cloned()
    }

    pub fn call_count(&self, method: Method, url: &str) -> usize {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let key = (request.method, request.url.clone());
        lock(&self.requests).push(request);

        let scripted = lock(&self.responses).get(&key).cloned();
        let response = match scripted {
            Some(response) => Some(response),
            None => lock(&self.default_response).clone(),
        };

        match response {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Ok(Response::new(404, bytes::Bytes::new())),
        }
    }
}
