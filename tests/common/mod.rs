//! Shared fixtures for the integration tests.
//!
//! ```ignore
//! let mut t = TestApp::new();
//! script_public_content(&t.http);
//! t.app.start();
//! t.settle().await;
//! ```

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

use termfolio::adapters::{InMemoryCredentials, ManualClock, MockHttpClient};
use termfolio::api::{PortfolioApi, PortfolioService};
use termfolio::app::{App, AppMessage};
use termfolio::cache::RequestCache;
use termfolio::startup::AppConfig;

pub const BASE_URL: &str = "http://folio.test/api";

pub fn url(path: &str) -> String {
    format!("{BASE_URL}/{path}")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// An [`App`] wired to mocks, with short timers.
pub struct TestApp {
    pub app: App,
    pub http: MockHttpClient,
    pub credentials: InMemoryCredentials,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_credentials(InMemoryCredentials::new())
    }

    pub fn with_credentials(credentials: InMemoryCredentials) -> Self {
        let http = MockHttpClient::new();
        let clock = Arc::new(ManualClock::new());
        let api = PortfolioApi::new(Arc::new(http.clone()), BASE_URL);
        let cache = RequestCache::new(clock.clone());
        let service = Arc::new(PortfolioService::new(api, Arc::new(cache)));
        let config = AppConfig::default()
            .with_api_base_url(BASE_URL)
            .with_notice_duration(Duration::from_millis(20))
            .with_login_retry_delay(Duration::from_millis(20));
        let app = App::new(config, service, Arc::new(credentials.clone()));
        Self {
            app,
            http,
            credentials,
            clock,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_key(key(code));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// `:` then `command` then Enter.
    pub fn run_command(&mut self, command: &str) {
        self.press(KeyCode::Char(':'));
        self.type_text(command);
        self.press(KeyCode::Enter);
    }

    /// Wait for the next message from a spawned task and apply it.
    pub async fn pump(&mut self) -> AppMessage {
        let rx = self.app.message_rx.as_mut().expect("receiver not taken");
        let message = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("no message within 2s")
            .expect("channel closed");
        self.app.handle_message(message.clone());
        message
    }

    /// Apply messages until one matches `pred`.
    pub async fn pump_until(&mut self, pred: impl Fn(&AppMessage) -> bool) -> AppMessage {
        loop {
            let message = self.pump().await;
            if pred(&message) {
                return message;
            }
        }
    }

    /// Apply messages until a tab load reply arrives.
    pub async fn settle(&mut self) {
        self.pump_until(|m| matches!(m, AppMessage::ContentLoaded { .. }))
            .await;
    }
}
