//! Application shell.
//!
//! [`App`] owns the [`NavigationState`] and carries out the [`Effect`]s its
//! transitions return: network calls and timers run as spawned tasks and
//! report back as [`AppMessage`]s on `message_tx`, which the event loop
//! feeds to [`App::handle_message`].

mod command;
mod content;
mod history;
mod loader;
mod messages;
mod notice;
mod state;
mod types;

pub use command::Command;
pub use content::{ContentStore, LoadStatus, TabContent};
pub use history::CommandHistory;
pub use loader::load_tab;
pub use messages::AppMessage;
pub use notice::{Notice, NoticeKind};
pub use state::{Effect, NavigationState};
pub use types::{LoginState, Modal, Tab, Theme};

use crossterm::event::KeyEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::PortfolioService;
use crate::auth::Credentials;
use crate::input::{InputContext, KeyRegistry};
use crate::startup::AppConfig;
use crate::traits::CredentialsProvider;

pub struct App {
    pub state: NavigationState,
    pub content: ContentStore,
    pub config: AppConfig,
    /// Largest useful scroll offset for the current view, set while rendering.
    pub max_scroll: u16,
    service: Arc<PortfolioService>,
    credentials: Arc<dyn CredentialsProvider>,
    registry: KeyRegistry,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(
        config: AppConfig,
        service: Arc<PortfolioService>,
        credentials: Arc<dyn CredentialsProvider>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: NavigationState::new(config.scroll_step),
            content: ContentStore::new(),
            config,
            max_scroll: u16::MAX,
            service,
            credentials,
            registry: KeyRegistry::new(),
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Resume a session loaded from disk.
    pub fn restore_session(&mut self, creds: Credentials) {
        if let Some(token) = creds.token {
            self.service.restore_session(token);
            self.state.restore_session(creds.user);
        }
    }

    pub fn service(&self) -> &PortfolioService {
        &self.service
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Kick off the first content load.
    pub fn start(&mut self) {
        let effects = self.state.start();
        self.run_effects(effects);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = InputContext::from_state(&self.state);
        if let Some(action) = self.registry.dispatch(key, &context) {
            let effects = self.state.apply(action);
            self.run_effects(effects);
        }
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        let effects = match message {
            AppMessage::ContentLoaded {
                tab,
                generation,
                result,
            } => {
                let current = self.state.is_current_view(tab, generation);
                match result {
                    // A rejected token ends the session even if the view is gone.
                    Err(err) if err.requires_reauth() => {
                        tracing::warn!(%tab, code = err.error_code(), "load rejected: {}", err);
                        if current {
                            self.content.finish(tab, Err(err));
                        }
                        self.state.session_expired()
                    }
                    _ if !current => {
                        tracing::debug!(%tab, generation, "dropping stale content");
                        return;
                    }
                    Ok(content) => {
                        self.content.finish(tab, Ok(content));
                        vec![]
                    }
                    Err(err) => {
                        tracing::warn!(
                            %tab,
                            code = err.error_code(),
                            category = %err.category(),
                            "load failed: {}",
                            err
                        );
                        self.content.finish(tab, Err(err));
                        vec![]
                    }
                }
            }
            AppMessage::AuthSucceeded { user } => self.state.auth_succeeded(user),
            AppMessage::AuthFailed { error } => self.state.auth_failed(&error),
            AppMessage::NoticeElapsed { generation } => {
                self.state.notice_elapsed(generation);
                vec![]
            }
            AppMessage::LoginRetryElapsed { generation } => {
                self.state.login_retry_elapsed(generation)
            }
        };
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadTab { tab, generation } => self.spawn_load(tab, generation),
                Effect::Authenticate { username, password } => {
                    self.spawn_login(username, password)
                }
                Effect::EndSession => self.end_session(),
                Effect::ClearNoticeAfter { generation } => self.spawn_timer(
                    self.config.notice_duration,
                    AppMessage::NoticeElapsed { generation },
                ),
                Effect::RetryLoginAfter { generation } => self.spawn_timer(
                    self.config.login_retry_delay,
                    AppMessage::LoginRetryElapsed { generation },
                ),
                Effect::Quit => {}
            }
        }
    }

    fn spawn_load(&mut self, tab: Tab, generation: u64) {
        self.content.start(tab);
        let service = Arc::clone(&self.service);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = load_tab(&service, tab).await;
            let _ = message_tx.send(AppMessage::ContentLoaded {
                tab,
                generation,
                result,
            });
        });
    }

    fn spawn_login(&self, username: String, password: String) {
        let service = Arc::clone(&self.service);
        let credentials = Arc::clone(&self.credentials);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match service.login(&username, &password).await {
                Ok(login) => {
                    let creds = Credentials::new(login.token, login.user.clone());
                    if let Err(e) = credentials.save(&creds).await {
                        tracing::warn!(error = %e, "session will not survive a restart");
                    }
                    AppMessage::AuthSucceeded { user: login.user }
                }
                Err(error) => {
                    tracing::info!(code = error.error_code(), "login failed");
                    AppMessage::AuthFailed { error }
                }
            };
            let _ = message_tx.send(message);
        });
    }

    fn end_session(&mut self) {
        self.service.logout();
        self.content.reset(Tab::Messages);
        let credentials = Arc::clone(&self.credentials);
        tokio::spawn(async move {
            if let Err(e) = credentials.clear().await {
                tracing::warn!(error = %e, "could not clear stored credentials");
            }
        });
    }

    fn spawn_timer(&self, after: std::time::Duration, message: AppMessage) {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = message_tx.send(message);
        });
    }

    /// Keep the scroll offset within the rendered content.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.max_scroll = max;
        self.state.scroll = self.state.scroll.min(max);
    }
}
