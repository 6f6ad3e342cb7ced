//! The navigation and command state machine.
//!
//! [`NavigationState`] is plain data. Every transition mutates it in place
//! and returns the [`Effect`]s the shell must carry out (network calls,
//! timers, quitting). Nothing here touches I/O, so the whole machine is
//! driven directly in tests.
//!
//! Timers are cancelled by generation: each notice and each login retry is
//! stamped with a counter, and a timer that fires with an older stamp is
//! ignored.

use super::command::Command;
use super::history::CommandHistory;
use super::notice::Notice;
use super::types::{LoginState, Modal, Tab, Theme};
use crate::error::{AuthError, CommandError, FolioError};
use crate::input::Action;
use crate::models::User;

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch content for `tab`; the reply must echo `generation`.
    LoadTab { tab: Tab, generation: u64 },
    Authenticate { username: String, password: String },
    /// Drop the token and the stored credentials.
    EndSession,
    /// Clear the notice after the notice interval, if still current.
    ClearNoticeAfter { generation: u64 },
    /// Return to the username prompt after the retry delay.
    RetryLoginAfter { generation: u64 },
    Quit,
}

type Effects = Vec<Effect>;

#[derive(Debug, Clone)]
pub struct NavigationState {
    pub current_tab: Tab,
    /// Gates the single-key shortcuts. Escape toggles it.
    pub command_mode: bool,
    pub login: LoginState,
    pub history: CommandHistory,
    pub modal: Modal,
    /// Text typed into the command modal.
    pub input: String,
    /// "Cancel login? (y/n)" is showing.
    pub confirm_cancel_login: bool,
    /// A login request is on the wire.
    pub auth_in_flight: bool,
    /// A failed login is waiting out the retry delay.
    pub retry_pending: bool,
    pub notice: Option<Notice>,
    pub authenticated: bool,
    pub user: Option<User>,
    pub theme: Theme,
    pub scroll: u16,
    pub scroll_step: u16,
    /// Bumped whenever the visible view changes; stale loads compare against it.
    pub view_generation: u64,
    pub should_quit: bool,
    notice_generation: u64,
    login_generation: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(3)
    }
}

impl NavigationState {
    pub fn new(scroll_step: u16) -> Self {
        Self {
            current_tab: Tab::About,
            command_mode: true,
            login: LoginState::None,
            history: CommandHistory::new(),
            modal: Modal::None,
            input: String::new(),
            confirm_cancel_login: false,
            auth_in_flight: false,
            retry_pending: false,
            notice: None,
            authenticated: false,
            user: None,
            theme: Theme::Dark,
            scroll: 0,
            scroll_step,
            view_generation: 0,
            should_quit: false,
            notice_generation: 0,
            login_generation: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the login prompt is busy and must not take input.
    fn login_busy(&self) -> bool {
        self.auth_in_flight || self.retry_pending
    }

    /// Load the initial tab.
    pub fn start(&mut self) -> Effects {
        self.switch_tab(self.current_tab)
    }

    /// Adopt a session restored from disk.
    pub fn restore_session(&mut self, user: Option<User>) {
        self.authenticated = true;
        self.user = user;
    }

    // ── Key actions ───────────────────────────────────────────────────────

    pub fn apply(&mut self, action: Action) -> Effects {
        match action {
            Action::Quit => self.quit(),
            Action::PreviousTab => self.step_tab(false),
            Action::NextTab => self.step_tab(true),
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(self.scroll_step);
                vec![]
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(self.scroll_step);
                vec![]
            }
            Action::OpenCommand => self.open_command(),
            Action::Escape => self.escape(),
            Action::InsertChar(c) => {
                if self.modal == Modal::Command && !self.login_busy() {
                    self.input.push(c);
                }
                vec![]
            }
            Action::Backspace => {
                if self.modal == Modal::Command && !self.login_busy() {
                    self.input.pop();
                }
                vec![]
            }
            Action::Submit => self.submit(),
            Action::HistoryPrevious => {
                if self.can_recall_history() {
                    if let Some(entry) = self.history.previous() {
                        self.input = entry.to_string();
                    }
                }
                vec![]
            }
            Action::HistoryNext => {
                if self.can_recall_history() {
                    self.input = self.history.next().unwrap_or_default().to_string();
                }
                vec![]
            }
            Action::ConfirmCancelLogin => self.cancel_login(),
            Action::KeepLogin => {
                self.confirm_cancel_login = false;
                vec![]
            }
            Action::CloseHelp => {
                if self.modal == Modal::Help {
                    self.modal = Modal::None;
                }
                vec![]
            }
            Action::Noop => vec![],
        }
    }

    fn quit(&mut self) -> Effects {
        self.should_quit = true;
        vec![Effect::Quit]
    }

    fn can_recall_history(&self) -> bool {
        self.modal == Modal::Command && !self.login.is_capturing()
    }

    fn step_tab(&mut self, forward: bool) -> Effects {
        let target = if forward {
            self.current_tab.next(self.authenticated)
        } else {
            self.current_tab.previous(self.authenticated)
        };
        match target {
            Some(tab) => self.switch_tab(tab),
            None => vec![],
        }
    }

    fn switch_tab(&mut self, tab: Tab) -> Effects {
        tracing::debug!(from = %self.current_tab, to = %tab, "switch tab");
        self.current_tab = tab;
        self.scroll = 0;
        self.view_generation += 1;
        vec![Effect::LoadTab {
            tab,
            generation: self.view_generation,
        }]
    }

    fn open_command(&mut self) -> Effects {
        if self.modal == Modal::Help {
            return self.fail(CommandError::HelpModalOpen.into());
        }
        self.modal = Modal::Command;
        self.input.clear();
        self.history.reset_cursor();
        vec![]
    }

    fn close_command(&mut self) {
        self.modal = Modal::None;
        self.input.clear();
    }

    fn escape(&mut self) -> Effects {
        if self.confirm_cancel_login {
            self.confirm_cancel_login = false;
            return vec![];
        }

        match self.modal {
            Modal::Help => self.modal = Modal::None,
            Modal::Command if self.login.is_capturing() => {
                // An in-flight request cannot be recalled.
                if !self.auth_in_flight {
                    self.confirm_cancel_login = true;
                }
            }
            Modal::Command => self.close_command(),
            Modal::None => {
                self.command_mode = !self.command_mode;
                tracing::debug!(command_mode = self.command_mode, "command mode toggled");
            }
        }
        vec![]
    }

    fn cancel_login(&mut self) -> Effects {
        if !self.confirm_cancel_login {
            return vec![];
        }
        self.confirm_cancel_login = false;
        self.login = LoginState::None;
        self.retry_pending = false;
        self.login_generation += 1;
        self.notice = None;
        self.close_command();
        vec![]
    }

    // ── Submission ────────────────────────────────────────────────────────

    fn submit(&mut self) -> Effects {
        if self.modal != Modal::Command || self.confirm_cancel_login {
            return vec![];
        }

        match self.login.clone() {
            LoginState::None => self.submit_command(),
            LoginState::AwaitingUsername => {
                let username = self.input.trim().to_string();
                if username.is_empty() || self.login_busy() {
                    return vec![];
                }
                self.input.clear();
                self.login = LoginState::AwaitingPassword { username };
                vec![]
            }
            LoginState::AwaitingPassword { username } => {
                if self.input.is_empty() || self.login_busy() {
                    return vec![];
                }
                let password = std::mem::take(&mut self.input);
                self.auth_in_flight = true;
                vec![Effect::Authenticate { username, password }]
            }
        }
    }

    fn submit_command(&mut self) -> Effects {
        let raw = self.input.trim().to_string();
        self.input.clear();
        if raw.is_empty() {
            return vec![];
        }
        self.history.push(raw.clone());
        self.dispatch(Command::parse(&raw))
    }

    /// Run a parsed command.
    pub fn dispatch(&mut self, command: Command) -> Effects {
        if self.modal == Modal::Help {
            return self.fail(CommandError::HelpModalOpen.into());
        }
        tracing::debug!(?command, "dispatch");

        match command {
            Command::Navigate(tab) if tab.requires_auth() && !self.authenticated => {
                self.fail(AuthError::NotAuthenticated.into())
            }
            Command::Navigate(tab) => {
                self.close_command();
                self.switch_tab(tab)
            }
            Command::Theme => {
                self.theme = self.theme.toggled();
                self.close_command();
                vec![]
            }
            Command::Login if self.authenticated => {
                self.fail(AuthError::AlreadyAuthenticated.into())
            }
            Command::Login => {
                self.login = LoginState::AwaitingUsername;
                self.notice = None;
                vec![]
            }
            Command::Logout if !self.authenticated => self.fail(AuthError::NotAuthenticated.into()),
            Command::Logout => {
                self.close_command();
                let mut effects = self.end_session();
                effects.extend(self.inform("Logged out."));
                effects
            }
            Command::Help => {
                self.close_command();
                self.modal = Modal::Help;
                vec![]
            }
            Command::Clear => {
                self.close_command();
                self.notice = None;
                vec![]
            }
            Command::Quit => self.quit(),
            Command::Unknown(input) => self.fail(CommandError::UnknownCommand { input }.into()),
        }
    }

    /// Leave admin mode, moving off the messages tab if needed.
    fn end_session(&mut self) -> Effects {
        self.authenticated = false;
        self.user = None;
        let mut effects = vec![Effect::EndSession];
        if self.current_tab.requires_auth() {
            effects.extend(self.switch_tab(Tab::About));
        }
        effects
    }

    // ── Async results ─────────────────────────────────────────────────────

    pub fn auth_succeeded(&mut self, user: User) -> Effects {
        if !self.auth_in_flight {
            return vec![];
        }
        self.auth_in_flight = false;
        self.login = LoginState::None;
        self.authenticated = true;
        self.close_command();

        let mut effects = self.inform(format!("Logged in as {}.", user.label()));
        self.user = Some(user);
        if self.current_tab == Tab::Stats {
            effects.extend(self.switch_tab(Tab::Stats));
        }
        effects
    }

    /// Show the failure, then go back to the username prompt after the
    /// retry delay. The username typed before is not kept.
    pub fn auth_failed(&mut self, err: &FolioError) -> Effects {
        if !self.auth_in_flight {
            return vec![];
        }
        self.auth_in_flight = false;
        self.retry_pending = true;
        self.input.clear();

        let text = match err {
            FolioError::Auth(AuthError::InvalidCredentials) => err.user_message(),
            other => format!("Login failed: {}", other.user_message()),
        };
        self.notice_generation += 1;
        self.notice = Some(Notice {
            text,
            ..Notice::error(err, self.notice_generation)
        });

        self.login_generation += 1;
        vec![Effect::RetryLoginAfter {
            generation: self.login_generation,
        }]
    }

    pub fn login_retry_elapsed(&mut self, generation: u64) -> Effects {
        if generation != self.login_generation || !self.retry_pending {
            return vec![];
        }
        self.retry_pending = false;
        self.login = LoginState::AwaitingUsername;
        self.notice = None;
        self.input.clear();
        vec![]
    }

    pub fn notice_elapsed(&mut self, generation: u64) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.generation == generation)
        {
            self.notice = None;
        }
    }

    /// Whether a content reply for `tab` stamped `generation` is still wanted.
    pub fn is_current_view(&self, tab: Tab, generation: u64) -> bool {
        tab == self.current_tab && generation == self.view_generation
    }

    /// The server rejected our token.
    pub fn session_expired(&mut self) -> Effects {
        if !self.authenticated {
            return vec![];
        }
        tracing::info!("session expired");
        let mut effects = self.end_session();
        effects.extend(self.fail(AuthError::SessionExpired.into()));
        effects
    }

    // ── Notices ───────────────────────────────────────────────────────────

    fn inform(&mut self, text: impl Into<String>) -> Effects {
        self.notice_generation += 1;
        self.notice = Some(Notice::info(text, self.notice_generation));
        vec![Effect::ClearNoticeAfter {
            generation: self.notice_generation,
        }]
    }

    /// Show `err` inline until the notice interval passes.
    pub fn fail(&mut self, err: FolioError) -> Effects {
        tracing::debug!(code = err.error_code(), "notice");
        self.notice_generation += 1;
        self.notice = Some(Notice::error(&err, self.notice_generation));
        vec![Effect::ClearNoticeAfter {
            generation: self.notice_generation,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavigationState {
        NavigationState::new(3)
    }

    fn type_text(s: &mut NavigationState, text: &str) {
        for c in text.chars() {
            s.apply(Action::InsertChar(c));
        }
    }

    fn run(s: &mut NavigationState, command: &str) -> Effects {
        s.apply(Action::OpenCommand);
        type_text(s, command);
        s.apply(Action::Submit)
    }

    fn notice_text(s: &NavigationState) -> Option<&str> {
        s.notice.as_ref().map(|n| n.text.as_str())
    }

    #[test]
    fn test_defaults() {
        let s = state();
        assert_eq!(s.current_tab, Tab::About);
        assert!(s.command_mode);
        assert_eq!(s.login, LoginState::None);
        assert_eq!(s.modal, Modal::None);
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_start_loads_initial_tab() {
        let mut s = state();
        assert_eq!(
            s.start(),
            vec![Effect::LoadTab {
                tab: Tab::About,
                generation: 1
            }]
        );
    }

    #[test]
    fn test_tab_steps_stop_at_edges() {
        let mut s = state();
        assert!(s.apply(Action::PreviousTab).is_empty());
        assert_eq!(s.current_tab, Tab::About);

        for _ in 0..10 {
            s.apply(Action::NextTab);
        }
        assert_eq!(s.current_tab, Tab::Stats);

        s.restore_session(None);
        s.apply(Action::NextTab);
        assert_eq!(s.current_tab, Tab::Messages);
    }

    #[test]
    fn test_tab_switch_resets_scroll_and_bumps_generation() {
        let mut s = state();
        s.apply(Action::ScrollDown);
        s.apply(Action::ScrollDown);
        assert_eq!(s.scroll, 6);
        s.apply(Action::ScrollUp);
        assert_eq!(s.scroll, 3);

        let effects = s.apply(Action::NextTab);
        assert_eq!(
            effects,
            vec![Effect::LoadTab {
                tab: Tab::Projects,
                generation: 1
            }]
        );
        assert_eq!(s.scroll, 0);
        s.apply(Action::ScrollUp);
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn test_escape_toggles_command_mode_without_modal() {
        let mut s = state();
        s.apply(Action::Escape);
        assert!(!s.command_mode);
        s.apply(Action::Escape);
        assert!(s.command_mode);
    }

    #[test]
    fn test_navigate_command_closes_modal() {
        let mut s = state();
        let effects = run(&mut s, ":Blog");
        assert_eq!(s.current_tab, Tab::Blog);
        assert_eq!(s.modal, Modal::None);
        assert!(s.input.is_empty());
        assert!(matches!(effects[..], [Effect::LoadTab { tab: Tab::Blog, .. }]));
    }

    #[test]
    fn test_messages_requires_session() {
        let mut s = state();
        let effects = run(&mut s, "messages");
        assert_eq!(s.current_tab, Tab::About);
        assert_eq!(s.modal, Modal::Command);
        assert_eq!(
            notice_text(&s),
            Some(AuthError::NotAuthenticated.user_message().as_str())
        );
        assert_eq!(effects, vec![Effect::ClearNoticeAfter { generation: 1 }]);
    }

    #[test]
    fn test_history_records_commands_in_order() {
        let mut s = state();
        run(&mut s, "about");
        run(&mut s, "xyz");
        run(&mut s, "theme");
        assert_eq!(s.history.entries(), ["about", "xyz", "theme"]);
    }

    #[test]
    fn test_unknown_command_echoes_text() {
        let mut s = state();
        run(&mut s, "Frobnicate");
        let notice = s.notice.clone().unwrap();
        assert!(notice.is_error());
        assert!(notice.text.contains("Frobnicate"));

        s.notice_elapsed(notice.generation);
        assert!(s.notice.is_none());
    }

    #[test]
    fn test_stale_notice_timer_is_ignored() {
        let mut s = state();
        run(&mut s, "xyz");
        let first = s.notice.clone().unwrap().generation;
        run(&mut s, "abc");
        s.notice_elapsed(first);
        assert!(notice_text(&s).unwrap().contains("abc"));
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut s = state();
        let effects = run(&mut s, "   ");
        assert!(effects.is_empty());
        assert!(s.history.is_empty());
        assert_eq!(s.modal, Modal::Command);
    }

    #[test]
    fn test_history_recall() {
        let mut s = state();
        run(&mut s, "about");
        run(&mut s, "theme");
        s.apply(Action::OpenCommand);

        s.apply(Action::HistoryPrevious);
        assert_eq!(s.input, "theme");
        s.apply(Action::HistoryPrevious);
        assert_eq!(s.input, "about");
        s.apply(Action::HistoryPrevious);
        assert_eq!(s.input, "about");
        assert_eq!(s.history.index(), 0);

        s.apply(Action::HistoryNext);
        assert_eq!(s.input, "theme");
        s.apply(Action::HistoryNext);
        assert_eq!(s.input, "");
        assert_eq!(s.history.index(), 2);
    }

    #[test]
    fn test_theme_toggles() {
        let mut s = state();
        run(&mut s, "theme");
        assert_eq!(s.theme, Theme::Light);
        run(&mut s, "theme");
        assert_eq!(s.theme, Theme::Dark);
    }

    #[test]
    fn test_help_replaces_command_modal() {
        let mut s = state();
        run(&mut s, "?");
        assert_eq!(s.modal, Modal::Help);

        s.apply(Action::OpenCommand);
        assert_eq!(s.modal, Modal::Help);
        assert_eq!(
            notice_text(&s),
            Some(CommandError::HelpModalOpen.user_message().as_str())
        );

        let effects = s.dispatch(Command::Theme);
        assert_eq!(s.theme, Theme::Dark);
        assert!(matches!(effects[..], [Effect::ClearNoticeAfter { .. }]));

        s.apply(Action::Escape);
        assert_eq!(s.modal, Modal::None);
    }

    #[test]
    fn test_login_happy_path() {
        let mut s = state();
        run(&mut s, "login");
        assert_eq!(s.login, LoginState::AwaitingUsername);
        assert_eq!(s.modal, Modal::Command);

        type_text(&mut s, "alice");
        s.apply(Action::Submit);
        assert_eq!(
            s.login,
            LoginState::AwaitingPassword {
                username: "alice".into()
            }
        );
        assert!(s.input.is_empty());

        type_text(&mut s, "secret");
        let effects = s.apply(Action::Submit);
        assert_eq!(
            effects,
            vec![Effect::Authenticate {
                username: "alice".into(),
                password: "secret".into()
            }]
        );
        assert!(s.auth_in_flight);

        s.auth_succeeded(User {
            username: "alice".into(),
            ..Default::default()
        });
        assert_eq!(s.login, LoginState::None);
        assert_eq!(s.modal, Modal::None);
        assert!(s.is_authenticated());
        assert_eq!(s.history.entries(), ["login"]);
    }

    #[test]
    fn test_login_failure_returns_to_username_after_delay() {
        let mut s = state();
        run(&mut s, "login");
        type_text(&mut s, "alice");
        s.apply(Action::Submit);
        type_text(&mut s, "wrong");
        s.apply(Action::Submit);

        let effects = s.auth_failed(&AuthError::InvalidCredentials.into());
        let generation = match effects[..] {
            [Effect::RetryLoginAfter { generation }] => generation,
            _ => panic!("expected a retry timer, got {effects:?}"),
        };
        assert_eq!(notice_text(&s), Some("Invalid username or password."));
        assert!(s.login.is_password());

        // Typing during the delay goes nowhere.
        type_text(&mut s, "x");
        assert!(s.input.is_empty());

        s.login_retry_elapsed(generation);
        assert_eq!(s.login, LoginState::AwaitingUsername);
        assert!(s.notice.is_none());
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_network_failure_is_worded_differently() {
        let mut s = state();
        s.login = LoginState::AwaitingPassword {
            username: "alice".into(),
        };
        s.modal = Modal::Command;
        s.auth_in_flight = true;
        s.auth_failed(&FolioError::Network(crate::error::NetworkError::Timeout {
            url: "http://x".into(),
        }));
        let text = notice_text(&s).unwrap();
        assert!(text.starts_with("Login failed:"));
        assert_ne!(text, AuthError::InvalidCredentials.user_message());
        assert!(s.retry_pending);
    }

    #[test]
    fn test_password_is_not_recorded() {
        let mut s = state();
        run(&mut s, "login");
        type_text(&mut s, "alice");
        s.apply(Action::Submit);
        type_text(&mut s, "hunter2");
        s.apply(Action::Submit);
        assert!(!s.history.entries().iter().any(|e| e == "hunter2"));
    }

    #[test]
    fn test_empty_login_input_is_ignored() {
        let mut s = state();
        run(&mut s, "login");
        type_text(&mut s, "  ");
        s.apply(Action::Submit);
        assert_eq!(s.login, LoginState::AwaitingUsername);

        s.input.clear();
        type_text(&mut s, "alice");
        s.apply(Action::Submit);
        assert!(s.apply(Action::Submit).is_empty());
        assert!(!s.auth_in_flight);
    }

    #[test]
    fn test_history_ignored_during_login() {
        let mut s = state();
        run(&mut s, "about");
        run(&mut s, "login");
        s.apply(Action::HistoryPrevious);
        assert!(s.input.is_empty());
    }

    #[test]
    fn test_escape_during_login_asks_first() {
        let mut s = state();
        run(&mut s, "login");
        s.apply(Action::Escape);
        assert!(s.confirm_cancel_login);
        assert_eq!(s.login, LoginState::AwaitingUsername);

        s.apply(Action::KeepLogin);
        assert!(!s.confirm_cancel_login);
        assert_eq!(s.login, LoginState::AwaitingUsername);

        s.apply(Action::Escape);
        s.apply(Action::ConfirmCancelLogin);
        assert_eq!(s.login, LoginState::None);
        assert_eq!(s.modal, Modal::None);
        assert!(s.command_mode);
    }

    #[test]
    fn test_cancel_during_retry_delay_voids_timer() {
        let mut s = state();
        run(&mut s, "login");
        type_text(&mut s, "alice");
        s.apply(Action::Submit);
        type_text(&mut s, "wrong");
        s.apply(Action::Submit);
        let effects = s.auth_failed(&AuthError::InvalidCredentials.into());
        let Effect::RetryLoginAfter { generation } = effects[0] else {
            panic!("expected retry timer");
        };

        s.apply(Action::Escape);
        s.apply(Action::ConfirmCancelLogin);
        s.login_retry_elapsed(generation);
        assert_eq!(s.login, LoginState::None);
    }

    #[test]
    fn test_escape_ignored_while_request_in_flight() {
        let mut s = state();
        s.modal = Modal::Command;
        s.login = LoginState::AwaitingPassword {
            username: "alice".into(),
        };
        s.auth_in_flight = true;
        s.apply(Action::Escape);
        assert!(!s.confirm_cancel_login);
    }

    #[test]
    fn test_login_when_authenticated() {
        let mut s = state();
        s.restore_session(None);
        run(&mut s, "login");
        assert_eq!(s.login, LoginState::None);
        assert_eq!(
            notice_text(&s),
            Some(AuthError::AlreadyAuthenticated.user_message().as_str())
        );
    }

    #[test]
    fn test_logout() {
        let mut s = state();
        assert!(run(&mut s, "logout")
            .iter()
            .all(|e| matches!(e, Effect::ClearNoticeAfter { .. })));

        s.restore_session(None);
        run(&mut s, "messages");
        assert_eq!(s.current_tab, Tab::Messages);

        let effects = run(&mut s, "logout");
        assert!(!s.is_authenticated());
        assert_eq!(s.current_tab, Tab::About);
        assert_eq!(effects[0], Effect::EndSession);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::LoadTab { tab: Tab::About, .. })));
    }

    #[test]
    fn test_session_expired_leaves_messages() {
        let mut s = state();
        s.restore_session(None);
        run(&mut s, "messages");

        let effects = s.session_expired();
        assert!(effects.contains(&Effect::EndSession));
        assert_eq!(s.current_tab, Tab::About);
        assert_eq!(
            notice_text(&s),
            Some(AuthError::SessionExpired.user_message().as_str())
        );
        assert!(s.session_expired().is_empty());
    }

    #[test]
    fn test_view_freshness() {
        let mut s = state();
        let effects = s.apply(Action::NextTab);
        let Effect::LoadTab { tab, generation } = effects[0].clone() else {
            panic!("expected load");
        };
        assert!(s.is_current_view(tab, generation));

        s.apply(Action::NextTab);
        assert!(!s.is_current_view(tab, generation));
    }

    #[test]
    fn test_quit_command() {
        let mut s = state();
        assert_eq!(run(&mut s, "q"), vec![Effect::Quit]);
        assert!(s.should_quit);
    }
}
