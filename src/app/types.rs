//! Small state enums shared by the navigation state machine and the UI.
//!
//! - [`Tab`] - Which content view is shown
//! - [`LoginState`] - Progress through the login prompts
//! - [`Modal`] - Which overlay, if any, owns the keyboard
//! - [`Theme`] - Light or dark palette

use std::fmt;

/// Content views, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Projects,
    Experiences,
    Blog,
    Contact,
    Stats,
    /// Admin inbox, only reachable with a session.
    Messages,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::About,
        Tab::Projects,
        Tab::Experiences,
        Tab::Blog,
        Tab::Contact,
        Tab::Stats,
        Tab::Messages,
    ];

    /// Tabs the user may visit, in order.
    pub fn visible(authenticated: bool) -> &'static [Tab] {
        if authenticated {
            &Self::ALL
        } else {
            &Self::ALL[..6]
        }
    }

    pub fn requires_auth(self) -> bool {
        self == Tab::Messages
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::About => "about",
            Tab::Projects => "projects",
            Tab::Experiences => "experiences",
            Tab::Blog => "blog",
            Tab::Contact => "contact",
            Tab::Stats => "stats",
            Tab::Messages => "messages",
        }
    }

    /// The tab before `self` in the visible list, if any. Never wraps.
    pub fn previous(self, authenticated: bool) -> Option<Tab> {
        let tabs = Self::visible(authenticated);
        let index = tabs.iter().position(|t| *t == self)?;
        index.checked_sub(1).map(|i| tabs[i])
    }

    /// The tab after `self` in the visible list, if any. Never wraps.
    pub fn next(self, authenticated: bool) -> Option<Tab> {
        let tabs = Self::visible(authenticated);
        let index = tabs.iter().position(|t| *t == self)?;
        tabs.get(index + 1).copied()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Login prompt progress. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    None,
    AwaitingUsername,
    AwaitingPassword { username: String },
}

impl LoginState {
    pub fn is_capturing(&self) -> bool {
        !matches!(self, LoginState::None)
    }

    pub fn is_password(&self) -> bool {
        matches!(self, LoginState::AwaitingPassword { .. })
    }

    /// Prompt label shown in front of the input buffer.
    pub fn prompt(&self) -> &'static str {
        match self {
            LoginState::None => ":",
            LoginState::AwaitingUsername => "username: ",
            LoginState::AwaitingPassword { .. } => "password: ",
        }
    }
}

/// Overlay that owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    /// Colon-command input, also used for the login prompts.
    Command,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
