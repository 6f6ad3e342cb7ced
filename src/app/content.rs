//! Loaded content for each tab.

use std::collections::HashMap;

use super::types::Tab;
use crate::api::PortfolioStats;
use crate::error::{FolioError, FolioResult};
use crate::models::{ContactMessage, Experience, Post, Profile, Project, Skill};

/// What a tab displays once loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    About { profile: Profile, skills: Vec<Skill> },
    Projects(Vec<Project>),
    Experiences(Vec<Experience>),
    Blog(Vec<Post>),
    Contact(Profile),
    Stats(PortfolioStats),
    Messages(Vec<ContactMessage>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready(TabContent),
    Failed {
        message: String,
        hint: &'static str,
        retryable: bool,
    },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn failed(err: &FolioError) -> Self {
        LoadStatus::Failed {
            message: err.user_message(),
            hint: err.recovery_hint(),
            retryable: err.is_retryable(),
        }
    }

    /// The user-facing message of a failed load.
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Per-tab load status.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    tabs: HashMap<Tab, LoadStatus>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, tab: Tab) -> &LoadStatus {
        static IDLE: LoadStatus = LoadStatus::Idle;
        self.tabs.get(&tab).unwrap_or(&IDLE)
    }

    /// Mark `tab` as loading, keeping nothing from the previous load.
    pub fn start(&mut self, tab: Tab) {
        self.tabs.insert(tab, LoadStatus::Loading);
    }

    pub fn finish(&mut self, tab: Tab, result: FolioResult<TabContent>) {
        let status = match result {
            Ok(content) => LoadStatus::Ready(content),
            Err(err) => LoadStatus::failed(&err),
        };
        self.tabs.insert(tab, status);
    }

    /// Forget `tab`, e.g. admin data after logout.
    pub fn reset(&mut self, tab: Tab) {
        self.tabs.remove(&tab);
    }
}
