//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_DATA_DIR_NAME: &str = ".termfolio";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const API_URL_ENV: &str = "TERMFOLIO_API_URL";
pub const CACHE_TTL_ENV: &str = "TERMFOLIO_CACHE_TTL_MS";
pub const HOME_ENV: &str = "TERMFOLIO_HOME";
pub const LOG_ENV: &str = "TERMFOLIO_LOG";

/// Runtime settings, built with defaults and overridden by environment
/// variables and command-line flags.
///
/// ```ignore
/// use termfolio::startup::AppConfig;
///
/// let config = AppConfig::from_env()
///     .with_api_base_url("https://folio.example.com/api");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    /// How long an inline notice stays up.
    pub notice_duration: Duration,
    /// Pause after a failed login before asking for the username again.
    pub login_retry_delay: Duration,
    /// Lines moved per `j`/`k`.
    pub scroll_step: u16,
    /// Holds `credentials.json` and `termfolio.log`.
    pub data_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            cache_ttl: DEFAULT_TTL,
            request_timeout: Duration::from_secs(10),
            notice_duration: Duration::from_millis(2000),
            login_retry_delay: Duration::from_millis(2000),
            scroll_step: 3,
            data_dir: default_data_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_DIR_NAME)
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn with_login_retry_delay(mut self, delay: Duration) -> Self {
        self.login_retry_delay = delay;
        self
    }

    pub fn with_scroll_step(mut self, step: u16) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("termfolio.log")
    }

    /// Defaults overridden by `TERMFOLIO_*` variables. Unparseable values
    /// are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(API_URL_ENV) {
            config.api_base_url = url;
        }
        if let Some(raw) = non_empty_var(CACHE_TTL_ENV) {
            match raw.parse::<u64>() {
                Ok(ms) => config.cache_ttl = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {}", CACHE_TTL_ENV),
            }
        }
        if let Some(home) = non_empty_var(HOME_ENV) {
            config.data_dir = PathBuf::from(home);
        }
        if let Some(filter) = non_empty_var(LOG_ENV) {
            config.log_filter = filter;
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
