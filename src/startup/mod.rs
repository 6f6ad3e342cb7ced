//! Everything that happens before the first frame is drawn.
//!
//! - [`config`] - [`AppConfig`] defaults, environment and builder
//! - [`logging`] - File-backed `tracing` subscriber
//! - [`session`] - Restoring a saved admin session

pub mod config;
pub mod logging;
pub mod session;

pub use config::AppConfig;
pub use logging::init_logging;
pub use session::restore_credentials;
