//! Unified error handling for termfolio.
//!
//! - **Error Categories**: high-level classification for presentation
//! - **Domain-specific Errors**: network, auth and command errors
//! - **Unified Error Type**: `FolioError` consolidates all of them
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! Every error here is soft: the app shows it as a transient notice and
//! keeps running.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Auth | Login, expired session | No |
//! | Server | 5xx, malformed bodies | Yes |
//! | User | Unknown command, modal open | No |
//! | System | Credentials file I/O | No |

mod auth;
mod category;
mod command;
mod folio_error;
mod network;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use command::CommandError;
pub use folio_error::FolioError;
pub use network::{classify_http_error, NetworkError};

/// Type alias for Results using [`FolioError`].
pub type FolioResult<T> = Result<T, FolioError>;
