//! Authentication support for the admin mode.
//!
//! - Credentials storage (`credentials.json` in the data directory)
//! - Bearer token inspection (JWT expiry)

pub mod credentials;
pub mod token;

pub use credentials::{Credentials, CredentialsManager};
pub use token::{jwt_expires_at, token_is_expired};
