//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`CredentialsProvider`] - Credentials storage and retrieval
//! - [`Clock`] - Monotonic time source used by the request cache

pub mod clock;
pub mod credentials;
pub mod http;

pub use clock::Clock;
pub use credentials::{CredentialsError, CredentialsProvider};
pub use http::{Headers, HttpClient, HttpError, Method, Request, Response};
