//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileCredentialsProvider`] - credentials in the data directory
//! - [`SystemClock`] - wall-clock `Instant::now()`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses, recorded requests
//! - [`mock::InMemoryCredentials`] - In-memory credential storage
//! - [`mock::ManualClock`] - Clock advanced by hand

pub mod file_credentials;
pub mod mock;
pub mod reqwest_http;
pub mod system_clock;

pub use file_credentials::FileCredentialsProvider;
pub use mock::{InMemoryCredentials, ManualClock, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
pub use system_clock::SystemClock;
