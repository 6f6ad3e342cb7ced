//! Mock implementations of the trait seams for tests.

mod clock;
mod credentials;
mod http;

pub use clock::ManualClock;
pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse};

use std::sync::{Mutex, MutexGuard};

/// Lock a mock's shared state, recovering it if a test thread panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
