//! Time source abstraction.
//!
//! The request cache decides freshness by comparing instants. Reading the
//! time through a trait lets tests move the clock forward explicitly
//! instead of sleeping.

use std::time::Instant;

/// A monotonic time source.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}
