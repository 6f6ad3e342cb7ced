//! Time-bounded request cache.
//!
//! Reads issued by the views go through [`RequestCache::get_or_fetch`] so a
//! resource fetched recently is served locally instead of hitting the
//! backend again. Entries expire lazily: an entry older than the TTL is
//! treated exactly like a missing one and replaced on the next fetch.

mod entry;

pub use entry::CacheEntry;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::Clock;

/// Default time-to-live for cached responses.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Key/value cache shared by every fetch in the process.
///
/// Two concurrent misses on the same key both run their fetch; the later
/// completion wins.
pub struct RequestCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Mutex<Duration>,
    clock: Arc<dyn Clock>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<V: Clone> RequestCache<V> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(clock, DEFAULT_TTL)
    }

    pub fn with_ttl(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Mutex::new(ttl),
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        *lock(&self.ttl)
    }

    /// Change the TTL for all entries, including ones already stored.
    pub fn set_ttl(&self, ttl: Duration) {
        *lock(&self.ttl) = ttl;
    }

    /// The live value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let ttl = self.ttl();
        lock(&self.entries)
            .get(key)
            .filter(|entry| entry.is_fresh(now, ttl))
            .map(|entry| entry.value.clone())
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Fetch errors are returned as-is and nothing is stored. The cache lock
    /// is released while `fetch` runs.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            tracing::debug!(key, "cache hit");
            return Ok(value);
        }

        tracing::debug!(key, "cache miss");
        let value = fetch().await?;
        self.set(key, value.clone());
        Ok(value)
    }

    /// Store `value` under `key`, stamped with the current time.
    pub fn set(&self, key: &str, value: V) {
        let entry = CacheEntry::new(key, value, self.clock.now());
        lock(&self.entries).insert(key.to_string(), entry);
    }

    /// Drop `key`. Clearing a missing key is a no-op.
    pub fn clear(&self, key: &str) {
        if lock(&self.entries).remove(key).is_some() {
            tracing::debug!(key, "cache entry cleared");
        }
    }

    /// Drop every key starting with `prefix`.
    pub fn clear_prefix(&self, prefix: &str) {
        lock(&self.entries).retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear_all(&self) {
        lock(&self.entries).clear();
    }

    /// Stored entries, expired ones included.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
