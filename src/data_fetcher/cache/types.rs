//! Cache data structures with TTL support

use serde_json::Value;
use std::time::{Duration, Instant};

/// Cached JSON payload of one successful fetch
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub stored_at: Instant,
}

impl CacheEntry {
    /// Creates a new cache entry stamped with the current time
    pub fn new(value: Value) -> Self {
        Self::stored_at(value, Instant::now())
    }

    pub fn stored_at(value: Value, stored_at: Instant) -> Self {
        Self { value, stored_at }
    }

    /// Age of the entry relative to `now`
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    /// An entry is fresh while strictly younger than the TTL
    pub fn is_fresh_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) < ttl
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        !self.is_fresh_at(Instant::now(), ttl)
    }
}

/// Diagnostic snapshot of one cache key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStatus {
    pub key: String,
    pub age: Duration,
    pub expired: bool,
}
