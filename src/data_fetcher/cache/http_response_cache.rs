use lru::LruCache;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::types::{CacheEntry, CacheStatus};

/// Instance-owned response cache keyed by cache-key string.
///
/// Entries expire logically after the TTL but are never evicted: an expired
/// entry is still handed out as a stale fallback until [`ResponseCache::clear`]
/// removes it. The map is unbounded and ordered by store time, newest first.
#[derive(Debug)]
pub struct ResponseCache {
    entries: RwLock<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(LruCache::unbounded()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value only if it is younger than the TTL
    #[instrument(skip(self))]
    pub async fn get_fresh(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        let cache = self.entries.read().await;

        match cache.peek(key) {
            Some(entry) if entry.is_fresh_at(now, self.ttl) => {
                debug!(
                    "Cache hit: key={}, age={:?}, ttl={:?}",
                    key,
                    entry.age_at(now),
                    self.ttl
                );
                Some(entry.value.clone())
            }
            Some(entry) => {
                debug!(
                    "Cache entry expired: key={}, age={:?}, ttl={:?}",
                    key,
                    entry.age_at(now),
                    self.ttl
                );
                None
            }
            None => {
                debug!("Cache miss: key={}", key);
                None
            }
        }
    }

    /// Returns the cached entry regardless of age
    pub async fn get_any(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.peek(key).cloned()
    }

    /// Stores a value, replacing any previous entry for the key
    #[instrument(skip(self, value))]
    pub async fn store(&self, key: &str, value: Value) {
        let mut cache = self.entries.write().await;
        let replaced = cache.put(key.to_string(), CacheEntry::new(value)).is_some();
        info!("Cached response: key={}, replaced={}", key, replaced);
    }

    /// Removes every entry unconditionally
    pub async fn clear(&self) {
        let mut cache = self.entries.write().await;
        let removed = cache.len();
        cache.clear();
        info!("Cleared response cache: removed {} entries", removed);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Age and expiry of every key, most recently stored first
    pub async fn status(&self) -> Vec<CacheStatus> {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .iter()
            .map(|(key, entry)| CacheStatus {
                key: key.clone(),
                age: entry.age_at(now),
                expired: !entry.is_fresh_at(now, self.ttl),
            })
            .collect()
    }
}
