//! Cache Backend Module
//!
//! The key-value interface the review provider talks to, and the shared
//! in-memory implementation served by this crate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats, CacheStore};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;

/// Cache collaborator used by cache-aside readers.
///
/// Writes to one key replace the whole value; implementations only need
/// per-key atomicity.
#[async_trait]
pub trait CacheBackend<V: Send + 'static>: Send + Sync {
    /// Returns the live value under `key`, or None on miss or expiry.
    async fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key` until `expires_at`, tagged with `tags`.
    async fn set(&self, key: &str, value: V, expires_at: DateTime<Utc>, tags: &[&str])
        -> Result<()>;

    /// Removes every entry carrying any of `tags`. Returns how many went.
    async fn invalidate_tags(&self, tags: &[&str]) -> usize;
}

// == Memory Cache ==
/// Shared in-memory cache: a `CacheStore` behind a tokio `RwLock` plus the
/// clock that decides expiry.
#[derive(Debug)]
pub struct MemoryCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    clock: Arc<dyn Clock>,
}

impl<V> Clone for MemoryCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<V: Clone + Send + Sync + 'static> MemoryCache<V> {
    /// Creates an empty cache driven by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new())),
            clock,
        }
    }

    /// Removes entries that have expired by now. Returns the count.
    pub async fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();
        self.store.write().await.cleanup_expired(now)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

impl<V: Clone + Send + Sync + 'static> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V: Clone + Send + Sync + 'static> CacheBackend<V> for MemoryCache<V> {
    async fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        // Write lock: expired entries are dropped on read and stats move.
        self.store.write().await.get(key, now)
    }

    async fn set(
        &self,
        key: &str,
        value: V,
        expires_at: DateTime<Utc>,
        tags: &[&str],
    ) -> Result<()> {
        let entry = CacheEntry::new(
            value,
            self.clock.now(),
            Some(expires_at),
            tags.iter().map(|tag| tag.to_string()).collect(),
        );
        self.store.write().await.set(key, entry)
    }

    async fn invalidate_tags(&self, tags: &[&str]) -> usize {
        self.store.write().await.invalidate_tags(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;

    #[tokio::test]
    async fn test_memory_cache_round_trip() {
        let cache: MemoryCache<String> = MemoryCache::new();
        let expires_at = Utc::now() + Duration::seconds(60);

        cache
            .set("key", "value".to_string(), expires_at, &["tag"])
            .await
            .unwrap();

        assert_eq!(cache.get("key").await, Some("value".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_memory_cache_follows_its_clock() {
        let clock = Arc::new(ManualClock::default());
        let cache: MemoryCache<String> = MemoryCache::with_clock(clock.clone());
        let expires_at = clock.now() + Duration::seconds(3600);

        cache
            .set("key", "value".to_string(), expires_at, &[])
            .await
            .unwrap();

        clock.advance(Duration::seconds(3599));
        assert!(cache.get("key").await.is_some());

        clock.advance(Duration::seconds(1));
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_memory_cache_clones_share_storage() {
        let cache: MemoryCache<String> = MemoryCache::new();
        let other = cache.clone();

        cache
            .set("key", "value".to_string(), Utc::now() + Duration::seconds(60), &["t"])
            .await
            .unwrap();

        assert_eq!(other.invalidate_tags(&["t"]).await, 1);
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_memory_cache_cleanup_expired() {
        let clock = Arc::new(ManualClock::default());
        let cache: MemoryCache<String> = MemoryCache::with_clock(clock.clone());

        cache
            .set("short", "a".to_string(), clock.now() + Duration::seconds(1), &[])
            .await
            .unwrap();
        cache
            .set("long", "b".to_string(), clock.now() + Duration::seconds(60), &[])
            .await
            .unwrap();

        clock.advance(Duration::seconds(2));
        assert_eq!(cache.cleanup_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.stats().await.expired_removed, 1);
    }
}
