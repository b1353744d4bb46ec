//! Cache Store Module
//!
//! Tag-aware key-value storage with absolute expiry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::cache::{CacheEntry, CacheStats, MAX_KEY_LENGTH};
use crate::error::{Result, ReviewError};

// == Cache Store ==
/// Main cache storage with expiry and tag invalidation.
///
/// The store never reads the clock itself; callers pass `now` so expiry is
/// decided by whatever clock owns the store.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores an entry under `key`.
    ///
    /// An existing entry is replaced as a whole, tags included.
    pub fn set(&mut self, key: impl Into<String>, entry: CacheEntry<V>) -> Result<()> {
        let key = key.into();

        if key.is_empty() {
            return Err(ReviewError::InvalidRequest(
                "Cache key cannot be empty".to_string(),
            ));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(ReviewError::InvalidRequest(format!(
                "Cache key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired at `now`.
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => true,
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                return Some(value);
            }
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Delete ==
    /// Removes an entry by key. Returns true if something was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Invalidate Tags ==
    /// Removes every entry carrying any of `tags`.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_tags(&mut self, tags: &[&str]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !tags.iter().any(|tag| entry.has_tag(tag)));
        let removed = before - self.entries.len();

        self.stats.record_invalidations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Cleanup Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
