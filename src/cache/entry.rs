//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiry and tags.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was written
    pub created_at: DateTime<Utc>,
    /// Absolute expiry, None = no expiration
    pub expires_at: Option<DateTime<Utc>>,
    /// Invalidation tags attached to the entry
    pub tags: Vec<String>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `created_at` - Write time as seen by the store's clock
    /// * `expires_at` - Optional absolute expiry
    /// * `tags` - Invalidation tags
    pub fn new(
        value: V,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            value,
            created_at,
            expires_at,
            tags,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once `now >= expires_at`, so an entry whose
    /// lifetime has fully elapsed is never served.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Has Tag ==
    /// Returns true if the entry carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // == Time To Live ==
    /// Returns remaining lifetime at `now`, or None if no expiration is set.
    ///
    /// Expired entries report a zero duration.
    pub fn ttl_remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expires_at.map(|expires| {
            if expires > now {
                expires - now
            } else {
                Duration::zero()
            }
        })
    }
}
