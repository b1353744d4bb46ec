//! Cache-aside review provider.
//!
//! Reads the review list from the cache and falls back to the data source on
//! a miss, writing the fetched list back with an expiry and the review tag.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, info, warn};

use super::{Review, ReviewSource};
use crate::cache::CacheBackend;
use crate::clock::Clock;

/// Cache key holding the fetched review list.
pub const REVIEWS_CACHE_KEY: &str = "review_feed_reviews";

/// Tag attached to every cached review list.
pub const REVIEWS_CACHE_TAG: &str = "review_feed_reviews_cache";

/// Default lifetime of a cached review list in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Longest lifetime accepted for a cached review list (one year).
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 3600;

/// Shared handle to the cache the provider writes through.
pub type ReviewCacheBackend = Arc<dyn CacheBackend<Vec<Review>>>;

// == Caching Review Provider ==
/// Serves the review list through the cache.
///
/// There is no lock around miss, fetch and store: two concurrent misses may
/// both fetch and both write, and the later write wins.
pub struct CachingReviewProvider {
    source: Arc<dyn ReviewSource>,
    cache: ReviewCacheBackend,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl CachingReviewProvider {
    /// Creates a provider caching fetched lists for `ttl_secs` seconds,
    /// capped at `MAX_CACHE_TTL_SECS`.
    pub fn new(
        source: Arc<dyn ReviewSource>,
        cache: ReviewCacheBackend,
        clock: Arc<dyn Clock>,
        ttl_secs: u64,
    ) -> Self {
        Self {
            source,
            cache,
            clock,
            ttl: Duration::seconds(ttl_secs.min(MAX_CACHE_TTL_SECS) as i64),
        }
    }

    // == Get Reviews ==
    /// Returns the current review list. Never fails.
    ///
    /// A cached list is returned verbatim. On a miss the source is fetched;
    /// fetch errors are logged and produce an empty list that is not cached.
    pub async fn get_reviews(&self) -> Vec<Review> {
        if let Some(reviews) = self.cache.get(REVIEWS_CACHE_KEY).await {
            debug!("Review cache hit ({} reviews)", reviews.len());
            return reviews;
        }

        debug!("Review cache miss, fetching from source");
        let reviews = match self.source.fetch().await {
            Ok(reviews) => reviews,
            Err(e) => {
                error!("Failed to fetch reviews from API: {}", e);
                return Vec::new();
            }
        };

        let expires_at = self.clock.now() + self.ttl;
        match self
            .cache
            .set(
                REVIEWS_CACHE_KEY,
                reviews.clone(),
                expires_at,
                &[REVIEWS_CACHE_TAG],
            )
            .await
        {
            Ok(()) => info!(
                "Cached {} reviews until {}",
                reviews.len(),
                expires_at.to_rfc3339()
            ),
            Err(e) => warn!("Failed to cache reviews: {}", e),
        }

        reviews
    }

    // == Invalidate ==
    /// Drops every cached entry carrying the review tag.
    ///
    /// Returns the number of entries removed.
    pub async fn invalidate(&self) -> usize {
        let removed = self.cache.invalidate_tags(&[REVIEWS_CACHE_TAG]).await;
        info!("Invalidated review cache tag, {} entries removed", removed);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::clock::ManualClock;
    use crate::error::ReviewError;
    use crate::reviews::fakes::CountingSource;
    use chrono::NaiveDate;

    struct Harness {
        source: Arc<CountingSource>,
        cache: MemoryCache<Vec<Review>>,
        clock: Arc<ManualClock>,
        provider: CachingReviewProvider,
    }

    fn harness(source: CountingSource) -> Harness {
        let source = Arc::new(source);
        let clock = Arc::new(ManualClock::default());
        let cache: MemoryCache<Vec<Review>> = MemoryCache::with_clock(clock.clone());
        let provider = CachingReviewProvider::new(
            source.clone(),
            Arc::new(cache.clone()),
            clock.clone(),
            DEFAULT_CACHE_TTL_SECS,
        );
        Harness {
            source,
            cache,
            clock,
            provider,
        }
    }

    fn sample(ratings: &[u8]) -> Vec<Review> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        ratings
            .iter()
            .map(|&r| Review::new("Reviewer", r, "Title", "Content", date).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_miss_fetches_and_caches() {
        let h = harness(CountingSource::returning(sample(&[5, 4])));

        let reviews = h.provider.get_reviews().await;

        assert_eq!(reviews.len(), 2);
        assert_eq!(h.source.calls(), 1);
        assert_eq!(h.cache.get(REVIEWS_CACHE_KEY).await, Some(reviews));
    }

    #[tokio::test]
    async fn test_two_reads_inside_window_fetch_once() {
        let h = harness(CountingSource::returning(sample(&[5, 4, 3])));

        let first = h.provider.get_reviews().await;
        h.clock.advance(Duration::seconds(3599));
        let second = h.provider.get_reviews().await;

        assert_eq!(first, second);
        assert_eq!(h.source.calls(), 1);
    }

    #[tokio::test]
    async fn test_cached_value_returned_verbatim() {
        let h = harness(CountingSource::returning(sample(&[5])));
        h.provider.get_reviews().await;

        // The source changes, but the cached list is still served.
        h.source.set_result(Ok(sample(&[1, 1])));
        let reviews = h.provider.get_reviews().await;

        assert_eq!(reviews, sample(&[5]));
    }

    #[tokio::test]
    async fn test_expiry_forces_refetch() {
        let h = harness(CountingSource::returning(sample(&[4])));

        h.provider.get_reviews().await;
        h.clock.advance(Duration::seconds(3600));
        h.provider.get_reviews().await;

        assert_eq!(h.source.calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_exactly_one_refetch() {
        let h = harness(CountingSource::returning(sample(&[4, 5])));
        h.provider.get_reviews().await;

        assert_eq!(h.provider.invalidate().await, 1);
        assert_eq!(h.cache.len().await, 0);

        h.source.set_result(Ok(sample(&[3])));
        let refreshed = h.provider.get_reviews().await;
        let again = h.provider.get_reviews().await;

        assert_eq!(h.source.calls(), 2);
        assert_eq!(refreshed, sample(&[3]));
        assert_eq!(again, refreshed);
        assert_eq!(h.cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_empty_and_caches_nothing() {
        let h = harness(CountingSource::failing(ReviewError::Network(
            "connection refused".to_string(),
        )));

        assert!(h.provider.get_reviews().await.is_empty());
        assert_eq!(h.cache.len().await, 0);

        // The next read tries again.
        assert!(h.provider.get_reviews().await.is_empty());
        assert_eq!(h.source.calls(), 2);
    }

    #[tokio::test]
    async fn test_parse_failure_returns_empty() {
        let h = harness(CountingSource::failing(ReviewError::Parse(
            "expected value".to_string(),
        )));

        assert!(h.provider.get_reviews().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_list_is_cached() {
        let h = harness(CountingSource::returning(Vec::new()));

        h.provider.get_reviews().await;
        h.provider.get_reviews().await;

        assert_eq!(h.source.calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_misses_both_fetch_last_write_wins() {
        let h = harness(CountingSource::returning(sample(&[5, 5])));
        let provider = Arc::new(h.provider);

        let (a, b) = tokio::join!(provider.get_reviews(), provider.get_reviews());

        assert_eq!(a, b);
        assert!((1..=2).contains(&h.source.calls()));
        assert_eq!(h.cache.len().await, 1);
    }
}
