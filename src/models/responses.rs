//! Response DTOs for the review feed API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::block::BlockConfig;
use crate::cache::CacheStats;

/// Response body for the admin cache clear (POST /admin/cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    /// Success message
    pub message: String,
    /// Number of cache entries removed
    pub invalidated: usize,
}

impl ClearCacheResponse {
    pub fn new(invalidated: usize) -> Self {
        Self {
            message: "Review API cache has been cleared.".to_string(),
            invalidated,
        }
    }
}

/// Response body for the block configuration endpoints
#[derive(Debug, Clone, Serialize)]
pub struct BlockConfigResponse {
    pub number_of_reviews: u8,
}

impl From<BlockConfig> for BlockConfigResponse {
    fn from(config: BlockConfig) -> Self {
        Self {
            number_of_reviews: config.number_of_reviews(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Entries removed by tag invalidation
    pub invalidations: u64,
    /// Entries removed by the expiry sweep
    pub expired_removed: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            expired_removed: stats.expired_removed,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
