//! API Handlers
//!
//! HTTP request handlers for each review feed endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};

use crate::block::{BlockConfig, LatestReviewsBlock};
use crate::cache::MemoryCache;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::{Result, ReviewError};
use crate::models::{
    BlockConfigRequest, BlockConfigResponse, ClearCacheResponse, HealthResponse, StatsResponse,
};
use crate::reviews::{
    catalog_bundle, CachingReviewProvider, HttpReviewSource, Review, ReviewBundle, ReviewSource,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside review reader
    pub provider: Arc<CachingReviewProvider>,
    /// The cache behind the provider, kept for stats and the expiry sweep
    pub cache: MemoryCache<Vec<Review>>,
    /// Latest Reviews block configuration
    pub block_config: Arc<RwLock<BlockConfig>>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        provider: CachingReviewProvider,
        cache: MemoryCache<Vec<Review>>,
        block_config: BlockConfig,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            cache,
            block_config: Arc::new(RwLock::new(block_config)),
        }
    }

    /// Wires a wall-clock cache and provider around `source`.
    pub fn with_source(source: Arc<dyn ReviewSource>, config: &Config) -> Self {
        let clock = Arc::new(SystemClock);
        let cache: MemoryCache<Vec<Review>> = MemoryCache::with_clock(clock.clone());
        let provider =
            CachingReviewProvider::new(source, Arc::new(cache.clone()), clock, config.cache_ttl);

        Self::new(
            provider,
            cache,
            BlockConfig::clamped(config.number_of_reviews),
        )
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the review endpoint cannot be turned into an HTTP source.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpReviewSource::new(&config.reviews_endpoint, config.reviews_timeout)?;
        Ok(Self::with_source(Arc::new(source), config))
    }
}

/// Handler for GET /mock-reviews
///
/// Serves the built-in review catalog with its aggregate statistics.
pub async fn catalog_handler() -> Json<ReviewBundle> {
    Json(catalog_bundle())
}

/// Handler for GET /reviews/latest
///
/// Renders the Latest Reviews block through the cached provider. Fetch
/// failures show up as an empty block, never as an error status.
pub async fn latest_reviews_handler(State(state): State<AppState>) -> Json<LatestReviewsBlock> {
    let reviews = state.provider.get_reviews().await;
    let config = *state.block_config.read().await;

    Json(LatestReviewsBlock::build(reviews, &config))
}

/// Handler for POST /admin/cache/clear
///
/// Invalidates the review cache tag so the next read fetches fresh data.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let invalidated = state.provider.invalidate().await;
    Json(ClearCacheResponse::new(invalidated))
}

/// Handler for GET /admin/block-config
pub async fn get_block_config_handler(
    State(state): State<AppState>,
) -> Json<BlockConfigResponse> {
    let config = *state.block_config.read().await;
    Json(config.into())
}

/// Handler for PUT /admin/block-config
///
/// Updates how many reviews the block shows at once (1 to 10).
pub async fn update_block_config_handler(
    State(state): State<AppState>,
    Json(req): Json<BlockConfigRequest>,
) -> Result<Json<BlockConfigResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ReviewError::InvalidRequest(error_msg));
    }

    let config = BlockConfig::new(req.number_of_reviews)?;
    *state.block_config.write().await = config;

    Ok(Json(config.into()))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
