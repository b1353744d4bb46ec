//! API Routes
//!
//! Configures the Axum router with all review feed endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    catalog_handler, clear_cache_handler, get_block_config_handler, health_handler,
    latest_reviews_handler, stats_handler, update_block_config_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /mock-reviews` - Built-in review catalog with statistics
/// - `GET /reviews/latest` - Latest Reviews block payload
/// - `POST /admin/cache/clear` - Invalidate the review cache
/// - `GET|PUT /admin/block-config` - Read or update the block configuration
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/mock-reviews", get(catalog_handler))
        .route("/reviews/latest", get(latest_reviews_handler))
        .route("/admin/cache/clear", post(clear_cache_handler))
        .route(
            "/admin/block-config",
            get(get_block_config_handler).put(update_block_config_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
