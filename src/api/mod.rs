//! API Module
//!
//! HTTP handlers and routing for the review feed REST API.
//!
//! # Endpoints
//! - `GET /mock-reviews` - Built-in review catalog with statistics
//! - `GET /reviews/latest` - Latest Reviews block payload
//! - `POST /admin/cache/clear` - Invalidate the review cache
//! - `GET|PUT /admin/block-config` - Block configuration
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
