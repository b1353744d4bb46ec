//! Review Feed - a Latest Reviews service
//!
//! Fetches review data through a cache-aside client, aggregates rating
//! statistics and serves them with carousel settings.

pub mod api;
pub mod block;
pub mod cache;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod reviews;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ReviewError};
pub use tasks::spawn_cleanup_task;
