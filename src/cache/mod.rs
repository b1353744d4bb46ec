//! Cache Module
//!
//! Provides in-memory caching with absolute expiry and tag invalidation.

mod backend;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use backend::{CacheBackend, MemoryCache};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
