//! Reviews Module
//!
//! Review model, the HTTP data source, the cache-aside provider and rating
//! aggregation.

mod catalog;
mod model;
mod provider;
mod source;
mod summary;

pub use catalog::{catalog_bundle, sample_reviews};
pub use model::{Review, MAX_RATING, MIN_RATING};
pub use provider::{
    CachingReviewProvider, ReviewCacheBackend, DEFAULT_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS,
    REVIEWS_CACHE_KEY, REVIEWS_CACHE_TAG,
};
pub use source::{parse_reviews, HttpReviewSource, ReviewSource};
pub use summary::{aggregate, RatingLabel, RatingSummary, ReviewBundle};

#[cfg(test)]
pub(crate) use source::fakes;
