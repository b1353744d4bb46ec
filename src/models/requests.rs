//! Request DTOs for the review feed API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::block::{MAX_REVIEWS_SHOWN, MIN_REVIEWS_SHOWN};

/// Request body for updating the block configuration (PUT /admin/block-config)
///
/// Signed so out-of-range input reaches validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockConfigRequest {
    /// Reviews visible at once in the carousel
    pub number_of_reviews: i64,
}

impl BlockConfigRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let min = i64::from(MIN_REVIEWS_SHOWN);
        let max = i64::from(MAX_REVIEWS_SHOWN);
        if self.number_of_reviews < min || self.number_of_reviews > max {
            return Some(format!(
                "number_of_reviews must be between {} and {}",
                min, max
            ));
        }
        None
    }
}
