//! Latest Reviews block.
//!
//! Block configuration and the payload the block renders from.

use serde::Serialize;

use crate::carousel::CarouselSettings;
use crate::error::{Result, ReviewError};
use crate::reviews::{Review, ReviewBundle};

/// Smallest accepted `number_of_reviews`.
pub const MIN_REVIEWS_SHOWN: u8 = 1;
/// Largest accepted `number_of_reviews`.
pub const MAX_REVIEWS_SHOWN: u8 = 10;
/// `number_of_reviews` of a freshly placed block.
pub const DEFAULT_REVIEWS_SHOWN: u8 = 3;

// == Block Config ==
/// Persisted configuration of the Latest Reviews block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockConfig {
    /// Reviews visible at once; also the carousel page step
    number_of_reviews: u8,
}

impl BlockConfig {
    /// Validates `number_of_reviews` against 1..=10.
    pub fn new(number_of_reviews: i64) -> Result<Self> {
        let valid = i64::from(MIN_REVIEWS_SHOWN)..=i64::from(MAX_REVIEWS_SHOWN);
        if !valid.contains(&number_of_reviews) {
            return Err(ReviewError::InvalidRequest(format!(
                "number_of_reviews must be between {} and {}, got {}",
                MIN_REVIEWS_SHOWN, MAX_REVIEWS_SHOWN, number_of_reviews
            )));
        }
        Ok(Self {
            number_of_reviews: number_of_reviews as u8,
        })
    }

    /// Like `new`, but pulls out-of-range values to the nearest bound.
    pub fn clamped(number_of_reviews: i64) -> Self {
        let clamped = number_of_reviews.clamp(
            i64::from(MIN_REVIEWS_SHOWN),
            i64::from(MAX_REVIEWS_SHOWN),
        );
        Self {
            number_of_reviews: clamped as u8,
        }
    }

    pub fn number_of_reviews(&self) -> u8 {
        self.number_of_reviews
    }
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            number_of_reviews: DEFAULT_REVIEWS_SHOWN,
        }
    }
}

// == Block Payload ==
/// Everything the block template needs: the reviews, their statistics and
/// the carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestReviewsBlock {
    #[serde(flatten)]
    pub bundle: ReviewBundle,
    pub carousel: CarouselSettings,
}

impl LatestReviewsBlock {
    /// Builds the block payload. All reviews are passed on; the carousel
    /// decides how many are visible.
    pub fn build(reviews: Vec<Review>, config: &BlockConfig) -> Self {
        Self {
            bundle: ReviewBundle::from_reviews(reviews),
            carousel: CarouselSettings::new(usize::from(config.number_of_reviews())),
        }
    }
}
