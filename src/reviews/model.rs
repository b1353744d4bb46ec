//! Review data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

// == Review ==
/// A single customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub title: String,
    pub content: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Review {
    /// Builds a review, rejecting ratings outside 1..=5.
    pub fn new(
        author: impl Into<String>,
        rating: u8,
        title: impl Into<String>,
        content: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self> {
        let review = Self {
            author: author.into(),
            rating,
            title: title.into(),
            content: content.into(),
            date,
        };
        review.validate()?;
        Ok(review)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ReviewError::Parse(format!(
                "Rating {} by '{}' is outside {}..={}",
                self.rating, self.author, MIN_RATING, MAX_RATING
            )));
        }
        Ok(())
    }
}
