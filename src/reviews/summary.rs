//! Rating aggregation.
//!
//! Pure functions turning a review list into its count, rounded mean and
//! qualitative label.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Review;

// == Rating Label ==
/// Qualitative description of an average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingLabel {
    Excellent,
    Great,
    Good,
    Average,
    #[serde(rename = "No reviews")]
    NoReviews,
}

impl RatingLabel {
    /// Maps a rounded average to its label. Thresholds are inclusive lower
    /// bounds checked from the top.
    pub fn for_average(average: f64) -> Self {
        if average >= 4.5 {
            RatingLabel::Excellent
        } else if average >= 3.5 {
            RatingLabel::Great
        } else if average >= 2.5 {
            RatingLabel::Good
        } else {
            RatingLabel::Average
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLabel::Excellent => "Excellent",
            RatingLabel::Great => "Great",
            RatingLabel::Good => "Good",
            RatingLabel::Average => "Average",
            RatingLabel::NoReviews => "No reviews",
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Rating Summary ==
/// Aggregate statistics over a review list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub total: usize,
    /// Mean rating rounded to one decimal, 0.0 when there are no reviews
    pub average_rating: f64,
    pub label: RatingLabel,
}

/// Computes count, rounded mean and label for `reviews`.
pub fn aggregate(reviews: &[Review]) -> RatingSummary {
    let total = reviews.len();
    if total == 0 {
        return RatingSummary {
            total,
            average_rating: 0.0,
            label: RatingLabel::NoReviews,
        };
    }

    let sum: u64 = reviews.iter().map(|review| u64::from(review.rating)).sum();
    // Scale before dividing so exact halves like 89/20 round away from zero.
    let average_rating = (sum as f64 * 10.0 / total as f64).round() / 10.0;

    RatingSummary {
        total,
        average_rating,
        label: RatingLabel::for_average(average_rating),
    }
}

// == Review Bundle ==
/// A review list together with its aggregate statistics, in the JSON shape
/// served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewBundle {
    pub total_reviews: usize,
    pub average_rating: f64,
    pub average_rating_string: RatingLabel,
    pub reviews: Vec<Review>,
}

impl ReviewBundle {
    /// Aggregates `reviews` and wraps them with the result.
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let summary = aggregate(&reviews);
        Self {
            total_reviews: summary.total,
            average_rating: summary.average_rating,
            average_rating_string: summary.label,
            reviews,
        }
    }
}
