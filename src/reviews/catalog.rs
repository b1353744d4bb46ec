//! Built-in review catalog served at `/mock-reviews`.

use chrono::NaiveDate;

use super::{Review, ReviewBundle};

const CATALOG: &[(&str, u8, &str, &str, (i32, u32, u32))] = &[
    (
        "John Doe",
        5,
        "Excellent service!",
        "Great experience, highly recommended.",
        (2024, 3, 18),
    ),
    (
        "Jane Smith",
        4,
        "Good but could be better",
        "Generally satisfied, but shipping was a bit slow.",
        (2024, 3, 20),
    ),
    (
        "Peter Jones",
        5,
        "Fantastic!",
        "Smooth process from start to finish. Will use again.",
        (2024, 3, 21),
    ),
    (
        "Alice Williams",
        3,
        "Average experience",
        "It was okay, nothing special. Customer support was a bit slow to respond.",
        (2024, 3, 22),
    ),
    (
        "Bob Johnson",
        5,
        "Top-notch!",
        "Exceeded expectations. Very happy with the product and service.",
        (2024, 3, 23),
    ),
    (
        "Charlie Brown",
        4,
        "Solid product",
        "Works as advertised, no complaints so far.",
        (2024, 3, 24),
    ),
    (
        "Diana Prince",
        5,
        "Highly recommend!",
        "Fast delivery and excellent quality. Very impressed.",
        (2024, 3, 25),
    ),
];

/// Returns the sample reviews in catalog order.
pub fn sample_reviews() -> Vec<Review> {
    CATALOG
        .iter()
        .map(|&(author, rating, title, content, (y, m, d))| Review {
            author: author.to_string(),
            rating,
            title: title.to_string(),
            content: content.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        })
        .collect()
}

/// The catalog with its aggregate statistics.
pub fn catalog_bundle() -> ReviewBundle {
    ReviewBundle::from_reviews(sample_reviews())
}
