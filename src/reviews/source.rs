//! Review data source.
//!
//! Fetches review data from an HTTP endpoint and parses it into `Review`s.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::Review;
use crate::error::{Result, ReviewError};

/// Anything that can produce the current review list.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetches the review list. Fails with `Network` or `Parse`.
    async fn fetch(&self) -> Result<Vec<Review>>;
}

// == HTTP Review Source ==
/// Reads reviews from a JSON endpoint with a single GET per fetch.
#[derive(Debug, Clone)]
pub struct HttpReviewSource {
    client: Client,
    endpoint: Url,
}

impl HttpReviewSource {
    /// Creates a source for `endpoint`.
    ///
    /// `timeout` of None keeps the transport default.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        if endpoint.trim().is_empty() {
            return Err(ReviewError::Configuration(
                "Review endpoint is not configured".to_string(),
            ));
        }

        let endpoint = Url::parse(endpoint).map_err(|e| {
            ReviewError::Configuration(format!("Invalid review endpoint '{}': {}", endpoint, e))
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ReviewError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewSource for HttpReviewSource {
    async fn fetch(&self) -> Result<Vec<Review>> {
        debug!("Fetching reviews from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| ReviewError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Network(format!(
                "Review endpoint returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReviewError::Network(e.to_string()))?;

        parse_reviews(&body)
    }
}

// == Parsing ==
/// Parses a response body into reviews.
///
/// Accepts either a bare JSON array of reviews or an object carrying a
/// `reviews` array. Any other well-formed JSON yields an empty list.
pub fn parse_reviews(body: &str) -> Result<Vec<Review>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ReviewError::Parse(e.to_string()))?;

    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("reviews") {
            Some(reviews @ Value::Array(_)) => reviews,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    let reviews: Vec<Review> =
        serde_json::from_value(list).map_err(|e| ReviewError::Parse(e.to_string()))?;

    for review in &reviews {
        review.validate()?;
    }

    Ok(reviews)
}


#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const TWO_REVIEWS: &str = r#"[
        {"author":"John Doe","rating":5,"title":"Excellent service!","content":"Great.","date":"2024-03-18"},
        {"author":"Jane Smith","rating":4,"title":"Good","content":"Slow shipping.","date":"2024-03-20"}
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let reviews = parse_reviews(TWO_REVIEWS).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].author, "John Doe");
        assert_eq!(reviews[1].rating, 4);
    }

    #[test]
    fn test_parse_bundle_object() {
        let body = format!(
            r#"{{"total_reviews":2,"average_rating":4.5,"average_rating_string":"Excellent","reviews":{}}}"#,
            TWO_REVIEWS
        );
        let reviews = parse_reviews(&body).unwrap();
        assert_eq!(reviews.len(), 2);
    }

    #[test]
    fn test_parse_non_list_is_empty() {
        assert!(parse_reviews(r#"{"status":"ok"}"#).unwrap().is_empty());
        assert!(parse_reviews(r#"{"reviews":"none"}"#).unwrap().is_empty());
        assert!(parse_reviews(r#""just a string""#).unwrap().is_empty());
        assert!(parse_reviews("null").unwrap().is_empty());
        assert!(parse_reviews("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(parse_reviews("{not json"), Err(ReviewError::Parse(_))));
    }

    #[test]
    fn test_parse_wrong_review_shape() {
        let body = r#"[{"author":"a","rating":"five","title":"t","content":"c","date":"2024-03-18"}]"#;
        assert!(matches!(parse_reviews(body), Err(ReviewError::Parse(_))));
    }

    #[test]
    fn test_parse_rating_out_of_range() {
        let body = r#"[{"author":"a","rating":9,"title":"t","content":"c","date":"2024-03-18"}]"#;
        assert!(matches!(parse_reviews(body), Err(ReviewError::Parse(_))));
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        assert!(matches!(
            HttpReviewSource::new("", None),
            Err(ReviewError::Configuration(_))
        ));
        assert!(matches!(
            HttpReviewSource::new("not a url", None),
            Err(ReviewError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET).path("/mock-reviews");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(TWO_REVIEWS);
        })
        .await;

        let source = HttpReviewSource::new(&server.url("/mock-reviews"), None).unwrap();
        assert_eq!(source.endpoint().path(), "/mock-reviews");
        let reviews = source.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/mock-reviews");
            then.status(503);
        })
        .await;

        let source = HttpReviewSource::new(&server.url("/mock-reviews"), None).unwrap();
        assert!(matches!(source.fetch().await, Err(ReviewError::Network(_))));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/mock-reviews");
            then.status(200).body("<html>oops</html>");
        })
        .await;

        let source = HttpReviewSource::new(&server.url("/mock-reviews"), None).unwrap();
        assert!(matches!(source.fetch().await, Err(ReviewError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let source = HttpReviewSource::new(
            "http://127.0.0.1:9/mock-reviews",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        assert!(matches!(source.fetch().await, Err(ReviewError::Network(_))));
    }
}
