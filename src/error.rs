//! Error types for the review feed
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Review Error Enum ==
/// Unified error type for the review feed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReviewError {
    /// Transport failure or non-success status from the review endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Review endpoint returned a body that is not a valid review payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing or invalid endpoint / client settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReviewError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ReviewError::Network(msg) | ReviewError::Parse(msg) => {
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            ReviewError::Configuration(msg) | ReviewError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the review feed.
pub type Result<T> = std::result::Result<T, ReviewError>;
