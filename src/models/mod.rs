//! Request and Response models for the review feed API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::BlockConfigRequest;
pub use responses::{
    BlockConfigResponse, ClearCacheResponse, ErrorResponse, HealthResponse, StatsResponse,
};
