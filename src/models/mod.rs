//! Request and Response models for the demo API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request parameters and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::StreamParams;
pub use responses::{CounterResponse, ErrorResponse, HealthResponse, StatsResponse};
