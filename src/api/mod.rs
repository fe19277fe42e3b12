//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Body and path extractors reporting [`crate::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
