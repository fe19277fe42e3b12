//! Cross-origin policy for browser clients.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Creates a CORS layer that admits a single browser origin.
///
/// Every response to a request from `allowed_origin` carries
/// `Access-Control-Allow-Origin: <allowed_origin>`. Preflight requests are
/// answered for the methods the user API exposes.
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("Invalid CORS origin '{}'", allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
