//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `analysis`: Document analysis (fingerprint + statistics)
//! - `matching`: Similarity comparison against the index
//! - `records`: Stored record lookup and index statistics

pub mod analysis;
pub mod health;
pub mod matching;
pub mod records;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "Docsim Analysis Service",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Docsim Analysis Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /analyze",
            "GET /compare/{fingerprint}",
            "GET /records/{fingerprint}",
            "GET /stats",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound("no such route".to_string())
}
