//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::error::AppResult;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /health` — always healthy; no dependency probing.
pub async fn health_handler() -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy",
        message: "Gujarat Travel Planner API is running",
    }))
}
