//! Itinerary generation handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use safar_core::itinerary;
use safar_core::models::itinerary::ItineraryDay;

use crate::error::{AppError, AppResult};

/// Request body for `POST /api/generate-itinerary`.
///
/// `destination` and `activity` are accepted but not yet consulted; they are
/// reserved for a future personalized generator.
#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    /// Number of days to plan. Defaults to 5.
    #[serde(default)]
    pub duration: Option<i64>,
}

/// Response body: the generated day-by-day plan.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: Vec<ItineraryDay>,
}

/// `POST /api/generate-itinerary` — plan a trip of the requested length.
pub async fn generate_itinerary_handler(
    body: Result<Json<ItineraryRequest>, JsonRejection>,
) -> AppResult<Json<ItineraryResponse>> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    // Negative durations clamp to an empty plan.
    let duration = req.duration.unwrap_or(5).max(0) as usize;

    Ok(Json(ItineraryResponse {
        itinerary: itinerary::plan(duration),
    }))
}
