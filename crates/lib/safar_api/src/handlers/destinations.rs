//! Destination search and lookup handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use safar_core::models::destination::Destination;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring matched against destination name or description.
    #[serde(default)]
    pub destination: String,
    /// Substring matched against destination category.
    #[serde(default)]
    pub activity: String,
}

/// Response body for `GET /api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Destination>,
}

/// `GET /api/search` — filter the catalog by destination and activity.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let results: Vec<Destination> = state
        .catalog
        .search(&query.destination, &query.activity)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        destination = %query.destination,
        activity = %query.activity,
        hits = results.len(),
        "destination search"
    );

    Ok(Json(SearchResponse { results }))
}

/// `GET /api/destinations/{id}` — exact-match lookup by id.
pub async fn get_destination_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Destination>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Destination not found".into()))
}
