//! # safar_api
//!
//! HTTP API library for Safar, the Gujarat Travel Planner backend.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use safar_core::assistant::AssistantConfig;
use safar_core::catalog::DestinationCatalog;

use crate::error::AppError;
use crate::handlers::{chat, destinations, health, itinerary};

/// Shared application state passed to all handlers.
///
/// Everything here is immutable after startup; handlers only read.
#[derive(Clone)]
pub struct AppState {
    /// The destination catalog.
    pub catalog: Arc<DestinationCatalog>,
    /// Chat assistant configuration.
    pub assistant: AssistantConfig,
}

/// Builds the Axum router with all routes and shared state.
///
/// Every route allows cross-origin requests from any origin — the demo
/// front end is served from a different origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/search", get(destinations::search_handler))
        .route(
            "/api/generate-itinerary",
            post(itinerary::generate_itinerary_handler),
        )
        .route(
            "/api/destinations/{id}",
            get(destinations::get_destination_handler),
        )
        .route("/health", get(health::health_handler))
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(state)
}

/// Unmatched routes get the same JSON error shape as everything else.
async fn fallback_handler() -> AppError {
    AppError::NotFound("Endpoint not found".into())
}
