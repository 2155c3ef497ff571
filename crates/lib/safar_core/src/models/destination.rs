//! Destination domain model.

use serde::{Deserialize, Serialize};

/// A point of interest in the destination catalog.
///
/// Serialized with camelCase field names (`bestTime`) to match the
/// front end's API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique identifier, stable for the process lifetime.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display category, e.g. "Religious", "Wildlife", "Beach".
    pub category: String,
    /// Score in the range 0.0–5.0.
    pub rating: f64,
    pub location: String,
    /// Recommended visiting window, e.g. "October to March".
    pub best_time: String,
}
