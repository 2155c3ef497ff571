//! Itinerary models.

use serde::{Deserialize, Serialize};

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u32,
    pub title: String,
    pub description: String,
}
