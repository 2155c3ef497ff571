//! # safar_core
//!
//! Core domain logic for Safar, the Gujarat Travel Planner backend.

pub mod assistant;
pub mod catalog;
pub mod itinerary;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
