//! Itinerary planning — fixed 5-day template, truncated to the requested
//! duration.
//!
//! Destination and activity preferences are accepted by the API but not yet
//! consulted; the plan comes from a fixed template until a real generator
//! replaces it. Requests longer than the template are capped at the template
//! length and logged, never padded or wrapped around.

use tracing::warn;

use crate::models::itinerary::ItineraryDay;

fn day(day: u32, title: &str, description: &str) -> ItineraryDay {
    ItineraryDay {
        day,
        title: title.into(),
        description: description.into(),
    }
}

/// The fixed 5-day Gujarat template.
pub fn template() -> Vec<ItineraryDay> {
    vec![
        day(
            1,
            "Ahmedabad Arrival",
            "Arrive in Ahmedabad, visit Sabarmati Ashram, explore local markets, try authentic Gujarati thali",
        ),
        day(
            2,
            "Statue of Unity",
            "Full day trip to the world's tallest statue, visit surrounding attractions and museum",
        ),
        day(
            3,
            "Dwarka Temple",
            "Visit the ancient Dwarkadhish Temple, explore the coastal town and beaches",
        ),
        day(
            4,
            "Gir National Park",
            "Safari experience to spot Asiatic lions, visit interpretation zone",
        ),
        day(
            5,
            "Rann of Kutch",
            "Experience the magical white desert, enjoy sunset, cultural performances",
        ),
    ]
}

/// Plan an itinerary of `duration` days.
///
/// Returns the first `duration` template entries; a duration beyond the
/// template length yields the whole template.
pub fn plan(duration: usize) -> Vec<ItineraryDay> {
    let mut days = template();
    if duration < days.len() {
        days.truncate(duration);
    } else if duration > days.len() {
        warn!(
            requested = duration,
            available = days.len(),
            "itinerary request exceeds template length, capping"
        );
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_truncates_to_requested_duration() {
        let days = plan(3);
        assert_eq!(days.len(), 3);
        let numbers: Vec<u32> = days.iter().map(|d| d.day).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn plan_zero_days_is_empty() {
        assert!(plan(0).is_empty());
    }

    #[test]
    fn plan_full_duration_returns_template_unmodified() {
        assert_eq!(plan(5), template());
    }

    #[test]
    fn plan_never_pads_beyond_template() {
        let days = plan(30);
        assert_eq!(days, template());
    }
}
