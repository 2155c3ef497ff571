//! Destination catalog — the immutable in-memory destination table.
//!
//! Built once at startup and shared read-only by every request handler.
//! There are no create/update/delete operations; alternate fixtures are
//! supplied by constructing a catalog from a different destination list.

use thiserror::Error;

use crate::models::destination::Destination;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate destination id: {0}")]
    DuplicateId(String),
}

/// Immutable collection of destinations, searchable by substring and id.
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Build a catalog from a destination list.
    ///
    /// Fails if two destinations share an id.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for dest in &destinations {
            if !seen.insert(dest.id.as_str()) {
                return Err(CatalogError::DuplicateId(dest.id.clone()));
            }
        }
        Ok(Self { destinations })
    }

    /// Build the sample Gujarat catalog shipped with the demo.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(sample_destinations())
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Case-insensitive substring search.
    ///
    /// A destination is kept when `destination_query` is empty or a substring
    /// of its name or description, AND `activity_query` is empty or a
    /// substring of its category. Insertion order is preserved; there is no
    /// ranking or pagination.
    pub fn search(&self, destination_query: &str, activity_query: &str) -> Vec<&Destination> {
        let dest_q = destination_query.to_lowercase();
        let act_q = activity_query.to_lowercase();

        self.destinations
            .iter()
            .filter(|d| {
                let dest_ok = dest_q.is_empty()
                    || d.name.to_lowercase().contains(&dest_q)
                    || d.description.to_lowercase().contains(&dest_q);
                let act_ok = act_q.is_empty() || d.category.to_lowercase().contains(&act_q);
                dest_ok && act_ok
            })
            .collect()
    }

    /// All destinations in insertion order.
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

fn dest(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    rating: f64,
    location: &str,
    best_time: &str,
) -> Destination {
    Destination {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category: category.into(),
        rating,
        location: location.into(),
        best_time: best_time.into(),
    }
}

/// The demo dataset: well-known Gujarat destinations.
fn sample_destinations() -> Vec<Destination> {
    vec![
        dest(
            "1",
            "Somnath Temple",
            "One of the twelve Jyotirlinga shrines of Lord Shiva",
            "Religious",
            4.8,
            "Somnath, Gujarat",
            "October to March",
        ),
        dest(
            "2",
            "Statue of Unity",
            "World's tallest statue at 182 meters",
            "Monument",
            4.9,
            "Kevadia, Gujarat",
            "October to February",
        ),
        dest(
            "3",
            "Gir National Park",
            "Only natural habitat of Asiatic lions",
            "Wildlife",
            4.7,
            "Gir, Gujarat",
            "December to March",
        ),
        dest(
            "4",
            "Dwarka",
            "Ancient city and one of the seven most sacred Hindu pilgrimage sites, known for the magnificent Dwarkadhish Temple",
            "Religious",
            4.8,
            "Dwarka, Gujarat",
            "October to March",
        ),
        dest(
            "5",
            "Diu Beaches",
            "Pristine coastal paradise with turquoise waters, palm-fringed beaches, and Portuguese colonial architecture",
            "Beach",
            4.6,
            "Diu",
            "October to May",
        ),
        dest(
            "6",
            "Rani ki Vav",
            "UNESCO World Heritage stepwell with intricate stone carvings, showcasing ancient Indian architecture and engineering",
            "Heritage",
            4.9,
            "Patan, Gujarat",
            "October to March",
        ),
        dest(
            "7",
            "Sabarmati Ashram",
            "Mahatma Gandhi's residence during the freedom struggle, now a peaceful museum preserving India's independence history",
            "Historical",
            4.7,
            "Ahmedabad, Gujarat",
            "October to March",
        ),
        dest(
            "8",
            "Rann of Kutch",
            "Vast white salt desert offering breathtaking sunset views, cultural festivals, and unique desert experiences",
            "Natural",
            4.9,
            "Kutch, Gujarat",
            "November to February",
        ),
    ]
}
