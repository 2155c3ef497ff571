//! Rule-based responder — ordered keyword rules over canned responses.
//!
//! The last message is lowercased and trimmed, then matched against each
//! rule's keyword set in priority order; the first matching rule wins.
//! Single-word keywords match whole words only (so "hi" greets but "which"
//! does not); multi-word keywords match as phrases.

use std::collections::HashSet;

use crate::models::chat::ChatMessage;

/// One classification rule: keyword set plus its canned response.
struct Rule {
    keywords: &'static [&'static str],
    response: &'static str,
}

const GREETING: &str = "\
Namaste! I'm your Gujarat travel assistant.

I can help you plan your trip, suggest destinations, create itineraries, and answer questions about Gujarat. What would you like to explore?";

const SIGHTSEEING: &str = "\
Gujarat has incredible places to visit!

Top picks:
- Somnath Temple — one of the twelve Jyotirlinga shrines, right on the Arabian Sea
- Statue of Unity — the world's tallest statue at 182 meters
- Gir National Park — the only natural habitat of Asiatic lions
- Rann of Kutch — a vast white salt desert, magical at sunset

Tell me what kind of experience you're after and I can narrow it down.";

const FOOD: &str = "\
Gujarati food is a highlight of any trip!

Don't miss:
- A traditional Gujarati thali — unlimited rotli, dal, shaak, and farsan
- Dhokla and khandvi — steamed savory snacks
- Fafda-jalebi — the classic Sunday breakfast
- Undhiyu — a winter specialty of mixed vegetables

Ahmedabad's Manek Chowk night market is the best place to sample street food.";

const WEATHER: &str = "\
The best time to visit Gujarat is October to March.

- Winter (November to February): pleasant days, cool evenings, ideal for sightseeing
- The Rann Utsav festival runs November to February in the white desert
- Summers (April to June) are hot, often above 40°C
- Monsoon (July to September) brings rain and lush landscapes

Plan wildlife safaris for December to March when sightings are best.";

const TRANSPORT: &str = "\
Getting around Gujarat is easy!

- Ahmedabad has the main international airport
- Trains connect all major cities: Ahmedabad, Vadodara, Rajkot, Surat
- State buses (GSRTC) and private coaches cover smaller towns
- Taxis and self-drive cars work well for multi-stop itineraries

For the Rann of Kutch, the nearest station is Bhuj, about 80 km away.";

const DEFAULT: &str = "\
I'm here to help you plan your Gujarat trip!

You can ask me about:
- Places to visit and sightseeing highlights
- Local food and what to try
- The best time to visit and the weather
- How to get around

Or use the search to explore destinations.";

/// Priority-ordered rules; the first match wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["hello", "hi", "hey", "namaste", "greetings"],
        response: GREETING,
    },
    Rule {
        keywords: &[
            "place",
            "places",
            "visit",
            "see",
            "sightseeing",
            "attraction",
            "attractions",
            "destination",
            "destinations",
            "temple",
            "beach",
        ],
        response: SIGHTSEEING,
    },
    Rule {
        keywords: &[
            "food",
            "cuisine",
            "restaurant",
            "restaurants",
            "thali",
            "dish",
            "dishes",
            "snack",
            "hungry",
        ],
        response: FOOD,
    },
    Rule {
        keywords: &[
            "weather",
            "climate",
            "season",
            "temperature",
            "monsoon",
            "winter",
            "summer",
            "best time",
        ],
        response: WEATHER,
    },
    Rule {
        keywords: &[
            "transport",
            "transportation",
            "travel",
            "reach",
            "train",
            "flight",
            "flights",
            "bus",
            "taxi",
            "airport",
            "drive",
        ],
        response: TRANSPORT,
    },
];

/// Reply to a conversation using the keyword rules.
///
/// Only the content of the last message is consulted; an empty history
/// falls through to the default helper response.
pub fn reply(history: &[ChatMessage]) -> String {
    let last = history.last().map(|m| m.content.as_str()).unwrap_or("");
    classify(last).to_string()
}

fn classify(content: &str) -> &'static str {
    let normalized = content.trim().to_lowercase();
    let words: HashSet<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    for rule in RULES {
        let matched = rule.keywords.iter().any(|kw| {
            if kw.contains(' ') {
                normalized.contains(kw)
            } else {
                words.contains(kw)
            }
        });
        if matched {
            return rule.response;
        }
    }
    DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;

    fn user(content: &str) -> ChatMessage {
        ChatMessage {
            role: Role::User,
            content: content.into(),
        }
    }

    #[test]
    fn greeting_matches_hi() {
        assert_eq!(reply(&[user("Hi")]), GREETING);
        assert_eq!(reply(&[user("  NAMASTE  ")]), GREETING);
    }

    #[test]
    fn greeting_does_not_match_inside_words() {
        // "which" contains "hi" but is not a greeting.
        assert_eq!(reply(&[user("which month is coldest")]), DEFAULT);
    }

    #[test]
    fn food_question_gets_food_response() {
        assert_eq!(reply(&[user("what food should I try")]), FOOD);
    }

    #[test]
    fn sightseeing_outranks_food() {
        // Both sets match; sightseeing has higher priority.
        assert_eq!(reply(&[user("places with good food")]), SIGHTSEEING);
    }

    #[test]
    fn weather_phrase_matches() {
        assert_eq!(reply(&[user("when is the best time to go")]), WEATHER);
    }

    #[test]
    fn transport_question_gets_transport_response() {
        assert_eq!(reply(&[user("how do I reach Bhuj by train")]), TRANSPORT);
    }

    #[test]
    fn unrecognized_text_gets_default_menu() {
        assert_eq!(reply(&[user("xyz")]), DEFAULT);
    }

    #[test]
    fn only_the_last_message_is_consulted() {
        let history = [user("what food should I try"), user("Hi")];
        assert_eq!(reply(&history), GREETING);
    }

    #[test]
    fn empty_history_falls_back_to_default() {
        assert_eq!(reply(&[]), DEFAULT);
    }

    #[test]
    fn replies_are_deterministic() {
        assert_eq!(reply(&[user("Hi")]), reply(&[user("Hi")]));
    }
}
