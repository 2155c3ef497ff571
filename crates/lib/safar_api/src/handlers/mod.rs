//! Request handlers.

pub mod chat;
pub mod destinations;
pub mod health;
pub mod itinerary;
