//! Core data model for Gridwork.
//!
//! These types represent the city grid as the client sees it:
//! jobs, trips, availability, conversations, and the filter over the catalog.

mod availability;
mod conversation;
mod filter;
mod job;
mod trip;

use serde::{Deserialize, Serialize};

pub use availability::{Availability, AvailabilityFlag};
pub use conversation::{Conversation, Message, Presence};
pub use filter::{CategoryFilter, FilterState};
pub use job::{Category, Job, PayFrequency};
pub use trip::Trip;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
