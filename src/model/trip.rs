//! Trip types: named scopes on the grid the explorer centers on.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A planned stay in one sector of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,

    /// Where the map centers while this trip is active.
    pub center: Coordinates,

    /// At most one trip in a collection is active.
    pub is_active: bool,
}

impl Trip {
    /// Make the trip with `id` the only active one.
    ///
    /// Returns `false` and leaves every trip untouched when no trip has `id`.
    pub fn activate(trips: &mut [Trip], id: &str) -> bool {
        if !trips.iter().any(|t| t.id == id) {
            return false;
        }
        for trip in trips {
            trip.is_active = trip.id == id;
        }
        true
    }

    /// The active trip, or the first trip when none is active.
    pub fn active(trips: &[Trip]) -> Option<&Trip> {
        trips.iter().find(|t| t.is_active).or_else(|| trips.first())
    }
}
