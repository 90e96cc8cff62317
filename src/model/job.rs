//! Job types: the listings on the grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A gig-work listing.
///
/// Generated once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique within a session.
    pub id: String,
    pub title: String,
    pub company: String,
    pub category: Category,

    /// Whole dollars per `pay_frequency`.
    pub pay: u32,
    pub pay_frequency: PayFrequency,
    pub description: String,

    /// Ordered; rendered in this order.
    pub tags: Vec<String>,
    pub location: Coordinates,
    pub address: String,
    pub distance_km: f64,
    pub shift: String,

    /// Open slots. Always at least one.
    pub spots: u8,
    pub image_url: String,

    /// Needs someone now.
    pub is_immediate: bool,
    pub contact_number: String,

    /// Single glyph shown on the map and in the list.
    pub icon: String,
}

impl Job {
    /// Pay with its unit, e.g. `$42/hour`.
    pub fn pay_label(&self) -> String {
        format!("${}/{}", self.pay, self.pay_frequency)
    }

    /// Distance with one decimal, e.g. `2.3km`.
    pub fn distance_label(&self) -> String {
        format!("{:.1}km", self.distance_km)
    }

    /// Start of the shift (`08:00` for `08:00 - 16:00`).
    pub fn shift_start(&self) -> &str {
        self.shift.split(' ').next().unwrap_or(&self.shift)
    }
}

/// The four kinds of work on the grid.
///
/// Closed on purpose: styles and filters match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Service,
    Physical,
    Technical,
    Creative,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Service,
        Self::Physical,
        Self::Technical,
        Self::Creative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Physical => "physical",
            Self::Technical => "technical",
            Self::Creative => "creative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often `pay` is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Hour,
    Day,
    Week,
    Gig,
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Gig => "gig",
        })
    }
}
