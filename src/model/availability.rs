//! Availability: when the user is willing to work.

use serde::{Deserialize, Serialize};

/// Four independent preferences. Only `immediate` narrows the job list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub morning: bool,
    pub night: bool,
    pub weekend: bool,
    pub immediate: bool,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            morning: true,
            night: false,
            weekend: false,
            immediate: true,
        }
    }
}

impl Availability {
    pub fn get(&self, flag: AvailabilityFlag) -> bool {
        match flag {
            AvailabilityFlag::Morning => self.morning,
            AvailabilityFlag::Night => self.night,
            AvailabilityFlag::Weekend => self.weekend,
            AvailabilityFlag::Immediate => self.immediate,
        }
    }

    pub fn toggle(&mut self, flag: AvailabilityFlag) {
        let slot = match flag {
            AvailabilityFlag::Morning => &mut self.morning,
            AvailabilityFlag::Night => &mut self.night,
            AvailabilityFlag::Weekend => &mut self.weekend,
            AvailabilityFlag::Immediate => &mut self.immediate,
        };
        *slot = !*slot;
    }
}

/// Names one field of [`Availability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityFlag {
    Morning,
    Night,
    Weekend,
    Immediate,
}

impl AvailabilityFlag {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Night, Self::Weekend, Self::Immediate];

    /// Label on the schedule screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Night => "NIGHT",
            Self::Weekend => "WEEKEND",
            Self::Immediate => "ASAP",
        }
    }
}
