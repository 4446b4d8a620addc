//! Hospital bed directory types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy state of a single hospital bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedStatus {
    Available,
    Occupied,
}

impl BedStatus {
    pub fn is_available(self) -> bool {
        matches!(self, BedStatus::Available)
    }

    /// Display label matching the app's bed cards.
    pub fn label(self) -> &'static str {
        match self {
            BedStatus::Available => "Available",
            BedStatus::Occupied => "Occupied",
        }
    }
}

/// One bed in the hospital directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalBed {
    pub id: String,
    /// Display name, e.g. "Bed A".
    pub name: String,
    pub status: BedStatus,
    /// When the availability was last checked (UTC).
    pub checked_at: DateTime<Utc>,
}

/// Availability counts across a bed directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BedSummary {
    pub available: usize,
    pub occupied: usize,
}

impl BedSummary {
    /// Count availability over a bed slice.
    pub fn of(beds: &[HospitalBed]) -> Self {
        let available = beds.iter().filter(|b| b.status.is_available()).count();
        Self {
            available,
            occupied: beds.len() - available,
        }
    }

    pub fn total(self) -> usize {
        self.available + self.occupied
    }
}
