use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pii::Masked;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrackingStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
}

impl std::fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackingStatus::OnTime => write!(f, "On Time"),
            TrackingStatus::Delayed => write!(f, "Delayed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Simulated live position of a bus, keyed by booking id.
///
/// The feed is static; only `last_updated` changes, stamped on every
/// successful lookup and refreshed by the tracking ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub bus_number: String,
    pub route: String,
    pub current_location: String,
    pub next_stop: String,
    pub estimated_arrival: String,
    pub delay_minutes: u32,
    pub status: TrackingStatus,
    pub coordinates: Coordinates,
    pub completed_stops: Vec<String>,
    pub upcoming_stops: Vec<String>,
    pub driver_contact: Masked<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&TrackingStatus::OnTime).unwrap(),
            "\"On Time\""
        );
        assert_eq!(
            serde_json::to_string(&TrackingStatus::Delayed).unwrap(),
            "\"Delayed\""
        );
    }
}
