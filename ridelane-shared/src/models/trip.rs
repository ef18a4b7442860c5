use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single scheduled bus departure a customer can book seats on.
///
/// The trip is immutable once a booking flow starts; a completed booking
/// carries its own snapshot of this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub operator: String,
    pub bus_type: String,
    pub origin: String,
    pub destination: String,
    pub travel_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    /// Fare for one seat, in whole currency units.
    pub price_per_seat: i64,
    pub total_seats: u32,
    pub available_seats: u32,
    pub facilities: Vec<String>,
    pub rating: f32,
}

impl Trip {
    /// Route label in the form the booking surfaces display, e.g. "Mumbai → Pune".
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    /// Travel time, accounting for overnight arrivals.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.arrival_time - self.departure_time).num_minutes();
        if minutes <= 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overnight_trip() -> Trip {
        Trip {
            id: Uuid::new_v4(),
            operator: "Express Lines".to_string(),
            bus_type: "AC Sleeper".to_string(),
            origin: "Mumbai".to_string(),
            destination: "Pune".to_string(),
            travel_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            departure_time: NaiveTime::from_hms_opt(22, 30, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            price_per_seat: 1200,
            total_seats: 40,
            available_seats: 12,
            facilities: vec!["AC".to_string(), "WiFi".to_string()],
            rating: 4.2,
        }
    }

    #[test]
    fn route_label_uses_arrow() {
        assert_eq!(overnight_trip().route(), "Mumbai → Pune");
    }

    #[test]
    fn overnight_duration_wraps_past_midnight() {
        assert_eq!(overnight_trip().duration_minutes(), 7 * 60 + 30);
    }
}
