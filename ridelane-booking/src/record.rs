use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roster::Passenger;
use ridelane_catalog::PriceQuote;
use ridelane_core::payment::PaymentMethod;
use ridelane_shared::Trip;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
    Pending,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Pending => "pending",
        };
        write!(f, "{tag}")
    }
}

/// A completed booking, created exactly once at payment completion.
///
/// Immutable afterwards except for admin status transitions; cancellation is
/// a status change, never a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub trip: Trip,
    pub selected_seats: Vec<String>,
    pub passengers: Vec<Passenger>,
    pub quote: PriceQuote,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    pub fn new(
        trip: Trip,
        selected_seats: Vec<String>,
        passengers: Vec<Passenger>,
        quote: PriceQuote,
        payment_method: PaymentMethod,
        user_id: Option<String>,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: booking_id_for(created_at.timestamp_millis()),
            trip,
            selected_seats,
            passengers,
            quote,
            payment_method,
            status: BookingStatus::Confirmed,
            user_id,
            created_at,
        }
    }
}

/// `BK` plus the last six digits of a millisecond timestamp. The source is
/// monotonically increasing but the suffix wraps, so ids are not globally
/// unique under rapid successive bookings; the store never deduplicates.
pub fn booking_id_for(timestamp_millis: i64) -> String {
    let digits = timestamp_millis.unsigned_abs().to_string();
    let suffix = &digits[digits.len().saturating_sub(6)..];
    format!("BK{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_uses_last_six_timestamp_digits() {
        assert_eq!(booking_id_for(1_736_899_123_456), "BK123456");
        assert_eq!(booking_id_for(1_736_899_000_042), "BK000042");
    }

    #[test]
    fn short_sources_keep_every_digit() {
        assert_eq!(booking_id_for(1234), "BK1234");
    }

    #[test]
    fn status_tags_match_store_format() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(BookingStatus::Cancelled.to_string(), "cancelled");
    }
}
