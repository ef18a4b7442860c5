use serde::{Deserialize, Serialize};

use crate::seatmap::{SeatLayout, SeatStatus};
use ridelane_core::{BookingError, BookingResult};

/// What a toggle call did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Deselected,
}

/// The seats chosen for one booking attempt.
///
/// Insertion order is preserved: the first selected seat maps to the first
/// passenger slot. Pricing only ever looks at the count, so order does not
/// affect the quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    seats: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the seat if it is not selected, deselect it if it is.
    ///
    /// Rejects ids not present in the layout and seats that are occupied;
    /// a rejected toggle leaves the selection untouched. Toggling the same
    /// available seat twice restores the prior selection.
    pub fn toggle(&mut self, layout: &SeatLayout, seat_id: &str) -> BookingResult<SeatToggle> {
        let seat = layout
            .seat(seat_id)
            .ok_or_else(|| BookingError::InvalidSeat(seat_id.to_string()))?;

        if seat.status == SeatStatus::Occupied {
            return Err(BookingError::SeatUnavailable(seat_id.to_string()));
        }

        if let Some(pos) = self.seats.iter().position(|id| id == seat_id) {
            self.seats.remove(pos);
            Ok(SeatToggle::Deselected)
        } else {
            self.seats.push(seat_id.to_string());
            Ok(SeatToggle::Selected)
        }
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|id| id == seat_id)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seat ids in selection order.
    pub fn seat_ids(&self) -> &[String] {
        &self.seats
    }
}
