use serde::{Deserialize, Serialize};

use crate::orchestrator::PaymentOrchestrator;
use crate::record::BookingRecord;
use crate::roster::{roster_is_complete, Passenger};
use ridelane_catalog::{quote_with_rate, PriceQuote, SeatLayout, SeatToggle, SelectionSet, TAX_RATE};
use ridelane_core::payment::PaymentMethod;
use ridelane_core::{BookingError, BookingResult};
use ridelane_shared::Trip;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    SelectingSeats,
    EnteringPassengers,
    Paying,
    Confirmed,
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookingStep::SelectingSeats => "selecting_seats",
            BookingStep::EnteringPassengers => "entering_passengers",
            BookingStep::Paying => "paying",
            BookingStep::Confirmed => "confirmed",
        };
        write!(f, "{name}")
    }
}

/// One booking attempt, from seat selection through payment.
///
/// Steps only advance through their guards; the single backward edge returns
/// from passenger entry to seat selection with the selection intact. A flow
/// that reaches `Confirmed` is spent and cannot start a second booking.
pub struct BookingFlow {
    trip: Trip,
    layout: SeatLayout,
    selection: SelectionSet,
    roster: Vec<Passenger>,
    step: BookingStep,
    tax_rate: f64,
}

impl BookingFlow {
    pub fn new(trip: Trip, layout: SeatLayout) -> Self {
        Self::with_tax_rate(trip, layout, TAX_RATE)
    }

    /// Flow with a configured tax fraction instead of the standard 5%.
    pub fn with_tax_rate(trip: Trip, layout: SeatLayout, tax_rate: f64) -> Self {
        Self {
            trip,
            layout,
            selection: SelectionSet::new(),
            roster: Vec::new(),
            step: BookingStep::SelectingSeats,
            tax_rate,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn layout(&self) -> &SeatLayout {
        &self.layout
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Fare for the current selection, recomputed on every call.
    pub fn quote(&self) -> PriceQuote {
        quote_with_rate(self.selection.len(), self.trip.price_per_seat, self.tax_rate)
    }

    fn require_step(&self, expected: BookingStep, target: &str) -> BookingResult<()> {
        if self.step != expected {
            return Err(BookingError::InvalidTransition {
                from: self.step.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    /// Toggle a seat in or out of the selection. Only legal while selecting.
    pub fn toggle_seat(&mut self, seat_id: &str) -> BookingResult<SeatToggle> {
        self.require_step(BookingStep::SelectingSeats, "toggle_seat")?;
        let toggled = self.selection.toggle(&self.layout, seat_id)?;
        tracing::debug!(seat_id, ?toggled, selected = self.selection.len(), "seat toggled");
        Ok(toggled)
    }

    /// `SelectingSeats → EnteringPassengers`; requires at least one seat.
    pub fn proceed_to_passengers(&mut self) -> BookingResult<()> {
        self.require_step(BookingStep::SelectingSeats, "entering_passengers")?;
        if self.selection.is_empty() {
            return Err(BookingError::ValidationIncomplete(
                "select at least one seat".to_string(),
            ));
        }
        self.step = BookingStep::EnteringPassengers;
        Ok(())
    }

    /// The one backward edge. The selection survives the trip back.
    pub fn back_to_seats(&mut self) -> BookingResult<()> {
        self.require_step(BookingStep::EnteringPassengers, "selecting_seats")?;
        self.step = BookingStep::SelectingSeats;
        Ok(())
    }

    /// `EnteringPassengers → Paying`; the roster must align with the
    /// selection positionally and pass completeness validation.
    pub fn submit_roster(&mut self, roster: Vec<Passenger>) -> BookingResult<()> {
        self.require_step(BookingStep::EnteringPassengers, "paying")?;

        let aligned = roster.len() == self.selection.len()
            && roster
                .iter()
                .zip(self.selection.seat_ids())
                .all(|(passenger, seat_id)| &passenger.seat_id == seat_id);
        if !aligned {
            return Err(BookingError::ValidationIncomplete(
                "roster does not match the selected seats".to_string(),
            ));
        }
        if !roster_is_complete(&roster) {
            return Err(BookingError::ValidationIncomplete(
                "passenger details are incomplete".to_string(),
            ));
        }

        self.roster = roster;
        self.step = BookingStep::Paying;
        Ok(())
    }

    /// `Paying → Confirmed`: run the simulated charge, then materialize the
    /// booking record. On success the flow is torn down; selection and
    /// roster are moved into the record and cannot be reused.
    pub async fn pay(
        &mut self,
        payments: &PaymentOrchestrator,
        method: PaymentMethod,
        user_id: Option<String>,
    ) -> BookingResult<BookingRecord> {
        self.require_step(BookingStep::Paying, "confirmed")?;

        let quote = self.quote();
        payments
            .charge(&self.trip.id.to_string(), quote.total, method)
            .await?;

        let selection = std::mem::take(&mut self.selection);
        let roster = std::mem::take(&mut self.roster);
        let record = BookingRecord::new(
            self.trip.clone(),
            selection.seat_ids().to_vec(),
            roster,
            quote,
            method,
            user_id,
        );
        self.step = BookingStep::Confirmed;
        tracing::info!(booking_id = %record.id, amount = quote.total, "booking confirmed");
        Ok(record)
    }
}
