use serde::{Deserialize, Serialize};

/// Tax fraction applied to the base fare.
pub const TAX_RATE: f64 = 0.05;

/// Fare breakdown for the current selection, in whole currency units.
/// Recomputed from scratch whenever the selection changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceQuote {
    pub base_fare: i64,
    pub taxes: i64,
    pub total: i64,
}

/// Price a selection: base fare is seat count times the per-seat fare,
/// taxes are the rounded 5% on top.
pub fn quote(seat_count: usize, per_seat_price: i64) -> PriceQuote {
    quote_with_rate(seat_count, per_seat_price, TAX_RATE)
}

pub fn quote_with_rate(seat_count: usize, per_seat_price: i64, tax_rate: f64) -> PriceQuote {
    let base_fare = seat_count as i64 * per_seat_price;
    let taxes = (base_fare as f64 * tax_rate).round() as i64;
    PriceQuote {
        base_fare,
        taxes,
        total: base_fare + taxes,
    }
}
