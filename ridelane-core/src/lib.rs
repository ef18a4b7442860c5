pub mod payment;
pub mod repository;

/// Error taxonomy shared by the booking workflow and its collaborators.
///
/// Validation failures gate forward transitions rather than crash the flow;
/// lookup failures surface as inline not-found conditions.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("No such seat in this layout: {0}")]
    InvalidSeat(String),

    #[error("Seat is already occupied: {0}")]
    SeatUnavailable(String),

    #[error("Required details are incomplete: {0}")]
    ValidationIncomplete(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Local store unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid workflow transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Payment failed: {0}")]
    PaymentFailed(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
