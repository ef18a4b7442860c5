pub mod pricing;
pub mod seatmap;
pub mod selection;
pub mod trips;

pub use pricing::{quote, quote_with_rate, PriceQuote, TAX_RATE};
pub use seatmap::{
    demo_layout, Deck, LayoutError, Seat, SeatLayout, SeatRow, SeatSlot, SeatStatus, SeatType,
};
pub use selection::{SeatToggle, SelectionSet};
pub use trips::TripCatalog;
