use async_trait::async_trait;

use crate::record::{BookingRecord, BookingStatus};
use ridelane_core::BookingResult;

/// Append-only persistence for completed bookings.
///
/// Single-user, single-writer model; implementations backed by a shared
/// store must still perform read-modify-write atomically so appends are
/// never lost.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Add a record to the end of the collection. Never overwrites, even if
    /// an id collides.
    async fn append(&self, record: &BookingRecord) -> BookingResult<()>;

    async fn find_by_id(&self, id: &str) -> BookingResult<Option<BookingRecord>>;

    /// All records in insertion order.
    async fn list(&self) -> BookingResult<Vec<BookingRecord>>;

    /// Overwrite the status of an existing record. `NotFound` for unknown
    /// ids. Transition policy is enforced by the manager, not here.
    async fn update_status(&self, id: &str, status: BookingStatus) -> BookingResult<()>;
}
