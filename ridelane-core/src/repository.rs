use async_trait::async_trait;
use ridelane_shared::{TrackingRecord, UserProfile};

use crate::BookingResult;

/// Access to the signed-in user profile (the `user` key of the local store).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn load_user(&self) -> BookingResult<Option<UserProfile>>;

    async fn save_user(&self, profile: &UserProfile) -> BookingResult<()>;
}

/// Lookup into the simulated live-location feed.
#[async_trait]
pub trait TrackingRepository: Send + Sync {
    /// Resolve a booking id to its tracking record, stamping the
    /// last-updated time. Unknown ids fail with `NotFound`.
    async fn track(&self, booking_id: &str) -> BookingResult<TrackingRecord>;
}
