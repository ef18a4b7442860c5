pub mod app_config;
pub mod booking_repo;
pub mod local_store;
pub mod session_repo;
pub mod tracking_repo;

pub use booking_repo::LocalBookingRepository;
pub use local_store::LocalStore;
pub use session_repo::LocalSessionRepository;
pub use tracking_repo::{StaticTrackingFeed, TrackingTicker};
