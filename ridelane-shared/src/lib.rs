pub mod models;
pub mod pii;

pub use models::tracking::{TrackingRecord, TrackingStatus};
pub use models::trip::Trip;
pub use models::user::UserProfile;
pub use pii::Masked;
