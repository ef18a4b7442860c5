use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use ridelane_booking::{BookingFlow, BookingManager, PaymentOrchestrator};
use ridelane_catalog::TripCatalog;
use ridelane_core::repository::{SessionRepository, TrackingRepository};
use ridelane_store::app_config::BusinessRules;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TripCatalog>,
    pub manager: Arc<BookingManager>,
    pub payments: Arc<PaymentOrchestrator>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub tracking: Arc<dyn TrackingRepository>,
    /// In-flight booking flows, one per started session. Single-user model;
    /// the map exists so concurrent handlers on one flow cannot interleave.
    pub flows: Arc<Mutex<HashMap<Uuid, BookingFlow>>>,
    pub rules: BusinessRules,
}
