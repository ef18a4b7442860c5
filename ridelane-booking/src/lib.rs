pub mod manager;
pub mod orchestrator;
pub mod record;
pub mod repository;
pub mod roster;
pub mod workflow;

pub use manager::BookingManager;
pub use orchestrator::{MockPaymentAdapter, PaymentOrchestrator};
pub use record::{BookingRecord, BookingStatus};
pub use repository::BookingRepository;
pub use roster::{roster_is_complete, roster_issues, Gender, Passenger, RosterField, RosterIssue};
pub use workflow::{BookingFlow, BookingStep};
