use std::sync::Arc;

use crate::orchestrator::PaymentOrchestrator;
use crate::record::{BookingRecord, BookingStatus};
use crate::repository::BookingRepository;
use crate::workflow::BookingFlow;
use ridelane_core::payment::PaymentMethod;
use ridelane_core::{BookingError, BookingResult};

/// Front door to the booking record store: finalizes paid flows and handles
/// the admin-side status transitions.
pub struct BookingManager {
    repo: Arc<dyn BookingRepository>,
}

impl BookingManager {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Drive a flow through payment and persist the resulting record.
    /// Exactly one record is appended per successful charge.
    pub async fn finalize(
        &self,
        flow: &mut BookingFlow,
        payments: &PaymentOrchestrator,
        method: PaymentMethod,
        user_id: Option<String>,
    ) -> BookingResult<BookingRecord> {
        let record = flow.pay(payments, method, user_id).await?;
        self.repo.append(&record).await?;
        tracing::info!(booking_id = %record.id, seats = record.selected_seats.len(), "booking stored");
        Ok(record)
    }

    pub async fn find(&self, id: &str) -> BookingResult<BookingRecord> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }

    pub async fn list(&self) -> BookingResult<Vec<BookingRecord>> {
        self.repo.list().await
    }

    /// Admin-only status change. Confirmed bookings may complete, cancel or
    /// fall back to pending; pending ones may confirm or cancel. Completed
    /// and cancelled are terminal. Records are never removed.
    pub async fn transition_status(&self, id: &str, to: BookingStatus) -> BookingResult<()> {
        let record = self.find(id).await?;
        let allowed = matches!(
            (record.status, to),
            (
                BookingStatus::Confirmed,
                BookingStatus::Completed | BookingStatus::Cancelled | BookingStatus::Pending
            ) | (
                BookingStatus::Pending,
                BookingStatus::Confirmed | BookingStatus::Cancelled
            )
        );
        if !allowed {
            return Err(BookingError::InvalidTransition {
                from: record.status.to_string(),
                to: to.to_string(),
            });
        }
        self.repo.update_status(id, to).await?;
        tracing::info!(booking_id = id, from = %record.status, to = %to, "booking status changed");
        Ok(())
    }
}
