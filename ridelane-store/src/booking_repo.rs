use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::local_store::{LocalStore, BOOKINGS_KEY};
use ridelane_booking::{BookingRecord, BookingRepository, BookingStatus};
use ridelane_core::{BookingError, BookingResult};

/// Booking record store over the local JSON file, mirroring the
/// `userBookings` array of the original storefront.
pub struct LocalBookingRepository {
    store: Arc<LocalStore>,
}

impl LocalBookingRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for LocalBookingRepository {
    async fn append(&self, record: &BookingRecord) -> BookingResult<()> {
        self.store.push(BOOKINGS_KEY, record).await
    }

    async fn find_by_id(&self, id: &str) -> BookingResult<Option<BookingRecord>> {
        let records = self.list().await?;
        Ok(records.into_iter().find(|record| record.id == id))
    }

    async fn list(&self) -> BookingResult<Vec<BookingRecord>> {
        Ok(self
            .store
            .get::<Vec<BookingRecord>>(BOOKINGS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> BookingResult<()> {
        let id = id.to_string();
        self.store
            .update(BOOKINGS_KEY, move |current| {
                let mut records: Vec<BookingRecord> = match current {
                    Value::Null => Vec::new(),
                    value => serde_json::from_value(value)
                        .map_err(|e| BookingError::StorageUnavailable(e.to_string()))?,
                };
                let record = records
                    .iter_mut()
                    .find(|record| record.id == id)
                    .ok_or_else(|| BookingError::NotFound(id.clone()))?;
                record.status = status;
                serde_json::to_value(records)
                    .map_err(|e| BookingError::StorageUnavailable(e.to_string()))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::tests::scratch_store;
    use ridelane_booking::{Gender, Passenger};
    use ridelane_catalog::quote;
    use ridelane_core::payment::PaymentMethod;
    use ridelane_shared::Masked;

    fn record_for_seats(seats: &[&str]) -> BookingRecord {
        let trip = ridelane_catalog::TripCatalog::seed_demo().all()[0].clone();
        let passengers = seats
            .iter()
            .enumerate()
            .map(|(i, seat)| Passenger {
                seat_id: seat.to_string(),
                name: format!("Passenger {}", i + 1),
                age: 30,
                gender: Gender::Other,
                phone: Masked("+91 9876543210".to_string()),
                email: Masked(if i == 0 {
                    "contact@example.com".to_string()
                } else {
                    String::new()
                }),
            })
            .collect();
        BookingRecord::new(
            trip,
            seats.iter().map(|s| s.to_string()).collect(),
            passengers,
            quote(seats.len(), 1200),
            PaymentMethod::Card,
            None,
        )
    }

    #[tokio::test]
    async fn append_and_list_preserve_insertion_order() {
        let repo = LocalBookingRepository::new(Arc::new(scratch_store("bookings-order")));
        let first = record_for_seats(&["U1A"]);
        let second = record_for_seats(&["L2B", "L2C"]);
        repo.append(&first).await.unwrap();
        repo.append(&second).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].selected_seats, ["L2B", "L2C"]);
    }

    #[tokio::test]
    async fn find_by_id_returns_the_record_unchanged() {
        let repo = LocalBookingRepository::new(Arc::new(scratch_store("bookings-find")));
        let record = record_for_seats(&["U1A", "U1C"]);
        repo.append(&record).await.unwrap();

        let found = repo.find_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(found.selected_seats, record.selected_seats);
        assert_eq!(found.quote, record.quote);
        assert_eq!(found.status, BookingStatus::Confirmed);

        assert!(repo.find_by_id("BK000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_status_rewrites_only_the_target() {
        let repo = LocalBookingRepository::new(Arc::new(scratch_store("bookings-status")));
        let mut keep = record_for_seats(&["U1A"]);
        let mut cancel = record_for_seats(&["L5A"]);
        // Same-millisecond records share a timestamp suffix; pin distinct ids.
        keep.id = "BK100001".to_string();
        cancel.id = "BK100002".to_string();
        repo.append(&keep).await.unwrap();
        repo.append(&cancel).await.unwrap();

        repo.update_status(&cancel.id, BookingStatus::Cancelled)
            .await
            .unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].status, BookingStatus::Confirmed);
        assert_eq!(listed[1].status, BookingStatus::Cancelled);

        let err = repo
            .update_status("BK000000", BookingStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }
}
