use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use ridelane_core::repository::TrackingRepository;
use ridelane_core::{BookingError, BookingResult};
use ridelane_shared::models::tracking::Coordinates;
use ridelane_shared::{Masked, TrackingRecord, TrackingStatus};

/// Static live-location table, keyed by booking id. No GPS integration;
/// a production feed would replace this behind the same trait.
pub struct StaticTrackingFeed {
    records: HashMap<String, TrackingRecord>,
}

impl StaticTrackingFeed {
    pub fn new(records: HashMap<String, TrackingRecord>) -> Self {
        Self { records }
    }

    /// The two simulated journeys the storefront ships with.
    pub fn seed_demo() -> Self {
        let s = str::to_string;
        let mut records = HashMap::new();
        records.insert(
            s("BK001234"),
            TrackingRecord {
                bus_number: s("KA-01-AB-1234"),
                route: s("Bangalore → Mumbai"),
                current_location: s("Pune Junction"),
                next_stop: s("Mumbai Central"),
                estimated_arrival: s("2024-01-15 14:30"),
                delay_minutes: 0,
                status: TrackingStatus::OnTime,
                coordinates: Coordinates {
                    lat: 18.5204,
                    lng: 73.8567,
                },
                completed_stops: vec![s("Bangalore"), s("Hubli"), s("Belgaum"), s("Kolhapur")],
                upcoming_stops: vec![s("Mumbai Central"), s("Mumbai")],
                driver_contact: Masked(s("+91 98765 43210")),
                last_updated: None,
            },
        );
        records.insert(
            s("BK001235"),
            TrackingRecord {
                bus_number: s("KA-02-CD-5678"),
                route: s("Delhi → Jaipur"),
                current_location: s("Gurgaon Toll Plaza"),
                next_stop: s("Jaipur Bus Stand"),
                estimated_arrival: s("2024-01-15 16:45"),
                delay_minutes: 15,
                status: TrackingStatus::Delayed,
                coordinates: Coordinates {
                    lat: 28.4595,
                    lng: 77.0266,
                },
                completed_stops: vec![s("Delhi")],
                upcoming_stops: vec![s("Jaipur Bus Stand"), s("Jaipur")],
                driver_contact: Masked(s("+91 98765 43211")),
                last_updated: None,
            },
        );
        Self::new(records)
    }
}

#[async_trait]
impl TrackingRepository for StaticTrackingFeed {
    async fn track(&self, booking_id: &str) -> BookingResult<TrackingRecord> {
        let mut record = self
            .records
            .get(booking_id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;
        record.last_updated = Some(Utc::now());
        Ok(record)
    }
}

/// Periodic re-stamp of a watched booking's tracking record, feeding a
/// `watch` channel the display layer can observe.
///
/// The underlying task is aborted when the ticker is dropped, so leaving
/// the tracking view cannot leak a background loop.
pub struct TrackingTicker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<Option<TrackingRecord>>,
}

impl TrackingTicker {
    pub fn start(
        feed: Arc<dyn TrackingRepository>,
        booking_id: String,
        period: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // First tick fires immediately; skip it so the refresh cadence
            // starts one full period after the initial lookup.
            interval.tick().await;
            loop {
                interval.tick().await;
                match feed.track(&booking_id).await {
                    Ok(record) => {
                        if tx.send(Some(record)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(booking_id = %booking_id, error = %e, "tracking refresh failed");
                        break;
                    }
                }
            }
        });
        Self { handle, rx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<TrackingRecord>> {
        self.rx.clone()
    }
}

impl Drop for TrackingTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_journeys_resolve_with_a_fresh_stamp() {
        let feed = StaticTrackingFeed::seed_demo();
        let record = feed.track("BK001234").await.unwrap();
        assert_eq!(record.status, TrackingStatus::OnTime);
        assert_eq!(record.current_location, "Pune Junction");
        assert!(record.last_updated.is_some());

        let delayed = feed.track("BK001235").await.unwrap();
        assert_eq!(delayed.status, TrackingStatus::Delayed);
        assert_eq!(delayed.delay_minutes, 15);
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let feed = StaticTrackingFeed::seed_demo();
        let err = feed.track("unknown").await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(id) if id == "unknown"));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_re_stamps_on_each_period() {
        let feed: Arc<dyn TrackingRepository> = Arc::new(StaticTrackingFeed::seed_demo());
        let ticker = TrackingTicker::start(feed, "BK001234".to_string(), Duration::from_secs(30));
        let mut rx = ticker.subscribe();

        tokio::time::sleep(Duration::from_secs(31)).await;
        rx.changed().await.unwrap();
        let first = rx.borrow_and_update().clone().unwrap().last_updated;

        tokio::time::sleep(Duration::from_secs(30)).await;
        rx.changed().await.unwrap();
        let second = rx.borrow_and_update().clone().unwrap().last_updated;
        assert!(second >= first);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ticker_stops_the_refresh() {
        let feed: Arc<dyn TrackingRepository> = Arc::new(StaticTrackingFeed::seed_demo());
        let ticker =
            TrackingTicker::start(feed, "BK001234".to_string(), Duration::from_secs(30));
        let mut rx = ticker.subscribe();
        drop(ticker);

        tokio::time::sleep(Duration::from_secs(90)).await;
        assert!(rx.changed().await.is_err());
    }
}
