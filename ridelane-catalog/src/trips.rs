use chrono::{NaiveDate, NaiveTime};
use ridelane_shared::Trip;
use uuid::Uuid;

/// In-memory trip catalog backing search. Seeded with simulated departures;
/// a live deployment would swap this for an operator inventory feed.
pub struct TripCatalog {
    trips: Vec<Trip>,
}

impl TripCatalog {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    /// The simulated departures the storefront ships with.
    pub fn seed_demo() -> Self {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default();
        let s = str::to_string;

        Self::new(vec![
            Trip {
                id: Uuid::new_v4(),
                operator: s("Express Lines"),
                bus_type: s("AC Sleeper"),
                origin: s("Mumbai"),
                destination: s("Pune"),
                travel_date: date,
                departure_time: time(22, 30),
                arrival_time: time(6, 0),
                price_per_seat: 1200,
                total_seats: 40,
                available_seats: 12,
                facilities: vec![s("AC"), s("WiFi"), s("Charging Port"), s("Blanket")],
                rating: 4.2,
            },
            Trip {
                id: Uuid::new_v4(),
                operator: s("Comfort Travels"),
                bus_type: s("AC Semi-Sleeper"),
                origin: s("Mumbai"),
                destination: s("Pune"),
                travel_date: date,
                departure_time: time(23, 45),
                arrival_time: time(7, 15),
                price_per_seat: 950,
                total_seats: 35,
                available_seats: 8,
                facilities: vec![s("AC"), s("Charging Port"), s("Water Bottle")],
                rating: 4.0,
            },
            Trip {
                id: Uuid::new_v4(),
                operator: s("Royal Coaches"),
                bus_type: s("Volvo Multi-Axle"),
                origin: s("Mumbai"),
                destination: s("Pune"),
                travel_date: date,
                departure_time: time(21, 0),
                arrival_time: time(5, 30),
                price_per_seat: 1500,
                total_seats: 45,
                available_seats: 15,
                facilities: vec![
                    s("AC"),
                    s("WiFi"),
                    s("Entertainment"),
                    s("Meals"),
                    s("Blanket"),
                ],
                rating: 4.5,
            },
        ])
    }

    pub fn all(&self) -> &[Trip] {
        &self.trips
    }

    pub fn find(&self, id: Uuid) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// Filter by origin, destination and travel date. Empty filters match
    /// everything; city names compare case-insensitively.
    pub fn search(
        &self,
        origin: Option<&str>,
        destination: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<&Trip> {
        let matches_city = |field: &str, wanted: Option<&str>| match wanted {
            Some(city) if !city.trim().is_empty() => field.eq_ignore_ascii_case(city.trim()),
            _ => true,
        };

        self.trips
            .iter()
            .filter(|trip| matches_city(&trip.origin, origin))
            .filter(|trip| matches_city(&trip.destination, destination))
            .filter(|trip| date.map_or(true, |d| trip.travel_date == d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_without_filters_returns_all_departures() {
        let catalog = TripCatalog::seed_demo();
        assert_eq!(catalog.search(None, None, None).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_on_cities() {
        let catalog = TripCatalog::seed_demo();
        let results = catalog.search(Some("mumbai"), Some("PUNE"), None);
        assert_eq!(results.len(), 3);

        let none = catalog.search(Some("Delhi"), None, None);
        assert!(none.is_empty());
    }

    #[test]
    fn search_honors_travel_date() {
        let catalog = TripCatalog::seed_demo();
        let wrong_day = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        assert!(catalog.search(None, None, Some(wrong_day)).is_empty());
    }

    #[test]
    fn find_resolves_seeded_ids() {
        let catalog = TripCatalog::seed_demo();
        let id = catalog.all()[0].id;
        assert_eq!(catalog.find(id).unwrap().operator, "Express Lines");
        assert!(catalog.find(Uuid::new_v4()).is_none());
    }
}
