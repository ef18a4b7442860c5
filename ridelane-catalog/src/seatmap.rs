use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Window,
    Aisle,
}

/// Occupancy as fixed by the search result. A seat being *selected* is not a
/// stored status; it is derived from SelectionSet membership.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    /// Deck letter + row number + column letter, e.g. `U1A`.
    pub id: String,
    pub seat_type: SeatType,
    pub status: SeatStatus,
}

/// One position in a row: either a seat or the aisle gap between seat pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeatSlot {
    Seat(Seat),
    Gap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRow {
    pub row_number: u32,
    pub slots: Vec<SeatSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub rows: Vec<SeatRow>,
}

/// The fixed seat layout of a bus for one trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatLayout {
    decks: Vec<Deck>,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Duplicate seat id in layout: {0}")]
    DuplicateSeatId(String),
}

impl SeatLayout {
    /// Build a layout, enforcing that seat ids are unique across all decks.
    pub fn new(decks: Vec<Deck>) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        for deck in &decks {
            for row in &deck.rows {
                for slot in &row.slots {
                    if let SeatSlot::Seat(seat) = slot {
                        if !seen.insert(seat.id.clone()) {
                            return Err(LayoutError::DuplicateSeatId(seat.id.clone()));
                        }
                    }
                }
            }
        }
        Ok(Self { decks })
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats().find(|seat| seat.id == seat_id)
    }

    /// All seats in layout order, skipping aisle gaps.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.decks
            .iter()
            .flat_map(|deck| deck.rows.iter())
            .flat_map(|row| row.slots.iter())
            .filter_map(|slot| match slot {
                SeatSlot::Seat(seat) => Some(seat),
                SeatSlot::Gap => None,
            })
    }

    pub fn available_count(&self) -> usize {
        self.seats()
            .filter(|seat| seat.status == SeatStatus::Available)
            .count()
    }
}

/// The two-deck demo coach every mock trip uses: five rows per deck, 2+2
/// seating with a center aisle, window seats on the outside.
pub fn demo_layout() -> SeatLayout {
    let occupied = ["U1B", "U2C", "U3D", "L1C", "L3A", "L4D"];

    let deck = |letter: char, name: &str| Deck {
        name: name.to_string(),
        rows: (1..=5)
            .map(|row_number| SeatRow {
                row_number,
                slots: ['A', 'B', 'C', 'D']
                    .into_iter()
                    .enumerate()
                    .flat_map(|(idx, col)| {
                        let id = format!("{letter}{row_number}{col}");
                        let seat = SeatSlot::Seat(Seat {
                            status: if occupied.contains(&id.as_str()) {
                                SeatStatus::Occupied
                            } else {
                                SeatStatus::Available
                            },
                            seat_type: if matches!(col, 'A' | 'D') {
                                SeatType::Window
                            } else {
                                SeatType::Aisle
                            },
                            id,
                        });
                        // Aisle gap between the B and C seat pairs.
                        if idx == 2 {
                            vec![SeatSlot::Gap, seat]
                        } else {
                            vec![seat]
                        }
                    })
                    .collect(),
            })
            .collect(),
    };

    SeatLayout::new(vec![deck('U', "Upper"), deck('L', "Lower")])
        .unwrap_or_else(|_| unreachable!("demo layout ids are unique by construction"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_layout_has_forty_unique_seats() {
        let layout = demo_layout();
        assert_eq!(layout.seats().count(), 40);
        assert_eq!(layout.available_count(), 34);
    }

    #[test]
    fn demo_layout_occupancy_matches_search_result() {
        let layout = demo_layout();
        assert_eq!(layout.seat("U1B").unwrap().status, SeatStatus::Occupied);
        assert_eq!(layout.seat("L3A").unwrap().status, SeatStatus::Occupied);
        assert_eq!(layout.seat("U1A").unwrap().status, SeatStatus::Available);
        assert_eq!(layout.seat("U1A").unwrap().seat_type, SeatType::Window);
        assert_eq!(layout.seat("U1B").unwrap().seat_type, SeatType::Aisle);
    }

    #[test]
    fn duplicate_seat_ids_are_rejected() {
        let seat = Seat {
            id: "U1A".to_string(),
            seat_type: SeatType::Window,
            status: SeatStatus::Available,
        };
        let deck = Deck {
            name: "Upper".to_string(),
            rows: vec![SeatRow {
                row_number: 1,
                slots: vec![SeatSlot::Seat(seat.clone()), SeatSlot::Seat(seat)],
            }],
        };
        assert!(matches!(
            SeatLayout::new(vec![deck]),
            Err(LayoutError::DuplicateSeatId(id)) if id == "U1A"
        ));
    }

    #[test]
    fn rows_keep_the_aisle_gap() {
        let layout = demo_layout();
        let first_row = &layout.decks()[0].rows[0];
        assert_eq!(first_row.slots.len(), 5);
        assert!(matches!(first_row.slots[2], SeatSlot::Gap));
    }
}
