use serde::{Deserialize, Serialize};

use ridelane_shared::Masked;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// One traveller, positionally aligned with the selection: `roster[i]` rides
/// in the i-th selected seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub seat_id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub phone: Masked<String>,
    pub email: Masked<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterField {
    Name,
    Age,
    Phone,
    Email,
}

/// A field of one roster entry that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterIssue {
    pub index: usize,
    pub field: RosterField,
}

const MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 120;

/// Everything wrong with the roster, entry by entry. Name, age and phone are
/// required for everyone; email only for the first passenger, who receives
/// the booking confirmation.
pub fn roster_issues(roster: &[Passenger]) -> Vec<RosterIssue> {
    let mut issues = Vec::new();
    for (index, passenger) in roster.iter().enumerate() {
        if passenger.name.trim().is_empty() {
            issues.push(RosterIssue {
                index,
                field: RosterField::Name,
            });
        }
        if !(MIN_AGE..=MAX_AGE).contains(&passenger.age) {
            issues.push(RosterIssue {
                index,
                field: RosterField::Age,
            });
        }
        if passenger.phone.0.trim().is_empty() {
            issues.push(RosterIssue {
                index,
                field: RosterField::Phone,
            });
        }
        if index == 0 && passenger.email.0.trim().is_empty() {
            issues.push(RosterIssue {
                index,
                field: RosterField::Email,
            });
        }
    }
    issues
}

/// The forward-transition gate: true iff no entry has a missing or
/// out-of-range field. Re-evaluated on every edit; never raises.
pub fn roster_is_complete(roster: &[Passenger]) -> bool {
    roster_issues(roster).is_empty()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn passenger(seat_id: &str, name: &str, email: &str) -> Passenger {
        Passenger {
            seat_id: seat_id.to_string(),
            name: name.to_string(),
            age: 30,
            gender: Gender::Male,
            phone: Masked("+91 9876543210".to_string()),
            email: Masked(email.to_string()),
        }
    }

    #[test]
    fn complete_roster_passes() {
        let roster = vec![
            passenger("U1A", "John Doe", "john@example.com"),
            passenger("U1C", "Jane Doe", ""),
        ];
        assert!(roster_is_complete(&roster));
    }

    #[test]
    fn empty_name_fails() {
        let roster = vec![passenger("U1A", "  ", "john@example.com")];
        assert!(!roster_is_complete(&roster));
        assert_eq!(
            roster_issues(&roster),
            vec![RosterIssue {
                index: 0,
                field: RosterField::Name
            }]
        );
    }

    #[test]
    fn age_must_be_within_range() {
        let mut roster = vec![passenger("U1A", "John Doe", "john@example.com")];
        roster[0].age = 0;
        assert!(!roster_is_complete(&roster));
        roster[0].age = 121;
        assert!(!roster_is_complete(&roster));
        roster[0].age = 120;
        assert!(roster_is_complete(&roster));
    }

    #[test]
    fn phone_is_required_for_everyone() {
        let mut roster = vec![
            passenger("U1A", "John Doe", "john@example.com"),
            passenger("U1C", "Jane Doe", ""),
        ];
        roster[1].phone = Masked(String::new());
        assert!(!roster_is_complete(&roster));
    }

    #[test]
    fn only_the_contact_passenger_needs_email() {
        let roster = vec![
            passenger("U1A", "John Doe", ""),
            passenger("U1C", "Jane Doe", ""),
        ];
        let issues = roster_issues(&roster);
        assert_eq!(
            issues,
            vec![RosterIssue {
                index: 0,
                field: RosterField::Email
            }]
        );
    }
}
