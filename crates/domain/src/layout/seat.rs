//! Seats and their classification.

use common::SeatId;
use serde::{Deserialize, Serialize};

use crate::Money;

/// Comfort class of a seat. Every seat in a row shares one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    #[default]
    Standard,
    Premium,
    Vip,
    Recliner,
}

impl SeatType {
    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SeatType::Standard => "Standard",
            SeatType::Premium => "Premium",
            SeatType::Vip => "VIP",
            SeatType::Recliner => "Recliner",
        }
    }
}

impl std::fmt::Display for SeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reservation status of a seat.
///
/// ```text
/// Available ──► Booked
/// ```
///
/// `Selected` is carried for stored data that marks an in-progress pick;
/// the ledger itself only ever writes `Booked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    Available,
    Booked,
    Selected,
}

impl SeatStatus {
    /// Returns true if the seat can no longer be picked.
    pub fn is_booked(&self) -> bool {
        matches!(self, SeatStatus::Booked)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Booked => "booked",
            SeatStatus::Selected => "selected",
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single seat in a theater layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Row label followed by seat number.
    pub id: SeatId,

    /// Label of the row this seat belongs to.
    pub row: String,

    /// 1-based position within the row.
    pub number: u32,

    #[serde(rename = "type")]
    pub seat_type: SeatType,

    pub price: Money,

    pub status: SeatStatus,

    /// True when an aisle gap follows this seat.
    #[serde(default)]
    pub is_aisle: bool,
}

impl Seat {
    /// Returns true if the seat is still free to book.
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_type_labels() {
        assert_eq!(SeatType::Vip.to_string(), "VIP");
        assert_eq!(SeatType::Recliner.label(), "Recliner");
        assert_eq!(SeatType::default(), SeatType::Standard);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&SeatStatus::Booked).unwrap(),
            "\"booked\""
        );
        assert_eq!(serde_json::to_string(&SeatType::Vip).unwrap(), "\"vip\"");
    }

    #[test]
    fn test_seat_wire_shape() {
        let seat = Seat {
            id: SeatId::from("A1"),
            row: "A".to_string(),
            number: 1,
            seat_type: SeatType::Premium,
            price: Money::from_units(250),
            status: SeatStatus::Available,
            is_aisle: true,
        };

        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["id"], "A1");
        assert_eq!(json["type"], "premium");
        assert_eq!(json["isAisle"], true);
    }

    #[test]
    fn test_missing_aisle_flag_defaults_false() {
        let json = r#"{"id":"B2","row":"B","number":2,"type":"standard","price":15000,"status":"booked"}"#;
        let seat: Seat = serde_json::from_str(json).unwrap();
        assert!(!seat.is_aisle);
        assert!(seat.status.is_booked());
        assert!(!seat.is_available());
    }
}
