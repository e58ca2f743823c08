//! Row specifications.

use serde::{Deserialize, Serialize};

use super::SeatType;
use crate::Money;

/// Author-time description of one row of seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Row label, e.g. `A`.
    pub label: String,

    /// Number of seats in the row.
    pub seat_count: u32,

    /// Type shared by every seat in the row.
    #[serde(rename = "type")]
    pub seat_type: SeatType,

    /// Price shared by every seat in the row.
    pub price: Money,

    /// Seat numbers after which an aisle gap is inserted.
    #[serde(default)]
    pub aisle_after: Vec<u32>,
}

impl Row {
    /// Creates a row with no aisles.
    pub fn new(label: impl Into<String>, seat_count: u32, seat_type: SeatType, price: Money) -> Self {
        Self {
            label: label.into(),
            seat_count,
            seat_type,
            price,
            aisle_after: Vec::new(),
        }
    }

    /// Sets the seat numbers after which an aisle gap is inserted.
    pub fn with_aisles_after(mut self, aisle_after: impl Into<Vec<u32>>) -> Self {
        self.aisle_after = aisle_after.into();
        self
    }

    /// Returns true if an aisle gap follows seat `number`.
    pub fn has_aisle_after(&self, number: u32) -> bool {
        self.aisle_after.contains(&number)
    }
}

/// Returns the label for the row at `index`: `A`, `B`, … `Z`.
///
/// Returns `None` past the 26th row.
pub fn row_label(index: usize) -> Option<String> {
    const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    ALPHABET.get(index..index + 1).map(str::to_string)
}
