//! In-progress seat picks before a booking is made.

use common::SeatId;

use crate::Money;
use crate::layout::Seat;

/// Seats a user has picked but not yet booked, in pick order.
#[derive(Debug, Clone, Default)]
pub struct SeatSelection {
    seats: Vec<Seat>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `seat` in the selection.
    ///
    /// Booked seats are never selected. Returns true if the seat is selected
    /// after the call.
    pub fn toggle(&mut self, seat: &Seat) -> bool {
        if seat.status.is_booked() {
            return false;
        }

        if let Some(index) = self.seats.iter().position(|picked| picked.id == seat.id) {
            self.seats.remove(index);
            false
        } else {
            self.seats.push(seat.clone());
            true
        }
    }

    pub fn contains(&self, id: &SeatId) -> bool {
        self.seats.iter().any(|seat| &seat.id == id)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// IDs to pass to the ledger when booking.
    pub fn seat_ids(&self) -> Vec<SeatId> {
        self.seats.iter().map(|seat| seat.id.clone()).collect()
    }

    /// Seat IDs joined for display, e.g. `A1, A2`.
    pub fn ids_label(&self) -> String {
        self.seats
            .iter()
            .map(|seat| seat.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn total_price(&self) -> Money {
        self.seats.iter().map(|seat| seat.price).sum()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }
}
