//! Theater layout: row specification plus the seats generated from it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::{LayoutId, SeatId};
use serde::{Deserialize, Serialize};

use super::{Row, ScreenSize, Seat, SeatStatus, SeatType, generate_seats};
use crate::Money;

/// A theater's seating specification and its generated seats.
///
/// Rows are the source of truth. Seats are always the expansion of the
/// current rows; only their statuses are independent state. Changing rows
/// through [`TheaterLayout::set_rows`] regenerates seats, and deserializing
/// a layout whose stored seats drifted from its rows repairs them the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LayoutRecord")]
pub struct TheaterLayout {
    id: LayoutId,
    name: String,
    screen_size: ScreenSize,
    rows: Vec<Row>,
    seats: Vec<Seat>,
    created_at: DateTime<Utc>,
}

/// Stored shape of a layout, before the seat/row invariant is enforced.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutRecord {
    id: LayoutId,
    name: String,
    #[serde(default)]
    screen_size: ScreenSize,
    rows: Vec<Row>,
    #[serde(default)]
    seats: Vec<Seat>,
    created_at: DateTime<Utc>,
}

impl From<LayoutRecord> for TheaterLayout {
    fn from(record: LayoutRecord) -> Self {
        let mut layout = TheaterLayout {
            id: record.id,
            name: record.name,
            screen_size: record.screen_size,
            rows: record.rows,
            seats: record.seats,
            created_at: record.created_at,
        };

        if !layout.is_consistent() {
            tracing::debug!(layout_id = %layout.id, "regenerating seats from rows");
            layout.regenerate_seats();
        }

        layout
    }
}

// Construction
impl TheaterLayout {
    /// Creates a layout, generating its seats from `rows`.
    pub fn new(
        id: LayoutId,
        name: impl Into<String>,
        screen_size: ScreenSize,
        rows: Vec<Row>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let seats = generate_seats(&rows);
        Self {
            id,
            name: name.into(),
            screen_size,
            rows,
            seats,
            created_at,
        }
    }

    /// Returns a copy under a new ID with every seat available again.
    pub fn duplicate(&self, id: LayoutId, created_at: DateTime<Utc>) -> Self {
        Self::new(
            id,
            self.name.clone(),
            self.screen_size,
            self.rows.clone(),
            created_at,
        )
    }
}

// Query methods
impl TheaterLayout {
    pub fn id(&self) -> &LayoutId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns all seats in row order, then ascending seat number.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a seat by ID.
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        self.seats.iter().find(|seat| &seat.id == id)
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn available_count(&self) -> usize {
        self.count_with_status(SeatStatus::Available)
    }

    pub fn booked_count(&self) -> usize {
        self.count_with_status(SeatStatus::Booked)
    }

    fn count_with_status(&self, status: SeatStatus) -> usize {
        self.seats.iter().filter(|seat| seat.status == status).count()
    }

    /// Groups seats by row label, keeping the order rows first appear in.
    pub fn seats_by_row(&self) -> Vec<(&str, Vec<&Seat>)> {
        let mut grouped: Vec<(&str, Vec<&Seat>)> = Vec::new();
        for seat in &self.seats {
            if let Some((label, seats)) = grouped.last_mut()
                && *label == seat.row
            {
                seats.push(seat);
                continue;
            }
            grouped.push((seat.row.as_str(), vec![seat]));
        }
        grouped
    }

    /// Lists each seat type present, with the first price seen for it.
    pub fn seat_type_prices(&self) -> Vec<(SeatType, Money)> {
        let mut prices: Vec<(SeatType, Money)> = Vec::new();
        for seat in &self.seats {
            if !prices.iter().any(|(seat_type, _)| *seat_type == seat.seat_type) {
                prices.push((seat.seat_type, seat.price));
            }
        }
        prices
    }

    /// Returns true if the seats are exactly the expansion of the rows.
    ///
    /// Only identity and row attributes are compared; statuses are free.
    pub fn is_consistent(&self) -> bool {
        let expected = generate_seats(&self.rows);
        expected.len() == self.seats.len()
            && expected.iter().zip(&self.seats).all(|(want, have)| {
                want.id == have.id
                    && want.row == have.row
                    && want.number == have.number
                    && want.seat_type == have.seat_type
                    && want.price == have.price
                    && want.is_aisle == have.is_aisle
            })
    }
}

// Mutation methods
impl TheaterLayout {
    /// Replaces the rows and regenerates the seats.
    ///
    /// Seats whose ID exists both before and after keep their status.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.regenerate_seats();
    }

    /// Marks every seat whose ID is in `seat_ids` as booked.
    ///
    /// Returns snapshots of the matched seats in layout order. IDs that do
    /// not exist in the layout are ignored, and seats that were already
    /// booked are matched again.
    pub fn mark_booked(&mut self, seat_ids: &[SeatId]) -> Vec<Seat> {
        let mut booked = Vec::new();
        for seat in self.seats.iter_mut() {
            if seat_ids.contains(&seat.id) {
                seat.status = SeatStatus::Booked;
                booked.push(seat.clone());
            }
        }
        booked
    }

    /// Puts every seat back to `Available`.
    pub fn release_all(&mut self) {
        for seat in self.seats.iter_mut() {
            seat.status = SeatStatus::Available;
        }
    }

    fn regenerate_seats(&mut self) {
        let previous: HashMap<SeatId, SeatStatus> = self
            .seats
            .drain(..)
            .map(|seat| (seat.id, seat.status))
            .collect();

        self.seats = generate_seats(&self.rows);
        for seat in self.seats.iter_mut() {
            if let Some(status) = previous.get(&seat.id) {
                seat.status = *status;
            }
        }
    }
}
