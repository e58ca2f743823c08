//! Expansion of row specifications into concrete seats.

use common::SeatId;

use super::{Row, Seat, SeatStatus};

/// Expands rows into seats.
///
/// Seats come out in row order, then ascending seat number, each one
/// `Available`. A row of `seat_count` seats yields numbers `1..=seat_count`.
pub fn generate_seats(rows: &[Row]) -> Vec<Seat> {
    let capacity = rows.iter().map(|row| row.seat_count as usize).sum();
    let mut seats = Vec::with_capacity(capacity);

    for row in rows {
        for number in 1..=row.seat_count {
            seats.push(Seat {
                id: SeatId::for_seat(&row.label, number),
                row: row.label.clone(),
                number,
                seat_type: row.seat_type,
                price: row.price,
                status: SeatStatus::Available,
                is_aisle: row.has_aisle_after(number),
            });
        }
    }

    seats
}
