//! Booking records.

use chrono::{DateTime, Utc};
use common::{BookingId, SeatId, ShowId};
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::layout::Seat;
use crate::show::MovieShow;

/// Prefix of every confirmation code.
pub const CONFIRMATION_PREFIX: &str = "BOOKIT";

/// An immutable record of seats reserved against a show.
///
/// Show details and seats are copied at booking time, so later changes to
/// the show never alter a past booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub show_id: ShowId,
    pub movie_name: String,
    pub seats: Vec<Seat>,
    pub total_price: Money,
    pub show_time: String,
    pub show_date: DateTime<Utc>,
    #[serde(rename = "bookingDate")]
    pub booked_at: DateTime<Utc>,
    pub confirmation_code: String,
}

impl Booking {
    /// Builds the booking for `seats` reserved against `show` at `booked_at`.
    ///
    /// The total is the sum of the seat prices as given.
    pub fn for_show(show: &MovieShow, seats: Vec<Seat>, booked_at: DateTime<Utc>) -> Self {
        let total_price = seats.iter().map(|seat| seat.price).sum();
        let seat_ids: Vec<&SeatId> = seats.iter().map(|seat| &seat.id).collect();
        let confirmation_code = confirmation_code(booked_at, &seat_ids);

        Self {
            id: BookingId::new(),
            show_id: show.id.clone(),
            movie_name: show.movie_name.clone(),
            seats,
            total_price,
            show_time: show.show_time.clone(),
            show_date: show.show_date,
            booked_at,
            confirmation_code,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}

/// Derives the demonstration confirmation code for a booking.
///
/// Format: `BOOKIT-{unix millis}-{seat ids sorted and comma-joined}`. The
/// code is deterministic for a given time and seat set; it carries no
/// secret.
pub fn confirmation_code(booked_at: DateTime<Utc>, seat_ids: &[&SeatId]) -> String {
    let mut ids: Vec<&str> = seat_ids.iter().map(|id| id.as_str()).collect();
    ids.sort_unstable();

    format!(
        "{CONFIRMATION_PREFIX}-{}-{}",
        booked_at.timestamp_millis(),
        ids.join(",")
    )
}
