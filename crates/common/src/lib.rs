//! Shared types for the seat-booking core.

mod types;

pub use types::{BookingId, LayoutId, SeatId, ShowId};
