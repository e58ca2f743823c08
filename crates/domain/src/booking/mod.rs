//! Booking records and seat selection.

mod record;
mod selection;

pub use record::{Booking, CONFIRMATION_PREFIX, confirmation_code};
pub use selection::SeatSelection;
