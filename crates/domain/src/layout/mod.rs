//! Theater layouts and the seats generated from them.

mod draft;
mod generator;
mod row;
mod screen;
mod seat;
mod theater;

pub use draft::{LayoutDraft, format_aisle_after, parse_aisle_after};
pub use generator::generate_seats;
pub use row::{Row, row_label};
pub use screen::{ScreenConfig, ScreenSize};
pub use seat::{Seat, SeatStatus, SeatType};
pub use theater::TheaterLayout;
