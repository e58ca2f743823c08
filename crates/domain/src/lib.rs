//! Domain layer for the seat-booking core.
//!
//! This crate provides the pure, synchronous building blocks:
//! - Row specifications and the seat generator
//! - Theater layouts that keep seats consistent with their rows
//! - Layout drafts for authoring new shows
//! - Shows, bookings, confirmation codes and seat selection

pub mod booking;
pub mod error;
pub mod layout;
pub mod money;
pub mod show;

pub use booking::{Booking, SeatSelection, confirmation_code};
pub use error::ValidationError;
pub use layout::{
    LayoutDraft, Row, ScreenConfig, ScreenSize, Seat, SeatStatus, SeatType, TheaterLayout,
    generate_seats,
};
pub use money::Money;
pub use show::{MovieShow, ShowUpdate};
