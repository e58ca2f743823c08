//! Booking ledger for the seat-booking core.
//!
//! This crate provides the stateful side of the system:
//! - [`BookingLedger`] owning the show and booking collections
//! - [`LedgerConfig`] for store keys and placeholder show details
//! - [`codec`] for the JSON encoding of stored collections
//! - [`seed`] for the default show set

pub mod codec;
pub mod config;
pub mod error;
pub mod ledger;
pub mod seed;

pub use config::{LedgerConfig, PlaceholderShow};
pub use error::{LedgerError, Result};
pub use ledger::BookingLedger;
pub use seed::{SEED_SHOW_ID, default_shows};
