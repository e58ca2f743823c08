//! Key/value persistence for the seat-booking core.
//!
//! The ledger only ever needs string values under string keys, so the
//! storage contract is deliberately narrow: [`KeyValueStore`] exposes
//! get/set/remove and [`InMemoryStore`] implements it.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use store::{KeyValueStore, validate_key};
