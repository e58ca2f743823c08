//! Ledger error types.

use common::ShowId;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No show with the given ID exists.
    #[error("Show not found: {0}")]
    ShowNotFound(ShowId),

    /// A stored collection could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store failed.
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
