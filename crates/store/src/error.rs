use thiserror::Error;

/// Errors that can occur when interacting with a key/value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key is not acceptable to the store.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Writing the value would push the store over its size limit.
    #[error("Quota exceeded writing {bytes} bytes to {key}")]
    QuotaExceeded { key: String, bytes: usize },

    /// The backend refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
