use std::sync::Arc;

use crate::{Result, StoreError};

/// Core trait for key/value string stores.
///
/// Values are opaque strings; callers own the encoding. Implementations
/// must treat `remove` of a missing key as success.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from the store.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Validates a key before it reaches a backend.
///
/// Keys must be non-empty and free of surrounding whitespace.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.trim() != key {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
