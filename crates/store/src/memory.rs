use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    Result, StoreError,
    store::{KeyValueStore, validate_key},
};

/// In-memory key/value store.
///
/// Clones share the same underlying map, so a test can keep a handle to a
/// store while the ledger owns another. An optional quota caps the total
/// size (keys plus values, in bytes) the store will hold.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<DashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryStore {
    /// Creates a new empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty store that rejects writes beyond `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bytes currently held, excluding `skip_key`.
    fn used_bytes_excluding(&self, skip_key: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.key() != skip_key)
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).map(|value| value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        if let Some(quota) = self.quota_bytes {
            let bytes = key.len() + value.len();
            if self.used_bytes_excluding(key) + bytes > quota {
                tracing::warn!(key, bytes, quota, "store quota exceeded");
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    bytes,
                });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
