//! Encoding of the ledger's collections for the key/value store.
//!
//! Each collection is one JSON array under one key. Dates travel as
//! RFC 3339 strings and are parsed back into `DateTime<Utc>` on load.

use serde::Serialize;
use serde::de::DeserializeOwned;
use store::KeyValueStore;

use crate::Result;

/// Encodes a collection as a JSON array.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Decodes a JSON array into a collection.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads and decodes the collection under `key`.
///
/// Returns `Ok(None)` when nothing is stored under the key.
pub fn load<T, S>(store: &S, key: &str) -> Result<Option<Vec<T>>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

/// Encodes and writes the collection under `key`.
pub fn save<T, S>(store: &S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = encode(items)?;
    store.set(key, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LedgerError;
    use crate::seed::default_shows;
    use chrono::Utc;
    use domain::MovieShow;
    use store::InMemoryStore;

    #[test]
    fn save_then_load() {
        let store = InMemoryStore::new();
        let shows = default_shows(Utc::now());

        save(&store, "shows", &shows).unwrap();
        let loaded: Vec<MovieShow> = load(&store, "shows").unwrap().unwrap();

        assert_eq!(loaded, shows);
    }

    #[test]
    fn missing_key_loads_none() {
        let store = InMemoryStore::new();
        let loaded: Option<Vec<MovieShow>> = load(&store, "shows").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_value_is_a_serialization_error() {
        let store = InMemoryStore::new();
        store.set("shows", "{not json").unwrap();

        let result: Result<Option<Vec<MovieShow>>> = load(&store, "shows");
        assert!(matches!(result, Err(LedgerError::Serialization(_))));
    }

    #[test]
    fn dates_are_iso_strings() {
        let shows = default_shows(Utc::now());
        let raw = encode(&shows).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let date = value[0]["showDate"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok());
    }
}
