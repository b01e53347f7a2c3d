//! Persistent key-value storage
//!
//! All state lives under a handful of string keys, each holding a JSON
//! document (or the bare string `"true"` for the admin session flag).
//! Backends only need get/set/remove; JSON encoding happens here.

pub mod keys;
pub mod memory;
pub mod sqlite;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed payload under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode payload for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed, string-valued store with last-write-wins semantics
///
/// Methods take `&self`: callers run on a single thread and every mutation
/// is a complete read-then-write.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Read and decode a JSON value, `None` if the key is absent
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })
}

/// Read a JSON value, degrading to `T::default()` on absence, read failure
/// or a corrupt payload
pub fn read_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match read_json(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable stored value");
            T::default()
        }
    }
}

/// Encode and write a JSON value
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    tracing::debug!(key, bytes = encoded.len(), "persisting value");
    store.set(key, &encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_missing_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<String>> = read_json(&store, "absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_read_json_corrupt_payload() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();

        let result: Result<Option<Vec<String>>, _> = read_json(&store, "broken");
        assert!(matches!(result, Err(StorageError::Corrupt { ref key, .. }) if key == "broken"));
    }

    #[test]
    fn test_read_json_or_default_recovers() {
        let store = MemoryStore::new();
        store.set("broken", "\"a string, not a list\"").unwrap();

        let value: Vec<String> = read_json_or_default(&store, "broken");
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        write_json(&store, "ids", &["1", "2"]).unwrap();

        assert_eq!(store.get("ids").unwrap().as_deref(), Some(r#"["1","2"]"#));
        let ids: Vec<String> = read_json_or_default(&store, "ids");
        assert_eq!(ids, vec!["1", "2"]);
    }
}
