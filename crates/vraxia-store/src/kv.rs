//! Key-value store trait with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A key-value store with typed JSON access.
///
/// Implementors provide the raw byte operations; the typed `get`/`set`
/// helpers serialize through `serde_json` for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub trait KvStore: Send + Sync {
    /// Get the raw bytes for a key, if present.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Set the raw bytes for a key.
    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Get a value, deserialized from JSON.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value, serialized as JSON.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

/// In-process store backed by a shared hash map.
///
/// Clones share the same underlying map, so a service and its tests can
/// observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Vec<u8>>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<u8>>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.read().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.write().remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.read().contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        label: String,
        count: i64,
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let value = Snapshot {
            label: "cart".into(),
            count: 3,
        };

        store.set("k1", &value).unwrap();
        let loaded: Option<Snapshot> = store.get("k1").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Snapshot> = store.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_delete_and_exists() {
        let store = MemoryStore::new();
        store.set("k1", &1i64).unwrap();
        assert!(store.exists("k1").unwrap());

        store.delete("k1").unwrap();
        assert!(!store.exists("k1").unwrap());

        // Deleting again is a no-op.
        store.delete("k1").unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k1", &42i64).unwrap();
        let loaded: Option<i64> = other.get("k1").unwrap();
        assert_eq!(loaded, Some(42));
    }

    #[test]
    fn test_corrupt_bytes_error() {
        let store = MemoryStore::new();
        store.set_raw("k1", b"not json").unwrap();
        let result: Result<Option<Snapshot>, _> = store.get("k1");
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }
}
