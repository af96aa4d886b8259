//! Durable key/value storage for the session.
//!
//! The browser build backs this with `localStorage`; native code and tests use
//! [`MemoryStorage`].

use std::collections::HashMap;

use concessionario_types::StorageError;
use parking_lot::RwLock;

/// Entry holding the signed-in user as JSON (`{"username": ...}`).
pub const USER_KEY: &str = "user";

/// Entry holding the bearer token as a plain string.
pub const TOKEN_KEY: &str = "token";

/// String key/value store surviving page reloads.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { entries: RwLock::new(map) }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let storage = MemoryStorage::with_entries([(USER_KEY, r#"{"username":"mario"}"#)]);
        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.len(), 1);
    }
}
