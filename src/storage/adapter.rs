//! JSON list persistence over a key-value store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::{KeyValueStore, Result};

/// Reads and writes named JSON arrays.
///
/// A missing key, an unreadable value or a value that is not a JSON array of
/// the expected records all load as an empty list. Nothing about a failed
/// read is surfaced to the caller beyond a log line.
#[derive(Debug, Clone)]
pub struct StorageAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the list stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored value for '{}', starting empty", key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Failed to read '{}' from storage: {}", key, e);
                return Vec::new();
            }
        };

        // `null` is what a cleared browser value round-trips to
        match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                log::warn!("Ignoring corrupt value stored under '{}': {}", key, e);
                Vec::new()
            }
        }
    }

    /// Replace the list stored under `key`.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(key, &json)?;
        log::debug!("Saved {} item(s) under '{}'", items.len(), key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::Card;
    use crate::storage::MemoryStore;

    fn sample_card(id: i64) -> Card {
        Card::new(id, "math", "1 + 1?", "2", None)
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let adapter = StorageAdapter::new(MemoryStore::new());
        let cards: Vec<Card> = adapter.load("myCards");
        assert!(cards.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let adapter = StorageAdapter::new(MemoryStore::new());
        let cards = vec![sample_card(1), sample_card(2)];
        adapter.save("myCards", &cards).unwrap();

        let loaded: Vec<Card> = adapter.load("myCards");
        assert_eq!(loaded, cards);
    }

    #[test]
    fn test_load_corrupt_values_is_empty() {
        let store = MemoryStore::new();
        let adapter = StorageAdapter::new(store.clone());

        for corrupt in ["{not json", "{}", "42", "\"text\"", "[{\"id\": \"x\"}]"] {
            store.set("myCards", corrupt).unwrap();
            let cards: Vec<Card> = adapter.load("myCards");
            assert!(cards.is_empty(), "expected empty for {:?}", corrupt);
        }
    }

    #[test]
    fn test_load_null_is_empty() {
        let store = MemoryStore::new();
        store.set("myCards", "null").unwrap();
        let adapter = StorageAdapter::new(store);
        let cards: Vec<Card> = adapter.load("myCards");
        assert!(cards.is_empty());
    }

    #[test]
    fn test_saved_format_is_json_array() {
        let store = MemoryStore::new();
        let adapter = StorageAdapter::new(store.clone());
        adapter.save("myCards", &[sample_card(7)]).unwrap();

        let raw = store.get("myCards").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["id"], 7);
        assert_eq!(array[0]["category"], "math");
    }
}
