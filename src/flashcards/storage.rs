//! The user's own cards.
//!
//! The in-memory list is the working copy; the whole list is written back to
//! the `myCards` key after every change:
//! ```text
//! local_storage/
//! └── myCards    # JSON array of cards, insertion order
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::models::Card;
use crate::storage::{KeyValueStore, Result, StorageAdapter, StorageError};

/// Storage key of the user's card list
pub const MY_CARDS_KEY: &str = "myCards";

/// Append-only repository of the user's cards
#[derive(Debug)]
pub struct CardRepository<S> {
    adapter: StorageAdapter<S>,
    cards: Vec<Card>,
}

impl<S: KeyValueStore> CardRepository<S> {
    /// Open the repository, hydrating it from storage
    pub fn open(store: S) -> Self {
        let adapter = StorageAdapter::new(store);
        let cards: Vec<Card> = adapter.load(MY_CARDS_KEY);
        log::debug!("Loaded {} card(s) from storage", cards.len());
        Self { adapter, cards }
    }

    /// All cards in insertion order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Create a card, append it and persist the full list
    pub fn create(&mut self, category: &str, question: &str, answer: &str) -> Result<Card> {
        self.create_at(Utc::now(), category, question, answer)
    }

    fn create_at(
        &mut self,
        now: DateTime<Utc>,
        category: &str,
        question: &str,
        answer: &str,
    ) -> Result<Card> {
        let now_ms = now.timestamp_millis();
        let id = self.next_id(now_ms)?;
        let created_at = DateTime::from_timestamp_millis(now_ms).unwrap_or(now);

        let card = Card::new(id, category, question, answer, Some(created_at));
        self.cards.push(card.clone());

        if let Err(e) = self.adapter.save(MY_CARDS_KEY, &self.cards) {
            // Keep the working copy identical to what is stored
            self.cards.pop();
            return Err(e);
        }

        log::info!("Created card {} in '{}'", card.id, card.category);
        Ok(card)
    }

    /// Millisecond timestamp id, bumped past the newest card when two cards
    /// land in the same millisecond or the clock went backwards.
    ///
    /// If the newest id is `i64::MAX` the lowest unused id from the clock up
    /// is taken instead.
    fn next_id(&self, now_ms: i64) -> Result<i64> {
        let newest = match self.cards.iter().map(|c| c.id).max() {
            Some(newest) if newest >= now_ms => newest,
            _ => return Ok(now_ms),
        };
        if let Some(id) = newest.checked_add(1) {
            return Ok(id);
        }

        let used: HashSet<i64> = self.cards.iter().map(|c| c.id).collect();
        (now_ms..i64::MAX)
            .find(|id| !used.contains(id))
            .ok_or(StorageError::IdsExhausted)
    }

    /// Re-read the list from storage, dropping the working copy
    pub fn reload(&mut self) {
        self.cards = self.adapter.load(MY_CARDS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_open_empty_store() {
        let repo = CardRepository::open(MemoryStore::new());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_create_then_reload() {
        let store = MemoryStore::new();
        let mut repo = CardRepository::open(store.clone());
        repo.create("science", "What is H2O?", "Water").unwrap();
        let before = CardRepository::open(store.clone()).len();

        let card = repo.create("math", "2 + 2?", "4").unwrap();

        let reloaded = CardRepository::open(store);
        assert_eq!(reloaded.len(), before + 1);

        let found = reloaded.get(card.id).unwrap();
        assert_eq!(found.category, "math");
        assert_eq!(found.question, "2 + 2?");
        assert_eq!(found.answer, "4");
        assert_eq!(found, &card);
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut repo = CardRepository::open(MemoryStore::new());
        let first = repo.create("history", "Q1", "A1").unwrap();
        let second = repo.create("language", "Q2", "A2").unwrap();
        let third = repo.create("history", "Q3", "A3").unwrap();

        let ids: Vec<i64> = repo.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut repo = CardRepository::open(MemoryStore::new());
        let now = at_millis(1_700_000_000_000);
        for i in 0..5 {
            repo.create_at(now, "math", &format!("Q{}", i), "A").unwrap();
        }

        let ids: HashSet<i64> = repo.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(repo.cards()[0].id, 1_700_000_000_000);
        assert_eq!(repo.cards()[4].id, 1_700_000_000_004);
    }

    #[test]
    fn test_ids_after_max_stored_id() {
        let store = MemoryStore::new();
        store
            .set(
                MY_CARDS_KEY,
                r#"[{"id":9223372036854775807,"category":"math","question":"Q","answer":"A"}]"#,
            )
            .unwrap();

        let mut repo = CardRepository::open(store.clone());
        assert_eq!(repo.len(), 1);

        let now = at_millis(1_700_000_000_000);
        let first = repo.create_at(now, "math", "Q2", "A2").unwrap();
        let second = repo.create_at(now, "math", "Q3", "A3").unwrap();
        assert_eq!(first.id, 1_700_000_000_000);
        assert_eq!(second.id, 1_700_000_000_001);

        // Wall-clock path as well
        let third = repo.create("math", "Q4", "A4").unwrap();
        let ids: HashSet<i64> = repo.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(third.id > 0);
        assert_eq!(CardRepository::open(store).len(), 4);
    }

    #[test]
    fn test_id_and_timestamp_follow_clock() {
        let mut repo = CardRepository::open(MemoryStore::new());
        let card = repo
            .create_at(at_millis(1_700_000_123_456), "science", "Q", "A")
            .unwrap();
        assert_eq!(card.id, 1_700_000_123_456);
        assert_eq!(card.created_at, Some(at_millis(1_700_000_123_456)));
    }

    #[test]
    fn test_no_validation_of_empty_text() {
        let mut repo = CardRepository::open(MemoryStore::new());
        let card = repo.create("programming", "", "").unwrap();
        assert_eq!(card.question, "");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_unknown_category_survives_reload() {
        let store = MemoryStore::new();
        let mut repo = CardRepository::open(store.clone());
        repo.create("geology", "Q", "A").unwrap();

        let reloaded = CardRepository::open(store);
        assert_eq!(reloaded.cards()[0].category, "geology");
    }

    #[test]
    fn test_corrupt_storage_opens_empty_and_recovers() {
        let store = MemoryStore::new();
        store.set(MY_CARDS_KEY, "not json at all").unwrap();

        let mut repo = CardRepository::open(store.clone());
        assert!(repo.is_empty());

        repo.create("math", "Q", "A").unwrap();
        assert_eq!(CardRepository::open(store).len(), 1);
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let store = MemoryStore::new();
        let mut repo = CardRepository::open(store.clone());
        let mut other = CardRepository::open(store);
        other.create("science", "Q", "A").unwrap();

        assert!(repo.is_empty());
        repo.reload();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_file_backed_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        let mut repo = CardRepository::open(store.clone());
        let card = repo.create("language", "Hola?", "Hello").unwrap();

        let reopened = CardRepository::open(FileStore::new(temp_dir.path().to_path_buf()));
        assert_eq!(reopened.cards(), &[card]);
        assert!(temp_dir.path().join("local_storage").join(MY_CARDS_KEY).exists());
    }
}
