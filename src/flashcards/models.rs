//! Data models for flashcards

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A flashcard with a question (front) and an answer (back)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Creation time in milliseconds, unique within the owning collection
    pub id: i64,
    /// Category tag. Kept as a string so unknown tags from storage survive.
    pub category: String,
    pub question: String,
    pub answer: String,
    /// Absent on public cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Card {
    pub fn new(
        id: i64,
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
            created_at,
        }
    }

    /// The category, if it is one of the known tags
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// The fixed set of category tags offered by the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    Math,
    Programming,
    History,
    Language,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Science,
        Category::Math,
        Category::Programming,
        Category::History,
        Category::Language,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Science => "science",
            Self::Math => "math",
            Self::Programming => "programming",
            Self::History => "history",
            Self::Language => "language",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Science
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The two card collections shown side by side in tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    /// User-created, persisted
    MyCards,
    /// Shipped with the application, read-only
    PublicCards,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::MyCards, Collection::PublicCards];

    /// Element id of the grid holding this collection's cards
    pub fn grid_id(&self) -> &'static str {
        match self {
            Self::MyCards => "my-cards-grid",
            Self::PublicCards => "public-cards-grid",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::MyCards => "My Cards",
            Self::PublicCards => "Public Cards",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(
            "geology".parse::<Category>(),
            Err(UnknownCategory("geology".to_string()))
        );
        // Tags are case-sensitive, like the data-category attribute
        assert!("Math".parse::<Category>().is_err());
    }

    #[test]
    fn test_card_json_uses_camel_case() {
        let created = DateTime::parse_from_rfc3339("2024-03-01T12:00:00.250Z")
            .unwrap()
            .with_timezone(&Utc);
        let card = Card::new(1709294400250, "science", "Q", "A", Some(created));
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], 1709294400250i64);
        assert_eq!(json["category"], "science");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_card_reads_browser_record() {
        let raw = r#"{"id":1700000000000,"category":"history","question":"Q","answer":"A","createdAt":"2023-11-14T22:13:20.000Z"}"#;
        let card: Card = serde_json::from_str(raw).unwrap();
        assert_eq!(card.id, 1700000000000);
        assert_eq!(card.known_category(), Some(Category::History));
        assert_eq!(
            card.created_at.unwrap().timestamp_millis(),
            1700000000000
        );
    }

    #[test]
    fn test_card_without_created_at() {
        let card = Card::new(3, "cooking", "Q", "A", None);
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("createdAt"));
        assert_eq!(card.known_category(), None);
    }
}
