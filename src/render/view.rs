//! The view tree: what a card grid looks like, independent of any markup.

use serde::Serialize;

use crate::filter::CategoryFilter;
use crate::flashcards::{Card, Collection};

/// One rendered card with both faces present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUnit {
    pub id: i64,
    pub category: String,
    /// Category shown on both faces
    pub label: String,
    pub question: String,
    pub answer: String,
    /// Answer face foregrounded
    pub flipped: bool,
    pub visible: bool,
}

impl CardUnit {
    fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            category: card.category.clone(),
            label: capitalize_first(&card.category),
            question: card.question.clone(),
            answer: card.answer.clone(),
            flipped: false,
            visible: true,
        }
    }

    /// Text on the face currently foregrounded
    pub fn face_text(&self) -> &str {
        if self.flipped {
            &self.answer
        } else {
            &self.question
        }
    }
}

/// Body of a rendered grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "units", rename_all = "camelCase")]
pub enum GridBody {
    /// Placeholder shown instead of cards
    Empty,
    Cards(Vec<CardUnit>),
}

/// A fully rendered grid for one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub collection: Collection,
    pub body: GridBody,
}

impl GridView {
    /// A grid with nothing rendered into it yet
    pub fn blank(collection: Collection) -> Self {
        Self {
            collection,
            body: GridBody::Cards(Vec::new()),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self.body, GridBody::Empty)
    }

    /// Placeholder text when the collection is empty
    pub fn empty_message(&self) -> &'static str {
        empty_message(self.collection)
    }

    pub fn units(&self) -> &[CardUnit] {
        match &self.body {
            GridBody::Empty => &[],
            GridBody::Cards(units) => units,
        }
    }

    pub fn units_mut(&mut self) -> &mut [CardUnit] {
        match &mut self.body {
            GridBody::Empty => &mut [],
            GridBody::Cards(units) => units,
        }
    }

    pub fn visible_units(&self) -> impl Iterator<Item = &CardUnit> {
        self.units().iter().filter(|u| u.visible)
    }

    pub fn visible_ids(&self) -> Vec<i64> {
        self.visible_units().map(|u| u.id).collect()
    }

    /// Toggle the face of the unit with `id`. Returns false if no such unit.
    pub fn toggle_flip(&mut self, id: i64) -> bool {
        match self.units_mut().iter_mut().find(|u| u.id == id) {
            Some(unit) => {
                unit.flipped = !unit.flipped;
                true
            }
            None => false,
        }
    }

    /// Re-evaluate every unit against `filter`
    pub fn apply_filter(&mut self, filter: &CategoryFilter) {
        for unit in self.units_mut() {
            unit.visible = filter.matches(&unit.category);
        }
    }
}

/// Render `cards` into a fresh grid.
///
/// The result replaces whatever was rendered before: every unit starts
/// unflipped and carries the current filter decision.
pub fn render_grid(collection: Collection, cards: &[Card], filter: &CategoryFilter) -> GridView {
    if cards.is_empty() {
        return GridView {
            collection,
            body: GridBody::Empty,
        };
    }

    let mut grid = GridView {
        collection,
        body: GridBody::Cards(cards.iter().map(CardUnit::from_card).collect()),
    };
    grid.apply_filter(filter);
    grid
}

pub fn empty_message(collection: Collection) -> &'static str {
    match collection {
        Collection::MyCards => "No cards yet. Create your first flashcard!",
        Collection::PublicCards => "No public cards available. Check back later!",
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::public_cards;

    fn my_cards() -> Vec<Card> {
        vec![
            Card::new(10, "math", "1 + 1?", "2", None),
            Card::new(11, "science", "H2O?", "Water", None),
            Card::new(12, "math", "2 * 3?", "6", None),
        ]
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("science"), "Science");
        assert_eq!(capitalize_first("computer science"), "Computer science");
        assert_eq!(capitalize_first("mATH"), "MATH");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("\u{e9}tude"), "\u{c9}tude");
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let grid = render_grid(Collection::MyCards, &[], &CategoryFilter::All);
        assert!(grid.is_empty_state());
        assert!(grid.units().is_empty());
        assert_eq!(grid.empty_message(), "No cards yet. Create your first flashcard!");

        let public = render_grid(Collection::PublicCards, &[], &CategoryFilter::All);
        assert_eq!(
            public.empty_message(),
            "No public cards available. Check back later!"
        );
    }

    #[test]
    fn test_one_unit_per_card_in_order() {
        let cards = my_cards();
        let grid = render_grid(Collection::MyCards, &cards, &CategoryFilter::All);

        assert!(!grid.is_empty_state());
        let ids: Vec<i64> = grid.units().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);

        let unit = &grid.units()[1];
        assert_eq!(unit.label, "Science");
        assert_eq!(unit.question, "H2O?");
        assert_eq!(unit.answer, "Water");
        assert!(!unit.flipped);
    }

    #[test]
    fn test_render_applies_filter() {
        let grid = render_grid(
            Collection::MyCards,
            &my_cards(),
            &CategoryFilter::parse("math"),
        );
        assert_eq!(grid.visible_ids(), vec![10, 12]);
        // Hidden units stay in the grid
        assert_eq!(grid.units().len(), 3);
    }

    #[test]
    fn test_toggle_flip() {
        let mut grid = render_grid(Collection::PublicCards, &public_cards(), &CategoryFilter::All);
        assert!(grid.toggle_flip(2));
        assert!(grid.units()[1].flipped);
        assert_eq!(grid.units()[1].face_text(), grid.units()[1].answer);

        assert!(grid.toggle_flip(2));
        assert!(!grid.units()[1].flipped);

        assert!(!grid.toggle_flip(999));
    }

    #[test]
    fn test_rerender_resets_flips() {
        let cards = my_cards();
        let mut grid = render_grid(Collection::MyCards, &cards, &CategoryFilter::All);
        grid.toggle_flip(11);

        let fresh = render_grid(Collection::MyCards, &cards, &CategoryFilter::All);
        assert!(fresh.units().iter().all(|u| !u.flipped));
    }
}
