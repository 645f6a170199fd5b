//! Sample cards shipped with the application.

use super::models::Card;

struct SampleCard {
    id: i64,
    category: &'static str,
    question: &'static str,
    answer: &'static str,
}

const SAMPLE_CARDS: &[SampleCard] = &[
    SampleCard {
        id: 1,
        category: "science",
        question: "What is photosynthesis?",
        answer: "The process by which plants use sunlight, water, and carbon dioxide to create oxygen and energy in the form of sugar.",
    },
    SampleCard {
        id: 2,
        category: "math",
        question: "What is the Pythagorean theorem?",
        answer: "In a right triangle, the square of the hypotenuse equals the sum of squares of the other two sides: a\u{b2} + b\u{b2} = c\u{b2}",
    },
    SampleCard {
        id: 3,
        category: "programming",
        question: "What is a variable?",
        answer: "A named storage location in memory that holds a value which can be changed during program execution.",
    },
    SampleCard {
        id: 4,
        category: "history",
        question: "When did World War II end?",
        answer: "World War II ended in 1945, with Germany surrendering in May and Japan in September.",
    },
    SampleCard {
        id: 5,
        category: "language",
        question: "What is a metaphor?",
        answer: "A figure of speech that describes an object or action in a way that is not literally true but helps explain an idea or make a comparison.",
    },
];

/// The public cards, in display order
pub fn public_cards() -> Vec<Card> {
    SAMPLE_CARDS
        .iter()
        .map(|s| Card::new(s.id, s.category, s.question, s.answer, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::Category;
    use std::collections::HashSet;

    #[test]
    fn test_public_cards_cover_every_category_once() {
        let cards = public_cards();
        assert_eq!(cards.len(), Category::ALL.len());

        let categories: Vec<Category> =
            cards.iter().filter_map(|c| c.known_category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_public_card_ids_unique() {
        let cards = public_cards();
        let ids: HashSet<i64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), cards.len());
        assert!(cards.iter().all(|c| c.created_at.is_none()));
    }
}
