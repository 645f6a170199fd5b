//! Flashcards for Flash-Q
//!
//! This module provides:
//! - The card record and the fixed category set
//! - The user's own cards, persisted under the `myCards` key
//! - The read-only public sample cards

pub mod models;
pub mod public;
pub mod storage;

pub use models::*;
pub use public::public_cards;
pub use storage::{CardRepository, MY_CARDS_KEY};
