//! Flash-Q: a flashcard study tool.
//!
//! The library holds everything except the terminal front ends: the
//! key-value persistence layer, the card repository, the renderer, the
//! category filter, the theme preference and the command-driven view
//! controller that ties them together.

pub mod config;
pub mod filter;
pub mod flashcards;
pub mod render;
pub mod storage;
pub mod theme;
pub mod view;

pub use config::Config;
pub use filter::{CategoryFilter, FilterController};
pub use flashcards::{Card, CardRepository, Category, Collection};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageAdapter, StorageError};
pub use theme::{Theme, ThemeStore};
pub use view::{Command, Outcome, Page, ViewController};
