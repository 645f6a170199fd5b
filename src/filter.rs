//! Category filtering of rendered cards.
//!
//! Filtering only flips each unit's `visible` flag. Units are never removed,
//! so the active filter has to be re-applied after every render.

use std::fmt;

use crate::flashcards::{Category, UnknownCategory};
use crate::render::GridView;

/// Sentinel tag selecting every card
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a tag as clicked in the category bar
    pub fn parse(tag: &str) -> Self {
        if tag == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(tag.to_string())
        }
    }

    /// Parse a tag typed by the user, accepting only `all` and the known
    /// categories
    pub fn parse_known(tag: &str) -> Result<Self, UnknownCategory> {
        if tag == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        let category: Category = tag.parse()?;
        Ok(Self::Only(category.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(tag) => tag,
        }
    }

    /// Whether a card tagged `category` is shown
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => tag == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the selected category
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    active: CategoryFilter,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.active.matches(category)
    }

    /// Select `tag` and re-evaluate every unit of `grids`
    pub fn select(&mut self, tag: &str, grids: &mut [&mut GridView]) {
        self.active = CategoryFilter::parse(tag);
        log::debug!("Category filter set to '{}'", self.active);
        for grid in grids.iter_mut() {
            self.apply(grid);
        }
    }

    /// Re-apply the current selection to a grid
    pub fn apply(&self, grid: &mut GridView) {
        grid.apply_filter(&self.active);
    }
}
