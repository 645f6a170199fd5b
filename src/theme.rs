//! Light/dark theme preference, persisted under the `theme` key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, Result};

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// The current theme and the store it is saved to
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    /// Saved value as read, `light` when nothing was saved
    saved: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the saved theme. Missing or unrecognized values display as light.
    pub fn load(store: S) -> Self {
        let saved = match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.trim().to_string(),
            Ok(None) => Theme::default().as_str().to_string(),
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
                Theme::default().as_str().to_string()
            }
        };
        if saved.parse::<Theme>().is_err() {
            log::warn!("Unknown saved theme '{}', showing light", saved);
        }
        Self { store, saved }
    }

    pub fn current(&self) -> Theme {
        self.saved.parse().unwrap_or_default()
    }

    /// Switch to the other theme and save it.
    ///
    /// Only `light` switches to dark; any other saved value switches to light.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = match self.saved.parse::<Theme>() {
            Ok(theme) => theme.toggled(),
            Err(_) => Theme::Light,
        };
        self.store.set(THEME_KEY, next.as_str())?;
        self.saved = next.as_str().to_string();
        log::info!("Theme set to {}", next);
        Ok(next)
    }
}
