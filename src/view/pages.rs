//! Pages and the interactive features each one carries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page with both card collections
    Index,
    Login,
    Signup,
}

/// An interactive control bound on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    ThemeToggle,
    LetsGo,
    Tabs,
    CategoryFilter,
    CardModal,
    CardForm,
    FlipCards,
    LoginForm,
    SignupForm,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Index, Page::Login, Page::Signup];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Login => "login.html",
            Self::Signup => "signup.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Index => "Flash-Q",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
        }
    }

    /// Controls present on this page
    pub fn features(&self) -> &'static [Feature] {
        match self {
            Self::Index => &[
                Feature::ThemeToggle,
                Feature::LetsGo,
                Feature::Tabs,
                Feature::CategoryFilter,
                Feature::CardModal,
                Feature::CardForm,
                Feature::FlipCards,
            ],
            Self::Login => &[Feature::ThemeToggle, Feature::LoginForm],
            Self::Signup => &[Feature::ThemeToggle, Feature::SignupForm],
        }
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::Index
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_everywhere() {
        for page in Page::ALL {
            assert!(page.supports(Feature::ThemeToggle));
        }
    }

    #[test]
    fn test_forms_live_on_their_own_pages() {
        assert!(Page::Login.supports(Feature::LoginForm));
        assert!(!Page::Login.supports(Feature::SignupForm));
        assert!(!Page::Login.supports(Feature::CardForm));
        assert!(Page::Signup.supports(Feature::SignupForm));
        assert!(!Page::Index.supports(Feature::LoginForm));
        assert!(Page::Index.supports(Feature::FlipCards));
    }
}
