//! Commands emitted by UI controls, and the form payloads they carry.

use std::fmt;

use super::pages::Feature;
use crate::flashcards::{Category, Collection};

/// The two tab panels. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    MyCards,
    PublicCards,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::MyCards, Tab::PublicCards];

    /// Element id of the tab's panel
    pub fn panel_id(&self) -> &'static str {
        match self {
            Self::MyCards => "my-cards",
            Self::PublicCards => "public-cards",
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Self::MyCards => Collection::MyCards,
            Self::PublicCards => Collection::PublicCards,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::MyCards => Self::PublicCards,
            Self::PublicCards => Self::MyCards,
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::MyCards
    }
}

/// How the creation modal was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Cancel,
    /// Click on the backdrop outside the modal content
    Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Category,
    Question,
    Answer,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Category, DraftField::Question, DraftField::Answer];

    pub fn next(&self) -> Self {
        match self {
            Self::Category => Self::Question,
            Self::Question => Self::Answer,
            Self::Answer => Self::Category,
        }
    }
}

/// Contents of the card creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub category: String,
    pub question: String,
    pub answer: String,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            category: Category::default().as_str().to_string(),
            question: String::new(),
            answer: String::new(),
        }
    }
}

impl CardDraft {
    pub fn new(
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Category => &self.category,
            DraftField::Question => &self.question,
            DraftField::Answer => &self.answer,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Category => self.category = value,
            DraftField::Question => self.question = value,
            DraftField::Answer => self.answer = value,
        }
    }

    /// Required fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty() && !self.question.is_empty() && !self.answer.is_empty()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// A discrete user action, consumed by [`super::ViewController::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleTheme,
    SwitchTab(Tab),
    SelectCategory(String),
    OpenModal,
    CloseModal(CloseTrigger),
    EditDraft(DraftField, String),
    CreateCard(CardDraft),
    FlipCard { collection: Collection, id: i64 },
    SubmitLogin(LoginForm),
    SubmitSignup(SignupForm),
    /// Landing page call to action
    LetsGo,
}

impl Command {
    /// The page control this command comes from
    pub fn feature(&self) -> Feature {
        match self {
            Self::ToggleTheme => Feature::ThemeToggle,
            Self::SwitchTab(_) => Feature::Tabs,
            Self::SelectCategory(_) => Feature::CategoryFilter,
            Self::OpenModal | Self::CloseModal(_) => Feature::CardModal,
            Self::EditDraft(..) | Self::CreateCard(_) => Feature::CardForm,
            Self::FlipCard { .. } => Feature::FlipCards,
            Self::SubmitLogin(_) => Feature::LoginForm,
            Self::SubmitSignup(_) => Feature::SignupForm,
            Self::LetsGo => Feature::LetsGo,
        }
    }
}
