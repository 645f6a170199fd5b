//! Command-driven view layer.
//!
//! UI controls emit [`Command`]s; a single [`ViewController`] applies them to
//! the application state and reports an [`Outcome`] for the front end.

mod commands;
mod controller;
mod pages;

pub use commands::{CardDraft, CloseTrigger, Command, DraftField, LoginForm, SignupForm, Tab};
pub use controller::{Modal, Outcome, ViewController};
pub use pages::{Feature, Page};
