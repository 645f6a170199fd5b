//! Rendering of cards and pages.
//!
//! - `view`: the markup-free view tree of a card grid
//! - `html`: grid markup with escaped card text
//! - `document`: complete pages
//! - `text`: text extraction from markup

pub mod document;
pub mod html;
pub mod text;
pub mod view;

pub use document::{render_document, DocumentView};
pub use html::{escape_attr, escape_text, grid_html};
pub use view::{capitalize_first, render_grid, CardUnit, GridBody, GridView};
