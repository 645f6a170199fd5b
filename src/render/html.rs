//! Markup for card grids.
//!
//! Card text is user input read back from storage. Every piece of it goes
//! through [`escape_text`] or [`escape_attr`] before it is placed in markup.

use std::borrow::Cow;

use super::view::{CardUnit, GridBody, GridView};
use crate::flashcards::Collection;

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Inner markup of a grid container
pub fn grid_html(grid: &GridView) -> String {
    match &grid.body {
        GridBody::Empty => empty_state_html(grid.collection),
        GridBody::Cards(units) => units.iter().map(card_html).collect(),
    }
}

/// A grid container element with its content
pub fn grid_container_html(grid: &GridView) -> String {
    format!(
        "<div class=\"cards-grid\" id=\"{}\">{}</div>",
        grid.collection.grid_id(),
        grid_html(grid)
    )
}

pub fn card_html(unit: &CardUnit) -> String {
    let class = if unit.flipped {
        "flash-card flipped"
    } else {
        "flash-card"
    };
    let style = if unit.visible {
        ""
    } else {
        " style=\"display: none\""
    };
    let label = escape_text(&unit.label);

    format!(
        r#"
        <div class="{class}" data-category="{category}" data-id="{id}"{style}>
            <div class="flash-card-inner">
                <div class="flash-card-front">
                    <span class="flash-card-category">{label}</span>
                    <div class="flash-card-label">Question</div>
                    <div class="flash-card-question">{question}</div>
                </div>
                <div class="flash-card-back">
                    <span class="flash-card-category">{label}</span>
                    <div class="flash-card-label">Answer</div>
                    <div class="flash-card-answer">{answer}</div>
                </div>
            </div>
        </div>
    "#,
        class = class,
        category = escape_attr(&unit.category),
        id = unit.id,
        style = style,
        label = label,
        question = escape_text(&unit.question),
        answer = escape_text(&unit.answer),
    )
}

fn empty_state_html(collection: Collection) -> String {
    let icon = match collection {
        Collection::MyCards => {
            r#"<path d="M40 35V45M35 40H45" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>"#
        }
        Collection::PublicCards => {
            r#"<circle cx="40" cy="40" r="8" stroke="currentColor" stroke-width="2" fill="none"/>"#
        }
    };

    format!(
        r#"
            <div class="empty-state">
                <svg width="80" height="80" viewBox="0 0 80 80" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <rect x="10" y="20" width="60" height="40" rx="4" stroke="currentColor" stroke-width="2" fill="none"/>
                    {icon}
                </svg>
                <p>{message}</p>
            </div>
        "#,
        icon = icon,
        message = super::view::empty_message(collection),
    )
}
