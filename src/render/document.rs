//! Complete HTML pages.
//!
//! Templates use `{{name}}` placeholders, filled in a single pass. Values
//! carrying user input are escaped before they are substituted.

use super::html::{escape_attr, escape_text, grid_container_html};
use super::view::{capitalize_first, GridView};
use crate::filter::{CategoryFilter, ALL_CATEGORIES};
use crate::flashcards::Category;
use crate::theme::Theme;
use crate::view::{CardDraft, Page, Tab};

/// Everything a page needs from the application state
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    pub page: Page,
    pub theme: Theme,
    pub active_tab: Tab,
    pub filter: &'a CategoryFilter,
    pub my_cards: &'a GridView,
    pub public_cards: &'a GridView,
    pub modal_open: bool,
    pub draft: &'a CardDraft,
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="{{theme}}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}}</title>
  <style>{{css}}</style>
</head>
<body>
  <header class="top-nav">
    <a href="index.html" class="logo">Flash-Q</a>
    <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme">{{theme_icon}}</button>
  </header>
  <main>
{{content}}
  </main>
</body>
</html>"#;

const INDEX_TEMPLATE: &str = r#"    <section class="hero">
      <h1>Study smarter with flashcards</h1>
      <button id="lets-go-btn" class="btn btn-primary">Let's Go</button>
    </section>
    <nav class="tabs">
{{tab_buttons}}
    </nav>
    <div class="category-tags">
{{category_tags}}
    </div>
    <section class="tab-content{{my_active}}" id="my-cards">
      <button id="create-my-card" class="btn btn-primary">Create Card</button>
      {{my_grid}}
    </section>
    <section class="tab-content{{public_active}}" id="public-cards">
      {{public_grid}}
    </section>
    <div id="create-card-modal" class="modal{{modal_active}}">
      <div class="modal-content">
        <button id="close-modal" class="modal-close" aria-label="Close">&times;</button>
        <h2>Create Flashcard</h2>
        <form id="card-form">
          <label for="card-category">Category</label>
          <select id="card-category" required>
{{category_options}}
          </select>
          <label for="card-question">Question</label>
          <textarea id="card-question" required>{{draft_question}}</textarea>
          <label for="card-answer">Answer</label>
          <textarea id="card-answer" required>{{draft_answer}}</textarea>
          <div class="form-actions">
            <button type="button" id="cancel-card" class="btn">Cancel</button>
            <button type="submit" class="btn btn-primary">Save Card</button>
          </div>
        </form>
      </div>
    </div>"#;

const LOGIN_TEMPLATE: &str = r#"    <section class="auth">
      <h1>Log in</h1>
      <form id="login-form">
        <label for="email">Email</label>
        <input type="email" id="email" required>
        <label for="password">Password</label>
        <input type="password" id="password" required>
        <button type="submit" class="btn btn-primary">Log in</button>
      </form>
      <p>No account yet? <a href="signup.html">Sign up</a></p>
    </section>"#;

const SIGNUP_TEMPLATE: &str = r#"    <section class="auth">
      <h1>Sign up</h1>
      <form id="signup-form">
        <label for="first-name">First name</label>
        <input type="text" id="first-name" required>
        <label for="last-name">Last name</label>
        <input type="text" id="last-name" required>
        <label for="username">Username</label>
        <input type="text" id="username" required>
        <label for="email">Email</label>
        <input type="email" id="email" required>
        <label for="password">Password</label>
        <input type="password" id="password" required>
        <label for="confirm-password">Confirm password</label>
        <input type="password" id="confirm-password" required>
        <button type="submit" class="btn btn-primary">Sign up</button>
      </form>
      <p>Already registered? <a href="login.html">Log in</a></p>
    </section>"#;

const CSS: &str = r#"
:root { --bg: #f7f7fb; --fg: #1d1d28; --card: #ffffff; --accent: #5b5bd6; }
[data-theme="dark"] { --bg: #16161d; --fg: #e8e8f0; --card: #23232e; --accent: #8b8bf0; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
main { max-width: 960px; margin: 0 auto; padding: 1rem; }
.top-nav { display: flex; justify-content: space-between; padding: 1rem; }
.tab-button.active, .category-tag.active { background: var(--accent); color: #fff; }
.tab-content { display: none; }
.tab-content.active { display: block; }
.cards-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.flash-card { background: var(--card); border-radius: 8px; padding: 1rem; cursor: pointer; }
.flash-card .flash-card-back { display: none; }
.flash-card.flipped .flash-card-front { display: none; }
.flash-card.flipped .flash-card-back { display: block; }
.flash-card-category { font-size: 0.75rem; text-transform: none; opacity: 0.7; }
.empty-state { text-align: center; opacity: 0.7; grid-column: 1 / -1; }
.modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); }
.modal.active { display: flex; align-items: center; justify-content: center; }
.modal-content { background: var(--card); padding: 1.5rem; border-radius: 8px; }
"#;

/// Render the page the view is on
pub fn render_document(view: &DocumentView<'_>) -> String {
    let content = match view.page {
        Page::Index => render_index(view),
        Page::Login => LOGIN_TEMPLATE.to_string(),
        Page::Signup => SIGNUP_TEMPLATE.to_string(),
    };

    let theme_icon = match view.theme {
        Theme::Light => "\u{1f319}",
        Theme::Dark => "\u{2600}\u{fe0f}",
    };

    fill_template(
        PAGE_TEMPLATE,
        &[
            ("theme", view.theme.as_str()),
            ("title", view.page.title()),
            ("css", CSS),
            ("theme_icon", theme_icon),
            ("content", content.as_str()),
        ],
    )
}

fn render_index(view: &DocumentView<'_>) -> String {
    let active = |on: bool| if on { " active" } else { "" };

    let tabs = tab_buttons(view.active_tab);
    let tags = category_tags(view.filter);
    let options = category_options(&view.draft.category);
    let question = escape_text(&view.draft.question).into_owned();
    let answer = escape_text(&view.draft.answer).into_owned();
    let my_grid = grid_container_html(view.my_cards);
    let public_grid = grid_container_html(view.public_cards);

    fill_template(
        INDEX_TEMPLATE,
        &[
            ("tab_buttons", tabs.as_str()),
            ("category_tags", tags.as_str()),
            ("my_active", active(view.active_tab == Tab::MyCards)),
            ("public_active", active(view.active_tab == Tab::PublicCards)),
            ("modal_active", active(view.modal_open)),
            ("category_options", options.as_str()),
            ("draft_question", question.as_str()),
            ("draft_answer", answer.as_str()),
            ("my_grid", my_grid.as_str()),
            ("public_grid", public_grid.as_str()),
        ],
    )
}

/// Substitute `{{name}}` placeholders in one pass.
///
/// Substituted values are never scanned again, so text that happens to look
/// like a placeholder stays as it is. Unknown placeholders are kept verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn tab_buttons(active_tab: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active_tab {
                "tab-button active"
            } else {
                "tab-button"
            };
            format!(
                "      <button class=\"{}\" data-tab=\"{}\">{}</button>",
                class,
                tab.panel_id(),
                tab.collection().title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn category_tags(filter: &CategoryFilter) -> String {
    std::iter::once(ALL_CATEGORIES)
        .chain(Category::ALL.iter().map(|c| c.as_str()))
        .map(|tag| {
            let class = if filter.as_str() == tag {
                "category-tag active"
            } else {
                "category-tag"
            };
            format!(
                "      <button class=\"{}\" data-category=\"{}\">{}</button>",
                class,
                tag,
                capitalize_first(tag)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn category_options(selected: &str) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            let attr = if c.as_str() == selected { " selected" } else { "" };
            format!(
                "            <option value=\"{}\"{}>{}</option>",
                escape_attr(c.as_str()),
                attr,
                capitalize_first(c.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
