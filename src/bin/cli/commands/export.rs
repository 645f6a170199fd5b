use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use flashq_lib::render::render_document;
use flashq_lib::view::{Command, Page, Tab};

use crate::app::App;

/// Write the page as a standalone HTML document, to `out` or stdout
pub fn run(
    app: &App,
    page: Page,
    tab: Tab,
    category: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let mut view = app.controller(page);
    view.dispatch(Command::SwitchTab(tab))?;
    if let Some(category) = category {
        view.dispatch(Command::SelectCategory(category.to_string()))?;
    }

    let html = render_document(&view.document_view());

    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {} to {}", page, path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
