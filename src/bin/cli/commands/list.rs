use anyhow::Result;

use flashq_lib::flashcards::Collection;
use flashq_lib::view::{Command, Page};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    collection: Collection,
    category: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut view = app.controller(Page::Index);
    view.dispatch(Command::SelectCategory(category.to_string()))?;
    let grid = view.grid(collection);

    match format {
        OutputFormat::Json => {
            let units: Vec<_> = grid.visible_units().collect();
            println!("{}", serde_json::to_string_pretty(&units)?);
        }
        OutputFormat::Plain => {
            let title = format!(
                "{} ({} of {})",
                collection.title(),
                grid.visible_units().count(),
                grid.units().len()
            );
            println!("{}", terminal::paint(&title, terminal::Color::BOLD, use_color));
            println!();
            println!("{}", terminal::render_grid(grid, use_color));
        }
    }

    Ok(())
}
