use anyhow::Result;

use flashq_lib::view::{Command, Page};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, toggle: bool, format: &OutputFormat) -> Result<()> {
    let mut view = app.controller(Page::Index);
    if toggle {
        view.dispatch(Command::ToggleTheme)?;
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "theme": view.theme() }));
        }
        OutputFormat::Plain => {
            println!("{}", view.theme());
        }
    }

    Ok(())
}
