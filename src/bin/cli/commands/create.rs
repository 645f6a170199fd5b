use anyhow::{bail, Result};

use flashq_lib::flashcards::Category;
use flashq_lib::view::{CardDraft, Command, Outcome, Page};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    category: Category,
    question: &str,
    answer: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    // The form marks both fields as required
    if question.trim().is_empty() || answer.trim().is_empty() {
        bail!("Question and answer are required");
    }

    let mut view = app.controller(Page::Index);
    let draft = CardDraft::new(category.as_str(), question, answer);

    let card = match view.dispatch(Command::CreateCard(draft))? {
        Outcome::CardCreated(card) => card,
        other => bail!("Card was not created: {:?}", other),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Plain => {
            let total = view.repository().len();
            println!(
                "{} card {} in {} ({} card(s) total)",
                terminal::paint("Created", terminal::Color::GREEN, use_color),
                card.id,
                card.category,
                total
            );
        }
    }

    Ok(())
}
