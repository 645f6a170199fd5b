use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app_state::{Mode, TuiState};
use flashq_lib::view::DraftField;

/// Card creation modal, centered over the card list
pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let focused = match state.mode {
        Mode::Form(field) => field,
        Mode::Browse => return,
    };
    let draft = &state.view.modal().draft;

    let width = area.width.saturating_sub(4).min(70);
    let height = 9u16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    // Clear the area behind the popup
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Create New Flashcard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![Line::from("")];
    for field in DraftField::ALL {
        let (label, value) = match field {
            DraftField::Category => ("Category", format!("< {} >", draft.category)),
            DraftField::Question => ("Question", draft.question.clone()),
            DraftField::Answer => ("Answer", draft.answer.clone()),
        };
        let is_focused = field == focused;
        let label_style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if is_focused && field != DraftField::Category {
            "\u{2588}"
        } else {
            ""
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<10}", label), label_style),
            Span::raw(format!("{}{}", value, cursor)),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup);
}
