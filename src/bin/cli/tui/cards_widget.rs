use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app_state::{Mode, TuiState};
use flashq_lib::render::CardUnit;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let grid = state.active_grid();
    let is_active = state.mode == Mode::Browse;

    let title = format!(
        " {} [{}] ",
        state.active_collection().title(),
        state.view.active_filter()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if grid.is_empty_state() || grid.visible_units().next().is_none() {
        let message = if grid.is_empty_state() {
            grid.empty_message()
        } else {
            "No cards in this category."
        };
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = grid.visible_units().map(card_item).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if is_active { Color::DarkGray } else { Color::Black })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected()));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn card_item(unit: &CardUnit) -> ListItem<'static> {
    let (face, face_style) = if unit.flipped {
        ("A", Style::default().fg(Color::Green))
    } else {
        ("Q", Style::default().fg(Color::Yellow))
    };

    let header = Line::from(vec![
        Span::styled(
            format!("[{}]", unit.label),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" #{}", unit.id), Style::default().fg(Color::DarkGray)),
    ]);
    let body = Line::from(vec![
        Span::styled(format!("  {}: ", face), face_style),
        Span::raw(unit.face_text().to_string()),
    ]);

    ListItem::new(vec![header, body, Line::from("")])
}
