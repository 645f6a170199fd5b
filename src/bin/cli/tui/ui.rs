use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};

use super::app_state::TuiState;
use super::{cards_widget, form_widget, status_bar};
use flashq_lib::view::Tab;
use flashq_lib::Theme;

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Main layout: tab bar + cards + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let (fg, bg) = match state.view.theme() {
        Theme::Light => (Color::Black, Color::White),
        Theme::Dark => (Color::White, Color::Black),
    };
    f.render_widget(Block::default().style(Style::default().fg(fg).bg(bg)), size);

    draw_tabs(f, outer[0], state);
    cards_widget::draw(f, outer[1], state);
    form_widget::draw(f, outer[1], state);
    status_bar::draw(f, outer[2], state);

    if state.show_help {
        draw_help(f, outer[1], state);
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, state: &TuiState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.collection().title())))
        .collect();
    let selected = Tab::ALL
        .iter()
        .position(|tab| *tab == state.view.active_tab())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    f.render_widget(tabs, area);
}

fn draw_help(f: &mut Frame, area: Rect, state: &TuiState) {
    let lines = vec![
        Line::from(" Tab        switch between My Cards and Public Cards"),
        Line::from(" 1-5        filter: science, math, programming, history, language"),
        Line::from(" 0 / a      show all categories"),
        Line::from(" j/k g/G    move selection"),
        Line::from(" Space      flip the selected card"),
        Line::from(" n          create a new card"),
        Line::from(" t          toggle light/dark theme"),
        Line::from(" q          quit"),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Data: {}", state.app.data_dir.display()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = area.width.saturating_sub(4).min(72);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(help, popup);
}
