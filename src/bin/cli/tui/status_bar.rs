use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.mode {
        Mode::Browse => {
            " Tab: switch tab  1-5/0: category  j/k: navigate  Space: flip  n: new card  t: theme  ?: help  q: quit "
        }
        Mode::Form(_) => {
            " Tab: next field  Left/Right: category  Enter: create  Esc: cancel "
        }
    };

    let status = Paragraph::new(hints)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
