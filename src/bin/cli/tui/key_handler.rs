use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::{Mode, TuiState};
use flashq_lib::filter::ALL_CATEGORIES;
use flashq_lib::flashcards::Category;
use flashq_lib::view::{CloseTrigger, DraftField};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    match state.mode {
        Mode::Browse => handle_browse_key(state, key),
        Mode::Form(field) => handle_form_key(state, key, field),
    }
}

fn handle_browse_key(state: &mut TuiState, key: KeyEvent) {
    if state.show_help {
        state.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Tab | KeyCode::BackTab => state.switch_tab(),
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Char('g') | KeyCode::Home => state.go_top(),
        KeyCode::Char('G') | KeyCode::End => state.go_bottom(),
        KeyCode::Char(' ') | KeyCode::Enter => state.flip_selected(),
        KeyCode::Char('0') | KeyCode::Char('a') => state.select_category(ALL_CATEGORIES),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            state.select_category(Category::ALL[index].as_str());
        }
        KeyCode::Char('n') => state.open_form(),
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn handle_form_key(state: &mut TuiState, key: KeyEvent, field: DraftField) {
    match key.code {
        KeyCode::Esc => state.close_form(CloseTrigger::Cancel),
        KeyCode::Tab => state.next_field(),
        KeyCode::Enter => state.submit_form(),
        KeyCode::Left if field == DraftField::Category => state.cycle_category(false),
        KeyCode::Right if field == DraftField::Category => state.cycle_category(true),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(c) => state.input_char(c),
        _ => {}
    }
}
