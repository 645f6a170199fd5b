use anyhow::Result;

use crate::app::App;
use flashq_lib::flashcards::{Category, Collection};
use flashq_lib::render::{CardUnit, GridView};
use flashq_lib::storage::FileStore;
use flashq_lib::view::{CloseTrigger, Command, DraftField, Outcome, Page, Tab, ViewController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Creation form open, with the focused field
    Form(DraftField),
}

pub struct TuiState {
    pub app: App,
    pub view: ViewController<FileStore>,
    pub mode: Mode,

    // Cursor per tab, indexing the visible cards
    pub my_selected: usize,
    pub public_selected: usize,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Result<Self> {
        let view = app.controller(Page::Index);
        Ok(Self {
            app,
            view,
            mode: Mode::Browse,
            my_selected: 0,
            public_selected: 0,
            flash_message: None,
            show_help: false,
            quit: false,
        })
    }

    pub fn active_collection(&self) -> Collection {
        self.view.active_tab().collection()
    }

    pub fn active_grid(&self) -> &GridView {
        self.view.grid(self.active_collection())
    }

    /// Cursor position for the active tab, clamped to the visible cards
    pub fn selected(&self) -> usize {
        let raw = match self.view.active_tab() {
            Tab::MyCards => self.my_selected,
            Tab::PublicCards => self.public_selected,
        };
        let count = self.active_grid().visible_units().count();
        raw.min(count.saturating_sub(1))
    }

    fn set_selected(&mut self, index: usize) {
        match self.view.active_tab() {
            Tab::MyCards => self.my_selected = index,
            Tab::PublicCards => self.public_selected = index,
        }
    }

    pub fn selected_unit(&self) -> Option<&CardUnit> {
        self.active_grid().visible_units().nth(self.selected())
    }

    pub fn move_down(&mut self) {
        let count = self.active_grid().visible_units().count();
        let selected = self.selected();
        if selected + 1 < count {
            self.set_selected(selected + 1);
        }
    }

    pub fn move_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(1));
    }

    pub fn go_top(&mut self) {
        self.set_selected(0);
    }

    pub fn go_bottom(&mut self) {
        let count = self.active_grid().visible_units().count();
        self.set_selected(count.saturating_sub(1));
    }

    pub fn switch_tab(&mut self) {
        let next = self.view.active_tab().next();
        self.dispatch(Command::SwitchTab(next));
    }

    pub fn select_category(&mut self, tag: &str) {
        self.dispatch(Command::SelectCategory(tag.to_string()));
        self.my_selected = 0;
        self.public_selected = 0;
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(Command::ToggleTheme);
        self.flash_message = Some(format!("Theme: {}", self.view.theme()));
    }

    pub fn flip_selected(&mut self) {
        let collection = self.active_collection();
        if let Some(id) = self.selected_unit().map(|unit| unit.id) {
            self.dispatch(Command::FlipCard { collection, id });
        }
    }

    pub fn open_form(&mut self) {
        self.dispatch(Command::OpenModal);
        self.mode = Mode::Form(DraftField::Category);
    }

    pub fn close_form(&mut self, trigger: CloseTrigger) {
        self.dispatch(Command::CloseModal(trigger));
        self.mode = Mode::Browse;
    }

    pub fn next_field(&mut self) {
        if let Mode::Form(field) = self.mode {
            self.mode = Mode::Form(field.next());
        }
    }

    /// Step the category select forwards or backwards
    pub fn cycle_category(&mut self, forward: bool) {
        let current = self
            .view
            .modal()
            .draft
            .category
            .parse::<Category>()
            .unwrap_or_default();
        let index = Category::ALL
            .iter()
            .position(|c| *c == current)
            .unwrap_or(0);
        let len = Category::ALL.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.dispatch(Command::EditDraft(
            DraftField::Category,
            Category::ALL[next].as_str().to_string(),
        ));
    }

    pub fn input_char(&mut self, c: char) {
        if let Mode::Form(field) = self.mode {
            if field == DraftField::Category {
                return;
            }
            let mut value = self.view.modal().draft.field(field).to_string();
            value.push(c);
            self.dispatch(Command::EditDraft(field, value));
        }
    }

    pub fn backspace(&mut self) {
        if let Mode::Form(field) = self.mode {
            if field == DraftField::Category {
                return;
            }
            let mut value = self.view.modal().draft.field(field).to_string();
            value.pop();
            self.dispatch(Command::EditDraft(field, value));
        }
    }

    /// Create a card from the form; incomplete forms stay open
    pub fn submit_form(&mut self) {
        let draft = self.view.modal().draft.clone();
        if !draft.is_complete() {
            self.flash_message = Some("Question and answer are required".to_string());
            return;
        }

        if let Some(Outcome::CardCreated(card)) = self.dispatch(Command::CreateCard(draft)) {
            self.flash_message = Some(format!("Created card {} in {}", card.id, card.category));
            self.mode = Mode::Browse;
        }
    }

    fn dispatch(&mut self, command: Command) -> Option<Outcome> {
        match self.view.dispatch(command) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
                None
            }
        }
    }
}
