//! The application state and the single dispatcher that mutates it.

use crate::filter::{CategoryFilter, FilterController};
use crate::flashcards::{public_cards, Card, CardRepository, Collection};
use crate::render::{render_grid, DocumentView, GridView};
use crate::storage::{KeyValueStore, Result};
use crate::theme::{Theme, ThemeStore};

use super::commands::{CardDraft, CloseTrigger, Command, LoginForm, SignupForm, Tab};
use super::pages::Page;

const LOGIN_NOTICE: &str = "Login functionality will be connected to database. Redirecting to home...";
const SIGNUP_NOTICE: &str = "Signup functionality will be connected to database. Redirecting to login...";
const PASSWORD_MISMATCH: &str = "Passwords do not match!";

/// Result of dispatching one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed, redraw
    Updated,
    /// A card was created and the user's grid re-rendered
    CardCreated(Card),
    /// Navigation to another page, with a message to show first
    Redirect { to: Page, notice: Option<String> },
    /// Input was refused; nothing changed
    Rejected(String),
    /// The current page has no control for this command
    Ignored,
}

/// Creation modal state
#[derive(Debug, Clone, Default)]
pub struct Modal {
    pub open: bool,
    pub draft: CardDraft,
}

impl Modal {
    fn close(&mut self) {
        self.open = false;
        self.draft = CardDraft::default();
    }
}

/// Page-lifetime application state.
///
/// Owns the repository, the theme preference and everything shown on screen.
/// Commands are applied one at a time through [`ViewController::dispatch`].
#[derive(Debug)]
pub struct ViewController<S> {
    repository: CardRepository<S>,
    themes: ThemeStore<S>,
    public: Vec<Card>,
    filter: FilterController,
    page: Page,
    active_tab: Tab,
    modal: Modal,
    my_grid: GridView,
    public_grid: GridView,
}

impl<S: KeyValueStore + Clone> ViewController<S> {
    /// Hydrate from storage and render both grids
    pub fn open(store: S, page: Page) -> Self {
        let repository = CardRepository::open(store.clone());
        let themes = ThemeStore::load(store);
        let filter = FilterController::new();
        let public = public_cards();

        let my_grid = render_grid(Collection::MyCards, repository.cards(), filter.active());
        let public_grid = render_grid(Collection::PublicCards, &public, filter.active());

        Self {
            repository,
            themes,
            public,
            filter,
            page,
            active_tab: Tab::default(),
            modal: Modal::default(),
            my_grid,
            public_grid,
        }
    }
}

impl<S: KeyValueStore> ViewController<S> {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        self.filter.active()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn repository(&self) -> &CardRepository<S> {
        &self.repository
    }

    pub fn cards(&self, collection: Collection) -> &[Card] {
        match collection {
            Collection::MyCards => self.repository.cards(),
            Collection::PublicCards => &self.public,
        }
    }

    pub fn grid(&self, collection: Collection) -> &GridView {
        match collection {
            Collection::MyCards => &self.my_grid,
            Collection::PublicCards => &self.public_grid,
        }
    }

    fn grid_mut(&mut self, collection: Collection) -> &mut GridView {
        match collection {
            Collection::MyCards => &mut self.my_grid,
            Collection::PublicCards => &mut self.public_grid,
        }
    }

    /// Everything the document renderer needs
    pub fn document_view(&self) -> DocumentView<'_> {
        DocumentView {
            page: self.page,
            theme: self.theme(),
            active_tab: self.active_tab,
            filter: self.filter.active(),
            my_cards: &self.my_grid,
            public_cards: &self.public_grid,
            modal_open: self.modal.open,
            draft: &self.modal.draft,
        }
    }

    /// Follow a link to `page`
    pub fn visit(&mut self, page: Page) {
        log::debug!("Visiting {}", page);
        self.page = page;
    }

    /// Apply one command.
    ///
    /// Commands for controls the current page does not have are ignored.
    /// Errors only come from writing to storage.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        if !self.page.supports(command.feature()) {
            log::debug!("Ignoring {:?} on {}", command.feature(), self.page);
            return Ok(Outcome::Ignored);
        }

        match command {
            Command::ToggleTheme => {
                self.themes.toggle()?;
                Ok(Outcome::Updated)
            }
            Command::SwitchTab(tab) => {
                self.active_tab = tab;
                Ok(Outcome::Updated)
            }
            Command::SelectCategory(tag) => {
                self.filter
                    .select(&tag, &mut [&mut self.my_grid, &mut self.public_grid]);
                Ok(Outcome::Updated)
            }
            Command::OpenModal => {
                self.modal.open = true;
                Ok(Outcome::Updated)
            }
            Command::CloseModal(trigger) => {
                log::debug!("Closing card modal via {:?}", trigger);
                self.close_modal(trigger);
                Ok(Outcome::Updated)
            }
            Command::EditDraft(field, value) => {
                self.modal.draft.set(field, value);
                Ok(Outcome::Updated)
            }
            Command::CreateCard(draft) => self.create_card(draft),
            Command::FlipCard { collection, id } => {
                if self.grid_mut(collection).toggle_flip(id) {
                    Ok(Outcome::Updated)
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            Command::SubmitLogin(form) => Ok(self.submit_login(form)),
            Command::SubmitSignup(form) => Ok(self.submit_signup(form)),
            Command::LetsGo => Ok(self.redirect(Page::Login, None)),
        }
    }

    fn close_modal(&mut self, _trigger: CloseTrigger) {
        // Every close path resets the form
        self.modal.close();
    }

    fn create_card(&mut self, draft: CardDraft) -> Result<Outcome> {
        let card = self
            .repository
            .create(&draft.category, &draft.question, &draft.answer)?;

        self.rerender(Collection::MyCards);
        self.modal.close();
        Ok(Outcome::CardCreated(card))
    }

    /// Fully replace a grid, then re-apply the active filter
    fn rerender(&mut self, collection: Collection) {
        let grid = render_grid(collection, self.cards(collection), self.filter.active());
        *self.grid_mut(collection) = grid;
    }

    fn submit_login(&mut self, form: LoginForm) -> Outcome {
        log::info!("Login attempt for '{}'", form.email);
        self.redirect(Page::Index, Some(LOGIN_NOTICE.to_string()))
    }

    fn submit_signup(&mut self, form: SignupForm) -> Outcome {
        if form.password != form.confirm_password {
            return Outcome::Rejected(PASSWORD_MISMATCH.to_string());
        }

        log::info!(
            "Signup attempt for '{}' <{}> ({} {})",
            form.username,
            form.email,
            form.first_name,
            form.last_name
        );
        self.redirect(Page::Login, Some(SIGNUP_NOTICE.to_string()))
    }

    fn redirect(&mut self, to: Page, notice: Option<String>) -> Outcome {
        self.visit(to);
        Outcome::Redirect { to, notice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::MY_CARDS_KEY;
    use crate::storage::MemoryStore;
    use crate::theme::THEME_KEY;
    use crate::view::DraftField;

    fn index() -> (ViewController<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (ViewController::open(store.clone(), Page::Index), store)
    }

    fn signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let (view, _store) = index();
        assert_eq!(view.theme(), Theme::Light);
        assert_eq!(view.active_tab(), Tab::MyCards);
        assert_eq!(view.active_filter(), &CategoryFilter::All);
        assert!(!view.modal().open);
        assert!(view.grid(Collection::MyCards).is_empty_state());
        assert_eq!(view.grid(Collection::PublicCards).units().len(), 5);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (mut view, store) = index();
        view.dispatch(Command::ToggleTheme).unwrap();
        assert_eq!(view.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let reopened = ViewController::open(store.clone(), Page::Login);
        assert_eq!(reopened.theme(), Theme::Dark);

        view.dispatch(Command::ToggleTheme).unwrap();
        assert_eq!(view.theme(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_switch_tab_exclusive() {
        let (mut view, _store) = index();
        view.dispatch(Command::SwitchTab(Tab::PublicCards)).unwrap();
        assert_eq!(view.active_tab(), Tab::PublicCards);
        view.dispatch(Command::SwitchTab(Tab::MyCards)).unwrap();
        assert_eq!(view.active_tab(), Tab::MyCards);
    }

    #[test]
    fn test_create_card_renders_and_persists() {
        let (mut view, store) = index();
        view.dispatch(Command::OpenModal).unwrap();

        let outcome = view
            .dispatch(Command::CreateCard(CardDraft::new("math", "2 + 2?", "4")))
            .unwrap();
        let card = match outcome {
            Outcome::CardCreated(card) => card,
            other => panic!("unexpected outcome {:?}", other),
        };

        let grid = view.grid(Collection::MyCards);
        assert!(!grid.is_empty_state());
        assert_eq!(grid.units().len(), 1);
        assert_eq!(grid.units()[0].id, card.id);
        assert!(!view.modal().open);
        assert_eq!(view.modal().draft, CardDraft::default());

        let raw = store.get(MY_CARDS_KEY).unwrap().unwrap();
        assert!(raw.contains("2 + 2?"));
    }

    #[test]
    fn test_create_card_keeps_active_filter() {
        let (mut view, _store) = index();
        view.dispatch(Command::SelectCategory("history".to_string()))
            .unwrap();
        view.dispatch(Command::CreateCard(CardDraft::new("math", "Q", "A")))
            .unwrap();
        let history = view
            .dispatch(Command::CreateCard(CardDraft::new("history", "Q", "A")))
            .unwrap();

        let grid = view.grid(Collection::MyCards);
        assert_eq!(grid.units().len(), 2);
        match history {
            Outcome::CardCreated(card) => assert_eq!(grid.visible_ids(), vec![card.id]),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_create_card_does_not_touch_public_flips() {
        let (mut view, _store) = index();
        view.dispatch(Command::FlipCard {
            collection: Collection::PublicCards,
            id: 1,
        })
        .unwrap();
        view.dispatch(Command::CreateCard(CardDraft::new("math", "Q", "A")))
            .unwrap();

        assert!(view.grid(Collection::PublicCards).units()[0].flipped);
    }

    #[test]
    fn test_every_close_path_resets_draft() {
        for trigger in [CloseTrigger::CloseButton, CloseTrigger::Cancel, CloseTrigger::Backdrop] {
            let (mut view, _store) = index();
            view.dispatch(Command::OpenModal).unwrap();
            view.dispatch(Command::EditDraft(DraftField::Question, "half".to_string()))
                .unwrap();
            assert_eq!(view.modal().draft.question, "half");

            view.dispatch(Command::CloseModal(trigger)).unwrap();
            assert!(!view.modal().open);
            assert_eq!(view.modal().draft, CardDraft::default());
        }
    }

    #[test]
    fn test_flip_card_toggles() {
        let (mut view, _store) = index();
        let flip = Command::FlipCard {
            collection: Collection::PublicCards,
            id: 3,
        };
        assert_eq!(view.dispatch(flip.clone()).unwrap(), Outcome::Updated);
        assert!(view.grid(Collection::PublicCards).units()[2].flipped);
        view.dispatch(flip).unwrap();
        assert!(!view.grid(Collection::PublicCards).units()[2].flipped);

        let missing = Command::FlipCard {
            collection: Collection::MyCards,
            id: 3,
        };
        assert_eq!(view.dispatch(missing).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_signup_mismatch_rejected() {
        let store = MemoryStore::new();
        let mut view = ViewController::open(store.clone(), Page::Signup);
        let before = store.get(MY_CARDS_KEY).unwrap();

        let outcome = view.dispatch(Command::SubmitSignup(signup("a", "b"))).unwrap();
        assert_eq!(outcome, Outcome::Rejected("Passwords do not match!".to_string()));
        assert_eq!(view.page(), Page::Signup);
        assert_eq!(store.get(MY_CARDS_KEY).unwrap(), before);
    }

    #[test]
    fn test_signup_match_redirects_to_login() {
        let store = MemoryStore::new();
        let mut view = ViewController::open(store.clone(), Page::Signup);

        let outcome = view.dispatch(Command::SubmitSignup(signup("a", "a"))).unwrap();
        assert!(matches!(outcome, Outcome::Redirect { to: Page::Login, notice: Some(_) }));
        assert_eq!(view.page(), Page::Login);
        // Signup is not wired to card storage
        assert!(store.get(MY_CARDS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_login_redirects_to_index() {
        let mut view = ViewController::open(MemoryStore::new(), Page::Login);
        let outcome = view
            .dispatch(Command::SubmitLogin(LoginForm {
                email: "a@b.c".to_string(),
                password: "whatever".to_string(),
            }))
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect {
                to: Page::Index,
                notice: Some(LOGIN_NOTICE.to_string())
            }
        );
        assert_eq!(view.page(), Page::Index);
    }

    #[test]
    fn test_lets_go_goes_to_login() {
        let (mut view, _store) = index();
        assert_eq!(
            view.dispatch(Command::LetsGo).unwrap(),
            Outcome::Redirect {
                to: Page::Login,
                notice: None
            }
        );
    }

    #[test]
    fn test_missing_controls_are_ignored() {
        let store = MemoryStore::new();
        let mut view = ViewController::open(store.clone(), Page::Login);

        let outcome = view
            .dispatch(Command::CreateCard(CardDraft::new("math", "Q", "A")))
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert!(view.repository().is_empty());
        assert!(store.get(MY_CARDS_KEY).unwrap().is_none());

        assert_eq!(
            view.dispatch(Command::SubmitSignup(signup("a", "b"))).unwrap(),
            Outcome::Ignored
        );

        // The theme toggle exists on every page
        assert_eq!(view.dispatch(Command::ToggleTheme).unwrap(), Outcome::Updated);
    }

    #[test]
    fn test_reopen_shows_created_cards() {
        let (mut view, store) = index();
        view.dispatch(Command::CreateCard(CardDraft::new("science", "Q1", "A1")))
            .unwrap();
        view.dispatch(Command::CreateCard(CardDraft::new("language", "Q2", "A2")))
            .unwrap();

        let reopened = ViewController::open(store, Page::Index);
        let questions: Vec<&str> = reopened
            .grid(Collection::MyCards)
            .units()
            .iter()
            .map(|u| u.question.as_str())
            .collect();
        assert_eq!(questions, vec!["Q1", "Q2"]);
    }
}
