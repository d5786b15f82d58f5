//! Application state and key handling.
//!
//! `AppState` wraps the view-state [`Store`](state::Store) with the
//! terminal-only concerns: input mode, row selection, theme and keymap.
//! Key presses are turned into actions here; the loop in [`update`] owns the
//! terminal and the fetch channel.
//!
pub mod fetch;
pub mod keymap;
pub mod state;
pub mod theme;
pub mod update;

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keymap::{KeyAction, Keymap};
use state::{Action, Store, ViewState};
use theme::Theme;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// What the event loop must do after a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    /// `FetchStarted` was dispatched; a request must be spawned.
    Fetch,
}

pub struct AppState {
    store: Store,
    dirty: Rc<Cell<bool>>,
    pub input_mode: InputMode,
    pub selected: usize,
    pub rows_per_page: usize,
    pub theme: Theme,
    pub keymap: Keymap,
}

impl AppState {
    pub fn new(theme: Theme, keymap: Keymap) -> Self {
        let mut store = Store::new(ViewState::new());
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));
        store.subscribe(state::log_snapshot);
        Self {
            store,
            dirty,
            input_mode: InputMode::Normal,
            selected: 0,
            rows_per_page: 10,
            theme,
            keymap,
        }
    }

    pub fn view(&self) -> &ViewState {
        self.store.state()
    }

    /// Returns true once after any change that needs a redraw.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn dispatch(&mut self, action: Action) {
        let resets_selection = matches!(
            action,
            Action::FetchSucceeded(_) | Action::SearchUpdated(_) | Action::SearchCleared
        );
        self.store.dispatch(action);
        if resets_selection {
            self.selected = 0;
        }
        self.clamp_selection();
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Command {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Command::Quit;
        }
        let cmd = match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => {
                self.handle_search_key(key);
                Command::None
            }
        };
        self.mark_dirty();
        cmd
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) -> Command {
        let Some(action) = self.keymap.resolve(key) else {
            return Command::None;
        };
        match action {
            KeyAction::Quit => return Command::Quit,
            KeyAction::Fetch => {
                if self.view().can_fetch() {
                    self.dispatch(Action::FetchStarted);
                    return Command::Fetch;
                }
            }
            KeyAction::StartSearch => self.input_mode = InputMode::Search,
            KeyAction::ClearSearch => {
                if self.view().can_clear() {
                    self.dispatch(Action::SearchCleared);
                }
            }
            KeyAction::MoveUp => self.selected = self.selected.saturating_sub(1),
            KeyAction::MoveDown => {
                if self.selected + 1 < self.view().visible_users().len() {
                    self.selected += 1;
                }
            }
            KeyAction::PageUp => {
                self.selected = self.selected.saturating_sub(self.rows_per_page.max(1));
            }
            KeyAction::PageDown => {
                self.selected = self.selected.saturating_add(self.rows_per_page.max(1));
                self.clamp_selection();
            }
            KeyAction::Ignore => {}
        }
        Command::None
    }

    fn handle_search_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                let mut input = self.view().search_term().to_string();
                if input.pop().is_some() {
                    self.dispatch(Action::SearchUpdated(input));
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut input = self.view().search_term().to_string();
                input.push(c);
                self.dispatch(Action::SearchUpdated(input));
            }
            _ => {}
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.view().visible_users().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Keymap::default())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::User;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn users(names: &[&str]) -> Vec<User> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                serde_json::from_value(serde_json::json!({ "id": i + 1, "name": n })).expect("user")
            })
            .collect()
    }

    fn loaded_app() -> AppState {
        let mut app = AppState::default();
        app.dispatch(Action::FetchStarted);
        app.dispatch(Action::FetchSucceeded(users(&["Leanne Graham", "Ervin Howell", "Kurtis Weissnat"])));
        app
    }

    #[test]
    fn fetch_key_starts_a_fetch_only_when_idle() {
        let mut app = AppState::default();
        assert_eq!(app.handle_key(&key(KeyCode::Char('f'))), Command::Fetch);
        assert!(app.view().is_loading());
        assert_eq!(app.handle_key(&key(KeyCode::Char('f'))), Command::None);

        app.dispatch(Action::FetchFailed(FetchError::Status(500)));
        assert_eq!(app.handle_key(&key(KeyCode::Char('f'))), Command::Fetch);
        assert_eq!(app.view().error_message(), None);
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut app = loaded_app();
        app.handle_key(&key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Search);

        app.handle_key(&key(KeyCode::Char('E')));
        assert_eq!(app.view().search_term(), "e");
        assert_eq!(app.view().visible_users().len(), 3);

        app.handle_key(&key(KeyCode::Char('r')));
        assert_eq!(app.view().visible_users().len(), 1);

        // 'q' is text in search mode, not quit
        assert_eq!(app.handle_key(&key(KeyCode::Char('q'))), Command::None);
        assert!(app.view().visible_users().is_empty());

        app.handle_key(&key(KeyCode::Backspace));
        app.handle_key(&key(KeyCode::Backspace));
        assert_eq!(app.view().search_term(), "e");
        assert_eq!(app.view().visible_users().len(), 3);

        app.handle_key(&key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.view().search_term(), "e");
    }

    #[test]
    fn clear_key_blanks_table_and_is_then_disabled() {
        let mut app = loaded_app();
        app.handle_key(&key(KeyCode::Char('c')));
        assert!(app.view().visible_users().is_empty());
        assert!(!app.view().can_clear());
        assert_eq!(app.view().all_users().len(), 3);
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut app = loaded_app();
        app.handle_key(&key(KeyCode::Down));
        app.handle_key(&key(KeyCode::Char('j')));
        app.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(app.selected, 2);
        app.handle_key(&key(KeyCode::Up));
        assert_eq!(app.selected, 1);
        app.handle_key(&key(KeyCode::PageDown));
        assert_eq!(app.selected, 2);
        app.handle_key(&key(KeyCode::PageUp));
        assert_eq!(app.selected, 0);

        app.selected = 2;
        app.dispatch(Action::SearchUpdated("kurtis".into()));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn dispatch_marks_the_view_dirty() {
        let mut app = AppState::default();
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        app.dispatch(Action::SearchCleared);
        assert!(app.take_dirty());
    }

    #[test]
    fn new_app_subscribes_redraw_flag_and_logger() {
        let mut app = AppState::default();
        assert_eq!(app.store.subscriber_count(), 2);
        app.take_dirty();
        app.dispatch(Action::FetchStarted);
        assert!(app.take_dirty());
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = AppState::default();
        app.input_mode = InputMode::Search;
        let ev = KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(app.handle_key(&ev), Command::Quit);
    }
}
