//! Keybinding configuration: defaults, optional `keybinds.conf` overrides, and key resolution.
//!
//! The file format is one binding per line, `<Action> = <KeySpec>`, with `#`
//! comments. Unknown actions or keys are skipped so a typo never stops the
//! dashboard from starting. Bindings only apply in normal mode; search mode
//! feeds keystrokes to the search box.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic actions reachable from normal mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Trigger a fetch of the user list.
    Fetch,
    /// Focus the search box.
    StartSearch,
    /// Clear the search (blanks the table).
    ClearSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Explicitly unbound; swallows the key.
    Ignore,
}

#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Char('f')), KeyAction::Fetch);
        bindings.insert((M::NONE, Char('/')), KeyAction::StartSearch);
        bindings.insert((M::NONE, Char('c')), KeyAction::ClearSearch);
        bindings.insert((M::NONE, Esc), KeyAction::Ignore);

        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);

        Self { bindings }
    }

    /// Start from the defaults and apply every valid line of the file at `path`.
    ///
    /// Returns `None` when the file cannot be read.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::from_config_str(&contents))
    }

    pub fn from_config_str(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            if let (Some(action), Some(key)) = (parse_action(lhs), parse_key(rhs)) {
                map.bindings.insert(key, action);
            }
        }
        map
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// First key bound to `action`, formatted for hints. Picks the shortest spec for stability.
    pub fn key_for(&self, action: KeyAction) -> Option<String> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }

    /// Format a key (modifiers + code) as a spec like "Ctrl+c" or "PageUp".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Up" => Up,
        "Down" => Down,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    match s.trim() {
        "Quit" => Some(KeyAction::Quit),
        "Fetch" => Some(KeyAction::Fetch),
        "StartSearch" => Some(KeyAction::StartSearch),
        "ClearSearch" => Some(KeyAction::ClearSearch),
        "MoveUp" => Some(KeyAction::MoveUp),
        "MoveDown" => Some(KeyAction::MoveDown),
        "PageUp" => Some(KeyAction::PageUp),
        "PageDown" => Some(KeyAction::PageDown),
        "Ignore" => Some(KeyAction::Ignore),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, mods, KeyEventKind::Press)
    }

    #[test]
    fn defaults_cover_the_dashboard_controls() {
        let km = Keymap::default();
        assert_eq!(km.resolve(&press(KeyCode::Char('f'), KeyModifiers::NONE)), Some(KeyAction::Fetch));
        assert_eq!(km.resolve(&press(KeyCode::Char('c'), KeyModifiers::NONE)), Some(KeyAction::ClearSearch));
        assert_eq!(km.resolve(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(KeyAction::Quit));
        assert_eq!(km.resolve(&press(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn config_lines_override_and_bad_lines_are_skipped() {
        let km = Keymap::from_config_str(
            "# custom\nFetch = r\nClearSearch = Ctrl+l\nNotAnAction = z\nQuit = \ngarbage\nMoveDown = ab\n",
        );
        assert_eq!(km.resolve(&press(KeyCode::Char('r'), KeyModifiers::NONE)), Some(KeyAction::Fetch));
        assert_eq!(km.resolve(&press(KeyCode::Char('l'), KeyModifiers::CONTROL)), Some(KeyAction::ClearSearch));
        // defaults survive
        assert_eq!(km.resolve(&press(KeyCode::Char('f'), KeyModifiers::NONE)), Some(KeyAction::Fetch));
        assert_eq!(km.resolve(&press(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_for_prefers_short_specs() {
        let km = Keymap::default();
        assert_eq!(km.key_for(KeyAction::Quit).as_deref(), Some("q"));
        assert_eq!(km.key_for(KeyAction::MoveDown).as_deref(), Some("j"));
    }

    #[test]
    fn missing_file_yields_none() {
        assert!(Keymap::from_file("/nonexistent/user-dashboard/keybinds.conf").is_none());
    }
}
