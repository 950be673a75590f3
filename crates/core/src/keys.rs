//! Key descriptors and the prompt key bindings.

use serde::Deserialize;

/// A decoded key press, as delivered by the terminal layer.
///
/// `name` is either a key name (`up`, `pagedown`, `enter`, `backspace`,
/// `escape`, `space`, ...) or the typed character itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    pub name: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Key {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    #[must_use]
    pub fn char(c: char) -> Self {
        if c == ' ' {
            return Self::named("space");
        }
        let mut key = Self::named(c.to_string());
        key.shift = c.is_uppercase();
        key
    }

    #[must_use]
    pub fn ctrl(c: char) -> Self {
        let mut key = Self::named(c.to_string());
        key.ctrl = true;
        key
    }

    /// Ctrl+C, the only key that cancels a prompt.
    #[must_use]
    pub fn is_interrupt(&self) -> bool {
        self.ctrl && self.name == "c"
    }

    /// The character this key types, if any.
    #[must_use]
    pub fn printable(&self) -> Option<char> {
        if self.ctrl || self.meta {
            return None;
        }
        if self.name == "space" {
            return Some(' ');
        }
        let mut chars = self.name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    fn is_plain(&self) -> bool {
        !self.ctrl && !self.meta
    }
}

/// Key binding overrides, as read from configuration.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct KeyMapOverrides {
    pub previous: Option<Vec<String>>,
    pub next: Option<Vec<String>>,
    pub previous_page: Option<Vec<String>>,
    pub next_page: Option<Vec<String>>,
    pub submit: Option<Vec<String>>,
    pub check: Option<Vec<String>>,
}

/// Resolved key bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub previous: Vec<String>,
    pub next: Vec<String>,
    pub previous_page: Vec<String>,
    pub next_page: Vec<String>,
    pub submit: Vec<String>,
    pub check: Vec<String>,
}

/// An action a key is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    PreviousPage,
    NextPage,
    Submit,
    Check,
}

fn names(keys: &[&str]) -> Vec<String> {
    keys.iter().map(ToString::to_string).collect()
}

impl KeyMap {
    /// Builds the bindings for a prompt. Letter shortcuts for moving are only
    /// bound when search is off, otherwise they would be typed into the query.
    #[must_use]
    pub fn resolve(search: bool, overrides: &KeyMapOverrides) -> Self {
        let (previous, next) = if search {
            (names(&["up"]), names(&["down"]))
        } else {
            (names(&["up", "u", "p", "8"]), names(&["down", "d", "n", "2"]))
        };

        Self {
            previous: overrides.previous.clone().unwrap_or(previous),
            next: overrides.next.clone().unwrap_or(next),
            previous_page: overrides
                .previous_page
                .clone()
                .unwrap_or_else(|| names(&["pageup", "left"])),
            next_page: overrides
                .next_page
                .clone()
                .unwrap_or_else(|| names(&["pagedown", "right"])),
            submit: overrides
                .submit
                .clone()
                .unwrap_or_else(|| names(&["enter", "return"])),
            check: overrides.check.clone().unwrap_or_else(|| names(&["space"])),
        }
    }

    /// The action bound to `key`. Earlier actions win when a key is bound twice.
    #[must_use]
    pub fn action(&self, key: &Key) -> Option<Action> {
        if !key.is_plain() {
            return None;
        }

        [
            (Action::Previous, &self.previous),
            (Action::Next, &self.next),
            (Action::NextPage, &self.next_page),
            (Action::PreviousPage, &self.previous_page),
            (Action::Submit, &self.submit),
            (Action::Check, &self.check),
        ]
        .into_iter()
        .find(|(_, bound)| bound.iter().any(|name| *name == key.name))
        .map(|(action, _)| action)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::resolve(false, &KeyMapOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_printable() {
        assert_eq!(Key::char('a').printable(), Some('a'));
        assert_eq!(Key::char(' ').printable(), Some(' '));
        assert_eq!(Key::named("up").printable(), None);
        assert_eq!(Key::ctrl('a').printable(), None);
    }

    #[test]
    fn test_key_interrupt() {
        assert!(Key::ctrl('c').is_interrupt());
        assert!(!Key::char('c').is_interrupt());
    }

    #[test]
    fn test_default_bindings_without_search() {
        let keys = KeyMap::resolve(false, &KeyMapOverrides::default());
        assert_eq!(keys.action(&Key::char('u')), Some(Action::Previous));
        assert_eq!(keys.action(&Key::char('2')), Some(Action::Next));
        assert_eq!(keys.action(&Key::named("left")), Some(Action::PreviousPage));
        assert_eq!(keys.action(&Key::named("pagedown")), Some(Action::NextPage));
        assert_eq!(keys.action(&Key::named("return")), Some(Action::Submit));
        assert_eq!(keys.action(&Key::char(' ')), Some(Action::Check));
    }

    #[test]
    fn test_search_frees_letter_keys() {
        let keys = KeyMap::resolve(true, &KeyMapOverrides::default());
        assert_eq!(keys.action(&Key::char('u')), None);
        assert_eq!(keys.action(&Key::named("up")), Some(Action::Previous));
    }

    #[test]
    fn test_overrides() {
        let overrides = KeyMapOverrides {
            next: Some(vec!["j".to_string()]),
            previous: Some(vec!["k".to_string()]),
            ..Default::default()
        };
        let keys = KeyMap::resolve(false, &overrides);
        assert_eq!(keys.action(&Key::char('j')), Some(Action::Next));
        assert_eq!(keys.action(&Key::char('k')), Some(Action::Previous));
        assert_eq!(keys.action(&Key::named("down")), None);
    }

    #[test]
    fn test_modified_keys_are_not_bound() {
        let keys = KeyMap::default();
        assert_eq!(keys.action(&Key::ctrl('n')), None);
    }
}
