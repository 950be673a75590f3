//! The list prompt engine.
//!
//! [`ListPrompt`] owns the option tree, the navigation state and the search
//! query of one prompt. Key events go through [`ListPrompt::handle_key`];
//! [`ListPrompt::run`] drives that loop against a [`Terminal`].
//!
//! What happens when a leaf is picked, and what the final answer looks like,
//! is decided by a [`PromptKind`]:
//!
//! - [`Select`] answers with the picked leaf's value
//! - [`Checkbox`] toggles leaves and answers with every checked value

pub mod checkbox;
pub mod select;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::breadcrumb::breadcrumb;
use crate::config::PromptConfig;
use crate::error::{Error, Result};
use crate::keys::{Action, Key, KeyMap};
use crate::matcher::TextMatcher;
use crate::navigation::{CycleDirection, NavigationState};
use crate::options::{ListOption, OptionPath, OptionTree};
use crate::render::{Frame, FrameRow, FrameRowKind, Renderer};
use crate::search::{level_rows, search, DisplayRow, RowKind};
use crate::terminal::Terminal;

pub use checkbox::Checkbox;
pub use select::Select;

/// Label of the Back row when no breadcrumb is shown.
pub const BACK_LABEL: &str = "Back";

/// What to do after a leaf was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafAction {
    /// Answer the prompt.
    Submit,
    /// Keep prompting.
    Stay,
}

/// The behaviour that differs between prompt variants.
pub trait PromptKind {
    type Output: Clone + std::fmt::Debug;

    /// True if leaves are picked with the check key, leaving the submit key
    /// to answer the whole prompt.
    fn has_check_key(&self) -> bool;

    /// Applies the configured defaults. Returns the option the cursor should
    /// start on, if any.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for defaults that match no option.
    fn prepare(&mut self, tree: &mut OptionTree, defaults: &[String]) -> Result<Option<OptionPath>>;

    fn on_select_leaf(&self, option: &mut ListOption) -> LeafAction;

    fn final_value(&self, tree: &OptionTree, selected: Option<&ListOption>) -> Self::Output;

    /// # Errors
    ///
    /// Returns a message for the user if the answer is not acceptable.
    fn validate(&self, tree: &OptionTree, value: &Self::Output) -> std::result::Result<(), String>;

    fn format(&self, tree: &OptionTree, value: &Self::Output) -> String;

    /// Check state shown next to a leaf.
    fn checked(&self, _option: &ListOption) -> Option<bool> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptState {
    Browsing,
    Searching,
    Submitted,
    Cancelled,
}

/// Result of handling one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<T> {
    Continue,
    /// The prompt is over: `Some` answer, or `None` when cancelled.
    Done(Option<T>),
}

pub struct ListPrompt<K: PromptKind> {
    kind: K,
    config: PromptConfig,
    keys: KeyMap,
    tree: OptionTree,
    matcher: TextMatcher,
    navigation: NavigationState,
    query: String,
    /// Cursor of the browsed level when the current search started
    browse_cursor: usize,
    state: PromptState,
    error: Option<String>,
    answer: Option<K::Output>,
    injected: Option<K::Output>,
}

impl ListPrompt<Select> {
    /// # Errors
    ///
    /// Returns a configuration error for an unknown default.
    pub fn select(tree: OptionTree, config: PromptConfig) -> Result<Self> {
        Self::new(Select::default(), tree, config)
    }
}

impl ListPrompt<Checkbox> {
    /// # Errors
    ///
    /// Returns a configuration error for unknown defaults or bounds where
    /// `min_options > max_options`.
    pub fn checkbox(tree: OptionTree, config: PromptConfig) -> Result<Self> {
        let kind = Checkbox::from_config(&config)?;
        Self::new(kind, tree, config)
    }
}

impl<K: PromptKind> ListPrompt<K> {
    /// Builds a prompt. The tree is owned by the prompt from here on.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the defaults don't fit the options.
    pub fn new(mut kind: K, mut tree: OptionTree, config: PromptConfig) -> Result<Self> {
        let start = kind.prepare(&mut tree, &config.default)?;
        let rows = level_rows(&tree, &[], false);

        let mut prompt = Self {
            keys: KeyMap::resolve(config.search, &config.keys),
            matcher: TextMatcher::new(config.match_mode),
            navigation: NavigationState::new(rows, config.max_rows),
            kind,
            config,
            tree,
            query: String::new(),
            browse_cursor: 0,
            state: PromptState::Browsing,
            error: None,
            answer: None,
            injected: None,
        };

        if let Some(path) = start {
            prompt.reveal(&path);
        }

        info!(
            "Created prompt `{}` with {} options",
            prompt.config.message,
            prompt.tree.leaf_count()
        );
        Ok(prompt)
    }

    /// Makes [`ListPrompt::run`] answer with `value` without reading keys.
    #[must_use]
    pub fn inject(mut self, value: K::Output) -> Self {
        self.injected = Some(value);
        self
    }

    #[must_use]
    pub fn state(&self) -> PromptState {
        self.state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn tree(&self) -> &OptionTree {
        &self.tree
    }

    #[must_use]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// The last validation message, cleared by the next key.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The option under the cursor.
    #[must_use]
    pub fn current_option(&self) -> Option<&ListOption> {
        self.navigation
            .current()
            .and_then(DisplayRow::path)
            .and_then(|path| self.tree.get(path))
    }

    /// Runs the prompt until it is answered or cancelled. Returns `None` on
    /// cancel. The cursor is shown again on every exit path.
    ///
    /// # Errors
    ///
    /// Returns terminal errors, and [`Error::InvalidAnswer`] for an injected
    /// value that fails validation.
    pub fn run<T: Terminal, R: Renderer>(
        &mut self,
        terminal: &mut T,
        renderer: &R,
    ) -> Result<Option<K::Output>> {
        if let Some(value) = self.injected.take() {
            self.kind
                .validate(&self.tree, &value)
                .map_err(Error::InvalidAnswer)?;
            info!("Answering `{}` with injected value {value:?}", self.config.message);
            self.state = PromptState::Submitted;
            self.answer = Some(value.clone());
            return Ok(Some(value));
        }

        if !self.config.search {
            terminal.hide_cursor()?;
        }

        let outcome = self.drive(terminal, renderer);
        let restored = terminal.show_cursor();
        let answer = outcome?;
        restored?;

        Ok(answer)
    }

    fn drive<T: Terminal, R: Renderer>(
        &mut self,
        terminal: &mut T,
        renderer: &R,
    ) -> Result<Option<K::Output>> {
        loop {
            terminal.write_frame(&renderer.render(&self.frame()))?;

            let key = terminal.read_key()?;
            if let Step::Done(answer) = self.handle_key(&key) {
                let summary = answer
                    .as_ref()
                    .map(|value| self.kind.format(&self.tree, value))
                    .unwrap_or_default();
                terminal.write_frame(&renderer.render_answer(&self.config.message, &summary))?;
                return Ok(answer);
            }
        }
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: &Key) -> Step<K::Output> {
        match self.state {
            PromptState::Submitted => return Step::Done(self.answer.clone()),
            PromptState::Cancelled => return Step::Done(None),
            PromptState::Browsing | PromptState::Searching => {}
        }

        if key.is_interrupt() {
            info!("Prompt `{}` cancelled", self.config.message);
            self.state = PromptState::Cancelled;
            return Step::Done(None);
        }

        self.error = None;

        match self.keys.action(key) {
            Some(Action::Previous) => self.navigation.move_cursor(CycleDirection::Up),
            Some(Action::Next) => self.navigation.move_cursor(CycleDirection::Down),
            Some(Action::PreviousPage) => self.navigation.page_up(),
            Some(Action::NextPage) => self.navigation.page_down(),
            Some(Action::Submit) => return self.submit(),
            Some(Action::Check) if self.kind.has_check_key() => return self.check(),
            _ => self.edit_query(key),
        }

        Step::Continue
    }

    fn submit(&mut self) -> Step<K::Output> {
        let Some(row) = self.navigation.current().cloned() else {
            return self.finish(None);
        };

        match row.kind {
            RowKind::Back => {
                self.leave_group();
                Step::Continue
            }
            RowKind::Group(path) => {
                self.enter_group(path);
                Step::Continue
            }
            RowKind::Leaf(path) if !self.kind.has_check_key() => self.select_leaf(&path),
            RowKind::Category(_) if !self.kind.has_check_key() => Step::Continue,
            RowKind::Leaf(_) | RowKind::Category(_) => self.finish(None),
        }
    }

    fn check(&mut self) -> Step<K::Output> {
        let Some(row) = self.navigation.current().cloned() else {
            return Step::Continue;
        };

        match row.kind {
            RowKind::Back => self.leave_group(),
            RowKind::Group(path) => self.enter_group(path),
            RowKind::Leaf(path) if !row.disabled => return self.select_leaf(&path),
            RowKind::Leaf(_) | RowKind::Category(_) => {}
        }
        Step::Continue
    }

    fn select_leaf(&mut self, path: &[usize]) -> Step<K::Output> {
        let action = match self.tree.get_mut(path) {
            Some(option) => self.kind.on_select_leaf(option),
            None => return Step::Continue,
        };

        match action {
            LeafAction::Submit => self.finish(Some(path)),
            LeafAction::Stay => Step::Continue,
        }
    }

    fn finish(&mut self, selected: Option<&[usize]>) -> Step<K::Output> {
        let selected = selected.and_then(|path| self.tree.get(path));
        let value = self.kind.final_value(&self.tree, selected);

        match self.kind.validate(&self.tree, &value) {
            Ok(()) => {
                info!("Prompt `{}` answered with {value:?}", self.config.message);
                self.state = PromptState::Submitted;
                self.answer = Some(value.clone());
                Step::Done(Some(value))
            }
            Err(message) => {
                warn!("Rejected answer {value:?}: {message}");
                self.error = Some(message);
                Step::Continue
            }
        }
    }

    fn enter_group(&mut self, path: OptionPath) {
        debug!("Entering group {path:?}");
        let rows = level_rows(&self.tree, &path, true);
        self.query.clear();
        self.state = PromptState::Browsing;
        self.navigation.enter(rows);
    }

    fn leave_group(&mut self) {
        if self.navigation.back() {
            debug!("Left group, now at depth {}", self.navigation.depth());
        }
    }

    /// Walks down the groups on `path` so the cursor ends on that option.
    fn reveal(&mut self, path: &[usize]) {
        for depth in 0..path.len() {
            let target = &path[..=depth];
            let Some(index) = self
                .navigation
                .rows()
                .iter()
                .position(|row| row.path() == Some(target))
            else {
                return;
            };

            self.navigation.select(index);
            if depth + 1 < path.len() {
                self.enter_group(target.to_vec());
            }
        }
    }

    fn edit_query(&mut self, key: &Key) {
        if !self.config.search {
            return;
        }

        match key.name.as_str() {
            "backspace" => {
                if self.query.pop().is_some() {
                    self.update_search();
                }
            }
            "escape" => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.update_search();
                }
            }
            _ => {
                if let Some(c) = key.printable() {
                    if self.query.is_empty() {
                        self.browse_cursor = self.navigation.cursor();
                    }
                    self.query.push(c);
                    self.update_search();
                }
            }
        }
    }

    fn update_search(&mut self) {
        let level = self.navigation.level_path();
        let has_parent = self.navigation.depth() > 0;

        if self.query.is_empty() {
            self.state = PromptState::Browsing;
            let rows = level_rows(&self.tree, &level, has_parent);
            self.navigation.replace_rows(rows, self.browse_cursor);
        } else {
            self.state = PromptState::Searching;
            let rows = search(&self.tree, &level, &self.query, &self.matcher, has_parent);
            let first = rows.iter().position(|row| !row.disabled).unwrap_or(0);
            self.navigation.replace_rows(rows, first);
        }
    }

    /// Names of the entered groups, outermost first.
    #[must_use]
    pub fn trail(&self) -> Vec<&str> {
        self.navigation
            .parents()
            .iter()
            .filter_map(|frame| frame.group_path())
            .filter_map(|path| self.tree.get(path))
            .map(|option| option.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn breadcrumb(&self) -> String {
        breadcrumb(
            &self.trail(),
            self.config.max_breadcrumb_items,
            &self.config.breadcrumb_separator,
        )
    }

    /// The render model for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let searching = self.state == PromptState::Searching;
        let has_parent = self.navigation.depth() > 0;

        let rows = self
            .navigation
            .visible_rows()
            .map(|(index, row)| self.frame_row(index, row, searching, has_parent))
            .collect();

        Frame {
            message: self.config.message.clone(),
            query: self.config.search.then(|| self.query.clone()),
            rows,
            info: self.config.info.then(|| self.info_line()),
            error: self.error.clone(),
        }
    }

    fn frame_row(&self, index: usize, row: &DisplayRow, searching: bool, has_parent: bool) -> FrameRow {
        let option = row.path().and_then(|path| self.tree.get(path));
        let name = option.map(|option| option.name.clone()).unwrap_or_default();

        let (label, kind) = match row.kind {
            RowKind::Back => {
                let crumb = self.breadcrumb();
                let label = if crumb.is_empty() {
                    BACK_LABEL.to_string()
                } else {
                    crumb
                };
                (label, FrameRowKind::Back)
            }
            RowKind::Group(_) => (name, FrameRowKind::Group),
            RowKind::Category(_) => (name, FrameRowKind::Category),
            RowKind::Leaf(_) => (name, FrameRowKind::Leaf),
        };

        let indent = if searching {
            row.indent
        } else {
            usize::from(has_parent && !row.is_back())
        };

        FrameRow {
            label,
            indent,
            selected: index == self.navigation.cursor(),
            disabled: row.disabled,
            checked: match kind {
                FrameRowKind::Leaf => option.and_then(|option| self.kind.checked(option)),
                _ => None,
            },
            kind,
        }
    }

    fn info_line(&self) -> String {
        let mut actions = vec![
            ("Next", &self.keys.next),
            ("Previous", &self.keys.previous),
            ("Next Page", &self.keys.next_page),
            ("Previous Page", &self.keys.previous_page),
        ];
        if self.kind.has_check_key() {
            actions.push(("Check", &self.keys.check));
        }
        actions.push(("Submit", &self.keys.submit));

        let total = self.navigation.rows().len();
        let position = if total == 0 {
            0
        } else {
            self.navigation.cursor() + 1
        };
        format!(
            "{position}/{total} {}",
            actions
                .into_iter()
                .map(|(label, keys)| format!("{label}: {}", keys.join(", ")))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainRenderer;
    use crate::terminal::ScriptedTerminal;

    fn grouped_tree() -> OptionTree {
        OptionTree::new(vec![
            ListOption::new("foo").with_name("Foo"),
            ListOption::new("bar").with_name("Bar"),
            ListOption::new("Baz").with_children(vec![
                ListOption::new("beep").with_name("Beep"),
                ListOption::new("boop").with_name("Boop"),
            ]),
        ])
        .unwrap()
    }

    fn searchable() -> PromptConfig {
        PromptConfig {
            search: true,
            ..PromptConfig::with_message("Pick")
        }
    }

    #[test]
    fn test_starts_browsing_on_first_option() {
        let prompt = ListPrompt::select(grouped_tree(), PromptConfig::default()).unwrap();
        assert_eq!(prompt.state(), PromptState::Browsing);
        assert_eq!(prompt.current_option().unwrap().value, "foo");
    }

    #[test]
    fn test_typing_without_search_is_ignored() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::default()).unwrap();
        prompt.handle_key(&Key::char('z'));
        assert_eq!(prompt.query(), "");
        assert_eq!(prompt.state(), PromptState::Browsing);
    }

    #[test]
    fn test_search_state_transitions() {
        let mut prompt = ListPrompt::select(grouped_tree(), searchable()).unwrap();

        prompt.handle_key(&Key::char('b'));
        assert_eq!(prompt.state(), PromptState::Searching);
        assert_eq!(prompt.query(), "b");

        prompt.handle_key(&Key::named("backspace"));
        assert_eq!(prompt.state(), PromptState::Browsing);
        assert_eq!(prompt.navigation().rows().len(), 3);
    }

    #[test]
    fn test_escape_clears_query() {
        let mut prompt = ListPrompt::select(grouped_tree(), searchable()).unwrap();
        prompt.handle_key(&Key::char('b'));
        prompt.handle_key(&Key::char('e'));
        prompt.handle_key(&Key::named("escape"));
        assert_eq!(prompt.query(), "");
        assert_eq!(prompt.state(), PromptState::Browsing);
    }

    #[test]
    fn test_search_restores_cursor_after_clearing() {
        let mut prompt = ListPrompt::select(grouped_tree(), searchable()).unwrap();
        prompt.handle_key(&Key::named("down"));
        assert_eq!(prompt.current_option().unwrap().value, "bar");

        prompt.handle_key(&Key::char('p'));
        assert_eq!(prompt.current_option().unwrap().value, "beep");

        prompt.handle_key(&Key::named("backspace"));
        assert_eq!(prompt.current_option().unwrap().value, "bar");
    }

    #[test]
    fn test_search_result_can_be_submitted() {
        let mut prompt = ListPrompt::select(grouped_tree(), searchable()).unwrap();
        for c in "boo".chars() {
            prompt.handle_key(&Key::char(c));
        }
        // Header row for Baz first, cursor on the leaf below it
        assert!(prompt.navigation().rows()[0].is_category_header());
        assert_eq!(prompt.navigation().cursor(), 1);

        let step = prompt.handle_key(&Key::named("enter"));
        assert_eq!(step, Step::Done(Some("boop".to_string())));
    }

    #[test]
    fn test_interrupt_cancels() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::default()).unwrap();
        assert_eq!(prompt.handle_key(&Key::ctrl('c')), Step::Done(None));
        assert_eq!(prompt.state(), PromptState::Cancelled);
        assert_eq!(prompt.handle_key(&Key::named("enter")), Step::Done(None));
    }

    #[test]
    fn test_default_inside_group_is_revealed() {
        let config = PromptConfig {
            default: vec!["boop".to_string()],
            ..PromptConfig::default()
        };
        let prompt = ListPrompt::select(grouped_tree(), config).unwrap();
        assert_eq!(prompt.navigation().depth(), 1);
        assert_eq!(prompt.current_option().unwrap().value, "boop");
        assert_eq!(prompt.trail(), vec!["Baz"]);
    }

    #[test]
    fn test_unknown_default_is_configuration_error() {
        let config = PromptConfig {
            default: vec!["nope".to_string()],
            ..PromptConfig::default()
        };
        let result = ListPrompt::select(grouped_tree(), config);
        assert!(matches!(result, Err(Error::UnknownDefault(_))));
    }

    #[test]
    fn test_back_row_shows_breadcrumb() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::with_message("Pick")).unwrap();
        prompt.handle_key(&Key::named("down"));
        prompt.handle_key(&Key::named("down"));
        prompt.handle_key(&Key::named("enter"));

        let frame = prompt.frame();
        assert_eq!(frame.rows[0].kind, FrameRowKind::Back);
        assert_eq!(frame.rows[0].label, "Baz");
        assert_eq!(frame.rows[1].indent, 1);
        assert!(frame.rows[1].selected);
    }

    #[test]
    fn test_info_line() {
        let config = PromptConfig {
            info: true,
            ..PromptConfig::default()
        };
        let prompt = ListPrompt::select(grouped_tree(), config).unwrap();
        let info = prompt.frame().info.unwrap();
        assert!(info.starts_with("1/3 Next: down, d, n, 2"));
        assert!(info.ends_with("Submit: enter, return"));
    }

    #[test]
    fn test_info_line_without_matches() {
        let config = PromptConfig {
            info: true,
            ..searchable()
        };
        let mut prompt = ListPrompt::select(grouped_tree(), config).unwrap();
        prompt.handle_key(&Key::char('x'));
        assert!(prompt.frame().info.unwrap().starts_with("0/0 "));
    }

    #[test]
    fn test_run_with_scripted_terminal() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::with_message("Pick")).unwrap();
        let mut terminal = ScriptedTerminal::new([Key::named("down"), Key::named("enter")]);

        let answer = prompt.run(&mut terminal, &PlainRenderer).unwrap();
        assert_eq!(answer, Some("bar".to_string()));
        assert!(!terminal.cursor_hidden());
        assert_eq!(terminal.frames().len(), 3);
        assert_eq!(terminal.last_frame(), Some("? Pick Bar"));
    }

    #[test]
    fn test_run_restores_cursor_on_error() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::default()).unwrap();
        let mut terminal = ScriptedTerminal::new([Key::named("down")]);

        let result = prompt.run(&mut terminal, &PlainRenderer);
        assert!(matches!(result, Err(Error::InputExhausted)));
        assert!(!terminal.cursor_hidden());
    }

    #[test]
    fn test_run_injected_value() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::default())
            .unwrap()
            .inject("beep".to_string());
        let mut terminal = ScriptedTerminal::new([]);

        let answer = prompt.run(&mut terminal, &PlainRenderer).unwrap();
        assert_eq!(answer, Some("beep".to_string()));
        assert!(terminal.frames().is_empty());
    }

    #[test]
    fn test_run_injected_invalid_value() {
        let mut prompt = ListPrompt::select(grouped_tree(), PromptConfig::default())
            .unwrap()
            .inject("Baz".to_string());
        let mut terminal = ScriptedTerminal::new([]);

        let result = prompt.run(&mut terminal, &PlainRenderer);
        assert!(matches!(result, Err(Error::InvalidAnswer(_))));
    }
}
