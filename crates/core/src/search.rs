//! Builds the rows a list prompt displays.
//!
//! Without a query a level is shown as-is. With a query the whole subtree
//! below the current level is searched: hits are ranked per level, groups
//! with hits turn into disabled category headers, and groups without hits
//! are dropped. Every keystroke rebuilds the rows, which is O(n log n) in
//! the number of options.

use log::debug;

use crate::matcher::TextMatcher;
use crate::options::{ListOption, OptionPath, OptionTree};

/// What a displayed row points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Leaves the current group.
    Back,
    /// A group that can be entered.
    Group(OptionPath),
    /// Header of a group with matching descendants, never selectable.
    Category(OptionPath),
    Leaf(OptionPath),
}

/// One line of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub kind: RowKind,
    pub indent: usize,
    pub disabled: bool,
}

impl DisplayRow {
    #[must_use]
    pub fn back() -> Self {
        Self {
            kind: RowKind::Back,
            indent: 0,
            disabled: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&[usize]> {
        match &self.kind {
            RowKind::Back => None,
            RowKind::Group(path) | RowKind::Category(path) | RowKind::Leaf(path) => Some(path),
        }
    }

    #[must_use]
    pub fn is_back(&self) -> bool {
        self.kind == RowKind::Back
    }

    #[must_use]
    pub fn is_category_header(&self) -> bool {
        matches!(self.kind, RowKind::Category(_))
    }
}

/// A ranked match, rebuilt on every keystroke.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub path: OptionPath,
    pub score: usize,
    pub children: Vec<SearchHit>,
}

/// Rows for browsing the level below `group_path`, with a Back row first
/// when `has_parent` is set.
#[must_use]
pub fn level_rows(tree: &OptionTree, group_path: &[usize], has_parent: bool) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    if has_parent {
        rows.push(DisplayRow::back());
    }

    rows.extend(
        tree.children(group_path)
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let path = child_path(group_path, index);
                DisplayRow {
                    kind: if option.is_group() {
                        RowKind::Group(path)
                    } else {
                        RowKind::Leaf(path)
                    },
                    indent: 0,
                    disabled: option.disabled,
                }
            }),
    );

    rows
}

/// Searches the options below `group_path`.
///
/// An empty query yields [`level_rows`].
#[must_use]
pub fn search(
    tree: &OptionTree,
    group_path: &[usize],
    query: &str,
    matcher: &TextMatcher,
    has_parent: bool,
) -> Vec<DisplayRow> {
    if query.is_empty() {
        return level_rows(tree, group_path, has_parent);
    }

    let hits = find_hits(tree.children(group_path), group_path, query, matcher);
    let mut rows = Vec::new();
    for hit in &hits {
        push_hit_rows(tree, hit, 0, &mut rows);
    }

    debug!("Search for `{query}` produced {} rows", rows.len());
    rows
}

/// Ranked hits among `options`, whose parent is at `base_path`.
#[must_use]
pub fn find_hits(
    options: &[ListOption],
    base_path: &[usize],
    query: &str,
    matcher: &TextMatcher,
) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| {
            let path = child_path(base_path, index);

            if option.is_group() {
                let children = find_hits(&option.options, &path, query, matcher);
                let score = children.iter().map(|child| child.score).min()?;
                return Some(SearchHit {
                    path,
                    score,
                    children,
                });
            }

            matcher
                .matches_option(&option.name, &option.value, query)
                .then(|| SearchHit {
                    path,
                    score: matcher.rank(&option.name, query),
                    children: Vec::new(),
                })
        })
        .collect();

    // Stable, so equal ranks keep their original order
    hits.sort_by_key(|hit| hit.score);
    hits
}

fn push_hit_rows(tree: &OptionTree, hit: &SearchHit, indent: usize, rows: &mut Vec<DisplayRow>) {
    if hit.children.is_empty() {
        rows.push(DisplayRow {
            kind: RowKind::Leaf(hit.path.clone()),
            indent,
            disabled: tree.get(&hit.path).map_or(true, |option| option.disabled),
        });
        return;
    }

    rows.push(DisplayRow {
        kind: RowKind::Category(hit.path.clone()),
        indent,
        disabled: true,
    });
    for child in &hit.children {
        push_hit_rows(tree, child, indent + 1, rows);
    }
}

fn child_path(base_path: &[usize], index: usize) -> OptionPath {
    let mut path = base_path.to_vec();
    path.push(index);
    path
}
