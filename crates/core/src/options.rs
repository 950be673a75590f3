//! The option tree shown by list prompts.
//!
//! Options come in as [`RawOption`] (a bare string or a structured map, as
//! written in YAML) and are normalized once into [`ListOption`]. An option
//! with children is a group: it can be entered but never answered.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Label used by [`ListOption::separator`] when none is given.
pub const DEFAULT_SEPARATOR: &str = "------------";

/// Position of an option in the tree, one index per nesting level.
pub type OptionPath = Vec<usize>;

/// An option as supplied by the caller, before defaults are applied.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawOption {
    Plain(String),
    Detailed(OptionDescriptor),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct OptionDescriptor {
    pub value: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

impl From<&str> for RawOption {
    fn from(value: &str) -> Self {
        RawOption::Plain(value.to_string())
    }
}

impl From<String> for RawOption {
    fn from(value: String) -> Self {
        RawOption::Plain(value)
    }
}

impl From<OptionDescriptor> for RawOption {
    fn from(value: OptionDescriptor) -> Self {
        RawOption::Detailed(value)
    }
}

/// A normalized option.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOption {
    pub value: String,
    pub name: String,
    pub disabled: bool,
    /// Only meaningful for checkbox prompts.
    pub checked: bool,
    pub options: Vec<ListOption>,
}

impl ListOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
            disabled: false,
            checked: false,
            options: Vec::new(),
        }
    }

    /// A disabled row used to visually split the list.
    pub fn separator(label: Option<&str>) -> Self {
        let mut option = Self::new(label.unwrap_or(DEFAULT_SEPARATOR));
        option.disabled = true;
        option
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_children(mut self, options: Vec<ListOption>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.options.is_empty()
    }
}

impl Display for ListOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// Maps raw options into normalized ones, recursing into groups.
///
/// `name` defaults to `value`; a group may give only a `name`, which then
/// doubles as its value.
///
/// # Errors
///
/// Returns an error if an option has neither value nor name.
pub fn normalize(raw_options: &[RawOption]) -> Result<Vec<ListOption>> {
    raw_options.iter().map(normalize_option).collect()
}

fn normalize_option(raw: &RawOption) -> Result<ListOption> {
    match raw {
        RawOption::Plain(value) => {
            if value.is_empty() {
                return Err(Error::EmptyOptionValue);
            }
            Ok(ListOption::new(value.as_str()))
        }
        RawOption::Detailed(descriptor) => {
            let value = descriptor
                .value
                .clone()
                .or_else(|| descriptor.name.clone())
                .filter(|value| !value.is_empty())
                .ok_or(Error::EmptyOptionValue)?;

            Ok(ListOption {
                name: descriptor.name.clone().unwrap_or_else(|| value.clone()),
                value,
                disabled: descriptor.disabled,
                checked: descriptor.checked,
                options: normalize(&descriptor.options)?,
            })
        }
    }
}

/// Depth-first pre-order traversal. With `include_groups` false only leaves
/// are returned.
#[must_use]
pub fn flatten(options: &[ListOption], include_groups: bool) -> Vec<&ListOption> {
    let mut flat = Vec::new();
    for option in options {
        if option.is_group() {
            if include_groups {
                flat.push(option);
            }
            flat.extend(flatten(&option.options, include_groups));
        } else {
            flat.push(option);
        }
    }
    flat
}

/// The normalized options owned by one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionTree {
    roots: Vec<ListOption>,
}

impl OptionTree {
    /// Builds a tree and checks it is usable by a prompt.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty, an option has no
    /// value, or two leaves share a value.
    pub fn new(roots: Vec<ListOption>) -> Result<Self> {
        if roots.is_empty() {
            return Err(Error::EmptyOptions);
        }

        let mut values = HashSet::new();
        for leaf in flatten(&roots, false) {
            if leaf.value.is_empty() {
                return Err(Error::EmptyOptionValue);
            }
            // Separators share their label, so only selectable leaves must be unique
            if !leaf.disabled && !values.insert(leaf.value.as_str()) {
                return Err(Error::DuplicateOptionValue(leaf.value.clone()));
            }
        }

        debug!(
            "Built option tree with {} root options and {} leaves",
            roots.len(),
            values.len()
        );

        Ok(Self { roots })
    }

    /// # Errors
    ///
    /// See [`normalize`] and [`OptionTree::new`].
    pub fn from_raw(raw_options: &[RawOption]) -> Result<Self> {
        Self::new(normalize(raw_options)?)
    }

    #[must_use]
    pub fn roots(&self) -> &[ListOption] {
        &self.roots
    }

    #[must_use]
    pub fn get(&self, path: &[usize]) -> Option<&ListOption> {
        let (first, rest) = path.split_first()?;
        let mut option = self.roots.get(*first)?;
        for index in rest {
            option = option.options.get(*index)?;
        }
        Some(option)
    }

    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut ListOption> {
        let (first, rest) = path.split_first()?;
        let mut option = self.roots.get_mut(*first)?;
        for index in rest {
            option = option.options.get_mut(*index)?;
        }
        Some(option)
    }

    /// Children of the group at `path`, or the roots for an empty path.
    #[must_use]
    pub fn children(&self, path: &[usize]) -> &[ListOption] {
        if path.is_empty() {
            return &self.roots;
        }
        self.get(path).map_or(&[], |option| option.options.as_slice())
    }

    #[must_use]
    pub fn flatten(&self, include_groups: bool) -> Vec<&ListOption> {
        flatten(&self.roots, include_groups)
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.flatten(false).len()
    }

    /// Path of the first selectable leaf whose value is `value`.
    #[must_use]
    pub fn find_leaf(&self, value: &str) -> Option<OptionPath> {
        find_leaf_in(&self.roots, value, &mut Vec::new())
    }

    /// True if some leaf, enabled or not, has this value.
    #[must_use]
    pub fn contains_leaf(&self, value: &str) -> bool {
        self.flatten(false).iter().any(|option| option.value == value)
    }

    /// Values of checked leaves in tree order.
    #[must_use]
    pub fn checked_values(&self) -> Vec<String> {
        self.flatten(false)
            .into_iter()
            .filter(|option| option.checked)
            .map(|option| option.value.clone())
            .collect()
    }

    /// Marks the leaves with the given values as checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDefault`] for a value with no leaf.
    pub fn check_values(&mut self, values: &[String]) -> Result<()> {
        for value in values {
            let path = self
                .find_leaf(value)
                .ok_or_else(|| Error::UnknownDefault(value.clone()))?;
            if let Some(option) = self.get_mut(&path) {
                option.checked = true;
            }
        }
        Ok(())
    }
}

fn find_leaf_in(options: &[ListOption], value: &str, prefix: &mut OptionPath) -> Option<OptionPath> {
    for (index, option) in options.iter().enumerate() {
        prefix.push(index);
        if option.is_group() {
            if let Some(path) = find_leaf_in(&option.options, value, prefix) {
                return Some(path);
            }
        } else if !option.disabled && option.value == value {
            return Some(prefix.clone());
        }
        prefix.pop();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, children: &[&str]) -> RawOption {
        RawOption::Detailed(OptionDescriptor {
            name: Some(name.to_string()),
            options: children.iter().map(|c| RawOption::from(*c)).collect(),
            ..Default::default()
        })
    }

    fn sample_tree() -> OptionTree {
        OptionTree::from_raw(&[
            "foo".into(),
            "bar".into(),
            group("Baz", &["beep", "boop"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_defaults_name_to_value() {
        let options = normalize(&["foo".into()]).unwrap();
        assert_eq!(options[0].value, "foo");
        assert_eq!(options[0].name, "foo");
        assert!(!options[0].disabled);
        assert!(!options[0].is_group());
    }

    #[test]
    fn test_normalize_group_without_value_uses_name() {
        let options = normalize(&[group("Baz", &["beep"])]).unwrap();
        assert_eq!(options[0].value, "Baz");
        assert!(options[0].is_group());
        assert_eq!(options[0].options[0].value, "beep");
    }

    #[test]
    fn test_normalize_rejects_nameless_option() {
        let result = normalize(&[RawOption::Detailed(OptionDescriptor::default())]);
        assert!(matches!(result, Err(Error::EmptyOptionValue)));
    }

    #[test]
    fn test_flatten_leaves_counts_every_level() {
        let tree = OptionTree::from_raw(&[
            "a".into(),
            RawOption::Detailed(OptionDescriptor {
                name: Some("G1".to_string()),
                options: vec![
                    "b".into(),
                    group("G2", &["c", "d"]),
                ],
                ..Default::default()
            }),
        ])
        .unwrap();

        let leaves: Vec<&str> = tree.flatten(false).iter().map(|o| o.value.as_str()).collect();
        assert_eq!(leaves, vec!["a", "b", "c", "d"]);
        assert_eq!(tree.leaf_count(), 4);

        let all: Vec<&str> = tree.flatten(true).iter().map(|o| o.value.as_str()).collect();
        assert_eq!(all, vec!["a", "G1", "b", "G2", "c", "d"]);
    }

    #[test]
    fn test_empty_tree_is_rejected() {
        assert!(matches!(OptionTree::new(vec![]), Err(Error::EmptyOptions)));
    }

    #[test]
    fn test_duplicate_leaf_values_are_rejected() {
        let result = OptionTree::from_raw(&["foo".into(), group("G", &["foo"])]);
        assert!(matches!(result, Err(Error::DuplicateOptionValue(v)) if v == "foo"));
    }

    #[test]
    fn test_separators_may_repeat() {
        let tree = OptionTree::new(vec![
            ListOption::new("a"),
            ListOption::separator(None),
            ListOption::new("b"),
            ListOption::separator(None),
        ]);
        assert!(tree.is_ok());
    }

    #[test]
    fn test_get_and_children() {
        let tree = sample_tree();
        assert_eq!(tree.get(&[2]).unwrap().name, "Baz");
        assert_eq!(tree.get(&[2, 1]).unwrap().value, "boop");
        assert!(tree.get(&[2, 5]).is_none());
        assert!(tree.get(&[]).is_none());
        assert_eq!(tree.children(&[]).len(), 3);
        assert_eq!(tree.children(&[2]).len(), 2);
    }

    #[test]
    fn test_find_leaf() {
        let tree = sample_tree();
        assert_eq!(tree.find_leaf("boop"), Some(vec![2, 1]));
        assert_eq!(tree.find_leaf("foo"), Some(vec![0]));
        assert_eq!(tree.find_leaf("Baz"), None);
    }

    #[test]
    fn test_check_values() {
        let mut tree = sample_tree();
        tree.check_values(&["beep".to_string(), "foo".to_string()]).unwrap();
        assert_eq!(tree.checked_values(), vec!["foo", "beep"]);

        let result = tree.check_values(&["nope".to_string()]);
        assert!(matches!(result, Err(Error::UnknownDefault(_))));
    }

    #[test]
    fn test_deserialize_yaml_options() {
        let yaml = r#"
- foo
- value: bar
  name: Bar
  disabled: true
- name: Baz
  options:
    - beep
    - boop
"#;
        let raw: Vec<RawOption> = serde_yaml::from_str(yaml).unwrap();
        let options = normalize(&raw).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[1].name, "Bar");
        assert!(options[1].disabled);
        assert_eq!(options[2].options.len(), 2);
    }
}
