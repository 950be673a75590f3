use std::fmt::{Display, Formatter};

use heck::ToLowerCamelCase;
use indexmap::IndexMap;

/// The type of value a flag takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlagKind {
    #[default]
    Boolean,
    String,
    Number,
}

impl Display for FlagKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FlagKind::Boolean => "boolean",
            FlagKind::String => "string",
            FlagKind::Number => "number",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FlagDefinition {
    /// Long name without leading dashes, e.g. `video-type`.
    pub name: String,
    /// Further names, usually single letter short flags.
    pub aliases: Vec<String>,
    pub kind: FlagKind,
    /// A string or number flag given without a value is set to `true`.
    pub optional_value: bool,
    pub required: bool,
    pub depends: Vec<String>,
    pub conflicts: Vec<String>,
}

impl FlagDefinition {
    pub fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    #[must_use]
    pub fn optional_value(mut self) -> Self {
        self.optional_value = true;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn depends<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn conflicts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts.extend(names.into_iter().map(Into::into));
        self
    }

    /// True if `name` is the long name or one of the aliases.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }

    /// Key under which the value is reported.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lower_camel_case()
    }

    pub(crate) fn takes_value(&self) -> bool {
        self.kind != FlagKind::Boolean
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    pub flags: Vec<FlagDefinition>,
    /// Everything after the first positional argument goes to `unknown`
    /// without being parsed.
    pub stop_early: bool,
}

impl ParseOptions {
    pub fn new(flags: Vec<FlagDefinition>) -> Self {
        Self {
            flags,
            stop_early: false,
        }
    }

    pub(crate) fn find(&self, name: &str) -> Option<&FlagDefinition> {
        self.flags.iter().find(|flag| flag.is_named(name))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    String(String),
    Number(f64),
}

impl Display for FlagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(value) => write!(f, "{value}"),
            FlagValue::String(value) => f.write_str(value),
            FlagValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::String(value.to_string())
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        FlagValue::Number(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedFlags {
    /// Values by lowerCamelCase key, in the order they were given.
    pub flags: IndexMap<String, FlagValue>,
    /// Positional arguments.
    pub unknown: Vec<String>,
    /// Arguments after `--`.
    pub literal: Vec<String>,
}

impl ParsedFlags {
    /// Looks up a value by flag name, e.g. `video-type`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(&name.to_lower_camel_case())
    }
}
