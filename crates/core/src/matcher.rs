//! Text matching for the list search.
//!
//! Display text may carry ANSI styling, so every comparison first strips it
//! with [`strip_display_codes`] and lowercases both sides.

use std::borrow::Cow;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Deserialize;

/// How a search query is tested against option text.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The query must appear as a substring.
    #[default]
    Substring,
    /// The query characters must appear in order (skim style).
    Fuzzy,
}

/// Removes terminal styling codes from `text`.
#[must_use]
pub fn strip_display_codes(text: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(text)
}

/// Levenshtein distance between two strings, counted in chars.
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            current[j + 1] = if a_char == b_char {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Scores option text against a search query.
pub struct TextMatcher {
    mode: MatchMode,
    fuzzy: SkimMatcherV2,
}

impl TextMatcher {
    #[must_use]
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            fuzzy: SkimMatcherV2::default().ignore_case(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// True if `text` matches `query`, ignoring case and styling.
    #[must_use]
    pub fn matches(&self, text: &str, query: &str) -> bool {
        let text = normalize(text);
        let query = query.to_lowercase();

        match self.mode {
            MatchMode::Substring => text.contains(&query),
            MatchMode::Fuzzy => self.fuzzy.fuzzy_match(&text, &query).is_some(),
        }
    }

    /// True if either the name or, when it differs, the value matches.
    #[must_use]
    pub fn matches_option(&self, name: &str, value: &str, query: &str) -> bool {
        self.matches(name, query) || (name != value && self.matches(value, query))
    }

    /// Rank of a hit, lower is closer.
    #[must_use]
    pub fn rank(&self, name: &str, query: &str) -> usize {
        distance(&normalize(name), &query.to_lowercase())
    }
}

impl Default for TextMatcher {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

fn normalize(text: &str) -> String {
    strip_display_codes(text).to_lowercase()
}
