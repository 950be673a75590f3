//! Prompt configuration and configuration path utilities.
//!
//! [`PromptConfig`] carries every setting a list prompt understands, with the
//! defaults applied when a field is missing from YAML.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::keys::KeyMapOverrides;
use crate::matcher::MatchMode;

/// Default path for the prompt definition file
const DEFAULT_CONFIG_PATH: &str = "~/.rust-picks/menu.yml";

/// Default number of rows shown at once
pub const DEFAULT_MAX_ROWS: usize = 10;
/// Default number of breadcrumb entries before collapsing
pub const DEFAULT_MAX_BREADCRUMB_ITEMS: usize = 5;
/// Default breadcrumb separator
pub const DEFAULT_BREADCRUMB_SEPARATOR: &str = "›";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    pub message: String,
    /// Select uses the first value, checkbox checks every value.
    pub default: Vec<String>,
    /// 0 shows every row.
    pub max_rows: usize,
    pub search: bool,
    pub min_options: usize,
    pub max_options: Option<usize>,
    pub max_breadcrumb_items: usize,
    pub breadcrumb_separator: String,
    /// Show the position and key help line.
    pub info: bool,
    pub match_mode: MatchMode,
    pub keys: KeyMapOverrides,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            message: String::new(),
            default: Vec::new(),
            max_rows: DEFAULT_MAX_ROWS,
            search: false,
            min_options: 0,
            max_options: None,
            max_breadcrumb_items: DEFAULT_MAX_BREADCRUMB_ITEMS,
            breadcrumb_separator: DEFAULT_BREADCRUMB_SEPARATOR.to_string(),
            info: false,
            match_mode: MatchMode::default(),
            keys: KeyMapOverrides::default(),
        }
    }
}

impl PromptConfig {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Checks the checked-count bounds are satisfiable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptionBounds`] if `min_options > max_options`.
    pub fn validate_bounds(&self) -> Result<()> {
        match self.max_options {
            Some(max) if self.min_options > max => Err(Error::InvalidOptionBounds {
                min: self.min_options,
                max,
            }),
            _ => Ok(()),
        }
    }
}

/// Resolves the prompt definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_picks_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/menu.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/menu.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}
