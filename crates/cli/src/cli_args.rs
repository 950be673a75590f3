//! Command-line argument parsing.
//!
//! This module defines the command-line interface of `rp` using the `clap`
//! crate, and how its flags are layered over a menu file's settings.

use crate::source::{determine, OptionSource, Provider};
use clap::Parser;
use rust_picks_core::config::PromptConfig;
use rust_picks_core::error::Result;
use rust_picks_core::matcher::MatchMode;

/// Command-line arguments for the `rp` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_picks_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rp", "--checkbox", "red", "green"]);
/// assert!(args.checkbox);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the menu definition YAML.
    ///
    /// If neither this nor inline options are given, defaults to `~/.rust-picks/menu.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// The question shown above the options.
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Pick any number of options instead of exactly one.
    #[arg(long, action)]
    pub checkbox: bool,

    /// Filter the options by typing.
    #[arg(long, short = 's', action)]
    pub search: bool,

    /// Number of rows shown at once, 0 shows all.
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Least number of options a checkbox answer needs.
    #[arg(long)]
    pub min_options: Option<usize>,

    /// Most options a checkbox answer may have.
    #[arg(long)]
    pub max_options: Option<usize>,

    /// Default value. Repeat for several checkbox defaults.
    #[arg(long = "default", short = 'd', action = clap::ArgAction::Append)]
    pub defaults: Vec<String>,

    /// Use fuzzy matching when searching.
    #[arg(long, action)]
    pub fuzzy: bool,

    /// Show the cursor position and key bindings below the list.
    #[arg(long, action)]
    pub info: bool,

    /// Options given inline, instead of a menu file.
    ///
    /// # Examples
    /// ```bash
    /// rp -m "Favourite colour?" red green blue
    /// ```
    #[arg(trailing_var_arg = true)]
    pub options: Vec<String>,
}

impl Args {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut PromptConfig) {
        if let Some(message) = &self.message {
            config.message.clone_from(message);
        }
        if self.search {
            config.search = true;
        }
        if let Some(max_rows) = self.max_rows {
            config.max_rows = max_rows;
        }
        if let Some(min_options) = self.min_options {
            config.min_options = min_options;
        }
        if self.max_options.is_some() {
            config.max_options = self.max_options;
        }
        if !self.defaults.is_empty() {
            config.default.clone_from(&self.defaults);
        }
        if self.fuzzy {
            config.match_mode = MatchMode::Fuzzy;
        }
        if self.info {
            config.info = true;
        }
    }
}

impl Provider for Args {
    /// # Errors
    ///
    /// Returns an error if a config path and inline options are both given.
    fn get_source(&self) -> Result<OptionSource> {
        determine(&self.config_path, &self.options)
    }
}
