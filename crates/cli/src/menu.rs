//! Building the prompt to show from the command line and menu files.

use log::{debug, info};
use rust_picks_core::config::{get_config_path, PromptConfig};
use rust_picks_core::definitions::PromptKindName;
use rust_picks_core::error::Result;
use rust_picks_core::file_handling::get_prompt_definition;
use rust_picks_core::options::{OptionTree, RawOption};
use rust_picks_core::prompt::{Checkbox, ListPrompt, Select};
use rust_picks_core::render::Renderer;
use rust_picks_core::terminal::Terminal;

use crate::cli_args::Args;
use crate::source::{OptionSource, Provider};

/// A prompt ready to run.
#[derive(Debug)]
pub struct Menu {
    pub kind: PromptKindName,
    pub tree: OptionTree,
    pub config: PromptConfig,
}

/// A built prompt of either kind.
pub enum MenuPrompt {
    Select(ListPrompt<Select>),
    Checkbox(ListPrompt<Checkbox>),
}

impl Menu {
    /// Builds the prompt, checking defaults and answer bounds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown defaults or invalid bounds.
    pub fn build(self) -> Result<MenuPrompt> {
        match self.kind {
            PromptKindName::Select => ListPrompt::select(self.tree, self.config).map(MenuPrompt::Select),
            PromptKindName::Checkbox => {
                ListPrompt::checkbox(self.tree, self.config).map(MenuPrompt::Checkbox)
            }
        }
    }
}

impl MenuPrompt {
    /// Runs the prompt, returning the answer as a list of values.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run<T: Terminal, R: Renderer>(
        &mut self,
        terminal: &mut T,
        renderer: &R,
    ) -> Result<Option<Vec<String>>> {
        match self {
            MenuPrompt::Select(prompt) => Ok(prompt.run(terminal, renderer)?.map(|value| vec![value])),
            MenuPrompt::Checkbox(prompt) => prompt.run(terminal, renderer),
        }
    }
}

/// Loads the options from the source `args` point at and layers the command
/// line flags over the settings.
///
/// # Errors
///
/// Returns an error if the source is ambiguous, the menu file cannot be read
/// or the resulting options and settings are invalid.
pub fn load_menu(args: &Args) -> Result<Menu> {
    let (kind, raw_options, mut config) = match args.get_source()? {
        OptionSource::Inline(options) => {
            debug!("Using {} inline options", options.len());
            let raw_options: Vec<RawOption> = options.into_iter().map(RawOption::from).collect();
            (PromptKindName::Select, raw_options, PromptConfig::default())
        }
        OptionSource::File(path) => read_menu_file(&Some(path))?,
        OptionSource::DefaultFile => read_menu_file(&None)?,
    };

    let kind = if args.checkbox {
        PromptKindName::Checkbox
    } else {
        kind
    };
    args.apply_to(&mut config);
    config.validate_bounds()?;

    let tree = OptionTree::from_raw(&raw_options)?;
    info!("Prepared {kind} prompt with {} options", tree.leaf_count());

    Ok(Menu { kind, tree, config })
}

fn read_menu_file(path: &Option<String>) -> Result<(PromptKindName, Vec<RawOption>, PromptConfig)> {
    let config_path = get_config_path(path);
    debug!("Menu path: `{config_path}`");

    let definition = get_prompt_definition(&config_path)?;
    Ok((definition.kind, definition.options, definition.config))
}
