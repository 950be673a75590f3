//! Reading prompt definitions from menu files.

use std::fs::File;

use log::debug;

use crate::definitions::PromptDefinition;
use crate::error::{Error, Result};
use crate::options::OptionTree;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads and validates a prompt definition from a YAML menu file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The option list is empty, has nameless options or duplicate values
/// - `min_options` is greater than `max_options`
///
/// # Examples
///
/// ```no_run
/// use rust_picks_core::file_handling::get_prompt_definition;
///
/// let definition = get_prompt_definition("/home/me/.rust-picks/menu.yml")?;
/// println!("Loaded {} options", definition.options.len());
/// # Ok::<(), rust_picks_core::error::Error>(())
/// ```
pub fn get_prompt_definition(config_path: &str) -> Result<PromptDefinition> {
    let config_reader = get_reader("menu", config_path)?;

    let definition: PromptDefinition = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "menu".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    // Surface configuration errors before anything is drawn
    OptionTree::from_raw(&definition.options)?;
    definition.config.validate_bounds()?;

    debug!(
        "Loaded {} prompt with {} options from `{}`",
        definition.kind,
        definition.options.len(),
        config_path
    );

    Ok(definition)
}
