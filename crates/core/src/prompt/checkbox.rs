use itertools::Itertools;
use log::debug;

use crate::config::PromptConfig;
use crate::error::Result;
use crate::options::{ListOption, OptionPath, OptionTree};
use crate::prompt::{LeafAction, PromptKind};

/// Multiple choice: the check key toggles leaves, submit answers with every
/// checked value in tree order.
#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    min_options: usize,
    max_options: Option<usize>,
}

impl Checkbox {
    #[must_use]
    pub fn new(min_options: usize, max_options: Option<usize>) -> Self {
        Self {
            min_options,
            max_options,
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidOptionBounds`] when
    /// `min_options > max_options`.
    pub fn from_config(config: &PromptConfig) -> Result<Self> {
        config.validate_bounds()?;
        Ok(Self::new(config.min_options, config.max_options))
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "option"
    } else {
        "options"
    }
}

impl PromptKind for Checkbox {
    type Output = Vec<String>;

    fn has_check_key(&self) -> bool {
        true
    }

    fn prepare(&mut self, tree: &mut OptionTree, defaults: &[String]) -> Result<Option<OptionPath>> {
        tree.check_values(defaults)?;
        Ok(None)
    }

    fn on_select_leaf(&self, option: &mut ListOption) -> LeafAction {
        option.checked = !option.checked;
        debug!("Toggled `{}` to {}", option.value, option.checked);
        LeafAction::Stay
    }

    fn final_value(&self, tree: &OptionTree, _selected: Option<&ListOption>) -> Vec<String> {
        tree.checked_values()
    }

    fn validate(&self, tree: &OptionTree, values: &Vec<String>) -> std::result::Result<(), String> {
        if let Some(unknown) = values.iter().find(|value| !tree.contains_leaf(value)) {
            return Err(format!("`{unknown}` is not one of the available options."));
        }

        let count = values.len();
        if count < self.min_options {
            return Err(format!(
                "Select at least {} {}.",
                self.min_options,
                plural(self.min_options)
            ));
        }
        if let Some(max) = self.max_options {
            if count > max {
                return Err(format!("Select at most {max} {}.", plural(max)));
            }
        }
        Ok(())
    }

    fn format(&self, tree: &OptionTree, values: &Vec<String>) -> String {
        let names = tree.flatten(false);
        values
            .iter()
            .map(|value| {
                names
                    .iter()
                    .find(|option| &option.value == value)
                    .map_or(value.as_str(), |option| option.name.as_str())
            })
            .join(", ")
    }

    fn checked(&self, option: &ListOption) -> Option<bool> {
        Some(option.checked)
    }
}
