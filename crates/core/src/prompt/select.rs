use crate::error::{Error, Result};
use crate::options::{ListOption, OptionPath, OptionTree};
use crate::prompt::{LeafAction, PromptKind};

/// Single choice: picking a leaf answers the prompt with its value.
#[derive(Clone, Debug, Default)]
pub struct Select {
    default: Option<String>,
}

impl Select {
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

impl PromptKind for Select {
    type Output = String;

    fn has_check_key(&self) -> bool {
        false
    }

    fn prepare(&mut self, tree: &mut OptionTree, defaults: &[String]) -> Result<Option<OptionPath>> {
        let Some(default) = defaults.first() else {
            return Ok(None);
        };

        let path = tree
            .find_leaf(default)
            .ok_or_else(|| Error::UnknownDefault(default.clone()))?;
        self.default = Some(default.clone());
        Ok(Some(path))
    }

    fn on_select_leaf(&self, _option: &mut ListOption) -> LeafAction {
        LeafAction::Submit
    }

    fn final_value(&self, _tree: &OptionTree, selected: Option<&ListOption>) -> String {
        selected
            .map(|option| option.value.as_str())
            .or(self.default.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn validate(&self, tree: &OptionTree, value: &String) -> std::result::Result<(), String> {
        if value.is_empty() {
            return Err("No option selected.".to_string());
        }
        if tree.find_leaf(value).is_none() {
            return Err(format!("`{value}` is not one of the available options."));
        }
        Ok(())
    }

    fn format(&self, tree: &OptionTree, value: &String) -> String {
        tree.find_leaf(value)
            .and_then(|path| tree.get(&path))
            .map_or_else(|| value.clone(), |option| option.name.clone())
    }
}
