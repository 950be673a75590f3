use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::config::PromptConfig;
use crate::options::RawOption;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptKindName {
    #[default]
    Select,
    Checkbox,
}

impl Display for PromptKindName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKindName::Select => formatter.write_str("select"),
            PromptKindName::Checkbox => formatter.write_str("checkbox"),
        }
    }
}

/// A prompt as written in a menu file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PromptDefinition {
    #[serde(default)]
    pub kind: PromptKindName,
    pub options: Vec<RawOption>,
    #[serde(flatten)]
    pub config: PromptConfig,
}
