use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal error: {}", _0)]
    Terminal(#[from] std::io::Error),

    #[error("The key source ran out of input before the prompt was answered.")]
    InputExhausted,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No options were given. A prompt needs at least one option.")]
    EmptyOptions,

    #[error("Invalid option: an option needs a non-empty `value` or `name`")]
    EmptyOptionValue,

    #[error("Found a non-unique option value: `{}`", .0)]
    DuplicateOptionValue(String),

    #[error("Invalid option bounds: min_options ({}) is greater than max_options ({})", .min, .max)]
    InvalidOptionBounds { min: usize, max: usize },

    #[error("Default value `{}` does not match any option", .0)]
    UnknownDefault(String),

    #[error("Invalid answer: {}", .0)]
    InvalidAnswer(String),

    #[error("Options were given both inline and with a config file, pick one.")]
    MixedOptionSource,

    #[error("Unknown option \"{}\".", .0)]
    UnknownOption(String),

    #[error("Missing value for option \"--{}\".", .0)]
    MissingOptionValue(String),

    #[error("Option \"--{}\" doesn't take a value, but got \"{}\".", .0, .1)]
    UnexpectedOptionValue(String, String),

    #[error("Option \"--{}\" must be of type \"{}\", but got \"{}\".", .option, .expected, .value)]
    InvalidOptionType {
        option: String,
        expected: String,
        value: String,
    },

    #[error("Option \"--{}\" depends on option \"--{}\".", .0, .1)]
    OptionDependsOn(String, String),

    #[error("Option \"--{}\" conflicts with option \"--{}\".", .0, .1)]
    OptionConflicts(String, String),

    #[error("Option \"--{}\" can only occur once, but was found several times.", .0)]
    DuplicateOption(String),

    #[error("Missing required option \"--{}\".", .0)]
    MissingRequiredOption(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        error!("Could not parse {file_description} file `{path}`: {original}");
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// True for errors raised while building a prompt from its options,
    /// before anything is rendered.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyOptions
                | Error::EmptyOptionValue
                | Error::DuplicateOptionValue(_)
                | Error::InvalidOptionBounds { .. }
                | Error::UnknownDefault(_)
                | Error::MixedOptionSource
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_messages() {
        assert_eq!(
            Error::OptionDependsOn("video-type".to_string(), "audio-type".to_string())
                .to_string(),
            "Option \"--video-type\" depends on option \"--audio-type\"."
        );
        assert_eq!(
            Error::MissingOptionValue("flag".to_string()).to_string(),
            "Missing value for option \"--flag\"."
        );
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(Error::EmptyOptions.is_configuration_error());
        assert!(Error::DuplicateOptionValue("foo".to_string()).is_configuration_error());
        assert!(!Error::InputExhausted.is_configuration_error());
    }
}
