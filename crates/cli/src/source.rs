//! Where the options of a prompt come from.
//!
//! Options are either read from a menu file or given inline as trailing
//! arguments. The two cannot be mixed in a single invocation.

use rust_picks_core::error::Error::MixedOptionSource;
use rust_picks_core::error::Result;

#[derive(PartialEq, Clone, Debug)]
pub enum OptionSource {
    /// No path and no inline options, read the default menu file
    DefaultFile,
    /// Menu file given with -c/--config-path
    File(String),
    /// Options given as trailing arguments
    Inline(Vec<String>),
}

/// Trait for argument structures that can tell where options come from.
pub trait Provider {
    /// # Errors
    ///
    /// Returns an error if a menu file and inline options are both given.
    fn get_source(&self) -> Result<OptionSource>;
}

/// Determines the option source from the config path and inline options.
///
/// # Errors
///
/// Returns [`MixedOptionSource`] if both are provided.
///
/// # Examples
///
/// ```rust
/// use rust_picks_cli::source::{determine, OptionSource};
///
/// let source = determine(&None, &["red".to_string(), "blue".to_string()]).unwrap();
/// assert_eq!(source, OptionSource::Inline(vec!["red".to_string(), "blue".to_string()]));
///
/// let source = determine(&None, &[]).unwrap();
/// assert_eq!(source, OptionSource::DefaultFile);
/// ```
pub fn determine(config_path: &Option<String>, inline_options: &[String]) -> Result<OptionSource> {
    match (config_path, inline_options.is_empty()) {
        (Some(_), false) => Err(MixedOptionSource),
        (Some(path), true) => Ok(OptionSource::File(path.clone())),
        (None, false) => Ok(OptionSource::Inline(inline_options.to_vec())),
        (None, true) => Ok(OptionSource::DefaultFile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_default() {
        assert_eq!(determine(&None, &[]).unwrap(), OptionSource::DefaultFile);
    }

    #[test]
    fn test_determine_file() {
        let path = Some("/tmp/menu.yml".to_string());
        assert_eq!(
            determine(&path, &[]).unwrap(),
            OptionSource::File("/tmp/menu.yml".to_string())
        );
    }

    #[test]
    fn test_determine_inline() {
        let options = vec!["red".to_string(), "green".to_string()];
        match determine(&None, &options).unwrap() {
            OptionSource::Inline(values) => assert_eq!(values, options),
            _ => panic!("Expected inline option source"),
        }
    }

    #[test]
    fn test_determine_mixed_error() {
        let path = Some("/tmp/menu.yml".to_string());
        let result = determine(&path, &["red".to_string()]);
        assert!(matches!(result.unwrap_err(), MixedOptionSource));
    }
}
