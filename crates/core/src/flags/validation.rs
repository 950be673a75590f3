use indexmap::IndexSet;

use crate::error::Error::{MissingRequiredOption, OptionConflicts, OptionDependsOn};
use crate::error::Result;
use crate::flags::types::ParseOptions;

/// Checks conflict and dependency rules of the given flags, in the order they
/// were given, then that every required flag is present.
pub fn validate_flags(options: &ParseOptions, given: &IndexSet<String>) -> Result<()> {
    for name in given {
        let Some(flag) = options.find(name) else {
            continue;
        };

        if let Some(conflict) = flag.conflicts.iter().find(|other| given.contains(*other)) {
            return Err(OptionConflicts(flag.name.clone(), conflict.clone()));
        }

        if let Some(missing) = flag.depends.iter().find(|other| !given.contains(*other)) {
            return Err(OptionDependsOn(flag.name.clone(), missing.clone()));
        }
    }

    if let Some(missing) = options
        .flags
        .iter()
        .find(|flag| flag.required && !given.contains(&flag.name))
    {
        return Err(MissingRequiredOption(missing.name.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::flags::types::{FlagDefinition, FlagKind};

    fn given(names: &[&str]) -> IndexSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_conflicts() {
        let options = ParseOptions::new(vec![
            FlagDefinition::new("json", FlagKind::Boolean).conflicts(["yaml"]),
            FlagDefinition::new("yaml", FlagKind::Boolean),
        ]);

        assert!(validate_flags(&options, &given(&["json"])).is_ok());
        assert!(matches!(
            validate_flags(&options, &given(&["yaml", "json"])),
            Err(Error::OptionConflicts(flag, other)) if flag == "json" && other == "yaml"
        ));
    }

    #[test]
    fn test_required() {
        let options = ParseOptions::new(vec![FlagDefinition::new("name", FlagKind::String).required()]);
        assert!(matches!(
            validate_flags(&options, &IndexSet::new()),
            Err(Error::MissingRequiredOption(name)) if name == "name"
        ));
    }
}
