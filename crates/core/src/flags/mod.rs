//! A small command line flag parser.
//!
//! Flags are declared with [`FlagDefinition`]s, which can require values,
//! depend on or conflict with other flags. Parsed values are keyed by the
//! lowerCamelCase form of the flag name (`--video-type` becomes
//! `videoType`).

pub mod processing;
pub mod types;
pub mod validation;

pub use processing::parse_flags;
pub use types::{FlagDefinition, FlagKind, FlagValue, ParseOptions, ParsedFlags};
pub use validation::validate_flags;
