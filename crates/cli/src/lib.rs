//! Rust Picks CLI Library
//!
//! This crate provides the `rp` command-line tool, which asks the user to pick
//! one or more options in the terminal and prints the answer to stdout.
//!
//! # Key Features
//!
//! - **Menu Files**: Prompts described in YAML, with grouped options and defaults
//! - **Inline Options**: Quick prompts straight from trailing arguments
//! - **Select and Checkbox**: Single or multiple choice, with answer bounds
//! - **Search**: Filter options by typing, with substring or fuzzy matching
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`source`]: Whether options come from a menu file or inline
//! - [`menu`]: Loading options and settings into a runnable prompt
//! - [`terminal`]: The crossterm terminal the prompt draws on
//! - [`style`]: Colored rendering of prompt frames
//!
//! # Examples
//!
//! ```bash
//! # Prompt from the default menu file, ~/.rust-picks/menu.yml
//! rp
//!
//! # Prompt from a specific menu file
//! rp -c ./deploy-targets.yml
//!
//! # Inline options
//! rp -m "Favourite colour?" red green blue
//!
//! # Pick several, with search
//! rp --checkbox --search --max-options 2 red green blue
//! ```

pub mod cli_args;
pub mod menu;
pub mod source;
pub mod style;
pub mod terminal;
