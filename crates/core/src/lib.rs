//! Rust Picks Core Library
//!
//! This crate provides the prompt engine behind `rp`: interactive select and
//! checkbox prompts over flat or grouped option lists, with paging, search
//! and breadcrumb navigation.
//!
//! # Key Features
//!
//! - **Option Trees**: Normalize bare strings and option maps into a tree of groups and leaves
//! - **Navigation**: Cursor movement that skips disabled rows, paging and a group back-stack
//! - **Search**: Substring or fuzzy matching, ranked by edit distance
//! - **Rendering**: A render model plus a plain renderer, behind the `Renderer` trait
//! - **Configuration**: YAML prompt definitions and configuration file paths
//! - **Flags**: A small command line flag parser with dependency and conflict rules
//!
//! # Examples
//!
//! Driving a select prompt with scripted keys:
//!
//! ```
//! use rust_picks_core::config::PromptConfig;
//! use rust_picks_core::keys::Key;
//! use rust_picks_core::options::{ListOption, OptionTree};
//! use rust_picks_core::prompt::ListPrompt;
//! use rust_picks_core::render::PlainRenderer;
//! use rust_picks_core::terminal::ScriptedTerminal;
//!
//! let tree = OptionTree::new(vec![ListOption::new("foo"), ListOption::new("bar")])?;
//! let mut prompt = ListPrompt::select(tree, PromptConfig::with_message("Pick one"))?;
//! let mut terminal = ScriptedTerminal::new([Key::named("down"), Key::named("enter")]);
//!
//! let answer = prompt.run(&mut terminal, &PlainRenderer)?;
//! assert_eq!(answer, Some("bar".to_string()));
//! # Ok::<(), rust_picks_core::error::Error>(())
//! ```

pub mod breadcrumb;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod flags;
pub mod keys;
pub mod matcher;
pub mod navigation;
pub mod options;
pub mod prompt;
pub mod render;
pub mod search;
pub mod terminal;
