//! The terminal boundary of a prompt.
//!
//! A prompt only needs to read decoded keys, repaint a frame and toggle the
//! cursor. [`ScriptedTerminal`] replays a fixed key sequence, which makes
//! prompts drivable without a tty.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::keys::Key;

pub trait Terminal {
    /// Blocks until the next key press.
    fn read_key(&mut self) -> Result<Key>;

    /// Replaces the previously written frame with `frame`.
    fn write_frame(&mut self, frame: &str) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;
}

/// Replays pre-seeded keys and records every frame written.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    frames: Vec<String>,
    cursor_hidden: bool,
}

impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    #[must_use]
    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    #[must_use]
    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(Error::InputExhausted)
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = false;
        Ok(())
    }
}
