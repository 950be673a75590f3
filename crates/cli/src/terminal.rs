//! The crossterm backed terminal used by `rp`.
//!
//! Frames are drawn inline on stderr, so stdout only carries the answer.

use std::io::{stderr, Stderr, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};
use log::debug;
use rust_picks_core::error::Result;
use rust_picks_core::keys::Key;
use rust_picks_core::terminal::Terminal;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Leave the terminal usable even when the prompt failed
        let _ = disable_raw_mode();
        let _ = execute!(stderr(), Show);
    }
}

pub struct CrosstermTerminal {
    out: Stderr,
    /// Lines above the cursor that belong to the last frame
    drawn_lines: u16,
    _raw_mode_guard: RawModeGuard,
}

impl CrosstermTerminal {
    /// Switches the terminal to raw mode until the value is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            out: stderr(),
            drawn_lines: 0,
            _raw_mode_guard: RawModeGuard,
        })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = queue!(self.out, Print("\r\n"));
        let _ = self.out.flush();
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(key) = key_from_event(key_event) {
                    return Ok(key);
                }
                debug!("Ignoring key event {key_event:?}");
            }
        }
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        if self.drawn_lines > 0 {
            queue!(self.out, MoveUp(self.drawn_lines))?;
        }
        queue!(self.out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

        let mut lines = 0u16;
        for (index, line) in frame.lines().enumerate() {
            if index > 0 {
                queue!(self.out, Print("\r\n"))?;
                lines = lines.saturating_add(1);
            }
            queue!(self.out, Print(line))?;
        }
        self.drawn_lines = lines;

        self.out.flush()?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.out, Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.out, Show)?;
        Ok(())
    }
}

/// Decodes a crossterm key event. Keys a prompt has no use for map to `None`.
#[must_use]
pub fn key_from_event(key_event: KeyEvent) -> Option<Key> {
    let mut key = match key_event.code {
        KeyCode::Char(c) => Key::char(c),
        KeyCode::Up => Key::named("up"),
        KeyCode::Down => Key::named("down"),
        KeyCode::Left => Key::named("left"),
        KeyCode::Right => Key::named("right"),
        KeyCode::PageUp => Key::named("pageup"),
        KeyCode::PageDown => Key::named("pagedown"),
        KeyCode::Home => Key::named("home"),
        KeyCode::End => Key::named("end"),
        KeyCode::Enter => Key::named("enter"),
        KeyCode::Backspace => Key::named("backspace"),
        KeyCode::Delete => Key::named("delete"),
        KeyCode::Tab => Key::named("tab"),
        KeyCode::Esc => Key::named("escape"),
        _ => return None,
    };

    key.ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    key.meta = key_event.modifiers.contains(KeyModifiers::ALT);
    key.shift |= key_event.modifiers.contains(KeyModifiers::SHIFT);
    Some(key)
}
