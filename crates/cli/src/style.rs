//! Colored rendering for the terminal.

use crossterm::style::Stylize;
use rust_picks_core::render::{Frame, FrameRow, FrameRowKind, Renderer, NO_MATCHES};

const POINTER: &str = "❯";
const BACK_POINTER: &str = "❮";
const CHECKED: &str = "◉";
const UNCHECKED: &str = "◯";

#[derive(Clone, Copy, Debug, Default)]
pub struct StyledRenderer;

impl StyledRenderer {
    fn row(row: &FrameRow) -> String {
        let pointer = match (row.selected, row.kind) {
            (false, _) => " ".to_string(),
            (true, FrameRowKind::Back) => BACK_POINTER.blue().to_string(),
            (true, _) => POINTER.blue().to_string(),
        };
        let check = match row.checked {
            Some(true) => format!("{} ", CHECKED.green()),
            Some(false) => format!("{} ", UNCHECKED.red()),
            None => String::new(),
        };
        let label = row.label.as_str();
        let label = match row.kind {
            FrameRowKind::Back => format!("◂ {label}").yellow().to_string(),
            FrameRowKind::Group => format!("▸ {}", label.bold()),
            FrameRowKind::Category => label.dim().bold().to_string(),
            FrameRowKind::Leaf if row.disabled => label.dim().to_string(),
            FrameRowKind::Leaf if row.selected => label.cyan().to_string(),
            FrameRowKind::Leaf => label.to_string(),
        };

        format!("{}{pointer} {check}{label}", "  ".repeat(row.indent))
    }
}

impl Renderer for StyledRenderer {
    fn render(&self, frame: &Frame) -> String {
        let mut lines = Vec::with_capacity(frame.rows.len() + 3);

        let mut header = format!("{} {}", "?".yellow(), frame.message.as_str().bold());
        if let Some(query) = &frame.query {
            header.push_str(&format!(" {} {query}", "›".dark_grey()));
        }
        lines.push(header);

        if frame.rows.is_empty() {
            lines.push(format!("  {}", NO_MATCHES.red()));
        }
        lines.extend(frame.rows.iter().map(Self::row));

        if let Some(info) = &frame.info {
            lines.push(format!("  {}", info.as_str().dim()));
        }
        if let Some(error) = &frame.error {
            lines.push(format!("  {}", error.as_str().red().bold()));
        }

        lines.join("\n")
    }

    fn render_answer(&self, message: &str, answer: &str) -> String {
        format!("{} {} {}", "✔".green(), message.bold(), answer.cyan())
    }
}
