//! The render model produced by a prompt and the renderers that turn it into
//! text for the terminal.

/// What a rendered row represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRowKind {
    Back,
    Group,
    Category,
    Leaf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRow {
    pub label: String,
    pub indent: usize,
    pub kind: FrameRowKind,
    pub selected: bool,
    pub disabled: bool,
    /// Check state, for checkbox prompts only.
    pub checked: Option<bool>,
}

/// Everything needed to draw one state of a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub message: String,
    /// The search query, when search is enabled.
    pub query: Option<String>,
    pub rows: Vec<FrameRow>,
    pub info: Option<String>,
    pub error: Option<String>,
}

pub trait Renderer {
    /// Text for an active prompt.
    fn render(&self, frame: &Frame) -> String;

    /// Text left behind once the prompt was answered.
    fn render_answer(&self, message: &str, answer: &str) -> String;
}

/// Unstyled renderer, used for logs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRenderer;

pub const NO_MATCHES: &str = "No matches...";

impl PlainRenderer {
    fn row(row: &FrameRow) -> String {
        let pointer = match (row.selected, row.kind) {
            (false, _) => "  ",
            (true, FrameRowKind::Back) => "❮ ",
            (true, _) => "❯ ",
        };
        let check = match row.checked {
            Some(true) => "[x] ",
            Some(false) => "[ ] ",
            None => "",
        };
        let icon = match row.kind {
            FrameRowKind::Back => "◂ ",
            FrameRowKind::Group => "▸ ",
            FrameRowKind::Category | FrameRowKind::Leaf => "",
        };

        format!(
            "{}{pointer}{check}{icon}{}",
            "  ".repeat(row.indent),
            row.label
        )
    }
}

impl Renderer for PlainRenderer {
    fn render(&self, frame: &Frame) -> String {
        let mut lines = Vec::with_capacity(frame.rows.len() + 3);

        let mut header = format!("? {}", frame.message);
        if let Some(query) = &frame.query {
            header.push_str(&format!(" / {query}"));
        }
        lines.push(header);

        if frame.rows.is_empty() {
            lines.push(format!("  {NO_MATCHES}"));
        }
        lines.extend(frame.rows.iter().map(Self::row));

        if let Some(info) = &frame.info {
            lines.push(format!("  {info}"));
        }
        if let Some(error) = &frame.error {
            lines.push(format!("  ! {error}"));
        }

        lines.join("\n")
    }

    fn render_answer(&self, message: &str, answer: &str) -> String {
        format!("? {message} {answer}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, kind: FrameRowKind, selected: bool) -> FrameRow {
        FrameRow {
            label: label.to_string(),
            indent: 0,
            kind,
            selected,
            disabled: false,
            checked: None,
        }
    }

    #[test]
    fn test_plain_render() {
        let frame = Frame {
            message: "Pick".to_string(),
            query: None,
            rows: vec![
                row("a › b", FrameRowKind::Back, false),
                row("foo", FrameRowKind::Leaf, true),
                row("Baz", FrameRowKind::Group, false),
            ],
            info: None,
            error: Some("Nope".to_string()),
        };

        assert_eq!(
            PlainRenderer.render(&frame),
            "? Pick\n  ◂ a › b\n❯ foo\n  ▸ Baz\n  ! Nope"
        );
    }

    #[test]
    fn test_plain_render_no_matches_and_checks() {
        let mut checked = row("foo", FrameRowKind::Leaf, false);
        checked.checked = Some(true);
        checked.indent = 1;

        let frame = Frame {
            message: "Pick".to_string(),
            query: Some("fo".to_string()),
            rows: vec![checked],
            info: Some("1/1".to_string()),
            error: None,
        };
        assert_eq!(PlainRenderer.render(&frame), "? Pick / fo\n    [x] foo\n  1/1");

        let empty = Frame {
            rows: Vec::new(),
            info: None,
            ..frame
        };
        assert_eq!(PlainRenderer.render(&empty), "? Pick / fo\n  No matches...");
    }
}
