//! Cursor, scrolling and the group back-stack of a list prompt.

use crate::search::{DisplayRow, RowKind};

/// Direction to move the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Snapshot of the level that was left when entering a group.
#[derive(Clone, Debug, PartialEq)]
pub struct ParentFrame {
    pub rows: Vec<DisplayRow>,
    pub selected_index: usize,
}

impl ParentFrame {
    /// Path of the group that was entered from this frame.
    #[must_use]
    pub fn group_path(&self) -> Option<&[usize]> {
        match &self.rows.get(self.selected_index)?.kind {
            RowKind::Group(path) => Some(path),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    rows: Vec<DisplayRow>,
    cursor: usize,
    offset: usize,
    max_rows: usize,
    parents: Vec<ParentFrame>,
}

impl NavigationState {
    /// Starts on the first enabled row. A `max_rows` of 0 shows every row.
    #[must_use]
    pub fn new(rows: Vec<DisplayRow>, max_rows: usize) -> Self {
        let mut state = Self {
            rows,
            cursor: 0,
            offset: 0,
            max_rows,
            parents: Vec::new(),
        };
        state.cursor = state.first_enabled().unwrap_or(0);
        state.scroll_to_cursor();
        state
    }

    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn parents(&self) -> &[ParentFrame] {
        &self.parents
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    #[must_use]
    pub fn current(&self) -> Option<&DisplayRow> {
        self.rows.get(self.cursor)
    }

    /// Path of the group currently browsed, empty at the root.
    #[must_use]
    pub fn level_path(&self) -> Vec<usize> {
        self.parents
            .last()
            .and_then(ParentFrame::group_path)
            .map(<[usize]>::to_vec)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn viewport_height(&self) -> usize {
        if self.max_rows == 0 {
            self.rows.len()
        } else {
            self.max_rows.min(self.rows.len())
        }
    }

    /// Rows inside the viewport, with their absolute index.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &DisplayRow)> {
        self.rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.viewport_height())
    }

    /// Moves one enabled row up or down, wrapping at the ends. Does nothing
    /// if no row is enabled.
    pub fn move_cursor(&mut self, direction: CycleDirection) {
        if self.rows.len() < 2 || self.first_enabled().is_none() {
            return;
        }

        loop {
            self.step(direction);
            if !self.rows[self.cursor].disabled {
                break;
            }
        }
    }

    fn step(&mut self, direction: CycleDirection) {
        let length = self.rows.len();
        let height = self.viewport_height();

        match direction {
            CycleDirection::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    if self.cursor < self.offset {
                        self.offset -= 1;
                    }
                } else {
                    self.cursor = length - 1;
                    self.offset = length - height;
                }
            }
            CycleDirection::Down => {
                if self.cursor < length - 1 {
                    self.cursor += 1;
                    if self.cursor >= self.offset + height {
                        self.offset += 1;
                    }
                } else {
                    self.cursor = 0;
                    self.offset = 0;
                }
            }
        }
    }

    /// Jumps one viewport down. Near the end it snaps to the last page
    /// instead of overshooting.
    pub fn page_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let length = self.rows.len();
        let height = self.viewport_height();

        if self.offset + height + height < length {
            self.cursor += height;
            self.offset += height;
        } else if self.offset + height < length {
            let offset = length - height;
            self.cursor += offset - self.offset;
            self.offset = offset;
        }

        self.settle(CycleDirection::Down);
    }

    /// Jumps one viewport up, stopping at the first page.
    pub fn page_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let height = self.viewport_height();

        if self.offset >= height {
            self.cursor -= height;
            self.offset -= height;
        } else if self.offset > 0 {
            self.cursor -= self.offset;
            self.offset = 0;
        }

        self.settle(CycleDirection::Up);
    }

    /// Replaces the rows of the current level, e.g. after the search query
    /// changed, keeping the cursor at `cursor` where possible.
    pub fn replace_rows(&mut self, rows: Vec<DisplayRow>, cursor: usize) {
        self.rows = rows;
        if self.rows.is_empty() {
            self.cursor = 0;
            self.offset = 0;
            return;
        }

        self.cursor = cursor.min(self.rows.len() - 1);
        if self.rows[self.cursor].disabled {
            if let Some(first) = self.first_selectable() {
                self.cursor = first;
            }
        }

        let max_offset = self.rows.len() - self.viewport_height();
        self.offset = self.offset.min(max_offset);
        self.scroll_to_cursor();
    }

    /// Descends into the group under the cursor. `rows` start with the Back
    /// row, so the cursor goes to index 1.
    pub fn enter(&mut self, rows: Vec<DisplayRow>) {
        let parent_rows = std::mem::replace(&mut self.rows, rows);
        self.parents.push(ParentFrame {
            rows: parent_rows,
            selected_index: self.cursor,
        });
        self.cursor = 1.min(self.rows.len().saturating_sub(1));
        self.offset = 0;
        self.settle(CycleDirection::Down);
    }

    /// Returns to the parent level, restoring its cursor. Returns false at
    /// the root.
    pub fn back(&mut self) -> bool {
        let Some(frame) = self.parents.pop() else {
            return false;
        };
        self.rows = frame.rows;
        self.cursor = frame.selected_index;
        self.offset = 0;
        self.scroll_to_cursor();
        true
    }

    /// Moves the cursor straight to `index`.
    pub fn select(&mut self, index: usize) {
        if index < self.rows.len() {
            self.cursor = index;
            self.scroll_to_cursor();
        }
    }

    fn first_enabled(&self) -> Option<usize> {
        self.rows.iter().position(|row| !row.disabled)
    }

    fn first_selectable(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| !row.disabled && !row.is_back())
            .or_else(|| self.first_enabled())
    }

    /// Moves off a disabled row without wrapping, preferring `direction`.
    fn settle(&mut self, direction: CycleDirection) {
        if self.rows.is_empty() || !self.rows[self.cursor].disabled {
            self.scroll_to_cursor();
            return;
        }

        let below = (self.cursor + 1..self.rows.len()).find(|&i| !self.rows[i].disabled);
        let above = (0..self.cursor).rev().find(|&i| !self.rows[i].disabled);
        let target = match direction {
            CycleDirection::Down => below.or(above),
            CycleDirection::Up => above.or(below),
        };

        if let Some(target) = target {
            self.cursor = target;
        }
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let height = self.viewport_height();
        if height == 0 {
            self.offset = 0;
        } else if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(index: usize) -> DisplayRow {
        DisplayRow {
            kind: RowKind::Leaf(vec![index]),
            indent: 0,
            disabled: false,
        }
    }

    fn disabled(index: usize) -> DisplayRow {
        DisplayRow {
            disabled: true,
            ..leaf(index)
        }
    }

    fn leaves(count: usize) -> Vec<DisplayRow> {
        (0..count).map(leaf).collect()
    }

    #[test]
    fn test_viewport_height() {
        assert_eq!(NavigationState::new(leaves(3), 10).viewport_height(), 3);
        assert_eq!(NavigationState::new(leaves(30), 10).viewport_height(), 10);
        assert_eq!(NavigationState::new(leaves(30), 0).viewport_height(), 30);
    }

    #[test]
    fn test_down_wraps_to_first() {
        let mut state = NavigationState::new(leaves(15), 5);
        for _ in 0..14 {
            state.move_cursor(CycleDirection::Down);
        }
        assert_eq!(state.cursor(), 14);
        assert_eq!(state.offset(), 10);

        state.move_cursor(CycleDirection::Down);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut state = NavigationState::new(leaves(15), 5);
        state.move_cursor(CycleDirection::Up);
        assert_eq!(state.cursor(), 14);
        assert_eq!(state.offset(), 10);
    }

    #[test]
    fn test_scroll_moves_one_row() {
        let mut state = NavigationState::new(leaves(15), 5);
        for _ in 0..5 {
            state.move_cursor(CycleDirection::Down);
        }
        assert_eq!(state.cursor(), 5);
        assert_eq!(state.offset(), 1);
    }

    #[test]
    fn test_skips_disabled_rows() {
        let rows = vec![leaf(0), disabled(1), disabled(2), leaf(3)];
        let mut state = NavigationState::new(rows, 10);
        state.move_cursor(CycleDirection::Down);
        assert_eq!(state.cursor(), 3);
        state.move_cursor(CycleDirection::Up);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_wrap_skips_disabled_ends() {
        let rows = vec![disabled(0), leaf(1), leaf(2), disabled(3)];
        let mut state = NavigationState::new(rows, 10);
        assert_eq!(state.cursor(), 1);
        state.move_cursor(CycleDirection::Up);
        assert_eq!(state.cursor(), 2);
        state.move_cursor(CycleDirection::Down);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_all_disabled_is_noop() {
        let rows = vec![disabled(0), disabled(1), disabled(2)];
        let mut state = NavigationState::new(rows, 10);
        assert_eq!(state.cursor(), 0);
        for _ in 0..5 {
            state.move_cursor(CycleDirection::Down);
            state.move_cursor(CycleDirection::Up);
        }
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_page_down_jumps_a_viewport() {
        let mut state = NavigationState::new(leaves(25), 5);
        state.page_down();
        assert_eq!(state.cursor(), 5);
        assert_eq!(state.offset(), 5);
    }

    #[test]
    fn test_page_down_snaps_to_last_page() {
        let mut state = NavigationState::new(leaves(12), 5);
        state.page_down();
        assert_eq!((state.cursor(), state.offset()), (5, 5));
        state.page_down();
        assert_eq!((state.cursor(), state.offset()), (7, 7));
        state.page_down();
        assert_eq!((state.cursor(), state.offset()), (7, 7));
    }

    #[test]
    fn test_page_up_clamps_at_top() {
        let mut state = NavigationState::new(leaves(12), 5);
        state.page_down();
        state.page_down();
        state.page_up();
        assert_eq!((state.cursor(), state.offset()), (2, 2));
        state.page_up();
        assert_eq!((state.cursor(), state.offset()), (0, 0));
        state.page_up();
        assert_eq!((state.cursor(), state.offset()), (0, 0));
    }

    #[test]
    fn test_page_lands_off_disabled_row() {
        let mut rows = leaves(12);
        rows[5] = disabled(5);
        let mut state = NavigationState::new(rows, 5);
        state.page_down();
        assert_eq!(state.cursor(), 6);
        assert!(state.cursor() >= state.offset());
        assert!(state.cursor() < state.offset() + state.viewport_height());
    }

    #[test]
    fn test_enter_and_back() {
        let mut state = NavigationState::new(leaves(12), 5);
        for _ in 0..7 {
            state.move_cursor(CycleDirection::Down);
        }
        let mut child_rows = vec![DisplayRow::back()];
        child_rows.extend(leaves(3));
        state.enter(child_rows);

        assert_eq!(state.depth(), 1);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.offset(), 0);

        assert!(state.back());
        assert_eq!(state.depth(), 0);
        assert_eq!(state.rows().len(), 12);
        assert_eq!(state.cursor(), 7);
        assert!(state.offset() <= 7 && 7 < state.offset() + 5);
        assert!(!state.back());
    }

    #[test]
    fn test_replace_rows_clamps() {
        let mut state = NavigationState::new(leaves(12), 5);
        state.move_cursor(CycleDirection::Up);
        state.replace_rows(leaves(3), state.cursor());
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.offset(), 0);

        state.replace_rows(vec![disabled(0), leaf(1)], 0);
        assert_eq!(state.cursor(), 1);

        state.replace_rows(Vec::new(), 4);
        assert_eq!(state.cursor(), 0);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_visible_rows() {
        let mut state = NavigationState::new(leaves(12), 5);
        state.page_down();
        let visible: Vec<usize> = state.visible_rows().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![5, 6, 7, 8, 9]);
    }
}
