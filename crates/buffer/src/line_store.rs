// Chunk: docs/chunks/line_store - Line store with parallel style ids

//! Row storage for the buffer.
//!
//! Each row is a vector of scalars with a parallel vector of style ids of
//! exactly the same length. Row separators are implicit: they are never
//! stored and never styled. Every mutation here keeps the two vectors in
//! lockstep; the invariant is checked in debug builds after each change.
//!
//! Mutations are crate-private. Callers go through [`crate::TextBuffer`],
//! which also maintains cursors and the styling watermark.

use crate::line_source::{ordered, LineSource};
use crate::style::StyleId;
use crate::text_view::TextView;
use crate::types::Position;

#[derive(Debug, Clone)]
pub struct LineStore {
    lines: Vec<Vec<char>>,
    styles: Vec<Vec<StyleId>>,
}

impl LineStore {
    /// A store holding one empty row.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            styles: vec![Vec::new()],
        }
    }

    /// A store holding the rows of `view`, all styled with the default id.
    pub fn from_view(view: &TextView<'_>) -> Self {
        let lines: Vec<Vec<char>> = view.lines().map(|l| l.chars().collect()).collect();
        let styles = lines
            .iter()
            .map(|l| vec![StyleId::DEFAULT; l.len()])
            .collect();
        Self { lines, styles }
    }

    // ==================== Accessors ====================

    /// The scalars of `line`; empty for rows out of range.
    pub fn line(&self, line: usize) -> &[char] {
        self.lines.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The style ids of `line`, parallel to [`LineStore::line`].
    pub fn line_styles(&self, line: usize) -> &[StyleId] {
        self.styles.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn line_content(&self, line: usize) -> String {
        self.line(line).iter().collect()
    }

    /// The whole document with rows joined by `'\n'`.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }

    /// The style of the scalar at `pos`. The end-of-line slot and positions
    /// out of range read as the default style.
    pub fn style_at(&self, pos: Position) -> StyleId {
        self.styles
            .get(pos.line)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(StyleId::DEFAULT)
    }

    // ==================== Mutations ====================

    /// Writes `style` at `pos`. Returns false (and writes nothing) for the
    /// end-of-line slot or any position out of range.
    pub(crate) fn set_style_at(&mut self, pos: Position, style: StyleId) -> bool {
        match self.styles.get_mut(pos.line).and_then(|row| row.get_mut(pos.col)) {
            Some(slot) => {
                *slot = style;
                true
            }
            None => false,
        }
    }

    /// Resets every style id to the default.
    pub(crate) fn clear_styles(&mut self) {
        for row in &mut self.styles {
            row.fill(StyleId::DEFAULT);
        }
    }

    /// Removes the text between two positions, joining rows when the range
    /// spans a line break.
    pub(crate) fn remove_range(&mut self, start: Position, stop: Position) {
        let (start, stop) = ordered(self.clamp_position(start), self.clamp_position(stop));
        if start == stop {
            return;
        }

        if start.line == stop.line {
            self.lines[start.line].drain(start.col..stop.col);
            self.styles[start.line].drain(start.col..stop.col);
        } else {
            let tail = self.lines[stop.line].split_off(stop.col);
            let tail_styles = self.styles[stop.line].split_off(stop.col);
            self.lines[start.line].truncate(start.col);
            self.styles[start.line].truncate(start.col);
            self.lines[start.line].extend(tail);
            self.styles[start.line].extend(tail_styles);
            self.lines.drain(start.line + 1..=stop.line);
            self.styles.drain(start.line + 1..=stop.line);
        }

        self.assert_row_consistent(start.line);
    }

    /// Inserts `view` at `at`, styling every inserted scalar with `style`.
    ///
    /// Returns the position just after the inserted text.
    pub(crate) fn insert_view(
        &mut self,
        at: Position,
        view: &TextView<'_>,
        style: StyleId,
    ) -> Position {
        let at = self.clamp_position(at);
        let mut rows = view.lines().map(|l| l.chars().collect::<Vec<char>>());
        let first = rows.next().unwrap_or_default();

        if view.line_count() == 1 {
            let len = first.len();
            self.lines[at.line].splice(at.col..at.col, first);
            self.styles[at.line].splice(at.col..at.col, std::iter::repeat(style).take(len));
            self.assert_row_consistent(at.line);
            return Position::new(at.line, at.col + len);
        }

        let tail = self.lines[at.line].split_off(at.col);
        let tail_styles = self.styles[at.line].split_off(at.col);
        let first_len = first.len();
        self.lines[at.line].extend(first);
        self.styles[at.line].extend(std::iter::repeat(style).take(first_len));

        let mut new_lines: Vec<Vec<char>> = rows.collect();
        let mut new_styles: Vec<Vec<StyleId>> = new_lines
            .iter()
            .map(|l| vec![style; l.len()])
            .collect();
        let last_row = at.line + new_lines.len();
        let end_col = new_lines.last().map_or(0, |l| l.len());
        if let (Some(last), Some(last_styles)) = (new_lines.last_mut(), new_styles.last_mut()) {
            last.extend(tail);
            last_styles.extend(tail_styles);
        }

        self.lines.splice(at.line + 1..at.line + 1, new_lines);
        self.styles.splice(at.line + 1..at.line + 1, new_styles);

        for row in at.line..=last_row {
            self.assert_row_consistent(row);
        }
        Position::new(last_row, end_col)
    }

    /// Replaces the tab at `(line, col)` with `width` spaces that keep the
    /// tab's style.
    pub(crate) fn expand_tab(&mut self, line: usize, col: usize, width: usize) {
        let Some(row) = self.lines.get_mut(line) else {
            return;
        };
        if row.get(col) != Some(&'\t') {
            return;
        }
        let style = self.styles[line][col];
        row.splice(col..=col, std::iter::repeat(' ').take(width));
        self.styles[line].splice(col..=col, std::iter::repeat(style).take(width));
        self.assert_row_consistent(line);
    }

    // ==================== Validation ====================

    #[cfg(debug_assertions)]
    fn assert_row_consistent(&self, line: usize) {
        assert_eq!(
            self.lines.len(),
            self.styles.len(),
            "row count drift between text and styles"
        );
        if let (Some(text), Some(styles)) = (self.lines.get(line), self.styles.get(line)) {
            assert_eq!(
                text.len(),
                styles.len(),
                "style length drift on line {}",
                line
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_row_consistent(&self, _line: usize) {}
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for LineStore {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.len())
    }

    fn char_in_line(&self, line: usize, col: usize) -> Option<char> {
        self.lines.get(line).and_then(|l| l.get(col)).copied()
    }
}
