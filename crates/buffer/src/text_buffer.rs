// Chunk: docs/chunks/multi_cursor_engine - Buffer state, cursor creation and navigation

//! TextBuffer is the main public API for text editing operations.
//!
//! It owns the [`LineStore`], the [`CursorSet`], the styling watermark and
//! an optional [`Lexer`]. This file covers construction, read-only queries,
//! cursor creation and cursor movement. Text edits live in `edit.rs`, the
//! styling pull in `styling.rs` and clipboard transfers in `clipboard.rs`.
//!
//! Every operation applies to all cursors and leaves the cursor set
//! consolidated. Mutations accumulate a [`DirtyLines`] region that the
//! renderer drains with [`TextBuffer::take_dirty`].

use crate::cursor_set::CursorSet;
use crate::line_source::LineSource;
use crate::line_store::LineStore;
use crate::options::BufferOptions;
use crate::style::StyleId;
use crate::styling::Lexer;
use crate::tabs;
use crate::text_view::TextView;
use crate::types::{Cursor, DirtyLines, Position};

/// A multi-cursor text buffer with per-scalar style ids.
pub struct TextBuffer {
    pub(crate) store: LineStore,
    pub(crate) cursors: CursorSet,
    pub(crate) options: BufferOptions,
    /// Styles before this position are valid; everything at or after is stale.
    pub(crate) style_pos: Position,
    pub(crate) lexer: Option<Box<dyn Lexer>>,
    pub(crate) dirty: DirtyLines,
}

impl TextBuffer {
    /// Creates an empty buffer with default options.
    pub fn new() -> Self {
        Self::with_options(BufferOptions::default())
    }

    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            store: LineStore::new(),
            cursors: CursorSet::new(),
            options,
            style_pos: Position::default(),
            lexer: None,
            dirty: DirtyLines::None,
        }
    }

    /// Creates a buffer holding `content` with one caret at the origin.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but loading text into a buffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(content);
        buffer
    }

    /// Replaces the whole document.
    ///
    /// Styles reset to the default, a single caret is placed at the origin
    /// and the watermark rewinds to the start.
    pub fn set_text(&mut self, content: &str) {
        self.store = LineStore::from_view(&TextView::new(content));
        self.cursors.reset_to(Cursor::default());
        self.style_pos = Position::default();
        self.dirty.merge(DirtyLines::FromLineToEnd(0));
    }

    // ==================== Accessors ====================

    /// Returns the number of lines in the buffer. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Returns the length of the specified line (excluding the line break).
    pub fn line_len(&self, line: usize) -> usize {
        self.store.line_len(line)
    }

    /// The scalars of `line`; empty for rows out of range.
    pub fn line(&self, line: usize) -> &[char] {
        self.store.line(line)
    }

    pub fn line_content(&self, line: usize) -> String {
        self.store.line_content(line)
    }

    /// Returns the entire document with rows joined by `'\n'`.
    pub fn content(&self) -> String {
        self.store.content()
    }

    /// The style id of the scalar at `pos`, default past the end of a row.
    pub fn style_at(&self, pos: Position) -> StyleId {
        self.store.style_at(pos)
    }

    pub fn line_styles(&self, line: usize) -> &[StyleId] {
        self.store.line_styles(line)
    }

    pub fn options(&self) -> &BufferOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: BufferOptions) {
        self.options = options;
    }

    /// Drains the accumulated dirty region.
    pub fn take_dirty(&mut self) -> DirtyLines {
        std::mem::replace(&mut self.dirty, DirtyLines::None)
    }

    pub(crate) fn mark_dirty(&mut self, dirty: DirtyLines) {
        self.dirty.merge(dirty);
    }

    // ==================== Tab-aware Geometry ====================
    // Chunk: docs/chunks/tab_columns - Storage column to visual column mapping

    /// Visual width of row `pos.line` up to and including `pos.col`.
    pub fn adjust_for_tabs(&self, pos: Position) -> usize {
        let pos = self.store.clamp_position(pos);
        tabs::adjust_for_tabs(self.store.line(pos.line), pos.col, self.options.tab_width)
    }

    /// The storage column on `line` whose visual extent first reaches
    /// `visual`, clamped to the line length.
    pub fn from_tab_adjusted(&self, line: usize, visual: usize) -> usize {
        tabs::from_tab_adjusted(self.store.line(line), visual, self.options.tab_width)
    }

    pub fn tab_adjusted_line_length(&self, line: usize) -> usize {
        tabs::tab_adjusted_len(self.store.line(line), self.options.tab_width)
    }

    pub fn maximum_tab_adjusted_line_length(&self) -> usize {
        (0..self.store.line_count())
            .map(|line| self.tab_adjusted_line_length(line))
            .max()
            .unwrap_or(0)
    }

    /// Where a caret on `pos.line` lands when moved `rows` rows up or down,
    /// keeping its visual column. Saturates at the first and last row.
    fn vertical_target(&self, pos: Position, rows: usize, up: bool) -> Position {
        let pos = self.store.clamp_position(pos);
        let last_line = self.store.line_count().saturating_sub(1);
        let target = if up {
            pos.line.saturating_sub(rows)
        } else {
            pos.line.saturating_add(rows).min(last_line)
        };
        if target == pos.line {
            return pos;
        }
        let tab_width = self.options.tab_width;
        let visual = tabs::visual_column(self.store.line(pos.line), pos.col, tab_width);
        Position::new(
            target,
            tabs::column_at_visual(self.store.line(target), visual, tab_width),
        )
    }

    // ==================== Cursors ====================

    pub fn cursors(&self) -> &[Cursor] {
        self.cursors.as_slice()
    }

    pub fn cursor_count(&self) -> usize {
        self.cursors.len()
    }

    pub fn first_cursor(&self) -> Option<Cursor> {
        self.cursors.first().copied()
    }

    pub fn last_cursor(&self) -> Option<Cursor> {
        self.cursors.last().copied()
    }

    /// Removes every cursor. Edits are no-ops until a cursor is added.
    pub fn clear_cursors(&mut self) {
        self.cursors.clear();
    }

    /// Replaces all cursors with a single caret at `pos` (clamped).
    pub fn set_cursor(&mut self, pos: Position) {
        let pos = self.store.clamp_position(pos);
        self.cursors.reset_to(Cursor::caret_at(pos));
    }

    /// Adds a cursor (both ends clamped) in caret order and consolidates.
    pub fn add_cursor(&mut self, cursor: Cursor) {
        let cursor = Cursor::new(
            self.store.clamp_position(cursor.anchor),
            self.store.clamp_position(cursor.caret),
        );
        self.cursors.add(cursor);
    }

    /// Adds a cursor selecting all of `line` (without its line break).
    pub fn add_line_selection(&mut self, line: usize) {
        let start = self.store.line_start(line);
        let stop = self.store.line_end(line);
        self.cursors.add(Cursor::new(start, stop));
    }

    /// Adds a cursor selecting the border-delimited span containing `pos`.
    pub fn add_word_selection(&mut self, pos: Position) {
        let pos = self.store.clamp_position(pos);
        let to_next = self.store.distance_to_next_border(pos);
        let to_prev = if self.store.is_on_border(pos) {
            0
        } else {
            self.store.distance_to_prev_border(pos)
        };
        let start = self.store.prev_position(pos, to_prev);
        let stop = self.store.next_position(pos, to_next);
        self.cursors.add(Cursor::new(start, stop));
    }

    /// Consolidates the cursor set. Every public operation already does
    /// this; it is exposed for callers that build cursor sets by hand.
    pub fn consolidate_cursors(&mut self) {
        self.cursors.consolidate();
    }

    pub fn select_all(&mut self) {
        let start = self.store.first_position();
        let stop = self.store.last_position();
        self.cursors.reset_to(Cursor::new(start, stop));
    }

    /// Collapses every selection onto its caret.
    pub fn selection_clear(&mut self) {
        for cursor in self.cursors.iter_mut() {
            cursor.collapse();
        }
        self.cursors.consolidate();
    }

    /// Adds a copy of every cursor one row up at the same visual columns.
    pub fn cursor_clone_up(&mut self) {
        self.clone_cursors(true);
    }

    /// Adds a copy of every cursor one row down at the same visual columns.
    pub fn cursor_clone_down(&mut self) {
        self.clone_cursors(false);
    }

    fn clone_cursors(&mut self, up: bool) {
        let last_line = self.store.line_count().saturating_sub(1);
        let clones: Vec<Cursor> = self
            .cursors
            .iter()
            .filter(|c| {
                if up {
                    c.start().line > 0
                } else {
                    c.stop().line < last_line
                }
            })
            .map(|c| {
                Cursor::new(
                    self.vertical_target(c.anchor, 1, up),
                    self.vertical_target(c.caret, 1, up),
                )
            })
            .collect();
        for clone in clones {
            self.cursors.add(clone);
        }
    }

    /// Rewrites every cursor through `f`, then consolidates.
    pub(crate) fn update_cursors(&mut self, f: impl Fn(&Self, Cursor) -> Cursor) {
        let updated: Vec<Cursor> = self.cursors.iter().map(|&c| f(self, c)).collect();
        for (slot, cursor) in self.cursors.iter_mut().zip(updated) {
            *slot = cursor;
        }
        self.cursors.consolidate();
    }

    // ==================== Adjust (extend selection) ====================

    pub fn cursor_adjust_left(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            Cursor::new(c.anchor, buf.store.prev_position(c.caret, count))
        });
    }

    pub fn cursor_adjust_right(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            Cursor::new(c.anchor, buf.store.next_position(c.caret, count))
        });
    }

    pub fn cursor_adjust_up(&mut self, count: usize) {
        self.update_cursors(|buf, c| Cursor::new(c.anchor, buf.vertical_target(c.caret, count, true)));
    }

    pub fn cursor_adjust_down(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            Cursor::new(c.anchor, buf.vertical_target(c.caret, count, false))
        });
    }

    pub fn cursor_adjust_to_prev_border(&mut self) {
        self.update_cursors(|buf, c| {
            let distance = buf.store.distance_to_prev_border(c.caret);
            Cursor::new(c.anchor, buf.store.prev_position(c.caret, distance))
        });
    }

    pub fn cursor_adjust_to_next_border(&mut self) {
        self.update_cursors(|buf, c| {
            let distance = buf.store.distance_to_next_border(c.caret);
            Cursor::new(c.anchor, buf.store.next_position(c.caret, distance))
        });
    }

    pub fn cursor_adjust_to_line_start(&mut self) {
        self.update_cursors(|buf, c| Cursor::new(c.anchor, buf.store.line_start(c.caret.line)));
    }

    pub fn cursor_adjust_to_line_end(&mut self) {
        self.update_cursors(|buf, c| Cursor::new(c.anchor, buf.store.line_end(c.caret.line)));
    }

    pub fn cursor_adjust_to_buffer_start(&mut self) {
        self.update_cursors(|buf, c| Cursor::new(c.anchor, buf.store.first_position()));
    }

    pub fn cursor_adjust_to_buffer_end(&mut self) {
        self.update_cursors(|buf, c| Cursor::new(c.anchor, buf.store.last_position()));
    }

    // ==================== Move (collapse selection) ====================

    /// Moves every caret left by `count`. A selection first collapses to
    /// its start, which uses up one unit of the count.
    pub fn cursor_move_left(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            let (from, count) = if c.is_empty() {
                (c.caret, count)
            } else {
                (c.start(), count.saturating_sub(1))
            };
            Cursor::caret_at(buf.store.prev_position(from, count))
        });
    }

    /// Moves every caret right by `count`. A selection first collapses to
    /// its stop, which uses up one unit of the count.
    pub fn cursor_move_right(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            let (from, count) = if c.is_empty() {
                (c.caret, count)
            } else {
                (c.stop(), count.saturating_sub(1))
            };
            Cursor::caret_at(buf.store.next_position(from, count))
        });
    }

    pub fn cursor_move_up(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            Cursor::caret_at(buf.vertical_target(c.start(), count, true))
        });
    }

    pub fn cursor_move_down(&mut self, count: usize) {
        self.update_cursors(|buf, c| {
            Cursor::caret_at(buf.vertical_target(c.stop(), count, false))
        });
    }

    pub fn cursor_move_to_prev_border(&mut self) {
        self.update_cursors(|buf, c| {
            let distance = buf.store.distance_to_prev_border(c.caret);
            Cursor::caret_at(buf.store.prev_position(c.caret, distance))
        });
    }

    pub fn cursor_move_to_next_border(&mut self) {
        self.update_cursors(|buf, c| {
            let distance = buf.store.distance_to_next_border(c.caret);
            Cursor::caret_at(buf.store.next_position(c.caret, distance))
        });
    }

    pub fn cursor_move_to_line_start(&mut self) {
        self.update_cursors(|buf, c| Cursor::caret_at(buf.store.line_start(c.caret.line)));
    }

    pub fn cursor_move_to_line_end(&mut self) {
        self.update_cursors(|buf, c| Cursor::caret_at(buf.store.line_end(c.caret.line)));
    }

    /// Leaves a single caret at the start of the document.
    pub fn cursor_move_to_buffer_start(&mut self) {
        let start = self.store.first_position();
        self.cursors.reset_to(Cursor::caret_at(start));
    }

    /// Leaves a single caret at the end of the document.
    pub fn cursor_move_to_buffer_end(&mut self) {
        let end = self.store.last_position();
        self.cursors.reset_to(Cursor::caret_at(end));
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("store", &self.store)
            .field("cursors", &self.cursors)
            .field("options", &self.options)
            .field("style_pos", &self.style_pos)
            .field("has_lexer", &self.lexer.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl LineSource for TextBuffer {
    fn line_count(&self) -> usize {
        self.store.line_count()
    }

    fn line_len(&self, line: usize) -> usize {
        self.store.line_len(line)
    }

    fn char_in_line(&self, line: usize, col: usize) -> Option<char> {
        self.store.char_in_line(line, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    fn carets(buf: &TextBuffer) -> Vec<Position> {
        buf.cursors().iter().map(|c| c.caret).collect()
    }

    // ==================== Basic Tests ====================

    #[test]
    fn test_new_empty() {
        let buf = TextBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.content(), "");
        assert_eq!(buf.cursors(), &[Cursor::default()]);
    }

    #[test]
    fn test_from_str() {
        let buf = TextBuffer::from_str("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_content(1), "world");
        assert_eq!(buf.line_len(0), 5);
    }

    #[test]
    fn test_set_text_resets_state() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_cursor(pos(0, 2));
        buf.take_dirty();
        buf.set_text("x\ny");
        assert_eq!(buf.cursors(), &[Cursor::default()]);
        assert_eq!(buf.style_pos, Position::default());
        assert_eq!(buf.take_dirty(), DirtyLines::FromLineToEnd(0));
    }

    #[test]
    fn test_text_and_size_through_line_source() {
        let buf = TextBuffer::from_str("abc\ndef");
        assert_eq!(buf.text(pos(0, 2), pos(1, 1)), "c\nd");
        assert_eq!(buf.text_size(pos(0, 2), pos(1, 1)), 3);
        assert_eq!(buf.maximum_line_length(), 3);
    }

    // ==================== Tab Geometry Tests ====================

    #[test]
    fn test_tab_adjust_round_trip() {
        let buf = TextBuffer::from_str("a\tb");
        assert_eq!(buf.adjust_for_tabs(pos(0, 2)), 5);
        assert_eq!(buf.from_tab_adjusted(0, 5), 2);
    }

    #[test]
    fn test_tab_width_option_applies() {
        let mut buf = TextBuffer::with_options(BufferOptions {
            tab_width: 8,
            ..BufferOptions::default()
        });
        buf.set_text("\tx\n\t\t");
        assert_eq!(buf.tab_adjusted_line_length(0), 9);
        assert_eq!(buf.maximum_tab_adjusted_line_length(), 16);
    }

    // ==================== Cursor Creation Tests ====================

    #[test]
    fn test_add_cursor_clamps() {
        let mut buf = TextBuffer::from_str("ab\ncd");
        buf.add_cursor(Cursor::caret_at(pos(5, 9)));
        assert_eq!(carets(&buf), vec![pos(0, 0), pos(1, 2)]);
    }

    #[test]
    fn test_add_line_selection() {
        let mut buf = TextBuffer::from_str("one\ntwo");
        buf.clear_cursors();
        buf.add_line_selection(1);
        assert_eq!(buf.cursors(), &[Cursor::new(pos(1, 0), pos(1, 3))]);
    }

    #[test]
    fn test_add_word_selection_inside_word() {
        let mut buf = TextBuffer::from_str("let value = 1;");
        buf.clear_cursors();
        buf.add_word_selection(pos(0, 6));
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 4), pos(0, 9))]);
    }

    #[test]
    fn test_add_word_selection_on_border() {
        let mut buf = TextBuffer::from_str("let value = 1;");
        buf.clear_cursors();
        buf.add_word_selection(pos(0, 4));
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 4), pos(0, 9))]);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut buf = TextBuffer::from_str("ab\ncd");
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        buf.select_all();
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 0), pos(1, 2))]);
        buf.selection_clear();
        assert_eq!(buf.cursors(), &[Cursor::caret_at(pos(1, 2))]);
    }

    #[test]
    fn test_first_and_last_cursor() {
        let mut buf = TextBuffer::from_str("abc\ndef");
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        assert_eq!(buf.first_cursor(), Some(Cursor::caret_at(pos(0, 0))));
        assert_eq!(buf.last_cursor(), Some(Cursor::caret_at(pos(1, 1))));
        buf.clear_cursors();
        assert_eq!(buf.first_cursor(), None);
    }

    // ==================== Clone Tests ====================

    #[test]
    fn test_clone_down_keeps_visual_column() {
        let mut buf = TextBuffer::from_str("abcdef\n\tx\nabcdef");
        buf.set_cursor(pos(0, 4));
        buf.cursor_clone_down();
        assert_eq!(carets(&buf), vec![pos(0, 4), pos(1, 1)]);
        buf.cursor_clone_down();
        assert_eq!(carets(&buf), vec![pos(0, 4), pos(1, 1), pos(2, 4)]);
    }

    #[test]
    fn test_clone_up_saturates_at_first_row() {
        let mut buf = TextBuffer::from_str("abc\ndef");
        buf.set_cursor(pos(0, 1));
        buf.cursor_clone_up();
        assert_eq!(carets(&buf), vec![pos(0, 1)]);
    }

    #[test]
    fn test_clone_down_clamps_to_short_line() {
        let mut buf = TextBuffer::from_str("abcdef\nab");
        buf.set_cursor(pos(0, 5));
        buf.cursor_clone_down();
        assert_eq!(carets(&buf), vec![pos(0, 5), pos(1, 2)]);
    }

    // ==================== Adjust Tests ====================

    #[test]
    fn test_adjust_right_extends_selection() {
        let mut buf = TextBuffer::from_str("hello");
        buf.cursor_adjust_right(3);
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 0), pos(0, 3))]);
    }

    #[test]
    fn test_adjust_left_keeps_anchor() {
        let mut buf = TextBuffer::from_str("hello");
        buf.set_cursor(pos(0, 4));
        buf.cursor_adjust_left(2);
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 4), pos(0, 2))]);
    }

    #[test]
    fn test_adjust_to_next_border() {
        let mut buf = TextBuffer::from_str("foo bar");
        buf.cursor_adjust_to_next_border();
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 0), pos(0, 3))]);
    }

    #[test]
    fn test_adjust_to_line_end_and_buffer_start() {
        let mut buf = TextBuffer::from_str("ab\ncd");
        buf.set_cursor(pos(1, 1));
        buf.cursor_adjust_to_line_end();
        assert_eq!(buf.cursors(), &[Cursor::new(pos(1, 1), pos(1, 2))]);
        buf.cursor_adjust_to_buffer_start();
        assert_eq!(buf.cursors(), &[Cursor::new(pos(1, 1), pos(0, 0))]);
    }

    #[test]
    fn test_adjusting_carets_together_merges_them() {
        let mut buf = TextBuffer::from_str("abc\ndef");
        buf.add_cursor(Cursor::caret_at(pos(1, 2)));
        buf.cursor_adjust_to_buffer_end();
        assert_eq!(buf.cursors(), &[Cursor::new(pos(0, 0), pos(1, 3))]);
    }

    // ==================== Move Tests ====================

    #[test]
    fn test_move_left_collapses_selection_to_start() {
        let mut buf = TextBuffer::from_str("hello");
        buf.clear_cursors();
        buf.add_cursor(Cursor::new(pos(0, 1), pos(0, 4)));
        buf.cursor_move_left(1);
        assert_eq!(carets(&buf), vec![pos(0, 1)]);
    }

    #[test]
    fn test_move_right_collapses_selection_to_stop() {
        let mut buf = TextBuffer::from_str("hello");
        buf.clear_cursors();
        buf.add_cursor(Cursor::new(pos(0, 4), pos(0, 1)));
        buf.cursor_move_right(1);
        assert_eq!(carets(&buf), vec![pos(0, 4)]);
    }

    #[test]
    fn test_move_left_wraps_to_previous_line() {
        let mut buf = TextBuffer::from_str("ab\ncd");
        buf.set_cursor(pos(1, 0));
        buf.cursor_move_left(1);
        assert_eq!(carets(&buf), vec![pos(0, 2)]);
    }

    #[test]
    fn test_move_right_at_buffer_end() {
        let mut buf = TextBuffer::from_str("ab");
        buf.set_cursor(pos(0, 2));
        buf.cursor_move_right(1);
        assert_eq!(carets(&buf), vec![pos(0, 2)]);
    }

    #[test]
    fn test_move_up_and_down_clamp_column() {
        let mut buf = TextBuffer::from_str("hello\nhi\nworld");
        buf.set_cursor(pos(0, 4));
        buf.cursor_move_down(1);
        assert_eq!(carets(&buf), vec![pos(1, 2)]);
        buf.cursor_move_down(5);
        assert_eq!(carets(&buf), vec![pos(2, 2)]);
        buf.cursor_move_up(1);
        assert_eq!(carets(&buf), vec![pos(1, 2)]);
    }

    #[test]
    fn test_move_up_at_first_line_stays() {
        let mut buf = TextBuffer::from_str("abc\ndef");
        buf.set_cursor(pos(0, 2));
        buf.cursor_move_up(1);
        assert_eq!(carets(&buf), vec![pos(0, 2)]);
    }

    #[test]
    fn test_move_to_borders() {
        let mut buf = TextBuffer::from_str("foo bar");
        buf.cursor_move_to_next_border();
        assert_eq!(carets(&buf), vec![pos(0, 3)]);
        buf.cursor_move_to_next_border();
        assert_eq!(carets(&buf), vec![pos(0, 4)]);
        buf.cursor_move_to_prev_border();
        assert_eq!(carets(&buf), vec![pos(0, 3)]);
    }

    #[test]
    fn test_move_to_line_start_and_end() {
        let mut buf = TextBuffer::from_str("abc\ndefg");
        buf.set_cursor(pos(1, 2));
        buf.cursor_move_to_line_end();
        assert_eq!(carets(&buf), vec![pos(1, 4)]);
        buf.cursor_move_to_line_start();
        assert_eq!(carets(&buf), vec![pos(1, 0)]);
    }

    #[test]
    fn test_move_to_buffer_end_leaves_single_cursor() {
        let mut buf = TextBuffer::from_str("abc\ndefg");
        buf.add_cursor(Cursor::caret_at(pos(0, 2)));
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        buf.cursor_move_to_buffer_end();
        assert_eq!(buf.cursors(), &[Cursor::caret_at(pos(1, 4))]);
        buf.cursor_move_to_buffer_start();
        assert_eq!(buf.cursors(), &[Cursor::caret_at(pos(0, 0))]);
    }

    #[test]
    fn test_multiple_carets_move_together() {
        let mut buf = TextBuffer::from_str("abc\nabc");
        buf.set_cursor(pos(0, 1));
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        buf.cursor_move_right(1);
        assert_eq!(carets(&buf), vec![pos(0, 2), pos(1, 2)]);
    }
}
