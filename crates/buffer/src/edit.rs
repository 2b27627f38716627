// Chunk: docs/chunks/multi_cursor_engine - Multi-cursor insert, replace and delete

//! Text edits applied across every cursor.
//!
//! Cursors are processed in order, one at a time. Each cursor's edit runs
//! against the store as left by the cursors before it, and every edit
//! rewrites the positions of all other cursors so they keep pointing at
//! the same text. The set is consolidated once the loop finishes.
//!
//! Edits return the signed change in scalars, counting each line break as
//! one: negative for deletions, positive for insertions.

use crate::line_source::LineSource;
use crate::style::StyleId;
use crate::tabs;
use crate::text_buffer::TextBuffer;
use crate::text_view::TextView;
use crate::types::{Cursor, DirtyLines, Position};

/// Where `pos` ends up after `[start, stop)` is removed.
fn delete_adjusted(start: Position, stop: Position, pos: Position) -> Position {
    if pos < start {
        pos
    } else if pos <= stop {
        start
    } else if pos.line == stop.line {
        Position::new(start.line, start.col + (pos.col - stop.col))
    } else {
        Position::new(pos.line - (stop.line - start.line), pos.col)
    }
}

/// Where `pos` ends up after text is inserted at `at`, the inserted text
/// ending at `end`.
fn insert_adjusted(at: Position, end: Position, pos: Position) -> Position {
    if pos.line == at.line && pos.col >= at.col {
        Position::new(end.line, end.col + (pos.col - at.col))
    } else if pos.line > at.line {
        Position::new(pos.line + (end.line - at.line), pos.col)
    } else {
        pos
    }
}

impl TextBuffer {
    // ==================== Selection Queries ====================

    /// Scalars covered by all selections, line breaks counted once each.
    pub fn selection_size_total(&self) -> usize {
        self.cursors
            .iter()
            .map(|c| self.store.text_size(c.start(), c.stop()))
            .sum()
    }

    /// The selected text of every cursor, in cursor order.
    pub fn selected_texts(&self) -> Vec<String> {
        self.cursors
            .iter()
            .map(|c| self.store.text(c.start(), c.stop()))
            .collect()
    }

    // ==================== Per-cursor Primitives ====================

    /// Removes the selection of cursor `idx`, collapsing it to the start.
    fn delete_cursor_selection(&mut self, idx: usize) -> usize {
        let Some(cursor) = self.cursors.get(idx).copied() else {
            return 0;
        };
        let start = self.store.clamp_position(cursor.start());
        let stop = self.store.clamp_position(cursor.stop());

        if start == stop {
            if let Some(slot) = self.cursors.get_mut(idx) {
                *slot = Cursor::caret_at(start);
            }
            return 0;
        }

        let removed = self.store.text_size(start, stop);
        self.store.remove_range(start, stop);
        self.cursors
            .map_positions(|pos| delete_adjusted(start, stop, pos));

        self.mark_dirty(if start.line == stop.line {
            DirtyLines::Single(start.line)
        } else {
            DirtyLines::FromLineToEnd(start.line)
        });
        self.invalidate_styles_from_line(start.line);
        removed
    }

    /// Inserts `text` at the caret of cursor `idx`.
    ///
    /// The inserted scalars take the style of the scalar before the caret.
    /// Every other cursor at or after the caret shifts; this cursor's caret
    /// moves to the end of the inserted text and its anchor stays put.
    pub(crate) fn insert_at_cursor(&mut self, idx: usize, text: &TextView<'_>) -> usize {
        let Some(cursor) = self.cursors.get(idx).copied() else {
            return 0;
        };
        if text.is_empty() {
            return 0;
        }
        let at = self.store.clamp_position(cursor.caret);
        let style = if at.col == 0 {
            StyleId::DEFAULT
        } else {
            self.store.style_at(Position::new(at.line, at.col - 1))
        };

        let end = self.store.insert_view(at, text, style);
        for (other_idx, other) in self.cursors.iter_mut().enumerate() {
            if other_idx == idx {
                other.caret = end;
            } else {
                other.anchor = insert_adjusted(at, end, other.anchor);
                other.caret = insert_adjusted(at, end, other.caret);
            }
        }
        if end.line != at.line {
            tracing::trace!(?at, ?end, "multi-line insert shifted rows");
        }

        self.mark_dirty(if end.line == at.line {
            DirtyLines::Single(at.line)
        } else {
            DirtyLines::FromLineToEnd(at.line)
        });
        self.invalidate_styles_from_line(at.line);
        text.char_count()
    }

    // ==================== Engine Operations ====================

    /// Deletes every selection. Returns the negative count of scalars
    /// removed; 0 when every selection is empty.
    pub fn cursor_delete_selection(&mut self) -> isize {
        let mut removed = 0;
        for idx in 0..self.cursors.len() {
            removed += self.delete_cursor_selection(idx);
        }
        self.cursors.consolidate();
        -(removed as isize)
    }

    /// Replaces every selection with `text`, leaving the inserted text
    /// selected (anchor at its start, caret at its end).
    pub fn cursor_replace_text(&mut self, text: &TextView<'_>) -> isize {
        let mut change = self.cursor_delete_selection();
        if text.is_empty() {
            return change;
        }
        for idx in 0..self.cursors.len() {
            change += self.insert_at_cursor(idx, text) as isize;
        }
        self.cursors.consolidate();
        change
    }

    /// Replaces every selection with `text` and leaves each caret after its
    /// inserted text with no selection.
    pub fn cursor_insert_text(&mut self, text: &TextView<'_>) -> isize {
        let change = self.cursor_replace_text(text);
        self.selection_clear();
        change
    }

    /// Replaces the selection of the single cursor `idx` with `text`,
    /// shifting every other cursor. Out-of-range indices are a no-op.
    pub fn insert_text_at(&mut self, idx: usize, text: &TextView<'_>) -> isize {
        if idx >= self.cursors.len() {
            return 0;
        }
        let removed = self.delete_cursor_selection(idx);
        let inserted = self.insert_at_cursor(idx, text);
        if let Some(cursor) = self.cursors.get_mut(idx) {
            cursor.collapse();
        }
        self.cursors.consolidate();
        inserted as isize - removed as isize
    }

    /// Inserts a tab at every cursor, or spaces up to the next tab stop
    /// when tab expansion is enabled.
    pub fn cursor_insert_tab(&mut self) -> isize {
        if !self.options.expand_tabs {
            return self.cursor_insert_text(&TextView::new("\t"));
        }
        let mut change = self.cursor_delete_selection();
        let tab_width = self.options.tab_width;
        for idx in 0..self.cursors.len() {
            let Some(caret) = self.cursors.get(idx).map(|c| c.caret) else {
                continue;
            };
            let visual = tabs::visual_column(self.store.line(caret.line), caret.col, tab_width);
            let spaces = " ".repeat(tabs::tab_width_at(visual, tab_width));
            change += self.insert_at_cursor(idx, &TextView::new(&spaces)) as isize;
        }
        self.selection_clear();
        change
    }

    /// Extends every caret-only cursor with `target`, leaving cursors that
    /// already select something alone.
    fn extend_empty_cursors(&mut self, target: impl Fn(&Self, Position) -> Position) {
        self.update_cursors(|buf, c| {
            if c.is_empty() {
                Cursor::new(c.anchor, target(buf, c.caret))
            } else {
                c
            }
        });
    }

    /// Backspace: deletes the selection, or the unit before each caret.
    pub fn cursor_delete_prev(&mut self) -> isize {
        self.extend_empty_cursors(|buf, caret| buf.store.prev_position(caret, 1));
        self.cursor_delete_selection()
    }

    /// Delete: deletes the selection, or the unit after each caret.
    pub fn cursor_delete_next(&mut self) -> isize {
        self.extend_empty_cursors(|buf, caret| buf.store.next_position(caret, 1));
        self.cursor_delete_selection()
    }

    pub fn cursor_delete_to_prev_border(&mut self) -> isize {
        self.extend_empty_cursors(|buf, caret| {
            let distance = buf.store.distance_to_prev_border(caret);
            buf.store.prev_position(caret, distance)
        });
        self.cursor_delete_selection()
    }

    pub fn cursor_delete_to_next_border(&mut self) -> isize {
        self.extend_empty_cursors(|buf, caret| {
            let distance = buf.store.distance_to_next_border(caret);
            buf.store.next_position(caret, distance)
        });
        self.cursor_delete_selection()
    }

    /// Replaces every tab in the document with spaces up to its tab stop.
    ///
    /// Cursors after a replaced tab on the same row shift right. Returns the
    /// number of scalars added.
    pub fn convert_tabs_to_spaces(&mut self) -> usize {
        let tab_width = self.options.tab_width.max(1);
        let mut added = 0;

        for line in 0..self.store.line_count() {
            let mut col = 0;
            let mut touched = false;
            while col < self.store.line_len(line) {
                if self.store.char_in_line(line, col) != Some('\t') {
                    col += 1;
                    continue;
                }
                // Earlier tabs on this row are already spaces, so the
                // storage column is the visual column.
                let width = tabs::tab_width_at(col, tab_width);
                self.store.expand_tab(line, col, width);
                let grow = width - 1;
                let tab_col = col;
                self.cursors.map_positions(|pos| {
                    if pos.line == line && pos.col > tab_col {
                        Position::new(line, pos.col + grow)
                    } else {
                        pos
                    }
                });
                added += grow;
                col += width;
                touched = true;
            }
            if touched {
                self.mark_dirty(DirtyLines::Single(line));
                self.invalidate_styles_from_line(line);
            }
        }

        self.cursors.consolidate();
        added
    }
}
