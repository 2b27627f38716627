// Chunk: docs/chunks/clipboard_context - Clipboard contract and multi-cursor transfers

//! Copy, cut and paste across all cursors.
//!
//! The clipboard is a collaborator passed in by the caller; the buffer
//! never reaches for a process-wide instance. A multi-cursor copy stores
//! one segment per cursor. Pasting the same number of segments back into
//! the same number of cursors gives each cursor its own segment.

use crate::text_buffer::TextBuffer;
use crate::text_view::TextView;

/// A plain-text clipboard.
///
/// Implementations backed by a system clipboard usually only implement
/// `text` and `set_text`; the per-cursor segment methods then fall back to
/// the joined text.
pub trait Clipboard {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    /// The per-cursor segments of the last multi-cursor copy, if the
    /// clipboard still holds them.
    fn multi_text(&self) -> Option<Vec<String>> {
        None
    }

    /// Stores one segment per cursor. The plain text becomes the segments
    /// joined by `'\n'`.
    fn set_multi_text(&mut self, segments: Vec<String>) {
        self.set_text(&segments.join("\n"));
    }
}

/// An in-process clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: String,
    segments: Option<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.segments = None;
    }

    fn multi_text(&self) -> Option<Vec<String>> {
        self.segments.clone()
    }

    fn set_multi_text(&mut self, segments: Vec<String>) {
        self.text = segments.join("\n");
        self.segments = Some(segments);
    }
}

impl TextBuffer {
    /// Copies every cursor's selection, one segment per cursor.
    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) {
        clipboard.set_multi_text(self.selected_texts());
    }

    /// Copies, then deletes every selection.
    pub fn cut_to(&mut self, clipboard: &mut dyn Clipboard) -> isize {
        self.copy_to(clipboard);
        self.cursor_delete_selection()
    }

    /// Replaces every selection with clipboard text.
    ///
    /// With more than one cursor and exactly one segment per cursor, each
    /// cursor receives its own segment. Segments come from the last
    /// multi-cursor copy, or else from the lines of the plain text.
    /// Otherwise every cursor receives the whole text.
    pub fn paste_from(&mut self, clipboard: &dyn Clipboard) -> isize {
        let text = clipboard.text();
        let segments = clipboard
            .multi_text()
            .unwrap_or_else(|| TextView::new(&text).lines().map(str::to_string).collect());

        if self.cursors.len() < 2 || segments.len() != self.cursors.len() {
            return self.cursor_insert_text(&TextView::new(&text));
        }

        let mut change = self.cursor_delete_selection();
        if self.cursors.len() != segments.len() {
            return change + self.cursor_insert_text(&TextView::new(&text));
        }
        for (idx, segment) in segments.iter().enumerate() {
            change += self.insert_at_cursor(idx, &TextView::new(segment)) as isize;
        }
        self.selection_clear();
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cursor, Position};

    fn pos(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    /// A clipboard that only speaks plain text.
    #[derive(Default)]
    struct PlainClipboard(String);

    impl Clipboard for PlainClipboard {
        fn text(&self) -> String {
            self.0.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.0 = text.to_string();
        }
    }

    // ==================== MemoryClipboard Tests ====================

    #[test]
    fn test_set_text_drops_segments() {
        let mut clip = MemoryClipboard::new();
        clip.set_multi_text(vec!["a".into(), "b".into()]);
        assert_eq!(clip.text(), "a\nb");
        clip.set_text("c");
        assert_eq!(clip.multi_text(), None);
    }

    // ==================== Copy / Cut Tests ====================

    #[test]
    fn test_copy_joins_segments_in_cursor_order() {
        let mut buf = TextBuffer::from_str("one two\nthree");
        buf.clear_cursors();
        buf.add_cursor(Cursor::new(pos(1, 0), pos(1, 5)));
        buf.add_cursor(Cursor::new(pos(0, 4), pos(0, 7)));
        let mut clip = PlainClipboard::default();
        buf.copy_to(&mut clip);
        assert_eq!(clip.text(), "two\nthree");
    }

    #[test]
    fn test_cut_removes_selection() {
        let mut buf = TextBuffer::from_str("hello world");
        buf.clear_cursors();
        buf.add_cursor(Cursor::new(pos(0, 5), pos(0, 11)));
        let mut clip = MemoryClipboard::new();
        assert_eq!(buf.cut_to(&mut clip), -6);
        assert_eq!(buf.content(), "hello");
        assert_eq!(clip.text(), " world");
    }

    // ==================== Paste Tests ====================

    #[test]
    fn test_paste_single_cursor_inserts_whole_text() {
        let mut buf = TextBuffer::from_str("ab");
        buf.set_cursor(pos(0, 1));
        let mut clip = MemoryClipboard::new();
        clip.set_text("x\ny");
        assert_eq!(buf.paste_from(&clip), 3);
        assert_eq!(buf.content(), "ax\nyb");
        assert_eq!(buf.cursors(), &[Cursor::caret_at(pos(1, 1))]);
    }

    #[test]
    fn test_paste_distributes_segments() {
        let mut buf = TextBuffer::from_str("a\nb\nc");
        buf.set_cursor(pos(0, 1));
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        buf.add_cursor(Cursor::caret_at(pos(2, 1)));
        let mut clip = MemoryClipboard::new();
        clip.set_multi_text(vec!["1".into(), "2".into(), "3".into()]);
        assert_eq!(buf.paste_from(&clip), 3);
        assert_eq!(buf.content(), "a1\nb2\nc3");
    }

    #[test]
    fn test_paste_distributes_plain_lines() {
        let mut buf = TextBuffer::from_str("a\nb");
        buf.set_cursor(pos(0, 1));
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        let clip = PlainClipboard("x\ny".to_string());
        buf.paste_from(&clip);
        assert_eq!(buf.content(), "ax\nby");
    }

    #[test]
    fn test_paste_mismatched_count_inserts_everywhere() {
        let mut buf = TextBuffer::from_str("a\nb");
        buf.set_cursor(pos(0, 1));
        buf.add_cursor(Cursor::caret_at(pos(1, 1)));
        let clip = PlainClipboard("x".to_string());
        assert_eq!(buf.paste_from(&clip), 2);
        assert_eq!(buf.content(), "ax\nbx");
    }

    #[test]
    fn test_copy_then_paste_round_trips_multi_cursor() {
        let mut buf = TextBuffer::from_str("k1 = v1\nk2 = v2");
        buf.clear_cursors();
        buf.add_cursor(Cursor::new(pos(0, 0), pos(0, 2)));
        buf.add_cursor(Cursor::new(pos(1, 0), pos(1, 2)));
        let mut clip = MemoryClipboard::new();
        buf.copy_to(&mut clip);
        buf.cursor_move_to_line_end();
        buf.cursor_insert_text(&TextView::new(" # "));
        buf.paste_from(&clip);
        assert_eq!(buf.content(), "k1 = v1 # k1\nk2 = v2 # k2");
    }
}
