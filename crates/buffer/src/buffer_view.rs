// Chunk: docs/chunks/buffer_view_trait - BufferView trait and supporting types
//!
//! Buffer view abstraction for rendering.
//!
//! The renderer never touches the line store directly. It asks a
//! [`BufferView`] for rows as runs of equal style id, for the cursors to
//! draw, and for the rows dirtied since the last frame. Before reading
//! styles for a viewport it must call
//! [`BufferView::ensure_styled_through`] with the last visible row so the
//! lexer has been pulled far enough.
//!
//! The trait is object-safe, so a renderer can hold `&mut dyn BufferView`.

use crate::style::StyleId;
use crate::text_buffer::TextBuffer;
use crate::types::{Cursor, DirtyLines};

// =============================================================================
// Span and StyledLine
// =============================================================================

/// A contiguous run of text with one style id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: StyleId,
}

impl Span {
    pub fn new(text: impl Into<String>, style: StyleId) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A span with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleId::DEFAULT)
    }
}

/// A row as the renderer sees it: a sequence of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Builds a line from parallel scalar and style slices, merging
    /// adjacent scalars with equal style into one span.
    pub fn from_runs(chars: &[char], styles: &[StyleId]) -> Self {
        let mut spans: Vec<Span> = Vec::new();
        for (&ch, &style) in chars.iter().zip(styles) {
            match spans.last_mut() {
                Some(span) if span.style == style => span.text.push(ch),
                _ => spans.push(Span::new(ch.to_string(), style)),
            }
        }
        Self { spans }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the total character count across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }
}

// =============================================================================
// BufferView Trait
// =============================================================================

pub trait BufferView {
    /// Returns the total number of rows available for display.
    fn line_count(&self) -> usize;

    /// Returns the row as styled spans, `None` past the last row.
    ///
    /// Styles are read as stored; only rows covered by a previous
    /// `ensure_styled_through` are guaranteed fresh.
    fn styled_line(&self, line: usize) -> Option<StyledLine>;

    /// Returns the length of the row in scalars, 0 when out of range.
    fn line_len(&self, line: usize) -> usize;

    /// Every cursor to draw, in document order.
    fn cursors(&self) -> &[Cursor];

    /// Pulls the lexer far enough that every style up to the end of `line`
    /// is valid.
    fn ensure_styled_through(&mut self, line: usize);

    /// Drains accumulated dirty state since last call.
    fn take_dirty(&mut self) -> DirtyLines;
}

impl BufferView for TextBuffer {
    fn line_count(&self) -> usize {
        TextBuffer::line_count(self)
    }

    fn styled_line(&self, line: usize) -> Option<StyledLine> {
        if line >= TextBuffer::line_count(self) {
            return None;
        }
        Some(StyledLine::from_runs(self.line(line), self.line_styles(line)))
    }

    fn line_len(&self, line: usize) -> usize {
        TextBuffer::line_len(self, line)
    }

    fn cursors(&self) -> &[Cursor] {
        TextBuffer::cursors(self)
    }

    fn ensure_styled_through(&mut self, line: usize) {
        self.ensure_line_styled(line);
    }

    fn take_dirty(&mut self) -> DirtyLines {
        TextBuffer::take_dirty(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
