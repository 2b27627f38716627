// Chunk: docs/chunks/style_watermark - Incremental styling watermark and lexer contract

//! Lazy styling.
//!
//! The buffer keeps one watermark position: styles strictly before it are
//! valid, everything at or after it is stale. Edits rewind the watermark to
//! the start of the earliest row they touch. Nothing is re-lexed until
//! someone asks for styles through [`TextBuffer::ensure_styled`], which
//! pulls the installed [`Lexer`] forward just far enough.
//!
//! The lexer is handed a [`Styler`] rather than the buffer. The styler can
//! read text and styles and write styles at the watermark, but it has no
//! route to the editing operations, so a lexer cannot re-enter them.

use crate::line_source::LineSource;
use crate::line_store::LineStore;
use crate::style::StyleId;
use crate::text_buffer::TextBuffer;
use crate::types::Position;

/// A tokenizer that classifies buffer text into style ids.
///
/// `style` is asked to classify `[from, to)`. The styler's watermark starts
/// at `from`. Before returning, the lexer must issue enough
/// [`Styler::set_style`] calls to carry the watermark to at least `to`.
/// Each call consumes consecutive positions, including the end-of-line
/// slots between rows (which are skipped rather than styled). A lexer may
/// rewind with [`Styler::start_styling`] and restyle earlier text, and may
/// style past `to`.
///
/// Results must be deterministic for the same text.
pub trait Lexer {
    fn style(&mut self, styler: &mut Styler<'_>, from: Position, to: Position);
}

/// The lexer's restricted view of the buffer during a styling pull.
pub struct Styler<'a> {
    store: &'a mut LineStore,
    watermark: &'a mut Position,
}

impl<'a> Styler<'a> {
    pub(crate) fn new(store: &'a mut LineStore, watermark: &'a mut Position) -> Self {
        Self { store, watermark }
    }

    /// The position the next `set_style` call will write.
    pub fn watermark(&self) -> Position {
        *self.watermark
    }

    /// Moves the watermark back to `pos` if it is ahead of it.
    pub fn start_styling(&mut self, pos: Position) {
        start_styling(self.store, self.watermark, pos);
    }

    /// Styles `count` consecutive positions from the watermark.
    pub fn set_style(&mut self, count: usize, style: StyleId) {
        set_style(self.store, self.watermark, count, style);
    }

    pub fn style_at(&self, pos: Position) -> StyleId {
        self.store.style_at(pos)
    }

    pub fn line(&self, line: usize) -> &[char] {
        self.store.line(line)
    }
}

impl LineSource for Styler<'_> {
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

fn start_styling(store: &LineStore, watermark: &mut Position, pos: Position) {
    let pos = store.clamp_position(pos);
    if pos < *watermark {
        *watermark = pos;
    }
}

fn set_style(store: &mut LineStore, watermark: &mut Position, count: usize, style: StyleId) {
    for _ in 0..count {
        let pos = *watermark;
        store.set_style_at(pos, style);
        let next = store.next_position(pos, 1);
        if next == pos {
            break;
        }
        *watermark = next;
    }
}

impl TextBuffer {
    // ==================== Lexer ====================

    /// Installs `lexer` and marks every style stale.
    pub fn set_lexer(&mut self, lexer: Box<dyn Lexer>) {
        tracing::debug!("installing lexer");
        self.lexer = Some(lexer);
        self.invalidate_styles();
    }

    /// Removes the lexer. Styles reset to the default.
    pub fn take_lexer(&mut self) -> Option<Box<dyn Lexer>> {
        let lexer = self.lexer.take();
        self.store.clear_styles();
        self.invalidate_styles();
        lexer
    }

    pub fn has_lexer(&self) -> bool {
        self.lexer.is_some()
    }

    // ==================== Watermark ====================

    pub fn style_watermark(&self) -> Position {
        self.style_pos
    }

    /// Moves the watermark back to `pos` if it is ahead of it.
    pub fn start_styling(&mut self, pos: Position) {
        start_styling(&self.store, &mut self.style_pos, pos);
    }

    /// Styles `count` consecutive positions from the watermark, advancing
    /// it one position per write. Positions with no scalar (line ends) are
    /// passed over without writing.
    pub fn set_style(&mut self, count: usize, style: StyleId) {
        set_style(&mut self.store, &mut self.style_pos, count, style);
    }

    /// Makes the style at `pos` valid.
    ///
    /// If the watermark is at or before `pos`, the lexer is asked for
    /// `[watermark, NextPosition(pos))`. The watermark then sits at least
    /// one position past `pos`, so repeating the call is a no-op. Without a
    /// lexer the current (default) styles are accepted as valid.
    pub fn ensure_styled(&mut self, pos: Position) {
        let pos = self.store.clamp_position(pos);
        if self.style_pos > pos {
            return;
        }
        let from = self.style_pos;
        let to = self.store.next_position(pos, 1);

        if let Some(lexer) = self.lexer.as_mut() {
            if from < to {
                tracing::debug!(?from, ?to, "styling range");
                let mut styler = Styler::new(&mut self.store, &mut self.style_pos);
                lexer.style(&mut styler, from, to);
                if self.style_pos < to {
                    tracing::warn!(
                        watermark = ?self.style_pos,
                        ?to,
                        "lexer stopped short of the requested range"
                    );
                }
            }
        }
        self.style_pos = self.style_pos.max(to);
    }

    /// Makes the styles of every scalar up to the end of `line` valid.
    pub fn ensure_line_styled(&mut self, line: usize) {
        let end = self.store.line_end(line);
        self.ensure_styled(end);
    }

    /// Marks every style stale.
    pub fn invalidate_styles(&mut self) {
        self.style_pos = self.store.first_position();
    }

    /// Rewinds the watermark to `pos` if it is ahead of it.
    pub fn invalidate_styles_from(&mut self, pos: Position) {
        self.start_styling(pos);
    }

    /// Rewinds the watermark to the start of `line` if it is ahead of it.
    pub fn invalidate_styles_from_line(&mut self, line: usize) {
        let start = self.store.line_start(line);
        self.start_styling(start);
    }
}
