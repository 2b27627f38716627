// Chunk: docs/chunks/clipboard_context - Editing session with injected collaborators

//! An editing session: one buffer plus the collaborators it needs.
//!
//! The UI layer translates input into [`EditCommand`]s and hands them to
//! [`EditorSession::execute`]. The clipboard and options travel in an
//! [`EditorContext`] owned by the session, so two sessions can use
//! different clipboards and nothing is looked up globally.

use serde::{Deserialize, Serialize};

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::options::BufferOptions;
use crate::text_buffer::TextBuffer;
use crate::text_view::TextView;
use crate::types::{Cursor, Position};

/// Collaborators shared by the operations of one session.
pub struct EditorContext {
    pub clipboard: Box<dyn Clipboard>,
    pub options: BufferOptions,
}

impl EditorContext {
    pub fn new(clipboard: Box<dyn Clipboard>, options: BufferOptions) -> Self {
        Self { clipboard, options }
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(Box::new(MemoryClipboard::new()), BufferOptions::default())
    }
}

impl std::fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Every engine operation a front end can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditCommand {
    InsertText(String),
    InsertTab,
    DeletePrev,
    DeleteNext,
    DeleteToPrevBorder,
    DeleteToNextBorder,
    MoveLeft(usize),
    MoveRight(usize),
    MoveUp(usize),
    MoveDown(usize),
    MoveToPrevBorder,
    MoveToNextBorder,
    MoveToLineStart,
    MoveToLineEnd,
    MoveToBufferStart,
    MoveToBufferEnd,
    AdjustLeft(usize),
    AdjustRight(usize),
    AdjustUp(usize),
    AdjustDown(usize),
    AdjustToPrevBorder,
    AdjustToNextBorder,
    AdjustToLineStart,
    AdjustToLineEnd,
    AdjustToBufferStart,
    AdjustToBufferEnd,
    SetCursor(Position),
    AddCursor(Cursor),
    AddLineSelection(usize),
    AddWordSelection(Position),
    CloneUp,
    CloneDown,
    SelectAll,
    SelectionClear,
    Copy,
    Cut,
    Paste,
    ConvertTabsToSpaces,
}

#[derive(Debug)]
pub struct EditorSession {
    buffer: TextBuffer,
    context: EditorContext,
}

impl EditorSession {
    pub fn new(context: EditorContext) -> Self {
        let buffer = TextBuffer::with_options(context.options.clone());
        Self { buffer, context }
    }

    /// A session over `text` with a fresh in-memory clipboard.
    pub fn with_text(text: &str) -> Self {
        let mut session = Self::new(EditorContext::default());
        session.buffer.set_text(text);
        session
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    /// Replaces the options of both the context and the buffer.
    pub fn set_options(&mut self, options: BufferOptions) {
        self.buffer.set_options(options.clone());
        self.context.options = options;
    }

    /// Runs one command and returns the signed change in scalars (0 for
    /// commands that only move or create cursors). The cursor set is
    /// consolidated afterwards.
    pub fn execute(&mut self, command: EditCommand) -> isize {
        tracing::trace!(?command, "execute");
        let buf = &mut self.buffer;
        let change = match command {
            // ==================== Text ====================
            EditCommand::InsertText(text) => buf.cursor_insert_text(&TextView::new(&text)),
            EditCommand::InsertTab => buf.cursor_insert_tab(),
            EditCommand::DeletePrev => buf.cursor_delete_prev(),
            EditCommand::DeleteNext => buf.cursor_delete_next(),
            EditCommand::DeleteToPrevBorder => buf.cursor_delete_to_prev_border(),
            EditCommand::DeleteToNextBorder => buf.cursor_delete_to_next_border(),
            EditCommand::ConvertTabsToSpaces => buf.convert_tabs_to_spaces() as isize,

            // ==================== Clipboard ====================
            EditCommand::Copy => {
                buf.copy_to(self.context.clipboard.as_mut());
                0
            }
            EditCommand::Cut => buf.cut_to(self.context.clipboard.as_mut()),
            EditCommand::Paste => buf.paste_from(self.context.clipboard.as_ref()),

            // ==================== Movement ====================
            EditCommand::MoveLeft(n) => {
                buf.cursor_move_left(n);
                0
            }
            EditCommand::MoveRight(n) => {
                buf.cursor_move_right(n);
                0
            }
            EditCommand::MoveUp(n) => {
                buf.cursor_move_up(n);
                0
            }
            EditCommand::MoveDown(n) => {
                buf.cursor_move_down(n);
                0
            }
            EditCommand::MoveToPrevBorder => {
                buf.cursor_move_to_prev_border();
                0
            }
            EditCommand::MoveToNextBorder => {
                buf.cursor_move_to_next_border();
                0
            }
            EditCommand::MoveToLineStart => {
                buf.cursor_move_to_line_start();
                0
            }
            EditCommand::MoveToLineEnd => {
                buf.cursor_move_to_line_end();
                0
            }
            EditCommand::MoveToBufferStart => {
                buf.cursor_move_to_buffer_start();
                0
            }
            EditCommand::MoveToBufferEnd => {
                buf.cursor_move_to_buffer_end();
                0
            }
            EditCommand::AdjustLeft(n) => {
                buf.cursor_adjust_left(n);
                0
            }
            EditCommand::AdjustRight(n) => {
                buf.cursor_adjust_right(n);
                0
            }
            EditCommand::AdjustUp(n) => {
                buf.cursor_adjust_up(n);
                0
            }
            EditCommand::AdjustDown(n) => {
                buf.cursor_adjust_down(n);
                0
            }
            EditCommand::AdjustToPrevBorder => {
                buf.cursor_adjust_to_prev_border();
                0
            }
            EditCommand::AdjustToNextBorder => {
                buf.cursor_adjust_to_next_border();
                0
            }
            EditCommand::AdjustToLineStart => {
                buf.cursor_adjust_to_line_start();
                0
            }
            EditCommand::AdjustToLineEnd => {
                buf.cursor_adjust_to_line_end();
                0
            }
            EditCommand::AdjustToBufferStart => {
                buf.cursor_adjust_to_buffer_start();
                0
            }
            EditCommand::AdjustToBufferEnd => {
                buf.cursor_adjust_to_buffer_end();
                0
            }

            // ==================== Cursors ====================
            EditCommand::SetCursor(pos) => {
                buf.set_cursor(pos);
                0
            }
            EditCommand::AddCursor(cursor) => {
                buf.add_cursor(cursor);
                0
            }
            EditCommand::AddLineSelection(line) => {
                buf.add_line_selection(line);
                0
            }
            EditCommand::AddWordSelection(pos) => {
                buf.add_word_selection(pos);
                0
            }
            EditCommand::CloneUp => {
                buf.cursor_clone_up();
                0
            }
            EditCommand::CloneDown => {
                buf.cursor_clone_down();
                0
            }
            EditCommand::SelectAll => {
                buf.select_all();
                0
            }
            EditCommand::SelectionClear => {
                buf.selection_clear();
                0
            }
        };
        self.buffer.consolidate_cursors();
        change
    }
}
