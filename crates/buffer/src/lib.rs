// Chunk: docs/chunks/multi_cursor_engine - Multi-cursor insert, replace and delete
// Chunk: docs/chunks/buffer_view_trait - BufferView trait and supporting types

//! multicaret-buffer: the editing core of the multicaret editor.
//!
//! This crate provides a line-oriented text buffer with any number of
//! cursors, a parallel per-scalar style id array and lazy styling driven by
//! a pluggable lexer.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Multi-cursor insertion, replacement and deletion with position
//!   shifting across all cursors
//! - Cursor consolidation (overlapping or touching selections merge)
//! - Word-border and tab-aware navigation
//! - An incremental styling watermark pulled forward by a [`Lexer`]
//! - Dirty line tracking for renderers
//!
//! Incoming text is always wrapped in a [`TextView`], a borrowed line-split
//! view, whether it is a typed character, a pasted block or a whole file.
//!
//! # Example
//!
//! ```
//! use multicaret_buffer::{Cursor, Position, TextBuffer, TextView};
//!
//! let mut buffer = TextBuffer::from_str("let a = 1;\nlet b = 2;");
//! buffer.set_cursor(Position::new(0, 4));
//! buffer.add_cursor(Cursor::caret_at(Position::new(1, 4)));
//!
//! buffer.cursor_adjust_right(1);
//! buffer.cursor_insert_text(&TextView::new("x"));
//!
//! assert_eq!(buffer.content(), "let x = 1;\nlet x = 2;");
//! assert_eq!(buffer.cursors().len(), 2);
//! ```

mod buffer_view;
mod char_class;
mod clipboard;
mod cursor_set;
mod edit;
mod line_source;
mod line_store;
mod options;
mod session;
mod style;
mod styling;
pub mod tabs;
mod text_buffer;
mod text_view;
mod types;

pub use buffer_view::{BufferView, Span, StyledLine};
pub use char_class::{is_identifier_char, is_line_break, is_space, CharClass};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use cursor_set::CursorSet;
pub use line_source::LineSource;
pub use line_store::LineStore;
pub use options::BufferOptions;
pub use session::{EditCommand, EditorContext, EditorSession};
pub use style::StyleId;
pub use styling::{Lexer, Styler};
pub use text_buffer::TextBuffer;
pub use text_view::TextView;
pub use types::{Cursor, DirtyLines, Position};
