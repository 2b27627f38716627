// Chunk: docs/chunks/treesitter_lexer - Tree-sitter backed lexer
// Chunk: docs/chunks/keyword_lexer - Table-driven lexer for C-like syntaxes

//! multicaret-syntax: lexers for the multicaret styling watermark.
//!
//! Both lexers implement [`multicaret_buffer::Lexer`] and are installed with
//! `TextBuffer::set_lexer`. The buffer pulls them forward lazily, one range
//! at a time, as styles are requested.
//!
//! # Overview
//!
//! - [`TreeSitterLexer`]: parses the document with a tree-sitter grammar,
//!   re-parsing incrementally between pulls, and maps highlight-query
//!   captures to style ids through [`CaptureStyles`].
//!
//! - [`KeywordLexer`]: a hand-written scanner for C-like syntaxes with a
//!   configurable keyword table and comment delimiters.
//!
//! # Example
//!
//! ```
//! use multicaret_buffer::{StyleId, TextBuffer, Position};
//! use multicaret_syntax::KeywordLexer;
//!
//! let mut buffer = TextBuffer::from_str("if x // done");
//! buffer.set_lexer(Box::new(KeywordLexer::new().with_keywords(["if"])));
//! buffer.ensure_line_styled(0);
//!
//! assert_eq!(buffer.style_at(Position::new(0, 0)), StyleId::KEYWORD);
//! assert_eq!(buffer.style_at(Position::new(0, 5)), StyleId::COMMENT_LINE);
//! ```

mod capture_styles;
mod edit;
mod error;
mod highlighter;
mod keyword;

pub use capture_styles::CaptureStyles;
pub use edit::{compute_edit, position_to_byte_offset, EditEvent};
pub use error::SyntaxError;
pub use highlighter::{LanguageConfig, TreeSitterLexer};
pub use keyword::KeywordLexer;
