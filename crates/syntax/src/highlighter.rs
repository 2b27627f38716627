// Chunk: docs/chunks/treesitter_lexer - Tree-sitter backed lexer

//! A [`Lexer`] backed by a tree-sitter grammar and highlight query.
//!
//! The lexer owns a parser, the last parse tree and a snapshot of the
//! source it was parsed from. Each styling pull re-reads the document
//! through the [`Styler`], diffs it against the snapshot and re-parses
//! incrementally, then runs the highlight query over the byte range being
//! styled with `QueryCursor::set_byte_range`.
//!
//! Overlapping captures resolve per byte: the narrowest capture wins, and
//! among captures of equal extent the one the query yields first wins.
//! Captures whose names have no style in the [`CaptureStyles`] leave their
//! bytes to any other capture, or to the default style.

use crate::capture_styles::CaptureStyles;
use crate::edit::{compute_edit, position_to_byte_offset};
use crate::error::SyntaxError;
use multicaret_buffer::{LineSource, Lexer, Position, StyleId, Styler};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor, Tree};

/// A grammar plus the highlight query to run against it.
pub struct LanguageConfig {
    pub language: Language,
    /// The highlights query (tree-sitter query syntax)
    pub highlights_query: &'static str,
}

impl LanguageConfig {
    pub fn new(language: Language, highlights_query: &'static str) -> Self {
        Self {
            language,
            highlights_query,
        }
    }
}

/// A capture entry: (start_byte, end_byte, style).
type CaptureEntry = (usize, usize, StyleId);

pub struct TreeSitterLexer {
    parser: Parser,
    tree: Option<Tree>,
    query: Query,
    /// Style per query capture index, resolved once at construction.
    capture_styles: Vec<Option<StyleId>>,
    /// The document as of the last parse, rows joined by `'\n'`.
    source: String,
}

impl TreeSitterLexer {
    /// Builds a lexer for `config`, resolving every capture of its query
    /// through `styles`.
    pub fn new(config: &LanguageConfig, styles: &CaptureStyles) -> Result<Self, SyntaxError> {
        let mut parser = Parser::new();
        parser.set_language(&config.language)?;
        let query = Query::new(&config.language, config.highlights_query)?;

        let tree = parser.parse("", None).ok_or(SyntaxError::Parse)?;

        let capture_styles = query
            .capture_names()
            .iter()
            .map(|name| styles.style_for_capture(name))
            .collect();

        Ok(Self {
            parser,
            tree: Some(tree),
            query,
            capture_styles,
            source: String::new(),
        })
    }

    /// The source snapshot of the last parse.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// Brings the tree up to date with `new_source`.
    fn sync(&mut self, new_source: String) {
        let edit = compute_edit(&self.source, &new_source);
        if edit.is_none() && self.tree.is_some() {
            return;
        }
        if let (Some(tree), Some(edit)) = (self.tree.as_mut(), edit) {
            tree.edit(&edit.to_input_edit());
        }

        tracing::debug!(bytes = new_source.len(), "reparsing");
        self.tree = self.parser.parse(&new_source, self.tree.as_ref());
        if self.tree.is_none() {
            tracing::warn!("tree-sitter parse failed; styling as default");
        }
        self.source = new_source;
    }

    /// Collects the styled captures overlapping `[start_byte, end_byte)`.
    fn collect_captures(&self, start_byte: usize, end_byte: usize) -> Vec<CaptureEntry> {
        let Some(tree) = self.tree.as_ref() else {
            return Vec::new();
        };

        let mut cursor = QueryCursor::new();
        cursor.set_byte_range(start_byte..end_byte);

        let mut captures = Vec::new();
        let mut captures_iter = cursor.captures(&self.query, tree.root_node(), self.source.as_bytes());
        while let Some((mat, capture_idx)) = captures_iter.next() {
            let capture = &mat.captures[*capture_idx];
            let style = self
                .capture_styles
                .get(capture.index as usize)
                .copied()
                .flatten();
            if let Some(style) = style {
                let node = capture.node;
                captures.push((node.start_byte(), node.end_byte(), style));
            }
        }
        captures
    }

    /// One style per scalar of `source[start_byte..end_byte]`.
    fn styles_for_range(&self, start_byte: usize, end_byte: usize) -> Vec<StyleId> {
        let captures = self.collect_captures(start_byte, end_byte);

        // (style, extent of the capture that set it) per byte
        let mut byte_styles: Vec<Option<(StyleId, usize)>> = vec![None; end_byte - start_byte];
        for (cap_start, cap_end, style) in captures {
            let extent = cap_end - cap_start;
            let from = cap_start.max(start_byte) - start_byte;
            let to = cap_end.min(end_byte).saturating_sub(start_byte);
            for slot in byte_styles.iter_mut().take(to).skip(from) {
                let narrower = match slot {
                    Some((_, current)) => extent < *current,
                    None => true,
                };
                if narrower {
                    *slot = Some((style, extent));
                }
            }
        }

        self.source[start_byte..end_byte]
            .char_indices()
            .map(|(idx, _)| {
                byte_styles[idx]
                    .map(|(style, _)| style)
                    .unwrap_or(StyleId::DEFAULT)
            })
            .collect()
    }
}

impl Lexer for TreeSitterLexer {
    fn style(&mut self, styler: &mut Styler<'_>, from: Position, to: Position) {
        let first = styler.first_position();
        let last = styler.last_position();
        self.sync(styler.text(first, last));

        // Whole rows, so no capture is cut in half
        let stop = styler.line_end(to.line);
        let start_byte = position_to_byte_offset(&self.source, from.line, from.col);
        let end_byte = position_to_byte_offset(&self.source, stop.line, stop.col).max(start_byte);

        let styles = self.styles_for_range(start_byte, end_byte);

        styler.start_styling(from);
        let mut runs = styles.into_iter().peekable();
        while let Some(style) = runs.next() {
            let mut count = 1;
            while runs.next_if_eq(&style).is_some() {
                count += 1;
            }
            styler.set_style(count, style);
        }
    }
}
