// Chunk: docs/chunks/text_view - Borrowed line-split view over inserted text

//! A borrowed, line-split view over a string.
//!
//! Text entering the buffer (typed, pasted or loaded) is first split into
//! lines so the engine can insert it row by row. The view borrows from the
//! caller's string; nothing is copied until the rows are spliced into the
//! store.

use crate::char_class::is_line_break;
use crate::line_source::LineSource;

/// Lines of `text` split on every line-break scalar.
///
/// CR LF counts as one break. A string with `k` breaks always yields
/// `k + 1` lines, so `"abc\n"` is `["abc", ""]` and `""` is `[""]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextView<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !is_line_break(ch) {
                continue;
            }
            lines.push(&text[line_start..idx]);
            let mut next_start = idx + ch.len_utf8();
            if ch == '\r' {
                if let Some(&(lf_idx, '\n')) = chars.peek() {
                    chars.next();
                    next_start = lf_idx + 1;
                }
            }
            line_start = next_start;
        }
        lines.push(&text[line_start..]);

        Self { lines }
    }

    /// Number of lines; always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&'a str> {
        self.lines.get(idx).copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    /// True for the view of an empty string.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Scalars in the view with one unit per line break.
    pub fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len() - 1
    }
}

impl LineSource for TextView<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    fn char_in_line(&self, line: usize, col: usize) -> Option<char> {
        self.lines.get(line).and_then(|l| l.chars().nth(col))
    }
}
