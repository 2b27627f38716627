// Chunk: docs/chunks/keyword_lexer - Table-driven lexer for C-like syntaxes

//! A small hand-written lexer for C-like languages.
//!
//! It recognizes identifiers (looked up in a keyword table), numbers,
//! double- and single-quoted strings with escape validation, line comments,
//! an optional preprocessor-comment prefix and block comments. Everything
//! except block comments ends at a line break, so the only state carried
//! between styling pulls is "inside a block comment", which is recovered
//! from the styles already written before the requested range.

use multicaret_buffer::{is_identifier_char, is_space, LineSource, Lexer, Position, StyleId, Styler};
use std::collections::HashMap;

const VALID_ESCAPES: &[char] = &['\\', 'n', 't', 'r', '0', '"', '\''];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLexer {
    keywords: HashMap<String, StyleId>,
    line_comment: Option<String>,
    preprocessor_comment: Option<String>,
    block_comment: Option<(String, String)>,
}

impl Default for KeywordLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordLexer {
    /// A lexer with an empty keyword table, `//` line comments and
    /// `/* */` block comments.
    pub fn new() -> Self {
        Self {
            keywords: HashMap::new(),
            line_comment: Some("//".to_string()),
            preprocessor_comment: None,
            block_comment: Some(("/*".to_string(), "*/".to_string())),
        }
    }

    /// Adds every word in `words` with [`StyleId::KEYWORD`].
    pub fn with_keywords<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        for word in words {
            self.set_keyword_style(word, StyleId::KEYWORD);
        }
        self
    }

    pub fn with_line_comment(mut self, prefix: Option<&str>) -> Self {
        self.line_comment = prefix.map(str::to_string);
        self
    }

    /// Line comments starting with `prefix` are styled as preprocessor
    /// comments. Checked before the plain line-comment prefix.
    pub fn with_preprocessor_comment(mut self, prefix: Option<&str>) -> Self {
        self.preprocessor_comment = prefix.map(str::to_string);
        self
    }

    pub fn with_block_comment(mut self, delimiters: Option<(&str, &str)>) -> Self {
        self.block_comment = delimiters.map(|(open, close)| (open.to_string(), close.to_string()));
        self
    }

    // ==================== Keyword Table ====================

    pub fn set_keyword_style(&mut self, word: impl Into<String>, style: StyleId) {
        self.keywords.insert(word.into(), style);
    }

    pub fn remove_keyword(&mut self, word: &str) -> Option<StyleId> {
        self.keywords.remove(word)
    }

    pub fn clear_keywords(&mut self) {
        self.keywords.clear();
    }

    pub fn keyword_style(&self, word: &str) -> Option<StyleId> {
        self.keywords.get(word).copied()
    }

    // ==================== Resumption ====================

    /// Whether `from` lies inside a block comment opened earlier.
    ///
    /// Finds the run of block-comment scalars ending just before `from`
    /// (line ends and empty rows do not break a run) and replays the
    /// delimiters inside it.
    fn resumes_block_comment(&self, styler: &Styler<'_>, from: Position) -> bool {
        let Some((open, close)) = self.block_comment.as_ref() else {
            return false;
        };
        let first = styler.first_position();

        let mut run_start = None;
        let mut pos = from;
        while pos > first {
            let prev = styler.prev_position(pos, 1);
            if prev == pos {
                break;
            }
            pos = prev;
            if styler.char_in_line(pos.line, pos.col).is_none() {
                continue;
            }
            if styler.style_at(pos) != StyleId::COMMENT_BLOCK {
                break;
            }
            run_start = Some(pos);
        }
        let Some(run_start) = run_start else {
            return false;
        };

        let run: Vec<char> = styler.text(run_start, from).chars().collect();
        let open: Vec<char> = open.chars().collect();
        let close: Vec<char> = close.chars().collect();
        let mut inside = false;
        let mut i = 0;
        while i < run.len() {
            let delimiter = if inside { &close } else { &open };
            if starts_with(&run, i, delimiter) {
                inside = !inside;
                i += delimiter.len().max(1);
            } else {
                i += 1;
            }
        }
        inside
    }

    // ==================== Scanning ====================

    /// One style per scalar of `chars`, `'\n'` separating rows.
    fn lex(&self, chars: &[char], in_block_comment: bool) -> Vec<StyleId> {
        let mut styles = vec![StyleId::DEFAULT; chars.len()];
        let mut i = 0;
        if in_block_comment {
            i = self.block_comment_body(chars, 0, &mut styles);
        }

        while i < chars.len() {
            let c = chars[i];
            if is_space(c) {
                i += 1;
            } else if prefix_len(chars, i, self.preprocessor_comment.as_deref()).is_some() {
                i = fill_to_line_end(chars, i, StyleId::COMMENT_PREPROCESSOR, &mut styles);
            } else if prefix_len(chars, i, self.line_comment.as_deref()).is_some() {
                i = fill_to_line_end(chars, i, StyleId::COMMENT_LINE, &mut styles);
            } else if let Some(open_len) = prefix_len(chars, i, self.block_comment.as_ref().map(|(open, _)| open.as_str())) {
                fill(&mut styles, i, i + open_len, StyleId::COMMENT_BLOCK);
                i = self.block_comment_body(chars, i + open_len, &mut styles);
            } else if c == '"' {
                i = lex_string(
                    chars,
                    i,
                    [
                        StyleId::DOUBLE_QUOTE_STRING,
                        StyleId::DOUBLE_QUOTE_ESCAPE_VALID,
                        StyleId::DOUBLE_QUOTE_ESCAPE_INVALID,
                    ],
                    &mut styles,
                );
            } else if c == '\'' {
                i = lex_string(
                    chars,
                    i,
                    [
                        StyleId::SINGLE_QUOTE_STRING,
                        StyleId::SINGLE_QUOTE_ESCAPE_VALID,
                        StyleId::SINGLE_QUOTE_ESCAPE_INVALID,
                    ],
                    &mut styles,
                );
            } else if c.is_ascii_digit() {
                let stop = number_end(chars, i);
                fill(&mut styles, i, stop, StyleId::NUMBER);
                i = stop;
            } else if is_identifier_char(c) {
                let stop = identifier_end(chars, i);
                let word: String = chars[i..stop].iter().collect();
                if let Some(style) = self.keywords.get(&word) {
                    fill(&mut styles, i, stop, *style);
                }
                i = stop;
            } else {
                i += 1;
            }
        }
        styles
    }

    /// Styles from `i` through the closing delimiter (or to the end of the
    /// text) as block comment and returns the index after it.
    fn block_comment_body(&self, chars: &[char], i: usize, styles: &mut [StyleId]) -> usize {
        let close: Vec<char> = self
            .block_comment
            .as_ref()
            .map(|(_, close)| close.chars().collect())
            .unwrap_or_default();

        let mut j = i;
        let stop = loop {
            if j >= chars.len() {
                break chars.len();
            }
            if !close.is_empty() && starts_with(chars, j, &close) {
                break j + close.len();
            }
            j += 1;
        };
        fill(styles, i, stop, StyleId::COMMENT_BLOCK);
        stop
    }
}

/// Length in scalars of `prefix` if it starts at `i`.
fn prefix_len(chars: &[char], i: usize, prefix: Option<&str>) -> Option<usize> {
    let prefix: Vec<char> = prefix?.chars().collect();
    (!prefix.is_empty() && starts_with(chars, i, &prefix)).then_some(prefix.len())
}

fn starts_with(chars: &[char], i: usize, pattern: &[char]) -> bool {
    chars.get(i..i + pattern.len()) == Some(pattern)
}

fn fill(styles: &mut [StyleId], start: usize, stop: usize, style: StyleId) {
    let end = stop.min(styles.len());
    for slot in &mut styles[start..end] {
        *slot = style;
    }
}

fn fill_to_line_end(chars: &[char], i: usize, style: StyleId, styles: &mut [StyleId]) -> usize {
    let stop = chars[i..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(chars.len(), |offset| i + offset);
    fill(styles, i, stop, style);
    stop
}

/// Scans a quoted literal starting at the quote `chars[i]`. An unterminated
/// literal ends at the line break. `[body, valid escape, invalid escape]`.
fn lex_string(chars: &[char], i: usize, [body, valid, invalid]: [StyleId; 3], styles: &mut [StyleId]) -> usize {
    let quote = chars[i];
    styles[i] = body;
    let mut j = i + 1;
    while j < chars.len() {
        match chars[j] {
            '\n' => break,
            c if c == quote => {
                styles[j] = body;
                return j + 1;
            }
            '\\' => match chars.get(j + 1) {
                Some(&next) if next != '\n' => {
                    let style = if VALID_ESCAPES.contains(&next) { valid } else { invalid };
                    fill(styles, j, j + 2, style);
                    j += 2;
                }
                _ => {
                    styles[j] = invalid;
                    j += 1;
                }
            },
            _ => {
                styles[j] = body;
                j += 1;
            }
        }
    }
    j
}

/// Decimal (with optional fraction) or `0x` hex, plus any identifier
/// suffix such as `u32`.
fn number_end(chars: &[char], i: usize) -> usize {
    let is_hex_prefix = chars[i] == '0'
        && matches!(chars.get(i + 1), Some('x' | 'X'))
        && chars.get(i + 2).is_some_and(|c| c.is_ascii_hexdigit());

    let mut j = if is_hex_prefix {
        let mut j = i + 2;
        while chars.get(j).is_some_and(|c| c.is_ascii_hexdigit()) {
            j += 1;
        }
        j
    } else {
        let mut j = i;
        while chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
            j += 1;
        }
        if chars.get(j) == Some(&'.') && chars.get(j + 1).is_some_and(|c| c.is_ascii_digit()) {
            j += 1;
            while chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
                j += 1;
            }
        }
        j
    };

    while chars.get(j).is_some_and(|&c| is_identifier_char(c)) {
        j += 1;
    }
    j
}

fn identifier_end(chars: &[char], i: usize) -> usize {
    let mut j = i + 1;
    while chars.get(j).is_some_and(|&c| is_identifier_char(c)) {
        j += 1;
    }
    j
}

impl Lexer for KeywordLexer {
    fn style(&mut self, styler: &mut Styler<'_>, from: Position, to: Position) {
        // Whole rows, so only block comments can straddle two pulls. A
        // watermark in the middle of a row may sit inside a token.
        let start = styler.line_start(from.line);
        let stop = styler.line_end(to.line);
        let in_block_comment = self.resumes_block_comment(styler, start);

        let chars: Vec<char> = styler.text(start, stop).chars().collect();
        let styles = self.lex(&chars, in_block_comment);

        styler.start_styling(start);
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
