// Chunk: docs/chunks/treesitter_lexer - Capture name to style id mapping

//! Mapping from tree-sitter capture names to buffer style ids.
//!
//! Capture names are dotted (`function.method`, `comment.documentation`).
//! A lookup tries the exact name first, then drops trailing segments one at
//! a time, so a mapping for `comment` also covers `comment.block.doc`.

use multicaret_buffer::StyleId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureStyles {
    styles: HashMap<String, StyleId>,
}

impl CaptureStyles {
    /// An empty mapping; every capture resolves to nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the common highlight-query capture names onto the predefined
    /// style ids.
    pub fn standard() -> Self {
        let mut styles = Self::new();
        styles.insert("keyword", StyleId::KEYWORD);
        styles.insert("number", StyleId::NUMBER);
        styles.insert("constant.numeric", StyleId::NUMBER);
        styles.insert("comment", StyleId::COMMENT_LINE);
        styles.insert("comment.block", StyleId::COMMENT_BLOCK);
        styles.insert("comment.documentation", StyleId::COMMENT_BLOCK);
        styles.insert("preproc", StyleId::COMMENT_PREPROCESSOR);
        styles.insert("keyword.directive", StyleId::COMMENT_PREPROCESSOR);
        styles.insert("string", StyleId::DOUBLE_QUOTE_STRING);
        styles.insert("escape", StyleId::DOUBLE_QUOTE_ESCAPE_VALID);
        styles.insert("string.escape", StyleId::DOUBLE_QUOTE_ESCAPE_VALID);
        styles.insert("character", StyleId::SINGLE_QUOTE_STRING);
        styles
    }

    /// Maps `capture` (and, through prefix fallback, its sub-captures) to
    /// `style`, replacing any previous mapping for the same name.
    pub fn insert(&mut self, capture: impl Into<String>, style: StyleId) {
        self.styles.insert(capture.into(), style);
    }

    pub fn remove(&mut self, capture: &str) -> Option<StyleId> {
        self.styles.remove(capture)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolves a capture name, falling back to ever shorter dotted
    /// prefixes.
    pub fn style_for_capture(&self, capture: &str) -> Option<StyleId> {
        let mut name = capture;
        loop {
            if let Some(style) = self.styles.get(name) {
                return Some(*style);
            }
            let (prefix, _) = name.rsplit_once('.')?;
            name = prefix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let styles = CaptureStyles::standard();
        assert_eq!(styles.style_for_capture("keyword"), Some(StyleId::KEYWORD));
        assert_eq!(
            styles.style_for_capture("comment.documentation"),
            Some(StyleId::COMMENT_BLOCK)
        );
    }

    #[test]
    fn test_prefix_fallback() {
        let styles = CaptureStyles::standard();
        assert_eq!(
            styles.style_for_capture("keyword.control.return"),
            Some(StyleId::KEYWORD)
        );
        assert_eq!(
            styles.style_for_capture("string.special.path"),
            Some(StyleId::DOUBLE_QUOTE_STRING)
        );
    }

    #[test]
    fn test_unknown_capture() {
        let styles = CaptureStyles::standard();
        assert_eq!(styles.style_for_capture("punctuation.bracket"), None);
        assert_eq!(CaptureStyles::new().style_for_capture("keyword"), None);
    }

    #[test]
    fn test_custom_style_overrides() {
        let mut styles = CaptureStyles::standard();
        let function = StyleId::custom(0);
        styles.insert("function", function);
        styles.insert("keyword", StyleId::custom(1));
        assert_eq!(styles.style_for_capture("function.method"), Some(function));
        assert_eq!(styles.style_for_capture("keyword"), Some(StyleId::custom(1)));
        assert_eq!(styles.remove("function"), Some(function));
        assert_eq!(styles.style_for_capture("function.method"), None);
    }
}
