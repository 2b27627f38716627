// Chunk: docs/chunks/style_watermark - Opaque style ids stored per scalar

use serde::{Deserialize, Serialize};

/// Opaque style identifier stored alongside every scalar.
///
/// The buffer never interprets ids beyond treating [`StyleId::DEFAULT`] as
/// "unstyled". The predefined ids give lexers a shared vocabulary; ids
/// above [`StyleId::LAST_PREDEFINED`] are free for lexer-specific use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleId(pub u16);

impl StyleId {
    pub const DEFAULT: StyleId = StyleId(0);
    pub const KEYWORD: StyleId = StyleId(1);
    pub const NUMBER: StyleId = StyleId(2);
    pub const COMMENT_LINE: StyleId = StyleId(3);
    pub const COMMENT_BLOCK: StyleId = StyleId(4);
    pub const COMMENT_PREPROCESSOR: StyleId = StyleId(5);
    pub const DOUBLE_QUOTE_STRING: StyleId = StyleId(6);
    pub const DOUBLE_QUOTE_ESCAPE_VALID: StyleId = StyleId(7);
    pub const DOUBLE_QUOTE_ESCAPE_INVALID: StyleId = StyleId(8);
    pub const SINGLE_QUOTE_STRING: StyleId = StyleId(9);
    pub const SINGLE_QUOTE_ESCAPE_VALID: StyleId = StyleId(10);
    pub const SINGLE_QUOTE_ESCAPE_INVALID: StyleId = StyleId(11);
    pub const LAST_PREDEFINED: StyleId = StyleId(12);

    /// The first id a lexer may claim for its own styles.
    pub const fn custom(offset: u16) -> StyleId {
        StyleId(Self::LAST_PREDEFINED.0 + 1 + offset)
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}
