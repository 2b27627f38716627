// Chunk: docs/chunks/border_navigation - Character classes used by word borders

//! Character classification shared by the text view splitter and the
//! border arithmetic.

/// Returns true for every scalar that ends a line.
///
/// CR LF pairs are folded into one break by [`crate::TextView`]; this
/// predicate only looks at single scalars.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Letters, digits (in any script) and underscore.
pub fn is_identifier_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// The three classes a word border separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Space,
    Identifier,
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        if is_space(ch) {
            CharClass::Space
        } else if is_identifier_char(ch) {
            CharClass::Identifier
        } else {
            CharClass::Other
        }
    }
}
