// Chunk: docs/chunks/treesitter_lexer - Edit computation between source snapshots

//! Edit translation between buffer coordinates and tree-sitter byte offsets.
//!
//! The lexer only ever sees successive snapshots of the document, never the
//! individual edits. Before re-parsing it diffs the old snapshot against the
//! new one (common prefix and suffix) and reports the changed middle as a
//! single `InputEdit`, which is enough for tree-sitter to reuse the
//! unchanged parts of the tree.

/// An edit event in tree-sitter format.
///
/// Rows are 0-indexed; columns are byte offsets within the row, as
/// tree-sitter expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditEvent {
    pub start_byte: usize,
    pub old_end_byte: usize,
    pub new_end_byte: usize,
    pub start_row: usize,
    pub start_col: usize,
    pub old_end_row: usize,
    pub old_end_col: usize,
    pub new_end_row: usize,
    pub new_end_col: usize,
}

impl EditEvent {
    /// Converts this edit event to a tree-sitter `InputEdit`.
    pub fn to_input_edit(&self) -> tree_sitter::InputEdit {
        tree_sitter::InputEdit {
            start_byte: self.start_byte,
            old_end_byte: self.old_end_byte,
            new_end_byte: self.new_end_byte,
            start_position: tree_sitter::Point {
                row: self.start_row,
                column: self.start_col,
            },
            old_end_position: tree_sitter::Point {
                row: self.old_end_row,
                column: self.old_end_col,
            },
            new_end_position: tree_sitter::Point {
                row: self.new_end_row,
                column: self.new_end_col,
            },
        }
    }
}

/// Calculates the byte offset for a (row, col) position in a source string.
///
/// Column is in scalars, not bytes. Positions past the end of a row stop at
/// the row's `'\n'`; positions past the end of the source return its length.
///
/// # Example
///
/// ```
/// use multicaret_syntax::position_to_byte_offset;
///
/// let source = "héllo\nworld";
/// assert_eq!(position_to_byte_offset(source, 0, 2), 3);
/// assert_eq!(position_to_byte_offset(source, 1, 0), 7);
/// ```
pub fn position_to_byte_offset(source: &str, row: usize, col: usize) -> usize {
    let mut line_start = 0;
    for _ in 0..row {
        match source[line_start..].find('\n') {
            Some(idx) => line_start += idx + 1,
            None => return source.len(),
        }
    }

    for (char_col, (idx, c)) in source[line_start..].char_indices().enumerate() {
        if c == '\n' || char_col >= col {
            return line_start + idx;
        }
    }
    source.len()
}

/// The tree-sitter point (row, byte column) of a byte offset.
fn byte_to_point(source: &str, byte_offset: usize) -> (usize, usize) {
    let byte_offset = byte_offset.min(source.len());
    let before = &source.as_bytes()[..byte_offset];
    let row = before.iter().filter(|&&b| b == b'\n').count();
    let col = match before.iter().rposition(|&b| b == b'\n') {
        Some(newline) => byte_offset - newline - 1,
        None => byte_offset,
    };
    (row, col)
}

/// Describes how `new` differs from `old` as one replaced byte range.
///
/// Returns `None` when the snapshots are identical. The range is trimmed to
/// scalar boundaries, so it is valid in both strings.
pub fn compute_edit(old: &str, new: &str) -> Option<EditEvent> {
    if old == new {
        return None;
    }

    let prefix: usize = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();

    let max_suffix = old.len().min(new.len()) - prefix;
    let suffix: usize = old[prefix..]
        .chars()
        .rev()
        .zip(new[prefix..].chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .scan(0, |total, len| {
            *total += len;
            Some(*total)
        })
        .take_while(|&total| total <= max_suffix)
        .last()
        .unwrap_or(0);

    let old_end_byte = old.len() - suffix;
    let new_end_byte = new.len() - suffix;
    let (start_row, start_col) = byte_to_point(old, prefix);
    let (old_end_row, old_end_col) = byte_to_point(old, old_end_byte);
    let (new_end_row, new_end_col) = byte_to_point(new, new_end_byte);

    Some(EditEvent {
        start_byte: prefix,
        old_end_byte,
        new_end_byte,
        start_row,
        start_col,
        old_end_row,
        old_end_col,
        new_end_row,
        new_end_col,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== position_to_byte_offset tests ====================

    #[test]
    fn test_position_at_start() {
        let source = "hello\nworld";
        assert_eq!(position_to_byte_offset(source, 0, 0), 0);
    }

    #[test]
    fn test_position_at_start_of_second_line() {
        let source = "hello\nworld";
        assert_eq!(position_to_byte_offset(source, 1, 0), 6);
        assert_eq!(position_to_byte_offset(source, 1, 3), 9);
    }

    #[test]
    fn test_position_with_multibyte_char() {
        let source = "he\u{1F600}llo"; // emoji is 4 bytes
        assert_eq!(position_to_byte_offset(source, 0, 2), 2);
        assert_eq!(position_to_byte_offset(source, 0, 3), 6);
    }

    #[test]
    fn test_position_past_end_of_row_stops_at_break() {
        let source = "ab\ncd";
        assert_eq!(position_to_byte_offset(source, 0, 9), 2);
    }

    #[test]
    fn test_position_past_end() {
        let source = "hello";
        assert_eq!(position_to_byte_offset(source, 0, 100), source.len());
        assert_eq!(position_to_byte_offset(source, 10, 0), source.len());
    }

    // ==================== compute_edit tests ====================

    #[test]
    fn test_identical_sources_have_no_edit() {
        assert_eq!(compute_edit("abc", "abc"), None);
    }

    #[test]
    fn test_insert_single_char() {
        let event = compute_edit("hello", "heXllo").unwrap();
        assert_eq!(event.start_byte, 2);
        assert_eq!(event.old_end_byte, 2);
        assert_eq!(event.new_end_byte, 3);
        assert_eq!((event.new_end_row, event.new_end_col), (0, 3));
    }

    #[test]
    fn test_insert_newline() {
        let event = compute_edit("hello", "he\nllo").unwrap();
        assert_eq!(event.start_byte, 2);
        assert_eq!(event.new_end_byte, 3);
        assert_eq!((event.new_end_row, event.new_end_col), (1, 0));
    }

    #[test]
    fn test_delete_across_lines() {
        let event = compute_edit("hello\nworld", "helrld").unwrap();
        assert_eq!(event.start_byte, 3);
        assert_eq!(event.old_end_byte, 8);
        assert_eq!(event.new_end_byte, 3);
        assert_eq!((event.old_end_row, event.old_end_col), (1, 2));
    }

    #[test]
    fn test_repeated_text_does_not_overlap_prefix_and_suffix() {
        // "aa" -> "aaa": the prefix takes both old scalars, so the suffix
        // must not also claim them
        let event = compute_edit("aa", "aaa").unwrap();
        assert_eq!(event.start_byte, 2);
        assert_eq!(event.old_end_byte, 2);
        assert_eq!(event.new_end_byte, 3);
    }

    #[test]
    fn test_multibyte_columns_are_bytes() {
        let event = compute_edit("é = 1", "é = 12").unwrap();
        assert_eq!(event.start_byte, 6);
        assert_eq!(event.start_col, 6);
    }

    #[test]
    fn test_to_input_edit() {
        let event = compute_edit("ab\ncd", "ab\ncXd").unwrap();
        let input_edit = event.to_input_edit();
        assert_eq!(input_edit.start_byte, 4);
        assert_eq!(input_edit.start_position.row, 1);
        assert_eq!(input_edit.start_position.column, 1);
        assert_eq!(input_edit.new_end_position.column, 2);
        assert_eq!(input_edit.old_end_position.column, 1);
    }
}
