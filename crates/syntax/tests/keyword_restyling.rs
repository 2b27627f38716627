// Chunk: docs/chunks/keyword_lexer - Property tests for incremental restyling

//! Restyling a buffer piecemeal, from wherever the watermark was left,
//! must agree with styling the same text in one pass.

use multicaret_buffer::{Position, TextBuffer, TextView};
use multicaret_syntax::KeywordLexer;
use proptest::prelude::*;

fn lexer() -> KeywordLexer {
    KeywordLexer::new()
        .with_keywords(["if", "fi"])
        .with_preprocessor_comment(Some("//!"))
}

// Fragments that open and close tokens, so edits split them often
fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(vec!["a", "i", "f", "x", "1", "0x", ".", " "]),
            2 => prop::sample::select(vec!["if", "/*", "*/", "//", "//!", "\"", "'", "\\"]),
            1 => Just("\n"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn position_strategy() -> impl Strategy<Value = Position> {
    (0usize..8, 0usize..16).prop_map(|(line, col)| Position::new(line, col))
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(Position, String),
    DeletePrev(Position),
    Invalidate(Position),
    Ensure(Position),
}

fn operation_strategy() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(
        prop_oneof![
            (position_strategy(), source_text()).prop_map(|(pos, text)| Operation::Insert(pos, text)),
            position_strategy().prop_map(Operation::DeletePrev),
            position_strategy().prop_map(Operation::Invalidate),
            position_strategy().prop_map(Operation::Ensure),
        ],
        0..20,
    )
}

fn apply(buf: &mut TextBuffer, op: &Operation) {
    match op {
        Operation::Insert(pos, text) => {
            buf.set_cursor(*pos);
            buf.cursor_insert_text(&TextView::new(text));
        }
        Operation::DeletePrev(pos) => {
            buf.set_cursor(*pos);
            buf.cursor_delete_prev();
        }
        Operation::Invalidate(pos) => buf.invalidate_styles_from(*pos),
        Operation::Ensure(pos) => buf.ensure_styled(*pos),
    }
}

fn fully_styled(text: &str) -> TextBuffer {
    let mut buf = TextBuffer::from_str(text);
    buf.set_lexer(Box::new(lexer()));
    let last = buf.line_count() - 1;
    buf.ensure_line_styled(last);
    buf
}

#[test]
fn test_restyle_from_every_position_matches_full_pass() {
    let text = "if \"a\\\"b\" /* x\nfi */ 0x1F // if\n'c' if";
    let reference = fully_styled(text);

    for line in 0..reference.line_count() {
        for col in 0..=reference.line_len(line) {
            let mut buf = fully_styled(text);
            buf.invalidate_styles_from(Position::new(line, col));
            let last = buf.line_count() - 1;
            buf.ensure_line_styled(last);
            for row in 0..buf.line_count() {
                assert_eq!(
                    buf.line_styles(row),
                    reference.line_styles(row),
                    "row {} after invalidating from ({}, {})",
                    row,
                    line,
                    col
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_partial_restyling_matches_full_pass(
        text in source_text(),
        ops in operation_strategy()
    ) {
        let mut buf = TextBuffer::from_str(&text);
        buf.set_lexer(Box::new(lexer()));
        for op in &ops {
            apply(&mut buf, op);
        }
        let last = buf.line_count() - 1;
        buf.ensure_line_styled(last);

        let fresh = fully_styled(&buf.content());
        for line in 0..buf.line_count() {
            prop_assert_eq!(buf.line_styles(line), fresh.line_styles(line), "row {}", line);
        }
    }

    #[test]
    fn prop_row_by_row_matches_full_pass(text in source_text()) {
        let mut buf = TextBuffer::from_str(&text);
        buf.set_lexer(Box::new(lexer()));
        for line in 0..buf.line_count() {
            buf.ensure_line_styled(line);
        }

        let fresh = fully_styled(&text);
        for line in 0..buf.line_count() {
            prop_assert_eq!(buf.line_styles(line), fresh.line_styles(line), "row {}", line);
        }
    }
}
