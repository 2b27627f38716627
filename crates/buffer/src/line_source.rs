// Chunk: docs/chunks/border_navigation - Position stepping and word border arithmetic

//! Navigation over anything made of lines.
//!
//! [`LineSource`] needs three primitives (line count, line length and
//! scalar lookup) and provides the rest: position stepping, clamping, word
//! border detection and text extraction. The buffer's line store and the
//! borrowed [`crate::TextView`] both implement it, so border arithmetic
//! works identically on stored and incoming text.
//!
//! Every provided method clamps its input first. Out-of-range rows snap to
//! the last row and out-of-range columns snap to the end of their line.

use crate::char_class::CharClass;
use crate::types::Position;

pub trait LineSource {
    /// Number of rows; implementations always report at least 1.
    fn line_count(&self) -> usize;

    /// Scalars in `line`, excluding the line break. 0 for rows out of range.
    fn line_len(&self, line: usize) -> usize;

    /// The scalar at `(line, col)`, `None` at or past the end of the line.
    fn char_in_line(&self, line: usize, col: usize) -> Option<char>;

    fn first_position(&self) -> Position {
        Position::new(0, 0)
    }

    fn last_position(&self) -> Position {
        let line = self.line_count().saturating_sub(1);
        Position::new(line, self.line_len(line))
    }

    fn line_start(&self, line: usize) -> Position {
        let line = line.min(self.line_count().saturating_sub(1));
        Position::new(line, 0)
    }

    fn line_end(&self, line: usize) -> Position {
        let line = line.min(self.line_count().saturating_sub(1));
        Position::new(line, self.line_len(line))
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        Position::new(line, pos.col.min(self.line_len(line)))
    }

    /// The scalar at `pos`; the end-of-line slot reads as `'\n'`.
    fn character_at(&self, pos: Position) -> char {
        let pos = self.clamp_position(pos);
        self.char_in_line(pos.line, pos.col).unwrap_or('\n')
    }

    /// Steps back `count` units. A line break is one unit. Saturates at the
    /// first position.
    fn prev_position(&self, pos: Position, count: usize) -> Position {
        let mut pos = self.clamp_position(pos);
        for _ in 0..count {
            if pos.col > 0 {
                pos.col -= 1;
            } else if pos.line > 0 {
                pos.line -= 1;
                pos.col = self.line_len(pos.line);
            } else {
                break;
            }
        }
        pos
    }

    /// Steps forward `count` units. Saturates at the last position.
    fn next_position(&self, pos: Position, count: usize) -> Position {
        let mut pos = self.clamp_position(pos);
        let last_line = self.line_count().saturating_sub(1);
        for _ in 0..count {
            if pos.col < self.line_len(pos.line) {
                pos.col += 1;
            } else if pos.line < last_line {
                pos.line += 1;
                pos.col = 0;
            } else {
                break;
            }
        }
        pos
    }

    /// True at column 0, at end of line, and between two scalars of
    /// different [`CharClass`].
    fn is_on_border(&self, pos: Position) -> bool {
        let pos = self.clamp_position(pos);
        if pos.col == 0 || pos.col == self.line_len(pos.line) {
            return true;
        }
        match (
            self.char_in_line(pos.line, pos.col - 1),
            self.char_in_line(pos.line, pos.col),
        ) {
            (Some(before), Some(after)) => CharClass::of(before) != CharClass::of(after),
            _ => true,
        }
    }

    /// Units to step back to reach the previous border. Always at least 1
    /// unless `pos` is the first position.
    fn distance_to_prev_border(&self, pos: Position) -> usize {
        let mut pos = self.clamp_position(pos);
        let mut distance = 0;
        loop {
            let prev = self.prev_position(pos, 1);
            if prev == pos {
                break;
            }
            pos = prev;
            distance += 1;
            if self.is_on_border(pos) {
                break;
            }
        }
        distance
    }

    /// Units to step forward to reach the next border. Always at least 1
    /// unless `pos` is the last position.
    fn distance_to_next_border(&self, pos: Position) -> usize {
        let mut pos = self.clamp_position(pos);
        let mut distance = 0;
        loop {
            let next = self.next_position(pos, 1);
            if next == pos {
                break;
            }
            pos = next;
            distance += 1;
            if self.is_on_border(pos) {
                break;
            }
        }
        distance
    }

    /// Units between two positions, counting each crossed line break once.
    /// Argument order does not matter.
    fn text_size(&self, start: Position, stop: Position) -> usize {
        let (start, stop) = ordered(self.clamp_position(start), self.clamp_position(stop));
        if start.line == stop.line {
            return stop.col - start.col;
        }
        let mut size = self.line_len(start.line) - start.col + 1;
        for line in start.line + 1..stop.line {
            size += self.line_len(line) + 1;
        }
        size + stop.col
    }

    /// The text between two positions with rows joined by `'\n'`.
    fn text(&self, start: Position, stop: Position) -> String {
        let (start, stop) = ordered(self.clamp_position(start), self.clamp_position(stop));
        let mut out = String::new();
        let mut pos = start;
        while pos < stop {
            let end_col = if pos.line == stop.line {
                stop.col
            } else {
                self.line_len(pos.line)
            };
            out.extend((pos.col..end_col).filter_map(|col| self.char_in_line(pos.line, col)));
            if pos.line == stop.line {
                break;
            }
            out.push('\n');
            pos = Position::new(pos.line + 1, 0);
        }
        out
    }

    fn maximum_line_length(&self) -> usize {
        (0..self.line_count())
            .map(|line| self.line_len(line))
            .max()
            .unwrap_or(0)
    }
}

pub(crate) fn ordered(a: Position, b: Position) -> (Position, Position) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
