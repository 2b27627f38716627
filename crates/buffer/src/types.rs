// Chunk: docs/chunks/position_cursor_model - Position, Cursor and dirty line values

use serde::{Deserialize, Serialize};

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// The column counts Unicode scalar values, not bytes or grapheme clusters.
/// A column equal to the line length addresses the end-of-line slot, which
/// stands for the line break that follows the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Row first, then column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// A caret with an optional selection.
///
/// `anchor` is where the selection began, `caret` is where the blinking
/// caret sits and where typing happens. An empty selection has both ends
/// equal. A reversed cursor has its anchor after its caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub anchor: Position,
    pub caret: Position,
}

impl Cursor {
    pub fn new(anchor: Position, caret: Position) -> Self {
        Self { anchor, caret }
    }

    /// A cursor with no selection.
    pub fn caret_at(pos: Position) -> Self {
        Self {
            anchor: pos,
            caret: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.caret
    }

    /// True when the caret precedes the anchor (selection made backwards).
    pub fn is_reversed(&self) -> bool {
        self.anchor > self.caret
    }

    /// The normalized `(start, stop)` range with `start <= stop`.
    pub fn range(&self) -> (Position, Position) {
        if self.is_reversed() {
            (self.caret, self.anchor)
        } else {
            (self.anchor, self.caret)
        }
    }

    pub fn start(&self) -> Position {
        self.range().0
    }

    pub fn stop(&self) -> Position {
        self.range().1
    }

    /// Drops the selection, keeping the caret where it is.
    pub fn collapse(&mut self) {
        self.anchor = self.caret;
    }

    /// Normalized ranges that overlap or share an endpoint.
    pub fn touches(&self, other: &Cursor) -> bool {
        let (a_start, a_stop) = self.range();
        let (b_start, b_stop) = other.range();
        !(b_start > a_stop || a_start > b_stop)
    }

    /// The union of two touching cursors.
    ///
    /// The result is reversed if either input was reversed, so a selection
    /// being grown backwards keeps its caret at the front.
    pub fn union(&self, other: &Cursor) -> Cursor {
        let start = self.start().min(other.start());
        let stop = self.stop().max(other.stop());
        if self.is_reversed() || other.is_reversed() {
            Cursor::new(stop, start)
        } else {
            Cursor::new(start, stop)
        }
    }
}

/// Information about which lines were dirtied by a mutation.
/// Used by the renderer to decide which rows to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirtyLines {
    /// No lines changed (cursor-only movement or a no-op edit).
    None,
    /// A single line changed (insertions and deletions within a line).
    Single(usize),
    /// A range of lines changed [from, to).
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the buffer changed.
    /// Used whenever the number of rows changes.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the starting line of the dirty region, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both.
    ///
    /// Every multi-cursor edit produces one region per cursor; they are
    /// merged so the renderer sees one region per drain.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLineToEnd(a), DirtyLines::FromLineToEnd(b)) => {
                DirtyLines::FromLineToEnd((*a).min(*b))
            }
            (DirtyLines::FromLineToEnd(a), rest) | (rest, DirtyLines::FromLineToEnd(a)) => {
                let b = rest.start_line().unwrap_or(*a);
                DirtyLines::FromLineToEnd((*a).min(b))
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) => {
                if a == b {
                    DirtyLines::Single(*a)
                } else {
                    DirtyLines::Range {
                        from: (*a).min(*b),
                        to: (*a).max(*b) + 1,
                    }
                }
            }

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}
