// Chunk: docs/chunks/cursor_consolidation - Ordered cursor collection with overlap merging

//! The ordered collection of cursors owned by a buffer.
//!
//! After [`CursorSet::consolidate`] no two cursors' normalized ranges
//! intersect or touch, and cursors are ordered by their normalized start.
//! Consolidation is idempotent.

use crate::types::{Cursor, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSet {
    cursors: Vec<Cursor>,
}

impl CursorSet {
    /// A set with one caret at the origin.
    pub fn new() -> Self {
        Self {
            cursors: vec![Cursor::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    pub fn as_slice(&self) -> &[Cursor] {
        &self.cursors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cursor> {
        self.cursors.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Cursor> {
        self.cursors.get(idx)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Cursor> {
        self.cursors.get_mut(idx)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cursor> {
        self.cursors.iter_mut()
    }

    pub fn first(&self) -> Option<&Cursor> {
        self.cursors.first()
    }

    pub fn last(&self) -> Option<&Cursor> {
        self.cursors.last()
    }

    pub fn clear(&mut self) {
        self.cursors.clear();
    }

    /// Replaces every cursor with a single one.
    pub fn reset_to(&mut self, cursor: Cursor) {
        self.cursors.clear();
        self.cursors.push(cursor);
    }

    /// Inserts `cursor` after every cursor whose caret is not after its
    /// caret, then consolidates.
    pub fn add(&mut self, cursor: Cursor) {
        let idx = self.cursors.partition_point(|c| c.caret <= cursor.caret);
        self.cursors.insert(idx, cursor);
        self.consolidate();
    }

    /// Applies `f` to both endpoints of every cursor.
    pub(crate) fn map_positions(&mut self, mut f: impl FnMut(Position) -> Position) {
        for cursor in &mut self.cursors {
            cursor.anchor = f(cursor.anchor);
            cursor.caret = f(cursor.caret);
        }
    }

    /// Merges every pair of cursors whose normalized ranges overlap or
    /// touch.
    ///
    /// A merged cursor spans the union of its sources and is reversed when
    /// either source was reversed. Returns the number of merges performed.
    pub fn consolidate(&mut self) -> usize {
        if self.cursors.len() < 2 {
            return 0;
        }
        self.cursors.sort_by_key(|c| c.range());

        let before = self.cursors.len();
        let mut merged: Vec<Cursor> = Vec::with_capacity(before);
        for cursor in self.cursors.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.touches(&cursor) => {
                    tracing::trace!(?prev, ?cursor, "merging overlapping cursors");
                    *prev = prev.union(&cursor);
                }
                _ => merged.push(cursor),
            }
        }
        self.cursors = merged;
        before - self.cursors.len()
    }
}

impl Default for CursorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CursorSet {
    type Item = &'a Cursor;
    type IntoIter = std::slice::Iter<'a, Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursors.iter()
    }
}
