//! Ordered sets of line numbers.

use std::{fmt, ops::Deref, slice, sync::Arc};

use tq_document::LineNo;

/// An immutable set of line numbers, sorted ascending with no duplicates.
///
/// The backing storage is shared, so cloning a set (for instance when a word lookup hands out
/// the index's own posting list) never copies the line numbers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineSet {
    /// Sorted, duplicate-free line numbers.
    lines: Arc<[LineNo]>,
}

impl LineSet {
    /// Returns the empty set.
    pub fn empty() -> Self {
        Self {
            lines: Vec::new().into(),
        }
    }

    /// Wraps a vector that is already sorted ascending and free of duplicates.
    ///
    /// Callers producing line numbers by an ascending scan or an ordered merge already hold
    /// this invariant; it is checked in debug builds only.
    pub fn from_sorted_unique(lines: Vec<LineNo>) -> Self {
        debug_assert!(
            lines.windows(2).all(|w| w[0] < w[1]),
            "line numbers must be strictly ascending"
        );
        Self {
            lines: lines.into(),
        }
    }

    /// Returns the number of line numbers in the set.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if `line` is a member of the set.
    pub fn contains(&self, line: LineNo) -> bool {
        self.lines.binary_search(&line).is_ok()
    }

    /// Iterates over the line numbers in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, LineNo> {
        self.lines.iter()
    }

    /// Returns the line numbers as a sorted slice.
    pub fn as_slice(&self) -> &[LineNo] {
        &self.lines
    }
}

impl Default for LineSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for LineSet {
    type Target = [LineNo];

    fn deref(&self) -> &[LineNo] {
        &self.lines
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.lines.iter()).finish()
    }
}

/// Collects arbitrary line numbers, sorting and deduplicating them.
impl FromIterator<LineNo> for LineSet {
    fn from_iter<T: IntoIterator<Item = LineNo>>(iter: T) -> Self {
        let mut lines: Vec<LineNo> = iter.into_iter().collect();
        lines.sort_unstable();
        lines.dedup();
        Self::from_sorted_unique(lines)
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a LineNo;
    type IntoIter = slice::Iter<'a, LineNo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
