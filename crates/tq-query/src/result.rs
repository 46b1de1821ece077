//! Query evaluation results.

use tq_document::{Document, LineNo};
use tq_index::LineSet;

/// The outcome of evaluating a query against an index.
///
/// A result names the query it came from, holds the matching line numbers in ascending
/// order, and keeps a handle on the document so the matching text can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Human-readable name of the query (the word, or the query's representation).
    label: String,
    /// Matching line numbers.
    lines: LineSet,
    /// Document the lines refer to.
    document: Document,
}

impl QueryResult {
    /// Creates a result.
    pub fn new(label: impl Into<String>, lines: LineSet, document: Document) -> Self {
        debug_assert!(
            lines.last().is_none_or(|&n| n < document.len()),
            "line numbers must lie within the document"
        );
        Self {
            label: label.into(),
            lines,
            document,
        }
    }

    /// Returns the label of the query that produced this result.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the matching line numbers.
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// Returns the document the result refers to.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the number of matching lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line matched.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over matching lines as `(line number, text)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (LineNo, &str)> + '_ {
        self.lines.iter().map(|&n| (n, &self.document[n]))
    }
}
