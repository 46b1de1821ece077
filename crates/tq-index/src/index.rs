//! The inverted word index.

use std::collections::{BTreeMap, btree_map};

use serde::Serialize;
use tq_document::{Document, LineNo};
use tracing::debug;

use crate::LineSet;

/// Maps every whitespace-separated word of a document to the lines it occurs on.
///
/// Words are matched exactly: no case folding, no punctuation stripping. Every entry holds at
/// least one line, and the index is never modified after [`TextIndex::build`] returns.
#[derive(Debug, Clone)]
pub struct TextIndex {
    /// The indexed document.
    document: Document,
    /// Word to posting list, ordered by word.
    words: BTreeMap<String, LineSet>,
}

/// Summary counts for an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of lines in the document.
    pub lines: usize,
    /// Number of distinct words.
    pub words: usize,
    /// Total number of (word, line) pairs.
    pub postings: usize,
}

impl TextIndex {
    /// Indexes every line of `document`.
    pub fn build(document: &Document) -> Self {
        let mut postings: BTreeMap<String, Vec<LineNo>> = BTreeMap::new();

        for (n, line) in document.iter().enumerate() {
            for word in line.split_whitespace() {
                let lines = postings.entry(word.to_string()).or_default();
                // Lines are scanned in order, so a repeat can only be the last entry.
                if lines.last() != Some(&n) {
                    lines.push(n);
                }
            }
        }

        let words: BTreeMap<String, LineSet> = postings
            .into_iter()
            .map(|(word, lines)| (word, LineSet::from_sorted_unique(lines)))
            .collect();

        debug!(
            lines = document.len(),
            words = words.len(),
            "built text index"
        );

        Self {
            document: document.clone(),
            words,
        }
    }

    /// Returns the lines containing `word`, or an empty set if the word never occurs.
    pub fn lookup(&self, word: &str) -> LineSet {
        self.words.get(word).cloned().unwrap_or_default()
    }

    /// Returns true if `word` occurs anywhere in the document.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Returns the indexed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Iterates over every word and its lines, ordered by word.
    pub fn words(&self) -> Words<'_> {
        Words {
            inner: self.words.iter(),
        }
    }

    /// Computes summary counts.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lines: self.document.len(),
            words: self.words.len(),
            postings: self.words.values().map(LineSet::len).sum(),
        }
    }
}

/// Iterator over the entries of a [`TextIndex`].
pub struct Words<'a> {
    /// Underlying map iterator.
    inner: btree_map::Iter<'a, String, LineSet>,
}

impl<'a> Iterator for Words<'a> {
    type Item = (&'a str, &'a LineSet);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(word, lines)| (word.as_str(), lines))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Words<'_> {}
