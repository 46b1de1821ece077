//! Line-oriented document store for tq.
//!
//! A [`Document`] is the immutable, ordered sequence of lines that every other tq structure
//! refers back to. Lines are numbered from zero. Cloning a document is cheap: all clones
//! share the same backing storage, so the index, every query result and the report renderer
//! can hold on to the text without copying it.
//!
//! # Example
//!
//! ```
//! use tq_document::{Document, IterLines};
//!
//! let doc = Document::load(IterLines::new(["fiery shone the roads", "but we had roads"].into_iter()))
//!     .unwrap();
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.line(1), Some("but we had roads"));
//! ```

#![warn(missing_docs)]

mod error;
mod source;

use std::{
    fs::File,
    io::BufReader,
    ops::Index,
    path::Path,
    slice,
    sync::Arc,
};

pub use error::DocumentError;
pub use source::{IterLines, LineSource, ReadLines};

/// Zero-based position of a line within a document.
pub type LineNo = usize;

/// An immutable, shared sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The lines, in source order.
    lines: Arc<[String]>,
}

impl Document {
    /// Consumes a line source until it is exhausted.
    ///
    /// Lines are stored verbatim in the order the source produced them. The first error
    /// reported by the source aborts loading and is returned unchanged.
    pub fn load<S: LineSource>(mut source: S) -> Result<Self, S::Error> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line() {
            lines.push(line?);
        }
        Ok(Self {
            lines: lines.into(),
        })
    }

    /// Reads a document from a file on disk.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let read_error = |source| DocumentError::ReadFile {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        Self::load(ReadLines::new(BufReader::new(file))).map_err(read_error)
    }

    /// Builds a document directly from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the text of line `n`, or `None` past the end of the document.
    pub fn line(&self, n: LineNo) -> Option<&str> {
        self.lines.get(n).map(String::as_str)
    }

    /// Iterates over the lines in order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Returns true if both handles refer to the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }
}

impl Index<LineNo> for Document {
    type Output = str;

    /// Returns the text of line `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a line of this document. Line numbers handed out by the index
    /// are always in range, so this only fires on a caller bug.
    fn index(&self, n: LineNo) -> &str {
        &self.lines[n]
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
