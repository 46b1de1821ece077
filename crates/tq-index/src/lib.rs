//! In-memory inverted word index for tq.
//!
//! This crate maps each whitespace-separated word of a [`Document`] to the ascending set of
//! line numbers on which it appears. It handles:
//! - Index construction from a loaded document
//! - Side-effect free word lookups (a miss is an empty set, not an error)
//! - Ordered iteration over indexed words and summary statistics
//!
//! # Example
//!
//! ```
//! use tq_document::Document;
//! use tq_index::TextIndex;
//!
//! let doc = Document::from_lines(["fiery shone the roads", "but we had roads"]);
//! let index = TextIndex::build(&doc);
//! assert_eq!(index.lookup("roads").as_slice(), &[0, 1]);
//! assert!(index.lookup("zzz").is_empty());
//! ```

#![warn(missing_docs)]

mod index;
mod lines;

pub use index::{IndexStats, TextIndex, Words};
pub use lines::LineSet;
pub use tq_document::{Document, LineNo};
