//! Boolean queries over a tq text index.
//!
//! Queries are composed programmatically from four building blocks:
//!
//! - **Word**: [`word`]`("rust")` - lines containing the word
//! - **Negation**: [`negate`]`(&q)` or `!q` - lines `q` does not match
//! - **Conjunction**: [`intersect`]`(&a, &b)` or `a & b` - lines both match
//! - **Disjunction**: [`union_of`]`(&a, &b)` or `a | b` - lines either matches
//!
//! Evaluating a [`Query`] against a [`TextIndex`] yields a [`QueryResult`], which
//! [`render`] turns into a printable report.
//!
//! # Example
//!
//! ```
//! use tq_index::{Document, TextIndex};
//! use tq_query::{intersect, negate, render, word};
//!
//! let index = TextIndex::build(&Document::from_lines([
//!     "fiery shone the roads",
//!     "but we had roads",
//! ]));
//!
//! let query = intersect(&word("roads"), &negate(&word("fiery")));
//! let result = query.eval(&index);
//! assert_eq!(result.lines().as_slice(), &[1]);
//! assert_eq!(
//!     render(&result),
//!     vec!["(roads & ~(fiery)) occurs 1 time", "\t(line 2) but we had roads"]
//! );
//! ```

#![warn(missing_docs)]

mod algebra;
mod ast;
mod query;
mod report;
mod result;

pub use ast::QueryNode;
pub use query::{Query, intersect, negate, union_of, word};
pub use report::{ReportOptions, render, render_with};
pub use result::QueryResult;
pub use tq_index::TextIndex;
