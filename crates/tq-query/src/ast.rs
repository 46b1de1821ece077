//! Query abstract syntax tree.
//!
//! Nodes are immutable and reference their operands through shared [`Query`] handles, so a
//! query graph is built strictly bottom-up and a sub-query may appear under several parents.

use std::fmt;

use tq_index::TextIndex;
use tracing::trace;

use crate::{Query, QueryResult, algebra};

/// A node of a query expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Lines containing a word.
    Word(String),

    /// Lines not matched by the operand.
    Not(Query),

    /// Lines matched by both operands.
    And(Query, Query),

    /// Lines matched by either operand.
    Or(Query, Query),
}

impl QueryNode {
    /// Evaluates this node against an index.
    ///
    /// Word nodes are answered by an index lookup and labelled with the word itself. Every
    /// other node combines the results of its operands, and its label is assembled from
    /// theirs, which yields the node's representation without re-rendering the subtree.
    /// Nothing is cached: each call recomputes the whole subtree.
    pub fn eval(&self, index: &TextIndex) -> QueryResult {
        let result = match self {
            Self::Word(word) => QueryResult::new(
                word.clone(),
                index.lookup(word),
                index.document().clone(),
            ),
            Self::Not(operand) => {
                let inner = operand.eval(index);
                let lines = algebra::complement(inner.lines(), inner.document().len());
                QueryResult::new(
                    format!("~({})", inner.label()),
                    lines,
                    inner.document().clone(),
                )
            }
            Self::And(lhs, rhs) => {
                let left = lhs.eval(index);
                let right = rhs.eval(index);
                let lines = algebra::intersection(left.lines(), right.lines());
                QueryResult::new(
                    format!("({} & {})", left.label(), right.label()),
                    lines,
                    left.document().clone(),
                )
            }
            Self::Or(lhs, rhs) => {
                let left = lhs.eval(index);
                let right = rhs.eval(index);
                let lines = algebra::union(left.lines(), right.lines());
                QueryResult::new(
                    format!("({} | {})", left.label(), right.label()),
                    lines,
                    left.document().clone(),
                )
            }
        };

        trace!(query = result.label(), matches = result.len(), "evaluated query node");
        result
    }

    /// Returns the display form of this node.
    ///
    /// Words render as themselves, negation as `~(q)`, conjunction as `(l & r)` and
    /// disjunction as `(l | r)`. The form depends only on the shape of the tree.
    pub fn represent(&self) -> String {
        self.to_string()
    }

    /// Formats the node as an indented outline, one node per line.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Word(word) => writeln!(f, "{prefix}Word({word:?})"),
            Self::Not(operand) => {
                writeln!(f, "{prefix}Not")?;
                operand.node().fmt_tree(f, indent + 1)
            }
            Self::And(lhs, rhs) => {
                writeln!(f, "{prefix}And")?;
                lhs.node().fmt_tree(f, indent + 1)?;
                rhs.node().fmt_tree(f, indent + 1)
            }
            Self::Or(lhs, rhs) => {
                writeln!(f, "{prefix}Or")?;
                lhs.node().fmt_tree(f, indent + 1)?;
                rhs.node().fmt_tree(f, indent + 1)
            }
        }
    }
}

/// Writes the representation; the alternate form (`{:#}`) writes an indented outline.
impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_tree(f, 0);
        }
        match self {
            Self::Word(word) => f.write_str(word),
            Self::Not(operand) => write!(f, "~({operand})"),
            Self::And(lhs, rhs) => write!(f, "({lhs} & {rhs})"),
            Self::Or(lhs, rhs) => write!(f, "({lhs} | {rhs})"),
        }
    }
}
