//! Composable query handles.

use std::{
    collections::HashSet,
    fmt,
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

use tq_index::TextIndex;

use crate::{QueryNode, QueryResult};

/// A shared handle to a query expression.
///
/// Handles are cheap to clone. Combinators never modify their operands: they allocate a new
/// node that points at the operands' existing nodes, so any query can be reused as a
/// building block for as many further queries as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The root node of this expression.
    node: Arc<QueryNode>,
}

impl Query {
    /// Wraps a node.
    fn from_node(node: QueryNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Creates a query matching lines that contain `word`.
    pub fn word(word: impl Into<String>) -> Self {
        Self::from_node(QueryNode::Word(word.into()))
    }

    /// Creates a query matching lines this query does not match.
    pub fn negate(&self) -> Self {
        Self::from_node(QueryNode::Not(self.clone()))
    }

    /// Creates a query matching lines matched by both this query and `other`.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_node(QueryNode::And(self.clone(), other.clone()))
    }

    /// Creates a query matching lines matched by this query, `other`, or both.
    pub fn union_of(&self, other: &Self) -> Self {
        Self::from_node(QueryNode::Or(self.clone(), other.clone()))
    }

    /// Evaluates the query against an index.
    pub fn eval(&self, index: &TextIndex) -> QueryResult {
        self.node.eval(index)
    }

    /// Returns the display form of the query, e.g. `((fiery & bird) | ~(wind))`.
    pub fn represent(&self) -> String {
        self.node.represent()
    }

    /// Returns the root node.
    pub fn node(&self) -> &QueryNode {
        &self.node
    }

    /// Returns true if both handles share the same root node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Returns the words a matching line can owe its match to.
    ///
    /// These are the word leaves under an even number of negations, in first-seen order
    /// without repeats. A line matched by `~(a)` contains no `a`, but one matched by
    /// `~(~(a))` does.
    pub fn terms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        collect_terms(&self.node, true, &mut seen, &mut terms);
        terms
    }
}

/// Walks the tree collecting words that appear with positive polarity.
fn collect_terms<'a>(
    node: &'a QueryNode,
    positive: bool,
    seen: &mut HashSet<&'a str>,
    out: &mut Vec<&'a str>,
) {
    match node {
        QueryNode::Word(word) => {
            if positive && seen.insert(word.as_str()) {
                out.push(word.as_str());
            }
        }
        QueryNode::Not(operand) => collect_terms(operand.node(), !positive, seen, out),
        QueryNode::And(lhs, rhs) | QueryNode::Or(lhs, rhs) => {
            collect_terms(lhs.node(), positive, seen, out);
            collect_terms(rhs.node(), positive, seen, out);
        }
    }
}

/// Creates a query matching lines that contain `w`.
pub fn word(w: impl Into<String>) -> Query {
    Query::word(w)
}

/// Creates a query matching lines `q` does not match.
pub fn negate(q: &Query) -> Query {
    q.negate()
}

/// Creates a query matching lines matched by both `a` and `b`.
pub fn intersect(a: &Query, b: &Query) -> Query {
    a.intersect(b)
}

/// Creates a query matching lines matched by `a`, `b`, or both.
pub fn union_of(a: &Query, b: &Query) -> Query {
    a.union_of(b)
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.node, f)
    }
}

impl From<&str> for Query {
    fn from(w: &str) -> Self {
        Self::word(w)
    }
}

impl From<String> for Query {
    fn from(w: String) -> Self {
        Self::word(w)
    }
}

impl Not for Query {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl Not for &Query {
    type Output = Query;

    fn not(self) -> Query {
        self.negate()
    }
}

impl BitAnd for Query {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersect(&rhs)
    }
}

impl BitAnd for &Query {
    type Output = Query;

    fn bitand(self, rhs: Self) -> Query {
        self.intersect(rhs)
    }
}

impl BitOr for Query {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union_of(&rhs)
    }
}

impl BitOr for &Query {
    type Output = Query;

    fn bitor(self, rhs: Self) -> Query {
        self.union_of(rhs)
    }
}

#[cfg(test)]
mod tests {
    use tq_index::Document;

    use super::*;

    fn sample_index() -> TextIndex {
        TextIndex::build(&Document::from_lines([
            "fiery shone the roads",
            "but we had roads",
        ]))
    }

    #[test]
    fn word_lookup() {
        let index = sample_index();
        let result = word("roads").eval(&index);
        assert_eq!(result.label(), "roads");
        assert_eq!(result.lines().as_slice(), &[0, 1]);

        assert_eq!(word("shone").eval(&index).lines().as_slice(), &[0]);
    }

    #[test]
    fn missing_word_is_empty() {
        let result = word("zzz").eval(&sample_index());
        assert!(result.is_empty());
        assert_eq!(result.label(), "zzz");
    }

    #[test]
    fn negation() {
        let result = negate(&word("shone")).eval(&sample_index());
        assert_eq!(result.lines().as_slice(), &[1]);
        assert_eq!(result.label(), "~(shone)");
    }

    #[test]
    fn conjunction() {
        let result = intersect(&word("fiery"), &word("roads")).eval(&sample_index());
        assert_eq!(result.lines().as_slice(), &[0]);
        assert_eq!(result.label(), "(fiery & roads)");
    }

    #[test]
    fn disjunction() {
        let result = union_of(&word("shone"), &word("but")).eval(&sample_index());
        assert_eq!(result.lines().as_slice(), &[0, 1]);
        assert_eq!(result.label(), "(shone | but)");
    }

    #[test]
    fn operators_match_named_combinators() {
        let a = word("fiery");
        let b = word("but");

        assert_eq!(!&a, negate(&a));
        assert_eq!(&a & &b, intersect(&a, &b));
        assert_eq!(&a | &b, union_of(&a, &b));
        assert_eq!(
            (!a.clone() & b.clone()).represent(),
            "(~(fiery) & but)"
        );
        assert_eq!((a | b).represent(), "(fiery | but)");
    }

    #[test]
    fn combinators_leave_operands_untouched() {
        let base = word("roads");
        let negated = negate(&base);
        let both = intersect(&base, &negated);

        assert_eq!(base.represent(), "roads");
        assert_eq!(both.represent(), "(roads & ~(roads))");
        match both.node() {
            QueryNode::And(lhs, rhs) => {
                assert!(lhs.ptr_eq(&base));
                assert!(rhs.ptr_eq(&negated));
            }
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn shared_subexpressions_evaluate_consistently() {
        let index = sample_index();
        let roads = word("roads");
        let shone = word("shone");
        let shared = intersect(&roads, &shone);
        let query = union_of(&shared, &negate(&shared));

        assert_eq!(query.eval(&index).lines().as_slice(), &[0, 1]);
        assert_eq!(shared.eval(&index).lines().as_slice(), &[0]);
    }

    #[test]
    fn terms_skip_negated_words() {
        let query = union_of(
            &intersect(&word("a"), &negate(&word("b"))),
            &union_of(&word("c"), &word("a")),
        );
        assert_eq!(query.terms(), vec!["a", "c"]);
        assert!(negate(&word("x")).terms().is_empty());
    }

    #[test]
    fn terms_follow_negation_parity() {
        assert_eq!(negate(&negate(&word("a"))).terms(), vec!["a"]);
        assert_eq!(
            negate(&intersect(&word("a"), &negate(&word("b")))).terms(),
            vec!["b"]
        );
        assert!(negate(&negate(&negate(&word("a")))).terms().is_empty());
    }

    #[test]
    fn double_negation_terms_appear_on_matching_lines() {
        let index = sample_index();
        let query = negate(&negate(&word("shone")));
        let result = query.eval(&index);
        let terms = query.terms();

        assert_eq!(result.lines().as_slice(), &[0]);
        for (_, text) in result.iter() {
            assert!(terms.iter().any(|t| text.split_whitespace().any(|w| w == *t)));
        }
    }

    #[test]
    fn conversions_build_words() {
        assert_eq!(Query::from("x"), word("x"));
        assert_eq!(Query::from(String::from("y")).to_string(), "y");
    }
}
