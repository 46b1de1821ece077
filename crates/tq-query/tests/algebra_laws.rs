//! Algebraic laws of query evaluation.
//!
//! Each law is checked for every pair of sample queries against several small documents,
//! including an empty one and one where no line contains any sample word.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::thread;

use tq_index::{Document, LineNo, TextIndex};
use tq_query::{Query, QueryNode, intersect, negate, render, union_of, word};

/// Documents the laws are checked against.
fn documents() -> Vec<Document> {
    vec![
        Document::from_lines(["fiery shone the roads", "but we had roads"]),
        Document::from_lines([
            "Alice Emma has long flowing red hair.",
            "Her Daddy says when the wind blows",
            "through her hair, it looks almost alive,",
            "like a fiery bird in flight.",
            "A beautiful fiery bird, he tells her,",
            "magical but untamed.",
            "",
            "\"Daddy, shush, there is no such thing,\"",
            "she tells him, at the same time wanting",
            "him to tell her more.",
        ]),
        Document::from_lines(["nothing relevant here", "or here"]),
        Document::from_lines(Vec::<String>::new()),
    ]
}

/// A spread of query shapes over words that do and don't occur.
fn queries() -> Vec<Query> {
    let fiery = word("fiery");
    let bird = word("bird");
    let her = word("her");
    let roads = word("roads");
    let missing = word("zzz");

    vec![
        fiery.clone(),
        roads.clone(),
        missing.clone(),
        negate(&her),
        intersect(&fiery, &bird),
        union_of(&her, &roads),
        union_of(&intersect(&fiery, &bird), &negate(&missing)),
        intersect(&negate(&fiery), &union_of(&bird, &her)),
    ]
}

/// Evaluates a query and returns its lines as a vector.
fn lines(query: &Query, index: &TextIndex) -> Vec<LineNo> {
    query.eval(index).lines().to_vec()
}

/// Runs `check` for every document and every ordered pair of queries.
fn for_all_pairs(check: impl Fn(&TextIndex, &Query, &Query)) {
    let queries = queries();
    for doc in documents() {
        let index = TextIndex::build(&doc);
        for a in &queries {
            for b in &queries {
                check(&index, a, b);
            }
        }
    }
}

#[test]
fn results_are_sorted_unique_and_in_range() {
    for_all_pairs(|index, a, b| {
        for query in [a, &intersect(a, b), &union_of(a, b), &negate(a)] {
            let got = lines(query, index);
            assert!(got.windows(2).all(|w| w[0] < w[1]), "{query}: {got:?}");
            assert!(got.iter().all(|&n| n < index.document().len()), "{query}: {got:?}");
        }
    });
}

#[test]
fn evaluation_is_deterministic() {
    for_all_pairs(|index, a, b| {
        let q = union_of(&intersect(a, b), &negate(b));
        assert_eq!(q.eval(index), q.eval(index));
    });
}

#[test]
fn intersection_is_subset_of_both_operands() {
    for_all_pairs(|index, a, b| {
        let both = lines(&intersect(a, b), index);
        let left = lines(a, index);
        let right = lines(b, index);
        assert!(both.iter().all(|n| left.contains(n) && right.contains(n)));
        let expected: Vec<LineNo> = left.iter().copied().filter(|n| right.contains(n)).collect();
        assert_eq!(both, expected, "{a} & {b}");
    });
}

#[test]
fn union_is_sorted_merge_of_operands() {
    for_all_pairs(|index, a, b| {
        let either = lines(&union_of(a, b), index);
        let mut expected = lines(a, index);
        expected.extend(lines(b, index));
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(either, expected, "{a} | {b}");
    });
}

#[test]
fn negation_is_complement_within_document() {
    for_all_pairs(|index, a, _| {
        let inner = lines(a, index);
        let expected: Vec<LineNo> = (0..index.document().len())
            .filter(|n| !inner.contains(n))
            .collect();
        assert_eq!(lines(&negate(a), index), expected, "~{a}");
    });
}

#[test]
fn double_negation_is_identity() {
    for_all_pairs(|index, a, _| {
        assert_eq!(lines(&negate(&negate(a)), index), lines(a, index));
    });
}

#[test]
fn de_morgan_laws_hold() {
    for_all_pairs(|index, a, b| {
        assert_eq!(
            lines(&negate(&intersect(a, b)), index),
            lines(&union_of(&negate(a), &negate(b)), index)
        );
        assert_eq!(
            lines(&negate(&union_of(a, b)), index),
            lines(&intersect(&negate(a), &negate(b)), index)
        );
    });
}

#[test]
fn representation_ignores_index_contents() {
    for query in queries() {
        let before = query.represent();
        for doc in documents() {
            let result = query.eval(&TextIndex::build(&doc));
            if !matches!(query.node(), QueryNode::Word(_)) {
                assert_eq!(result.label(), before);
            }
        }
        assert_eq!(query.represent(), before);
    }
}

#[test]
fn sample_document_scenarios() {
    let index = TextIndex::build(&Document::from_lines([
        "fiery shone the roads",
        "but we had roads",
    ]));

    let roads = word("roads").eval(&index);
    assert_eq!(roads.lines().as_slice(), &[0, 1]);
    assert_eq!(render(&roads)[0], "roads occurs 2 times");

    assert_eq!(lines(&word("shone"), &index), vec![0]);
    assert_eq!(lines(&negate(&word("shone")), &index), vec![1]);
    assert_eq!(lines(&intersect(&word("fiery"), &word("roads")), &index), vec![0]);
    assert_eq!(lines(&union_of(&word("shone"), &word("but")), &index), vec![0, 1]);

    let missing = word("zzz").eval(&index);
    assert!(missing.is_empty());
    assert_eq!(render(&missing), vec!["zzz occurs 0 times"]);
}

#[test]
fn evaluation_reads_index_from_many_threads() {
    let index = TextIndex::build(&documents()[1]);
    let query = union_of(&intersect(&word("fiery"), &word("bird")), &negate(&word("her")));
    let expected = lines(&query, &index);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| lines(&query, &index)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
