//! Set algebra over sorted line-number sets.
//!
//! Every operation is a single ascending merge: inputs must be sorted and duplicate-free,
//! and outputs are too.

use std::cmp::Ordering;

use tq_index::{LineNo, LineSet};

/// Returns every line in `0..len` that is not in `lines`.
///
/// Walks the range once, advancing through `lines` only when its current value is the line
/// being visited.
pub fn complement(lines: &[LineNo], len: usize) -> LineSet {
    let mut out = Vec::with_capacity(len.saturating_sub(lines.len()));
    let mut excluded = lines.iter().peekable();

    for n in 0..len {
        if excluded.next_if_eq(&&n).is_none() {
            out.push(n);
        }
    }

    LineSet::from_sorted_unique(out)
}

/// Returns the lines present in both `a` and `b`.
pub fn intersection(a: &[LineNo], b: &[LineNo]) -> LineSet {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    LineSet::from_sorted_unique(out)
}

/// Returns the lines present in `a`, `b`, or both.
pub fn union(a: &[LineNo], b: &[LineNo]) -> LineSet {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);

    LineSet::from_sorted_unique(out)
}
