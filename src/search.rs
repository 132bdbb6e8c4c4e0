//! Bounded binary-search occurrence lookup over a suffix array (spec §4.5).
//!
//! Both `naive` and `simple-accelerant` modes share the same bisection skeleton, parameterized
//! only by how much of the comparison they are allowed to skip; `naive` always restarts at
//! offset 0, `simple-accelerant` skips the common prefix length already known to agree with the
//! query (spec §9 "Cycles and inheritance").

use std::cmp::{min, Ordering};

use crate::prefix_table::PrefixTable;

/// A half-open `[lo, hi)` range of suffix-array indices.
pub type Span = (u32, u32);

#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub lcp: usize,
    pub ordering: Ordering,
}

#[derive(Debug, Clone, Copy)]
pub struct Bound {
    pub index: u32,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Naive,
    SimpleAccelerant,
}

/// Compares `sequence[offset..]` against `pattern[offset..]`, returning the ordering at the
/// first differing byte (or at exhaustion of either operand) and the length of the shared
/// prefix. Exhaustion of `sequence` (reaching the sentinel boundary) sorts as `Less`;
/// exhaustion of `pattern` sorts as `Equal` (spec §4.5.3 tie-break policy).
pub fn compare_bytes(sequence: &[u8], pattern: &[u8], offset: usize) -> Comparison {
    let m = pattern.len();
    for idx in offset..m {
        match sequence.get(idx) {
            None => {
                return Comparison {
                    lcp: idx,
                    ordering: Ordering::Less,
                }
            }
            Some(&byte) => {
                let ordering = byte.cmp(&pattern[idx]);
                if ordering != Ordering::Equal {
                    return Comparison { ordering, lcp: idx };
                }
            }
        }
    }
    Comparison {
        lcp: m,
        ordering: Ordering::Equal,
    }
}

fn suffix_at<'t>(text: &'t [u8], suffix_array: &[i32], index: u32) -> &'t [u8] {
    &text[suffix_array[index as usize] as usize..]
}

/// Naive bisection: every comparison restarts at offset 0.
fn naive_bisect<F>(
    text: &[u8],
    pattern: &[u8],
    suffix_array: &[i32],
    span: Span,
    mut keep_left: F,
) -> u32
where
    F: FnMut(Ordering) -> bool,
{
    let (mut left, mut right) = span;
    while left < right {
        let center = left + (right - left) / 2;
        let comparison = compare_bytes(suffix_at(text, suffix_array, center), pattern, 0);
        if keep_left(comparison.ordering) {
            left = center + 1;
        } else {
            right = center;
        }
    }
    left
}

/// Simple-accelerant bisection: skips the `min(left.lcp, right.lcp)` bytes already known to
/// agree with `pattern` within the current bracket.
fn accelerant_bisect<F>(
    text: &[u8],
    pattern: &[u8],
    suffix_array: &[i32],
    left: &mut Bound,
    right: &mut Bound,
    mut keep_left: F,
) where
    F: FnMut(Ordering) -> bool,
{
    while left.index < right.index {
        let center = left.index + (right.index - left.index) / 2;
        let skip = min(left.comparison.lcp, right.comparison.lcp);
        let comparison = compare_bytes(suffix_at(text, suffix_array, center), pattern, skip);
        if keep_left(comparison.ordering) {
            left.index = center + 1;
            left.comparison = comparison;
        } else {
            right.index = center;
            right.comparison = comparison;
        }
    }
}

fn naive_occurrences(text: &[u8], pattern: &[u8], suffix_array: &[i32], span: Span) -> Span {
    let lower = naive_bisect(text, pattern, suffix_array, span, |ord| ord == Ordering::Less);
    let upper = naive_bisect(text, pattern, suffix_array, (lower, span.1), |ord| {
        ord != Ordering::Greater
    });
    (lower, upper)
}

fn accelerant_occurrences(text: &[u8], pattern: &[u8], suffix_array: &[i32], span: Span) -> Span {
    let mut left = Bound {
        index: span.0,
        comparison: compare_bytes(suffix_at(text, suffix_array, span.0), pattern, 0),
    };
    let right_end = Bound {
        index: span.1,
        comparison: compare_bytes(suffix_at(text, suffix_array, span.1 - 1), pattern, 0),
    };
    let mut right = right_end;
    accelerant_bisect(text, pattern, suffix_array, &mut left, &mut right, |ord| {
        ord == Ordering::Less
    });
    let lower = left.index;
    // The upper-bound accelerant is run against the left bracket endpoint's LCP, not against
    // `right_end` (spec §9): LCP(pattern, suffix_at(lo)) is always a safe lower bound on the
    // shared prefix within the bracketed range, even though the tighter choice (against
    // `A[upper-1]`) would also be correct.
    right = right_end;
    accelerant_bisect(text, pattern, suffix_array, &mut left, &mut right, |ord| {
        ord != Ordering::Greater
    });
    (lower, left.index)
}

/// Narrows `[0, len(A))` to the prefix table's interval for `pattern`'s first `k` bytes, when a
/// table exists and the pattern is at least that long (spec §4.5.1). `None` means the narrowed
/// range is known to be empty.
fn narrow_range(prefix_table: Option<&PrefixTable>, pattern: &[u8], sa_len: u32) -> Option<Span> {
    match prefix_table {
        Some(table) if pattern.len() >= table.k() as usize => {
            table.get(&pattern[..table.k() as usize])
        }
        Some(_) | None => Some((0, sa_len)),
    }
}

/// Returns the `[lo, hi)` slice of suffix-array indices whose suffixes start with `pattern`, or
/// `None` if there is no such suffix.
pub fn query(
    text: &[u8],
    pattern: &[u8],
    suffix_array: &[i32],
    prefix_table: Option<&PrefixTable>,
    mode: QueryMode,
) -> Option<Span> {
    if pattern.is_empty() {
        return Some((0, suffix_array.len() as u32));
    }
    let span = narrow_range(prefix_table, pattern, suffix_array.len() as u32)?;
    if span.0 >= span.1 {
        return None;
    }

    let (lo, hi) = match mode {
        QueryMode::Naive => naive_occurrences(text, pattern, suffix_array, span),
        QueryMode::SimpleAccelerant => accelerant_occurrences(text, pattern, suffix_array, span),
    };
    if lo >= hi {
        None
    } else {
        Some((lo, hi))
    }
}
