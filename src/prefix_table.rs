//! Groups contiguous suffix-array entries sharing the same `k`-character prefix into half-open
//! `[lo, hi)` intervals (spec §4.3).

use std::collections::HashMap;

use rayon::prelude::*;

use crate::search::Span;

/// Fixed chunk count for the parallel builder (spec §4.3). Not configurable: it is a tuning
/// constant, not part of the index format.
const CHUNK_COUNT: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    k: u16,
    entries: HashMap<Vec<u8>, Span>,
}

impl PrefixTable {
    pub fn k(&self) -> u16 {
        self.k
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, prefix: &[u8]) -> Option<Span> {
        self.entries.get(prefix).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vec<u8>, &Span)> {
        self.entries.iter()
    }

    pub fn from_entries(k: u16, entries: HashMap<Vec<u8>, Span>) -> Self {
        Self { k, entries }
    }

    /// Builds the table over the full suffix array, choosing the sequential or parallel
    /// algorithm based on `parallel`. `k = 0` yields an empty table.
    pub fn build(text: &[u8], suffix_array: &[i32], k: u16, parallel: bool) -> Self {
        if k == 0 || suffix_array.is_empty() {
            return Self {
                k,
                entries: HashMap::new(),
            };
        }
        if parallel {
            Self::build_parallel(text, suffix_array, k)
        } else {
            Self::build_sequential(text, suffix_array, k)
        }
    }

    fn suffix_len(text_len: usize, start: usize) -> usize {
        text_len - start
    }

    /// Sequential prefix-table scan over `[range_start, range_end)` (spec §4.3 steps 1-2).
    ///
    /// The inner scan intentionally runs past `range_end`, up to `len(suffix_array)`, so that a
    /// group straddling `range_end` is fully consumed by whichever worker claims it — this is
    /// the behavior the parallel builder's boundary-skip step coordinates with (spec §9). A
    /// purely sequential caller passes `range_end == suffix_array.len()`, where the distinction
    /// is moot.
    fn scan_into(
        text: &[u8],
        suffix_array: &[i32],
        k: u16,
        range_start: usize,
        range_end: usize,
        out: &mut HashMap<Vec<u8>, Span>,
    ) {
        let k = k as usize;
        let text_len = text.len();
        let long_enough =
            |idx: usize| Self::suffix_len(text_len, suffix_array[idx] as usize) >= k;

        // Step 1: advance to the first entry in [range_start, range_end) whose suffix has
        // length >= k; shorter suffixes can't carry a k-prefix and may recur at any position
        // (sorting is lexicographic, not by length), so this skip runs at the top of every
        // iteration below, not just once up front.
        let mut iter = range_start;
        while iter < range_end && !long_enough(iter) {
            iter += 1;
        }

        while iter < range_end {
            let start = suffix_array[iter] as usize;
            let prefix = &text[start..start + k];
            let mut end_of_range = iter + 1;
            while end_of_range < suffix_array.len() {
                let candidate = suffix_array[end_of_range] as usize;
                if Self::suffix_len(text_len, candidate) < k
                    || &text[candidate..candidate + k] != prefix
                {
                    break;
                }
                end_of_range += 1;
            }
            out.insert(prefix.to_vec(), (iter as u32, end_of_range as u32));
            iter = end_of_range;
            while iter < range_end && !long_enough(iter) {
                iter += 1;
            }
        }
    }

    fn build_sequential(text: &[u8], suffix_array: &[i32], k: u16) -> Self {
        let mut entries = HashMap::new();
        Self::scan_into(text, suffix_array, k, 0, suffix_array.len(), &mut entries);
        Self { k, entries }
    }

    fn build_parallel(text: &[u8], suffix_array: &[i32], k: u16) -> Self {
        let len = suffix_array.len();
        let chunk_count = CHUNK_COUNT.min(len.max(1));
        let chunk_size = len.div_ceil(chunk_count);
        let boundaries: Vec<usize> = (0..=chunk_count)
            .map(|i| (i * chunk_size).min(len))
            .collect();

        let k_usize = k as usize;
        let text_len = text.len();
        let shares_group_with_previous = |start: usize| -> bool {
            if start == 0 || start >= len {
                return false;
            }
            let here = suffix_array[start] as usize;
            let prev = suffix_array[start - 1] as usize;
            Self::suffix_len(text_len, here) >= k_usize
                && Self::suffix_len(text_len, prev) >= k_usize
                && text[here..here + k_usize] == text[prev..prev + k_usize]
        };

        let local_maps: Vec<HashMap<Vec<u8>, Span>> = (0..chunk_count)
            .into_par_iter()
            .map(|worker| {
                let mut start = boundaries[worker];
                let end = boundaries[worker + 1];
                // If this worker's start shares a k-prefix group with the previous chunk, that
                // group was already claimed by the previous worker's scan (which runs past its
                // own chunk end); skip past it here so it is not claimed twice.
                while shares_group_with_previous(start) {
                    start += 1;
                }
                let mut local = HashMap::new();
                Self::scan_into(text, suffix_array, k, start, end, &mut local);
                local
            })
            .collect();

        let mut entries = HashMap::new();
        for local in local_maps {
            entries.extend(local);
        }
        Self { k, entries }
    }
}
