//! Iterates a sequence of query records against a built index, accumulating per-query results
//! (spec §2 item 6, §4.5.4). Queries are independent — each reads `text`/`suffix_array`/
//! `prefix_table` by reference and writes only its own `results` — so the parallel path needs
//! no synchronization beyond the final collection.

use rayon::prelude::*;

use crate::index::SuffixArrayIndex;
use crate::search::QueryMode;

/// `(title, pattern, results)` from spec §3 Data Model. `results` starts empty and is filled in
/// by [`run_batch`]/[`run_batch_parallel`]; the caller owns the query's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub title: String,
    pub pattern: Vec<u8>,
    pub results: Vec<i32>,
}

impl QueryRecord {
    pub fn new(title: impl Into<String>, pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            pattern: pattern.into(),
            results: Vec::new(),
        }
    }
}

/// Runs each record sequentially, in iteration order. Use when ordering of side effects (e.g.
/// interleaved logging) matters; the result lists themselves make no cross-query ordering
/// promise either way (spec §5).
pub fn run_batch(index: &SuffixArrayIndex, records: &mut [QueryRecord], mode: QueryMode) {
    for record in records.iter_mut() {
        record.results = index.query(&record.pattern, mode);
    }
}

/// Distributes records across a `rayon` worker pool. No ordering is guaranteed between
/// records; each record is exclusively owned by the worker computing it (spec §5).
pub fn run_batch_parallel(index: &SuffixArrayIndex, records: &mut [QueryRecord], mode: QueryMode) {
    records.par_iter_mut().for_each(|record| {
        record.results = index.query(&record.pattern, mode);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_with_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build_index() -> SuffixArrayIndex {
        let mut rng = StdRng::seed_from_u64(5);
        let text = normalize_with_rng(b"ACGTACGTACGTGATTACA", &mut rng);
        SuffixArrayIndex::build(&text, Some(3), false).unwrap()
    }

    #[test]
    fn sequential_and_parallel_batches_agree() {
        let index = build_index();
        let mut sequential = vec![
            QueryRecord::new("q1", b"ACGT".to_vec()),
            QueryRecord::new("q2", b"GATT".to_vec()),
            QueryRecord::new("q3", b"ZZZ".to_vec()),
        ];
        let mut parallel = sequential.clone();

        run_batch(&index, &mut sequential, QueryMode::Naive);
        run_batch_parallel(&index, &mut parallel, QueryMode::SimpleAccelerant);

        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.results, b.results);
        }
    }

    #[test]
    fn each_query_result_is_independent_of_batch_order() {
        let index = build_index();
        let mut forward = vec![
            QueryRecord::new("a", b"ACGT".to_vec()),
            QueryRecord::new("b", b"GATT".to_vec()),
        ];
        let mut reversed = vec![
            QueryRecord::new("b", b"GATT".to_vec()),
            QueryRecord::new("a", b"ACGT".to_vec()),
        ];
        run_batch(&index, &mut forward, QueryMode::Naive);
        run_batch(&index, &mut reversed, QueryMode::Naive);

        let by_title = |records: &[QueryRecord], title: &str| {
            records.iter().find(|r| r.title == title).unwrap().results.clone()
        };
        assert_eq!(by_title(&forward, "a"), by_title(&reversed, "a"));
        assert_eq!(by_title(&forward, "b"), by_title(&reversed, "b"));
    }
}
