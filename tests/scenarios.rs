//! End-to-end scenarios from spec §8: fixed references, built and queried through the public
//! API exactly as a CLI user would.

use sufindex::index::SuffixArrayIndex;
use sufindex::normalize::normalize_with_rng;
use sufindex::search::QueryMode;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn build(raw: &[u8], k: Option<u16>) -> SuffixArrayIndex {
    // These fixtures are already pure DNA, so the normalizer's random-replacement path never
    // fires and the test stays deterministic regardless of RNG seed.
    let mut rng = StdRng::seed_from_u64(42);
    let text = normalize_with_rng(raw, &mut rng);
    SuffixArrayIndex::build(&text, k, false).unwrap()
}

/// Builds directly from `body` plus an appended sentinel, bypassing the normalizer's
/// alphabet-substitution step. `banana` contains bytes outside `{A,C,G,T}`, so running it
/// through `normalize_with_rng` would randomly replace them and the fixture would no longer
/// match the literal positions spec §8 scenario 1 asserts (spec §8 calls out bypassing the
/// normalizer for this exact fixture).
fn build_raw(body: &[u8], k: Option<u16>) -> SuffixArrayIndex {
    let mut text = body.to_ascii_uppercase();
    text.push(b'$');
    SuffixArrayIndex::build(&text, k, false).unwrap()
}

fn sorted(mut v: Vec<i32>) -> Vec<i32> {
    v.sort_unstable();
    v
}

#[test]
fn banana() {
    let index = build_raw(b"banana", None);
    assert_eq!(sorted(index.query(b"ana", QueryMode::Naive)), vec![1, 3]);
    assert_eq!(sorted(index.query(b"na", QueryMode::Naive)), vec![2, 4]);
    assert_eq!(index.query(b"x", QueryMode::Naive), Vec::<i32>::new());
}

#[test]
fn aaaa_prefix_table_groups_by_shared_prefix() {
    let index = build(b"AAAA", Some(2));
    let table = index.prefix_table().unwrap();
    // "AAAA$" has four suffixes of length >= 2: "AAAA$", "AAA$", "AA$" and "A$". The last
    // one sits right against the sentinel and doesn't share the "AA" prefix, so it gets its
    // own group instead of folding into it.
    assert_eq!(table.len(), 2);
    assert_eq!(sorted(index.query(b"AA", QueryMode::Naive)), vec![0, 1, 2]);
}

#[test]
fn acgtacgt() {
    let index = build(b"ACGTACGT", Some(3));
    assert_eq!(sorted(index.query(b"ACGT", QueryMode::Naive)), vec![0, 4]);
    assert_eq!(sorted(index.query(b"CGTA", QueryMode::Naive)), vec![1, 5]);
    assert_eq!(sorted(index.query(b"TACG", QueryMode::Naive)), vec![3]);
}

#[test]
fn round_trip_with_and_without_prefix_table() {
    for k in [None, Some(3u16)] {
        let index = build(b"GATTACAGATTACA", k);
        let mut buf = Vec::new();
        index.write(&mut buf).unwrap();
        let restored = SuffixArrayIndex::read(&buf[..]).unwrap();
        assert_eq!(index.text(), restored.text());
        assert_eq!(index.suffix_array(), restored.suffix_array());
        assert_eq!(index.prefix_table(), restored.prefix_table());
    }
}

#[test]
fn empty_pattern_matches_every_position() {
    let index = build(b"ACGT", None);
    let mut all = index.query(b"", QueryMode::Naive);
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4]);
}

#[test]
fn byte_absent_from_alphabet_never_matches() {
    let index = build(b"ACGTACGT", None);
    assert_eq!(index.query(b"Z", QueryMode::Naive), Vec::<i32>::new());
    assert_eq!(
        index.query(b"Z", QueryMode::SimpleAccelerant),
        Vec::<i32>::new()
    );
}
