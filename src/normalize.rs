//! Canonicalizes raw FASTA body text into the fixed `{A,T,G,C,$}` alphabet the rest of the
//! pipeline assumes.

use rand::seq::IteratorRandom;
use rand::Rng;

pub const SENTINEL: u8 = b'$';
const ALPHABET: &[u8] = b"ACGT";

/// Upper-cases `raw`, replaces every byte outside `{A,T,G,C}` with a uniformly random pick from
/// that alphabet, and appends the sentinel. The output has length `raw.len() + 1`.
///
/// Random replacement is not required to be reproducible across runs; the system's correctness
/// contract is defined against the text actually stored, not the raw input (spec §4.1).
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    normalize_with_rng(raw, &mut rand::thread_rng())
}

/// Same contract as [`normalize`], but driven by a caller-supplied RNG so tests can be
/// deterministic. Never used to special-case query patterns: see [`normalize_query`].
pub fn normalize_with_rng<R: Rng>(raw: &[u8], rng: &mut R) -> Vec<u8> {
    let mut text = Vec::with_capacity(raw.len() + 1);
    for &byte in raw {
        let upper = byte.to_ascii_uppercase();
        text.push(if ALPHABET.contains(&upper) {
            upper
        } else {
            *ALPHABET
                .iter()
                .choose(rng)
                .expect("ALPHABET is non-empty")
        });
    }
    text.push(SENTINEL);
    text
}

/// Upper-cases a query pattern without substituting non-DNA bytes; substitution would destroy
/// the caller's query intent, so a pattern containing bytes absent from the alphabet simply
/// never matches (spec §9, §4.5.5).
pub fn normalize_query(pattern: &[u8]) -> Vec<u8> {
    pattern.iter().map(u8::to_ascii_uppercase).collect()
}
