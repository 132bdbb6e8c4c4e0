//! Thin adapter over the external SA-IS implementation (spec §4.2, §6.3).
//!
//! This module consumes the normalized text and produces the suffix array; it does not
//! re-derive induced sorting itself. The 256-entry frequency table is scratch space the
//! underlying C routine fills in as a byproduct and that we otherwise discard.

use crate::error::IndexError;

const FREQUENCY_TABLE_SIZE: usize = 256;

/// Builds the suffix array over `text` (which must already end with the sentinel byte).
///
/// Returns `IndexError::IndexBuildFailed` if the external SA-IS routine reports a non-OK
/// status.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn build_suffix_array(text: &[u8]) -> Result<Vec<i32>, IndexError> {
    let mut histogram = [0i32; FREQUENCY_TABLE_SIZE];

    let construction = libsais::SuffixArrayConstruction::for_text(text)
        .in_owned_buffer::<i32>()
        .single_threaded();

    // SAFETY: the histogram is scratch space sized exactly FREQUENCY_TABLE_SIZE (the
    // byte alphabet), filled in by libsais itself; we never read from it before the call.
    let construction = unsafe { construction.with_frequency_table(&mut histogram) };

    let built = construction
        .run()
        .map_err(|e| IndexError::IndexBuildFailed(e.to_string()))?;

    Ok(built.into_vec())
}
