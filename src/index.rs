//! The persisted index aggregate: normalized text, suffix array, and optional prefix table
//! (spec §3 Data model), plus the build and query entry points that glue the other core
//! modules together.

use std::io::{Read, Write};

use crate::error::IndexError;
use crate::normalize::normalize_query;
use crate::prefix_table::PrefixTable;
use crate::sais::build_suffix_array;
use crate::search::{self, QueryMode, Span};
use crate::serialize;

#[derive(Debug, PartialEq, Eq)]
pub struct SuffixArrayIndex {
    text: Vec<u8>,
    suffix_array: Vec<i32>,
    prefix_table: Option<PrefixTable>,
}

impl SuffixArrayIndex {
    /// Builds a fresh index over already-normalized `text` (spec §4.2-§4.3). Pass `k = Some(0)`
    /// or `None` to skip prefix-table construction.
    #[tracing::instrument(skip(text), fields(text_len = text.len(), k))]
    pub fn build(text: &[u8], k: Option<u16>, parallel_prefix_table: bool) -> Result<Self, IndexError> {
        let suffix_array = build_suffix_array(text)?;
        tracing::info!(sa_len = suffix_array.len(), "suffix array constructed");

        let prefix_table = match k {
            Some(k) if k > 0 => {
                let table = PrefixTable::build(text, &suffix_array, k, parallel_prefix_table);
                tracing::info!(k, entries = table.len(), "prefix table constructed");
                Some(table)
            }
            _ => None,
        };

        Ok(Self {
            text: text.to_vec(),
            suffix_array,
            prefix_table,
        })
    }

    pub fn from_parts(text: Vec<u8>, suffix_array: Vec<i32>, prefix_table: Option<PrefixTable>) -> Self {
        Self {
            text,
            suffix_array,
            prefix_table,
        }
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn suffix_array(&self) -> &[i32] {
        &self.suffix_array
    }

    pub fn prefix_table(&self) -> Option<&PrefixTable> {
        self.prefix_table.as_ref()
    }

    /// Rebuilds the prefix table with a different `k` (no-op if `k` already matches).
    pub fn set_prefix_table_k(&mut self, k: u16, parallel: bool) {
        if self.prefix_table.as_ref().map(PrefixTable::k) == Some(k) {
            return;
        }
        self.prefix_table = if k == 0 {
            None
        } else {
            Some(PrefixTable::build(&self.text, &self.suffix_array, k, parallel))
        };
    }

    /// Returns every occurrence of `pattern` (spec §4.5). The pattern is upper-cased but
    /// otherwise left as-is: non-DNA bytes simply fail to match (spec §9).
    pub fn query(&self, pattern: &[u8], mode: QueryMode) -> Vec<i32> {
        let pattern = normalize_query(pattern);
        let span = search::query(
            &self.text,
            &pattern,
            &self.suffix_array,
            self.prefix_table.as_ref(),
            mode,
        );
        Self::positions(&self.suffix_array, span)
    }

    fn positions(suffix_array: &[i32], span: Option<Span>) -> Vec<i32> {
        match span {
            None => Vec::new(),
            Some((lo, hi)) => {
                let mut positions: Vec<i32> = suffix_array[lo as usize..hi as usize].to_vec();
                positions.sort_unstable();
                positions
            }
        }
    }

    pub fn write<W: Write>(&self, out: W) -> Result<(), IndexError> {
        serialize::write(self, out)
    }

    pub fn read<R: Read>(input: R) -> Result<Self, IndexError> {
        serialize::read(input)
    }
}
