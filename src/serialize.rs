//! On-disk index format (spec §4.4, §6.1): little-endian, length-prefixed binary.
//!
//! `size_t` fields are fixed to 64-bit little-endian for cross-platform interop, as spec.md
//! §6.1 recommends. Prefix-table intervals are stored on disk as inclusive `[lo, hi]` (the
//! original format's convention) but held half-open `[lo, hi)` everywhere else in this crate;
//! the conversion happens only at this boundary (spec §9).

use std::collections::HashMap;
use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::IndexError;
use crate::index::SuffixArrayIndex;
use crate::prefix_table::PrefixTable;

pub const MAGIC: u32 = 0xABEE_FDAD;

pub fn write<W: Write>(index: &SuffixArrayIndex, mut out: W) -> Result<(), IndexError> {
    out.write_u32::<LittleEndian>(MAGIC)?;

    out.write_u64::<LittleEndian>(index.text().len() as u64)?;
    out.write_all(index.text())?;

    out.write_u64::<LittleEndian>(index.suffix_array().len() as u64)?;
    for &value in index.suffix_array() {
        out.write_i32::<LittleEndian>(value)?;
    }

    match index.prefix_table() {
        None => {
            out.write_u64::<LittleEndian>(0)?;
        }
        Some(table) => {
            out.write_u64::<LittleEndian>(table.k() as u64)?;
            out.write_u64::<LittleEndian>(table.len() as u64)?;
            for (key, &(lo, hi)) in table.iter() {
                out.write_u64::<LittleEndian>(key.len() as u64)?;
                out.write_all(key)?;
                out.write_i32::<LittleEndian>(lo as i32)?;
                out.write_i32::<LittleEndian>(hi as i32 - 1)?;
            }
        }
    }
    Ok(())
}

pub fn read<R: Read>(mut input: R) -> Result<SuffixArrayIndex, IndexError> {
    let magic = input.read_u32::<LittleEndian>()?;
    if magic != MAGIC {
        return Err(IndexError::invalid_index(format!(
            "expected magic {MAGIC:#010x}, found {magic:#010x}"
        )));
    }

    let text_len = input.read_u64::<LittleEndian>()? as usize;
    let mut text = vec![0u8; text_len];
    input.read_exact(&mut text)?;

    let sa_len = input.read_u64::<LittleEndian>()? as usize;
    let mut suffix_array = Vec::with_capacity(sa_len);
    for _ in 0..sa_len {
        suffix_array.push(input.read_i32::<LittleEndian>()?);
    }

    let k = input.read_u64::<LittleEndian>()?;
    let prefix_table = if k == 0 {
        None
    } else {
        let k = u16::try_from(k)
            .map_err(|_| IndexError::invalid_index(format!("prefix-table k={k} out of range")))?;
        let entry_count = input.read_u64::<LittleEndian>()?;
        let mut entries = HashMap::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            let key_len = input.read_u64::<LittleEndian>()? as usize;
            if key_len != k as usize {
                return Err(IndexError::invalid_index(format!(
                    "prefix-table entry key length {key_len} does not match k={k}"
                )));
            }
            let mut key = vec![0u8; key_len];
            input.read_exact(&mut key)?;
            let lo = input.read_i32::<LittleEndian>()?;
            let hi_inclusive = input.read_i32::<LittleEndian>()?;
            entries.insert(key, (lo as u32, (hi_inclusive + 1) as u32));
        }
        Some(PrefixTable::from_entries(k, entries))
    };

    Ok(SuffixArrayIndex::from_parts(text, suffix_array, prefix_table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_with_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn round_trips_without_prefix_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = normalize_with_rng(b"ACGTACGTTTGCA", &mut rng);
        let index = SuffixArrayIndex::build(&text, None, false).unwrap();

        let mut buf = Vec::new();
        write(&index, &mut buf).unwrap();
        let restored = read(&buf[..]).unwrap();

        assert_eq!(index.text(), restored.text());
        assert_eq!(index.suffix_array(), restored.suffix_array());
        assert_eq!(index.prefix_table(), restored.prefix_table());
    }

    #[test]
    fn round_trips_with_prefix_table() {
        let mut rng = StdRng::seed_from_u64(2);
        let text = normalize_with_rng(b"ACGTACGTACGTTTGCAGGATCCA", &mut rng);
        let index = SuffixArrayIndex::build(&text, Some(3), false).unwrap();

        let mut buf = Vec::new();
        write(&index, &mut buf).unwrap();
        let restored = read(&buf[..]).unwrap();

        assert_eq!(index.text(), restored.text());
        assert_eq!(index.suffix_array(), restored.suffix_array());
        assert_eq!(index.prefix_table(), restored.prefix_table());
    }

    #[test]
    fn rejects_bad_magic() {
        let buf = [0u8; 4];
        let err = read(&buf[..]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidIndex(_)));
    }
}
