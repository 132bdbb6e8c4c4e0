//! Minimal FASTA reader (spec §1 "Deliberately out of scope", §6.2): concatenates every line
//! not starting with `>` into a record's sequence, in file order, discarding headers from the
//! body text but preserving them for output labeling. Performs no alphabet normalization —
//! that is the [`crate::normalize`] module's job, run once over the full concatenated body.

use std::{
    fs::{self, File},
    io::{self, BufRead},
    path::Path,
};

use crate::record::Record;
use eyre::eyre;

pub const START_CHARACTER: char = '>';

pub struct Reader {
    reader: io::BufReader<fs::File>,
    buffer: String,
}

impl Reader {
    pub fn new(reader: io::BufReader<fs::File>) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    pub fn from_file<P>(filename: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = File::open(filename)?;
        Ok(Self::new(io::BufReader::new(file)))
    }

    pub fn read(&mut self, record: &mut Record) -> eyre::Result<()> {
        record.clear();
        if self.buffer.trim_end().is_empty() {
            self.reader.read_line(&mut self.buffer)?;
            if self.buffer.trim_end().is_empty() {
                return Ok(());
            }
        }

        if !self.buffer.starts_with(START_CHARACTER) {
            return Err(eyre!("invalid start character in line: {}", &self.buffer));
        }

        record.set_header(self.buffer[1..].trim_end().to_owned());
        loop {
            self.buffer.clear();
            self.reader.read_line(&mut self.buffer)?;
            let next_part = self.buffer.trim_end();
            if next_part.is_empty() || next_part.starts_with(START_CHARACTER) {
                break;
            }
            record.push_sequence_part(&next_part.to_uppercase());
        }

        Ok(())
    }
}

impl Iterator for Reader {
    type Item = eyre::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        match self.read(&mut record) {
            Ok(()) => {
                if record.is_empty() {
                    None
                } else {
                    Some(Ok(record))
                }
            }
            Err(e) => Some(Err(e)),
        }
    }
}
