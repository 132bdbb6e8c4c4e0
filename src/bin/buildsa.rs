use std::{
    fs::{metadata, File},
    io::BufWriter,
    time::Instant,
};

use clap::Parser;
use eyre::{Result, WrapErr};
use sufindex::{
    args::BuildsaArgs, error::IndexError, index::SuffixArrayIndex, normalize::normalize,
    reader::Reader,
};

pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args: BuildsaArgs = BuildsaArgs::parse();

    let mut reader = Reader::from_file(&args.reference).wrap_err(format!(
        "The reference file {:?} does not exist",
        &args.reference
    ))?;
    let record = match reader.next() {
        Some(record) => record.wrap_err("could not parse record")?,
        None => return Err(IndexError::empty_reference(&args.reference).into()),
    };

    let now = Instant::now();
    let text = normalize(record.sequence().as_bytes());
    tracing::info!(elapsed = ?now.elapsed(), "normalized reference");

    let now = Instant::now();
    let index = SuffixArrayIndex::build(&text, args.preftab, args.parallel)?;
    tracing::info!(elapsed = ?now.elapsed(), sa_len = index.suffix_array().len(), "built index");

    let writer = BufWriter::new(
        File::create(&args.output)
            .wrap_err(format!("Failed to create output file {:?}", &args.output))?,
    );
    index.write(writer)?;

    let file_size = metadata(&args.output)?.len();
    tracing::info!(
        file_size,
        file_size_mib = file_size / 1024 / 1024,
        "wrote index"
    );
    Ok(())
}
