use std::{
    fmt::Write as FmtWrite,
    fs::File,
    io::{BufReader, BufWriter, Write},
    time::{Duration, Instant},
};

use clap::Parser;
use eyre::{Result, WrapErr};
use sufindex::{
    args::{QueryMode as ArgsQueryMode, QuerysaArgs},
    batch::{run_batch, run_batch_parallel, QueryRecord},
    index::SuffixArrayIndex,
    reader::Reader,
    search::QueryMode,
};

fn format_output_line(record: &QueryRecord) -> String {
    let mut line = record.title.clone();
    write!(&mut line, "\t{}", record.results.len()).unwrap();
    for position in &record.results {
        write!(&mut line, "\t{position}").unwrap();
    }
    line
}

pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = QuerysaArgs::parse();

    let buf_reader = BufReader::new(
        File::open(&args.index).wrap_err(format!("Could not open index file {:?}", &args.index))?,
    );
    let index = SuffixArrayIndex::read(buf_reader).wrap_err("Failed to deserialize index")?;

    let reader = Reader::from_file(&args.queries)
        .wrap_err(format!("Could not find query file {:?}", &args.queries))?;
    let mode = match args.query_mode {
        ArgsQueryMode::Naive => QueryMode::Naive,
        ArgsQueryMode::Simpaccel => QueryMode::SimpleAccelerant,
    };

    let mut records = Vec::new();
    for result in reader {
        let record = result?;
        records.push(QueryRecord::new(record.header().to_string(), record.sequence().as_bytes().to_vec()));
    }

    let now = Instant::now();
    if args.parallel {
        run_batch_parallel(&index, &mut records, mode);
    } else {
        run_batch(&index, &mut records, mode);
    }
    let total: Duration = now.elapsed();

    if args.output != "+" {
        let mut writer = BufWriter::new(
            File::create(&args.output)
                .wrap_err(format!("Could not create output file {:?}", &args.output))?,
        );
        for record in &records {
            writeln!(writer, "{}", format_output_line(record))?;
        }
        writer.flush()?;
    }

    tracing::info!(total = ?total, queries = records.len(), "batch query complete");
    Ok(())
}
