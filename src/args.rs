//! CLI argument surfaces (spec §6.5). Pure boundary glue; no indexing logic lives here.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryMode {
    /// bisect left and right, restarting each comparison at offset 0
    Naive,
    /// bisect left and right, skipping the already-known-equal prefix length
    #[value(name = "simpleaccel", alias = "simpaccel")]
    Simpaccel,
}

#[derive(Debug, Parser)]
/// Builds the suffix array for a reference FASTA file and saves the result to disk.
pub struct BuildsaArgs {
    #[arg(short, long, value_name = "k", value_parser = clap::value_parser!(u16).range(1..100))]
    /// Build a prefix table of size <k> for this reference sequence.
    pub preftab: Option<u16>,

    #[arg(long)]
    /// Build the prefix table with the data-parallel chunked builder instead of sequentially.
    pub parallel: bool,

    /// The path to a FASTA file containing the reference sequence.
    pub reference: PathBuf,
    /// The path to the file the index will be saved to.
    pub output: PathBuf,
}

#[derive(Debug, Parser)]
/// Finds occurrences of query strings in a reference sequence using the index from buildsa.
pub struct QuerysaArgs {
    /// The path to the binary index generated by buildsa.
    pub index: PathBuf,
    /// The path to a FASTA file containing the queries to run.
    pub queries: PathBuf,

    #[arg(value_enum)]
    pub query_mode: QueryMode,

    /// The path to the file the results are written to, or `+` to emit only the summary line.
    pub output: String,

    #[arg(long)]
    /// Run the batch across a rayon worker pool instead of sequentially.
    pub parallel: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
pub enum SampleStrategy {
    ExactMatch,
    /// Generate queries as random substrings of the reference sequence, randomly perturbing a
    /// small fraction of characters.
    Perturb,
}

#[derive(Debug, Parser)]
/// Builds a query FASTA file to exercise querysa, sampled from a reference sequence.
pub struct BuildQueryArgs {
    /// The path to a FASTA file containing the reference sequence.
    pub reference: PathBuf,

    /// The path to a FASTA file where the generated queries will be written.
    pub output: PathBuf,

    #[arg(value_enum)]
    /// Method used to generate the queries.
    pub strategy: SampleStrategy,

    /// The minimum length query to generate.
    #[arg(long, value_parser = clap::value_parser!(u16).range(3..1000), default_value = "5")]
    pub min_length: u16,

    /// The maximum length query to generate.
    #[arg(long, value_parser = clap::value_parser!(u16).range(3..1000), default_value = "30")]
    pub max_length: u16,

    /// The number of queries to generate.
    #[arg(short, long, default_value = "100")]
    pub queries: usize,
}
