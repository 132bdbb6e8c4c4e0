use std::{fs::File, io::BufReader};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sufindex::{index::SuffixArrayIndex, reader::Reader, record::Record, search::QueryMode};

fn get_index(filename: &str) -> SuffixArrayIndex {
    SuffixArrayIndex::read(BufReader::new(
        File::open(filename).expect("file must exist"),
    ))
    .unwrap()
}

fn get_records(filename: &str) -> Vec<Record> {
    let reader = Reader::from_file(filename).expect("reader file must exist");
    reader.into_iter().filter_map(|r| r.ok()).collect()
}

fn search_harness(mode: QueryMode, index: &SuffixArrayIndex, records: &[Record]) {
    records.iter().for_each(|record: &Record| {
        index.query(record.sequence().as_bytes(), mode);
    })
}

fn raw_search_criterion(c: &mut Criterion) {
    let index = get_index("./benches/data/ecoli_sa.bin");
    let records: Vec<Record> = get_records("./benches/data/mixed_queries.fasta");

    c.bench_function("naive search - no prefix table", |b| {
        b.iter(|| search_harness(black_box(QueryMode::Naive), &index, &records))
    });
    c.bench_function("simpaccel search - no prefix table", |b| {
        b.iter(|| search_harness(black_box(QueryMode::SimpleAccelerant), &index, &records))
    });
}

fn prefix_table_criterion(c: &mut Criterion) {
    let mut index = get_index("./benches/data/ecoli_sa.bin");
    let records: Vec<Record> = get_records("./benches/data/mixed_queries.fasta");

    for k in [1, 2, 3, 5, 8, 12] {
        index.set_prefix_table_k(k, false);
        c.bench_function(format!("naive search k={k}").as_str(), |b| {
            b.iter(|| search_harness(black_box(QueryMode::Naive), &index, &records))
        });
        c.bench_function(format!("simpaccel search k={k}").as_str(), |b| {
            b.iter(|| search_harness(black_box(QueryMode::SimpleAccelerant), &index, &records))
        });
    }
}

criterion_group!(benches, raw_search_criterion, prefix_table_criterion);
criterion_main!(benches);
