//! Benchmarks: DFQ parse and write throughput
//!
//! A synthetic document with parts, characteristics and both keyed and binary
//! measured values is parsed and written back.

use std::fmt::Write as _;
use std::hint::black_box;

use aqdef::{DfqParser, DfqWriter};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

const DATA: char = '\u{14}';
const NEXT: char = '\u{0F}';

/// DFQ document with `parts` parts of `characteristics` characteristics and `rows` value rows each
fn synthetic_document(parts: u32, characteristics: u32, rows: u32) -> String {
    let mut dfq = String::new();
    let _ = writeln!(dfq, "K0100 {}", parts * characteristics);

    let mut characteristic = 0;
    for part in 1..=parts {
        let _ = writeln!(dfq, "K1001/{} PART-{}", part, part);
        let _ = writeln!(dfq, "K1002/{} Synthetic part {}", part, part);
        let first = characteristic + 1;
        for _ in 0..characteristics {
            characteristic += 1;
            let _ = writeln!(dfq, "K2001/{} C{}", characteristic, characteristic);
            let _ = writeln!(dfq, "K2002/{} Diameter {}", characteristic, characteristic);
            let _ = writeln!(dfq, "K2110/{} 9,95", characteristic);
            let _ = writeln!(dfq, "K2111/{} 10,05", characteristic);
        }

        for row in 0..rows {
            // every other row uses the binary form
            if row % 2 == 0 {
                let packets: Vec<String> = (first..=characteristic)
                    .map(|_| format!("10.{:02}{d}0{d}04.07.2023/12:30:00", row % 100, d = DATA))
                    .collect();
                let _ = writeln!(dfq, "{}", packets.join(&NEXT.to_string()));
            } else {
                for index in first..=characteristic {
                    let _ = writeln!(dfq, "K0001/{} 9.{:02}", index, row % 100);
                    let _ = writeln!(dfq, "K0004/{} 04.07.2023/12:31:00", index);
                }
            }
        }
    }
    dfq
}

fn bench_parse(c: &mut Criterion) {
    let document = synthetic_document(4, 25, 100);
    let parser = DfqParser::new();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("synthetic_4x25x100", |b| {
        b.iter(|| parser.parse_str(black_box(&document)))
    });
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let document = synthetic_document(4, 25, 100);
    let model = match DfqParser::new().parse_str(&document) {
        Ok(model) => model,
        Err(error) => panic!("synthetic document does not parse: {}", error),
    };
    let writer = DfqWriter::new();

    let mut group = c.benchmark_group("write");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("synthetic_4x25x100", |b| {
        b.iter(|| {
            let mut model = model.clone();
            writer.write_to_string(black_box(&mut model))
        })
    });
    group.bench_function("normalized_only", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(document.len());
            writer.write_normalized_to(black_box(&model), &mut buffer)
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK GROUPS
// =============================================================================

criterion_group!(benches, bench_parse, bench_write);
criterion_main!(benches);
