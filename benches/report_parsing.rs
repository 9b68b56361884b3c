//! Report Parsing Benchmarks
//!
//! **Purpose:** Measure performance of turning `go test -bench -benchmem`
//! output into group-keyed series
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench report_parsing
//! ```
//!
//! **What's Being Measured:**
//! 1. `decode record` - Tokenizing and typing one data line
//! 2. `resolve group` - Substring group match plus label derivation
//! 3. `parse report` - Full pass over reports of increasing size
//!
//! **Performance Notes:**
//! - Parsing is one forward pass; cost should grow linearly with line count
//! - Label derivation uses a cached regex for the `-<procs>` suffix

use benchgraph::report::{BenchmarkRecord, GroupResolver, MismatchPolicy, ReportParser};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const GROUPS: [&str; 4] = ["Sort", "Search", "Hash", "Encode"];
const LINE: &str =
    "BenchmarkSearchBinary-16        90000000             13.40 ns/op               0 B/op          0 allocs/op";

fn build_report(records: usize) -> String {
    let mut report = String::from(
        "goos: linux\ngoarch: amd64\npkg: example.com/algorithms\ncpu: AMD Ryzen 7 5800X\n",
    );
    for i in 0..records {
        let group = GROUPS[i % GROUPS.len()];
        report.push_str(&format!(
            "Benchmark{}Case{}-16   {}   {}.5 ns/op   {} B/op   {} allocs/op\n",
            group,
            i,
            1000 + i,
            i,
            i * 8,
            i % 5
        ));
    }
    report.push_str("PASS\nok      example.com/algorithms  1.000s\n");
    report
}

fn bench_decode_record(c: &mut Criterion) {
    c.bench_function("decode record", |b| {
        b.iter(|| black_box(BenchmarkRecord::decode(black_box(LINE))).unwrap());
    });
}

fn bench_resolve_group(c: &mut Criterion) {
    let resolver = GroupResolver::new(GROUPS.iter().map(|g| g.to_string()).collect());
    c.bench_function("resolve group", |b| {
        b.iter(|| black_box(resolver.resolve(black_box("BenchmarkSearchBinary-16"))).unwrap());
    });
}

fn bench_parse_report(c: &mut Criterion) {
    let parser = ReportParser::new(
        GROUPS.iter().map(|g| g.to_string()).collect(),
        MismatchPolicy::Skip,
    );

    let mut group = c.benchmark_group("parse report");
    for records in [10, 100, 1000] {
        let report = build_report(records);
        group.throughput(Throughput::Elements(records as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &report, |b, report| {
            b.iter(|| black_box(parser.parse_str(black_box(report))).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_record,
    bench_resolve_group,
    bench_parse_report
);
criterion_main!(benches);
