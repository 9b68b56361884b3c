//! Sample benchmark reports and helpers to put them on disk

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Report with two groups (`Sort`, `Search`), a trailing summary and an
/// unrelated benchmark
pub const GROUPED_REPORT: &str = "\
goos: linux
goarch: amd64
pkg: example.com/algorithms
cpu: AMD Ryzen 7 5800X 8-Core Processor
BenchmarkSortQuick-16            1000000              1052 ns/op               0 B/op          0 allocs/op
BenchmarkSortMerge-16             500000              2210 ns/op             896 B/op          7 allocs/op
BenchmarkSearchBinary-16        90000000             13.40 ns/op               0 B/op          0 allocs/op
BenchmarkSearchLinear-16         5000000             250.5 ns/op               0 B/op          0 allocs/op
BenchmarkHashFNV-16             20000000             61.20 ns/op               8 B/op          1 allocs/op
PASS
ok      example.com/algorithms  6.021s
";

/// Report whose benchmarks all belong to one implicit group
pub const SIMPLE_REPORT: &str = "\
goos: darwin
goarch: arm64
pkg: example.com/fib
cpu: Apple M1
BenchmarkFibRecursive-8             3000            412000 ns/op               0 B/op          0 allocs/op
BenchmarkFibLoop-8              50000000             24.10 ns/op               0 B/op          0 allocs/op
PASS
ok      example.com/fib 3.210s
";

/// Report with a line that does not have the eight expected fields
pub const MALFORMED_REPORT: &str = "\
goos: linux
goarch: amd64
pkg: example.com/algorithms
cpu: AMD Ryzen 7 5800X 8-Core Processor
BenchmarkSortQuick-16            1000000              1052 ns/op               0 B/op          0 allocs/op
BenchmarkSortBroken-16           1000000              1052 ns/op
BenchmarkSortMerge-16             500000              2210 ns/op             896 B/op          7 allocs/op
PASS
";

/// Report with a header but no benchmark lines
pub const EMPTY_REPORT: &str = "\
goos: linux
goarch: amd64
pkg: example.com/empty
cpu: AMD Ryzen 7 5800X 8-Core Processor
PASS
ok      example.com/empty       0.004s
";

/// Write `report` to `bench.txt` in a fresh temp directory
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the report) - the TempDir must be kept alive
pub fn write_report(report: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bench.txt");
    fs::write(&path, report)?;
    Ok((temp_dir, path))
}
