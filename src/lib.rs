#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! benchgraph library
//!
//! This library parses the text printed by `go test -bench . -benchmem` into
//! group-keyed metric series and renders them as bar charts. It can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Parsing a report into an aggregate:
//!
//! ```
//! use benchgraph::report::{MetricKind, MismatchPolicy, ReportParser};
//!
//! let report = "\
//! goos: linux
//! goarch: amd64
//! pkg: example.com/sorting
//! cpu: AMD Ryzen 7 5800X
//! BenchmarkSortQuick-16     1000000      1052 ns/op     0 B/op    0 allocs/op
//! BenchmarkSortMerge-16      500000      2210 ns/op   896 B/op    7 allocs/op
//! BenchmarkSearchBinary-16 90000000     13.40 ns/op     0 B/op    0 allocs/op
//! PASS
//! ok      example.com/sorting     4.120s
//! ";
//!
//! let parser = ReportParser::new(
//!     vec!["Sort".to_string(), "Search".to_string()],
//!     MismatchPolicy::Skip,
//! );
//! let aggregate = parser.parse_str(report)?;
//!
//! assert_eq!(aggregate.group_count(), 2);
//! let bytes = &aggregate.series(MetricKind::Bytes)["Sort"];
//! assert_eq!(bytes[1].label, "merge");
//! assert_eq!(bytes[1].value, 896.0);
//! # Ok::<(), benchgraph::report::ReportError>(())
//! ```
//!
//! # Advanced Example: Rendering Charts
//!
//! Writing one SVG chart per metric and group:
//!
//! ```
//! use benchgraph::render::ChartRenderer;
//! use benchgraph::report::ReportParser;
//! use tempfile::TempDir;
//!
//! let report = "\
//! goos: linux
//! goarch: amd64
//! pkg: example.com/fib
//! cpu: AMD Ryzen 7 5800X
//! BenchmarkFibRecursive-16   3000   412000 ns/op   0 B/op   0 allocs/op
//! PASS
//! ";
//!
//! let aggregate = ReportParser::default().parse_str(report).unwrap();
//! let output = TempDir::new().unwrap();
//!
//! let renderer = ChartRenderer::new(output.path());
//! let charts = renderer.render(&aggregate, false).unwrap();
//!
//! assert_eq!(charts.len(), 4);
//! assert!(output.path().join("speed.svg").exists());
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Chart rendering and output files
pub mod render;
/// Benchmark report parsing and aggregation
pub mod report;
/// Go benchmark execution
pub mod runner;
/// Tool detection and version checking
pub mod tools;
