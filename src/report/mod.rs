//! Benchmark report parsing and aggregation
//!
//! Turns the text printed by `go test -bench . -benchmem` into grouped metric
//! series. The parser reads the platform header, then decodes every result
//! line up to the `PASS` sentinel, resolves each benchmark to a group and a
//! short label, and appends its four metrics to the [`Aggregate`].

mod aggregate;
mod error;
mod group;
mod header;
mod line;
mod parser;
mod record;

pub use aggregate::{Aggregate, GroupSeries, MetricKind, MetricPoint};
pub use error::ReportError;
pub use group::{GroupResolver, Resolution, DEFAULT_GROUP};
pub use header::{split_key_value, ReportHeader};
pub use line::{LineKind, SENTINEL};
pub use parser::{MismatchPolicy, ReportParser};
pub use record::{BenchmarkRecord, Measurement};
