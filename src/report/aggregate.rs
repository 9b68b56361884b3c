//! Group-keyed metric series built from a report

use super::group::Resolution;
use super::header::ReportHeader;
use super::record::BenchmarkRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Quantity measured for every benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Number of iterations the benchmark ran
    Iterations,
    /// Nanoseconds per operation
    Time,
    /// Bytes allocated per operation
    Bytes,
    /// Allocations per operation
    Allocations,
}

impl MetricKind {
    /// Every metric kind, in series order
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Iterations,
        MetricKind::Time,
        MetricKind::Bytes,
        MetricKind::Allocations,
    ];

    /// Unit as printed by `go test -benchmem`, empty for iterations
    pub fn unit(self) -> &'static str {
        match self {
            Self::Iterations => "",
            Self::Time => "ns/op",
            Self::Bytes => "B/op",
            Self::Allocations => "allocs/op",
        }
    }

    /// Chart title for this kind
    pub fn title(self) -> &'static str {
        match self {
            Self::Iterations => "Iterations",
            Self::Time => "Speed",
            Self::Bytes => "Memory Per Operation",
            Self::Allocations => "Memory Allocations",
        }
    }

    /// Whether values of this kind are whole numbers
    pub fn is_integer(self) -> bool {
        !matches!(self, Self::Time)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iterations => f.write_str("iterations"),
            kind => f.write_str(kind.unit()),
        }
    }
}

/// One bar of a chart: a benchmark label and its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Short display label
    pub label: String,
    /// Measured value
    pub value: f64,
}

/// Series of points per group name
pub type GroupSeries = BTreeMap<String, Vec<MetricPoint>>;

/// Result of parsing one report
///
/// Holds the header and four group-keyed series, one per [`MetricKind`]. Every
/// committed record adds one point to all four series, so each group has the
/// same number of points in every series. Groups iterate in name order and
/// points in report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    header: ReportHeader,
    iterations: GroupSeries,
    time: GroupSeries,
    bytes: GroupSeries,
    allocations: GroupSeries,
}

impl Aggregate {
    pub(crate) fn new(header: ReportHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Platform metadata from the report header
    pub fn header(&self) -> &ReportHeader {
        &self.header
    }

    /// Group-keyed series for one metric kind
    pub fn series(&self, kind: MetricKind) -> &GroupSeries {
        match kind {
            MetricKind::Iterations => &self.iterations,
            MetricKind::Time => &self.time,
            MetricKind::Bytes => &self.bytes,
            MetricKind::Allocations => &self.allocations,
        }
    }

    fn series_mut(&mut self, kind: MetricKind) -> &mut GroupSeries {
        match kind {
            MetricKind::Iterations => &mut self.iterations,
            MetricKind::Time => &mut self.time,
            MetricKind::Bytes => &mut self.bytes,
            MetricKind::Allocations => &mut self.allocations,
        }
    }

    /// Group names, sorted
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.iterations.keys().map(String::as_str)
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.iterations.len()
    }

    /// Number of committed records across all groups
    pub fn record_count(&self) -> usize {
        self.iterations.values().map(Vec::len).sum()
    }

    /// Whether no record was committed
    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    /// Append one record to all four series of its group
    pub(crate) fn commit(&mut self, resolution: Resolution, record: &BenchmarkRecord) {
        let Resolution { group, label } = resolution;

        for kind in MetricKind::ALL {
            self.series_mut(kind)
                .entry(group.clone())
                .or_default()
                .push(MetricPoint {
                    label: label.clone(),
                    value: record.value(kind),
                });
        }
    }
}
