//! Line-oriented report parser

use super::aggregate::Aggregate;
use super::error::ReportError;
use super::group::{GroupResolver, Resolution};
use super::header::ReportHeader;
use super::line::LineKind;
use super::record::BenchmarkRecord;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead};

/// What to do with a record that cannot be decoded or matched to a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Drop the record and keep parsing
    #[default]
    Skip,
    /// Fail the whole parse
    Abort,
}

/// Parses `go test -bench -benchmem` output into an [`Aggregate`]
///
/// The parser makes one forward pass: four header lines, then data lines
/// until the `PASS` sentinel or end of input. Each parse builds its own
/// aggregate, so a parser can be reused.
///
/// # Examples
///
/// ```
/// use benchgraph::report::{MetricKind, MismatchPolicy, ReportParser};
///
/// let report = "\
/// goos: linux
/// goarch: amd64
/// pkg: example.com/bench
/// cpu: Intel(R) Core(TM) i7
/// BenchmarkGroupAFoo-4 100 50.0 ns/op 10 B/op 1 allocs/op
/// BenchmarkGroupBBar-4 200 25.0 ns/op 20 B/op 2 allocs/op
/// PASS
/// ";
///
/// let parser = ReportParser::new(
///     vec!["GroupA".to_string(), "GroupB".to_string()],
///     MismatchPolicy::Skip,
/// );
/// let aggregate = parser.parse_str(report)?;
///
/// assert_eq!(aggregate.header().os, "linux");
/// let iterations = aggregate.series(MetricKind::Iterations);
/// assert_eq!(iterations["GroupA"][0].label, "foo");
/// assert_eq!(iterations["GroupB"][0].value, 200.0);
/// # Ok::<(), benchgraph::report::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    resolver: GroupResolver,
    policy: MismatchPolicy,
}

impl ReportParser {
    /// Create a parser for the given ordered groups and mismatch policy
    pub fn new(groups: Vec<String>, policy: MismatchPolicy) -> Self {
        Self {
            resolver: GroupResolver::new(groups),
            policy,
        }
    }

    /// Group resolver used for every record
    pub fn resolver(&self) -> &GroupResolver {
        &self.resolver
    }

    /// Configured mismatch policy
    pub fn policy(&self) -> MismatchPolicy {
        self.policy
    }

    /// Parse a report held in memory
    pub fn parse_str(&self, report: &str) -> Result<Aggregate, ReportError> {
        self.parse(report.as_bytes())
    }

    /// Parse a report from a line source
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, or if a record is malformed or
    /// matches no group while the policy is [`MismatchPolicy::Abort`]. Bytes
    /// that are not valid UTF-8 are replaced with U+FFFD, so such a line is
    /// handled like any other malformed record.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Aggregate, ReportError> {
        let mut lines = LossyLines::new(reader);
        let header = ReportHeader::read(&mut lines)?;
        debug!(
            "Report header: os='{}' arch='{}' cpu='{}'",
            header.os, header.arch, header.cpu
        );

        let mut aggregate = Aggregate::new(header);
        let mut skipped = 0usize;

        for line in lines {
            let line = line?;
            let text = match LineKind::classify(&line) {
                LineKind::Sentinel => {
                    debug!("Reached end of benchmark data");
                    break;
                }
                LineKind::Blank => continue,
                LineKind::Record(text) => text,
            };

            match self.decode(text) {
                Ok((resolution, record)) => aggregate.commit(resolution, &record),
                Err(err) if err.is_skippable() && self.policy == MismatchPolicy::Skip => {
                    warn!("Skipping benchmark line: {}", err);
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "Parsed {} benchmark(s) in {} group(s), skipped {}",
            aggregate.record_count(),
            aggregate.group_count(),
            skipped
        );

        Ok(aggregate)
    }

    fn decode(&self, line: &str) -> Result<(Resolution, BenchmarkRecord), ReportError> {
        let record = BenchmarkRecord::decode(line)?;
        let resolution = self.resolver.resolve(&record.identifier)?;
        Ok((resolution, record))
    }
}

/// Lines of a reader with invalid UTF-8 replaced instead of rejected
struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
