//! Benchmark record decoding

use super::aggregate::MetricKind;
use super::error::ReportError;

/// Number of whitespace-separated tokens on a `-benchmem` result line
const RECORD_TOKENS: usize = 8;

/// A numeric value with the unit token printed after it
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Parsed value
    pub value: f64,
    /// Unit as printed (`ns/op`, `B/op`, `allocs/op`); not validated
    pub unit: String,
}

/// One decoded benchmark result line
///
/// ```
/// use benchgraph::report::BenchmarkRecord;
///
/// let record = BenchmarkRecord::decode(
///     "BenchmarkGroupAFoo-4   100   50.0 ns/op   10 B/op   1 allocs/op",
/// )?;
/// assert_eq!(record.identifier, "BenchmarkGroupAFoo-4");
/// assert_eq!(record.iterations, 100.0);
/// assert_eq!(record.time.unit, "ns/op");
/// # Ok::<(), benchgraph::report::ReportError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Raw benchmark identifier, e.g. `BenchmarkFibonacciLoop-8`
    pub identifier: String,
    /// Iteration count, carried as a float like the other series
    pub iterations: f64,
    /// Time per operation
    pub time: Measurement,
    /// Bytes allocated per operation
    pub bytes: Measurement,
    /// Allocations per operation
    pub allocs: Measurement,
}

impl BenchmarkRecord {
    /// Decode a data line into its eight fields
    ///
    /// Fails with [`ReportError::RecordMalformed`] when the token count is not
    /// eight or a numeric token does not parse to a finite number.
    pub fn decode(line: &str) -> Result<Self, ReportError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != RECORD_TOKENS {
            return Err(malformed(line));
        }

        let number = |token: &str| {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| malformed(line))
        };
        let measurement = |value: &str, unit: &str| -> Result<Measurement, ReportError> {
            Ok(Measurement {
                value: number(value)?,
                unit: unit.to_string(),
            })
        };

        Ok(Self {
            identifier: tokens[0].to_string(),
            iterations: number(tokens[1])?,
            time: measurement(tokens[2], tokens[3])?,
            bytes: measurement(tokens[4], tokens[5])?,
            allocs: measurement(tokens[6], tokens[7])?,
        })
    }

    /// Value of one metric kind
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Iterations => self.iterations,
            MetricKind::Time => self.time.value,
            MetricKind::Bytes => self.bytes.value,
            MetricKind::Allocations => self.allocs.value,
        }
    }
}

fn malformed(line: &str) -> ReportError {
    ReportError::RecordMalformed {
        line: line.to_string(),
    }
}
