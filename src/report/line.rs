//! Data-section line classification

/// Marker printed by `go test` once every benchmark has finished
pub const SENTINEL: &str = "PASS";

/// What a line in the data section of a report is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// End of the data section; nothing after it is aggregated
    Sentinel,
    /// Empty or whitespace-only line
    Blank,
    /// Candidate benchmark record
    Record(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a data-section line
    pub fn classify(line: &'a str) -> Self {
        if line.contains(SENTINEL) {
            Self::Sentinel
        } else if line.trim().is_empty() {
            Self::Blank
        } else {
            Self::Record(line)
        }
    }
}
