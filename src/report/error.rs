//! Error types for benchmark report parsing

use thiserror::Error;

/// Errors that can occur while parsing a benchmark report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Reading from the line source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line does not have the expected token shape or types
    #[error("Malformed benchmark record: '{line}'")]
    RecordMalformed {
        /// Raw line as read from the report
        line: String,
    },

    /// The benchmark identifier matches none of the configured groups
    #[error("Could not extract bench group from: {identifier}")]
    GroupNotFound {
        /// Raw benchmark identifier
        identifier: String,
    },
}

impl ReportError {
    /// Whether the mismatch policy applies to this error
    ///
    /// I/O failures are always fatal; record and group failures may be skipped.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::RecordMalformed { .. } | Self::GroupNotFound { .. }
        )
    }
}
