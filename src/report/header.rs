//! Report header (platform metadata) reading

use log::debug;
use serde::{Deserialize, Serialize};
use std::io;

/// Delimiter between key and value on a header line
const HEADER_DELIMITER: &str = ": ";

/// Platform metadata printed by `go test` before the first benchmark line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    /// Operating system (`goos`)
    pub os: String,
    /// Architecture (`goarch`)
    pub arch: String,
    /// Processor description (`cpu`)
    pub cpu: String,
}

impl ReportHeader {
    /// Read the four header lines from the front of a report
    ///
    /// Line one is the OS, line two the architecture, line three (the package
    /// path) is skipped and line four is the CPU. Lines are consumed whatever
    /// their content, so the source is left at the first data line. A short
    /// input leaves the remaining fields empty.
    pub fn read<I>(lines: &mut I) -> io::Result<Self>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let os = next_value(lines)?;
        let arch = next_value(lines)?;
        // package line
        lines.next().transpose()?;
        let cpu = next_value(lines)?;

        Ok(Self { os, arch, cpu })
    }
}

fn next_value<I>(lines: &mut I) -> io::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next().transpose()? {
        Some(line) => Ok(split_key_value(&line).1.to_string()),
        None => Ok(String::new()),
    }
}

/// Split a `key: value` line
///
/// Returns two empty strings unless the delimiter occurs exactly once.
pub fn split_key_value(line: &str) -> (&str, &str) {
    let mut parts = line.split(HEADER_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => (key, value),
        _ => {
            debug!("Malformed header line: '{}'", line);
            ("", "")
        }
    }
}
