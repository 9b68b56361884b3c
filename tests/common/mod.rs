//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for metric values and chart files
//! - Sample `go test -bench . -benchmem` reports
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_parse_saved_report() {
//!     let (_dir, report) = fixtures::write_report(fixtures::GROUPED_REPORT).unwrap();
//!     // run `benchgraph parse <report>`
//! }
//! ```

pub mod assertions;
pub mod fixtures;

/// Check if the Go toolchain is available
#[allow(dead_code)]
pub fn has_go() -> bool {
    which::which("go").is_ok()
}
