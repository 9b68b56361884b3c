//! Test assertion helpers
//!
//! Provides utilities for robust test assertions on parsed metric values and
//! rendered chart files.

use std::fs;
use std::path::Path;

/// Assert that two floating-point values are approximately equal
///
/// Use this instead of `assert_eq!` for f64/f32 comparisons to avoid
/// floating-point precision issues.
///
/// # Examples
///
/// ```
/// # use benchgraph_tests::assertions::assert_approx_eq;
/// assert_approx_eq(time_per_op, 13.4, 1e-9);
/// ```
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that `path` is an SVG document containing every snippet in `texts`
#[allow(dead_code)]
pub fn assert_svg_contains(path: &Path, texts: &[&str]) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read chart {}: {}", path.display(), e));
    assert!(
        content.contains("<svg"),
        "{} is not an SVG document",
        path.display()
    );
    for text in texts {
        assert!(
            content.contains(text),
            "{} does not contain {:?}",
            path.display(),
            text
        );
    }
}
