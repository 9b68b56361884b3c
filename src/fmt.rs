//! Shared formatting utilities for metric display and console output

use console::Emoji;

use crate::report::MetricKind;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Format a metric value with its unit
///
/// Counts are printed without decimals, times keep two.
///
/// # Examples
///
/// ```
/// use benchgraph::fmt::format_metric;
/// use benchgraph::report::MetricKind;
///
/// assert_eq!(format_metric(1_000_000.0, MetricKind::Iterations), "1000000");
/// assert_eq!(format_metric(57.25, MetricKind::Time), "57.25 ns/op");
/// assert_eq!(format_metric(64.0, MetricKind::Bytes), "64 B/op");
/// ```
pub fn format_metric(value: f64, kind: MetricKind) -> String {
    let number = if kind.is_integer() {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    match kind.unit() {
        "" => number,
        unit => format!("{} {}", number, unit),
    }
}
