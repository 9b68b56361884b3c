//! Chart titles, file names and sizes

use crate::report::MetricKind;

/// Width of one bar in pixels
pub const BAR_WIDTH: u32 = 60;

/// Chart height in pixels
pub const CHART_HEIGHT: u32 = 512;

/// Horizontal room given to each bar besides the bar itself
const BAR_SPACING: u32 = 150;

/// Raw chart title for one (group, metric kind) pair
///
/// The group name is only part of the title when groups were configured.
pub fn chart_title(group: &str, kind: MetricKind, grouped: bool) -> String {
    if grouped {
        format!("{} {}", group, kind.title())
    } else {
        kind.title().to_string()
    }
}

/// Split camel-case words for display
///
/// A space is inserted before an upper-case letter that directly follows a
/// lower-case letter or a digit, so `GroupA Speed` becomes `Group A Speed`.
pub fn display_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len() + 4);
    let mut prev: Option<char> = None;

    for c in title.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// File name (without directory) for a chart title
pub fn chart_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .collect();
    format!("{}.svg", stem.to_lowercase())
}

/// Chart width for the given number of bars
pub fn chart_width(bars: usize) -> u32 {
    let bars = u32::try_from(bars.max(1)).unwrap_or(u32::MAX / (BAR_SPACING + BAR_WIDTH));
    bars.saturating_mul(BAR_SPACING + BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_title_includes_group_only_when_grouped() {
        assert_eq!(chart_title("Sort", MetricKind::Time, true), "Sort Speed");
        assert_eq!(
            chart_title("default_group", MetricKind::Bytes, false),
            "Memory Per Operation"
        );
    }

    #[test]
    fn test_display_title_splits_camel_case() {
        assert_eq!(display_title("GroupA Speed"), "Group A Speed");
        assert_eq!(display_title("HashMap Iterations"), "Hash Map Iterations");
        assert_eq!(display_title("Memory Allocations"), "Memory Allocations");
        assert_eq!(display_title("Utf8Decode"), "Utf8 Decode");
    }

    #[test]
    fn test_chart_file_name_replaces_separators() {
        assert_eq!(chart_file_name("Sort Speed"), "sort_speed.svg");
        assert_eq!(chart_file_name("IO/Read Iterations"), "io_read_iterations.svg");
    }

    #[test]
    fn test_chart_width_scales_with_bars() {
        assert_eq!(chart_width(0), 210);
        assert_eq!(chart_width(1), 210);
        assert_eq!(chart_width(4), 840);
    }
}
