//! Console summary shared by `bench` and `parse`

use console::style;

use crate::fmt::{format_metric, CHART};
use crate::report::{Aggregate, MetricKind};

const LABEL_HEADING: &str = "case";

/// One table row: label followed by one cell per metric kind
pub(crate) type SummaryRow = [String; 5];

/// Rows for `group`, in series order
pub(crate) fn summary_rows(aggregate: &Aggregate, group: &str) -> Vec<SummaryRow> {
    let Some(points) = aggregate.series(MetricKind::Iterations).get(group) else {
        return Vec::new();
    };

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let cell = |kind: MetricKind| {
                aggregate
                    .series(kind)
                    .get(group)
                    .and_then(|points| points.get(index))
                    .map(|p| format_metric(p.value, kind))
                    .unwrap_or_default()
            };
            [
                point.label.clone(),
                cell(MetricKind::Iterations),
                cell(MetricKind::Time),
                cell(MetricKind::Bytes),
                cell(MetricKind::Allocations),
            ]
        })
        .collect()
}

/// Print the header and a table per group
pub(crate) fn print_summary(aggregate: &Aggregate) {
    let header = aggregate.header();
    println!(
        "{} {}/{} {}",
        CHART,
        style(&header.os).bold(),
        style(&header.arch).bold(),
        style(&header.cpu).dim()
    );

    let headings = [
        LABEL_HEADING,
        MetricKind::Iterations.title(),
        MetricKind::Time.title(),
        MetricKind::Bytes.title(),
        MetricKind::Allocations.title(),
    ];

    for group in aggregate.groups() {
        let rows = summary_rows(aggregate, group);
        let mut widths = headings.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        println!();
        println!("{}", style(group).cyan().bold());
        let heading_line = headings
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{:<w$}", h, w = w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", style(heading_line.trim_end()).dim());
        for row in &rows {
            let line = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    if i == 0 {
                        format!("{:<w$}", cell, w = w)
                    } else {
                        format!("{:>w$}", cell, w = w)
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            println!("  {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{MismatchPolicy, ReportParser};

    const REPORT: &str = "\
goos: linux
goarch: amd64
pkg: example.com/sorting
cpu: AMD Ryzen 7
BenchmarkSortQuick-8 1000 1200.5 ns/op 64 B/op 2 allocs/op
BenchmarkSortMerge-8 800 1500 ns/op 128 B/op 4 allocs/op
PASS
";

    #[test]
    fn test_summary_rows_follow_series_order() {
        let aggregate = ReportParser::new(vec!["Sort".to_string()], MismatchPolicy::Skip)
            .parse_str(REPORT)
            .unwrap();

        let rows = summary_rows(&aggregate, "Sort");

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            [
                "quick".to_string(),
                "1000".to_string(),
                "1200.50 ns/op".to_string(),
                "64 B/op".to_string(),
                "2 allocs/op".to_string(),
            ]
        );
        assert_eq!(rows[1][0], "merge");
    }

    #[test]
    fn test_summary_rows_unknown_group_is_empty() {
        let aggregate = ReportParser::new(vec!["Sort".to_string()], MismatchPolicy::Skip)
            .parse_str(REPORT)
            .unwrap();

        assert!(summary_rows(&aggregate, "Search").is_empty());
    }
}
