//! Parse command implementation
//!
//! Handles `benchgraph parse`, which reads a saved `go test -bench -benchmem`
//! report (or stdin), prints a summary or JSON, and can render charts.

use anyhow::{Context, Result};
use console::style;
use log::{info, warn};
use std::env;
use std::io::{self, Read};
use std::path::Path;

use super::summary::print_summary;
use crate::config::{ConfigLoader, ConfigOverrides};
use crate::error::BenchgraphError;
use crate::fmt::CHECKMARK;
use crate::infra::{FileSystem, RealFileSystem};
use crate::render::ChartRenderer;
use crate::report::{Aggregate, MetricKind, ReportParser};

/// Input argument meaning "read the report from stdin"
pub const STDIN_INPUT: &str = "-";

/// Options for `benchgraph parse`
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Report file, or `-` for stdin
    pub input: String,
    /// Values overriding `.benchgraph.toml`
    pub overrides: ConfigOverrides,
    /// Print the aggregate as JSON instead of a table
    pub json: bool,
    /// Also write charts and `output.txt`
    pub render: bool,
}

/// Parse a saved benchmark report
///
/// # Examples
///
/// ```no_run
/// use benchgraph::cmd::{cmd_parse, ParseOptions};
///
/// cmd_parse(ParseOptions {
///     input: "bench.txt".to_string(),
///     render: true,
///     ..ParseOptions::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_parse(options: ParseOptions) -> Result<()> {
    let project_root = env::current_dir().context("Failed to determine current directory")?;
    let config = ConfigLoader::load(&project_root)?.with_overrides(options.overrides);
    config
        .validate()
        .context("Invalid group configuration")?;

    let report = read_report(&options.input, &RealFileSystem)?;
    let parser = ReportParser::new(config.groups.clone(), config.on_group_mismatch);
    let aggregate = parse_report(&parser, &report, source_name(&options.input))?;

    if options.json {
        let json = serde_json::to_string_pretty(&aggregate)
            .context("Failed to serialize benchmark results")?;
        println!("{}", json);
    } else {
        print_summary(&aggregate);
    }

    if options.render {
        let renderer = ChartRenderer::new(&config.output_dir);
        renderer
            .ensure_output_dir()
            .map_err(BenchgraphError::from)?;
        renderer
            .write_raw_output(&report)
            .map_err(BenchgraphError::from)?;
        let charts = renderer
            .render(&aggregate, !parser.resolver().is_implicit())
            .map_err(BenchgraphError::from)?;

        // Keep stdout valid JSON
        if options.json {
            info!("Wrote {} chart(s) to {}", charts.len(), config.output_dir.display());
        } else {
            println!();
            println!(
                "{} Wrote {} chart(s) to {}",
                CHECKMARK,
                charts.len(),
                style(config.output_dir.display()).cyan()
            );
        }
    }

    Ok(())
}

/// Read the whole report from a file or stdin
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn read_report<FS: FileSystem>(input: &str, fs: &FS) -> Result<String> {
    if input == STDIN_INPUT {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|source| BenchgraphError::Io {
                context: "reading report from stdin".to_string(),
                source,
            })?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    let path = Path::new(input);
    if !fs.exists(path) {
        return Err(BenchgraphError::InputNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let bytes = fs.read(path).map_err(|source| BenchgraphError::Io {
        context: format!("reading {}", path.display()),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse `report`, treating an aggregate with no records as an error
pub(crate) fn parse_report(
    parser: &ReportParser,
    report: &str,
    source_name: &str,
) -> Result<Aggregate> {
    let aggregate = parser.parse_str(report).map_err(BenchgraphError::from)?;

    if aggregate.is_empty() {
        return Err(BenchgraphError::NoBenchmarks {
            source_name: source_name.to_string(),
            grouped: !parser.resolver().is_implicit(),
        }
        .into());
    }

    warn_unmatched_groups(parser, &aggregate);
    Ok(aggregate)
}

fn warn_unmatched_groups(parser: &ReportParser, aggregate: &Aggregate) {
    let matched = aggregate.series(MetricKind::Iterations);
    for group in parser.resolver().groups() {
        if !matched.contains_key(group) {
            warn!("No benchmark matched group '{}'", group);
        }
    }
}

fn source_name(input: &str) -> &str {
    if input == STDIN_INPUT {
        "stdin"
    } else {
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MismatchPolicy;
    use tempfile::TempDir;

    const REPORT: &str = "\
goos: darwin
goarch: arm64
pkg: example.com/search
cpu: Apple M1
BenchmarkSearchLinear-8 5000 300 ns/op 0 B/op 0 allocs/op
PASS
";

    #[test]
    fn test_read_report_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.txt");
        std::fs::write(&path, REPORT).unwrap();

        let report = read_report(path.to_str().unwrap(), &RealFileSystem).unwrap();

        assert_eq!(report, REPORT);
    }

    #[test]
    fn test_read_report_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.txt");
        let mut bytes = REPORT.as_bytes().to_vec();
        bytes.extend_from_slice(b"trailing \xff log\n");
        std::fs::write(&path, bytes).unwrap();

        let report = read_report(path.to_str().unwrap(), &RealFileSystem).unwrap();

        assert!(report.starts_with(REPORT));
        assert!(report.ends_with("trailing \u{FFFD} log\n"));
    }

    #[test]
    fn test_read_report_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = read_report(path.to_str().unwrap(), &RealFileSystem).unwrap_err();

        let bg_error = err.downcast_ref::<BenchgraphError>().unwrap();
        assert!(matches!(bg_error, BenchgraphError::InputNotFound { .. }));
        assert_eq!(bg_error.exit_code(), 66);
    }

    #[test]
    fn test_parse_report_rejects_empty_aggregate() {
        let parser = ReportParser::new(vec!["Sort".to_string()], MismatchPolicy::Skip);

        let err = parse_report(&parser, REPORT, "bench.txt").unwrap_err();

        match err.downcast_ref::<BenchgraphError>().unwrap() {
            BenchgraphError::NoBenchmarks {
                source_name,
                grouped,
            } => {
                assert_eq!(source_name, "bench.txt");
                assert!(*grouped);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_report_implicit_group() {
        let parser = ReportParser::default();

        let aggregate = parse_report(&parser, REPORT, "stdin").unwrap();

        let times = &aggregate.series(MetricKind::Time)["default_group"];
        assert_eq!(times[0].label, "searchlinear");
        assert_eq!(times[0].value, 300.0);
    }

    #[test]
    fn test_parse_report_abort_propagates_report_error() {
        let parser = ReportParser::new(vec!["Sort".to_string()], MismatchPolicy::Abort);

        let err = parse_report(&parser, REPORT, "stdin").unwrap_err();

        let bg_error = err.downcast_ref::<BenchgraphError>().unwrap();
        assert!(matches!(bg_error, BenchgraphError::Report(_)));
    }

    #[test]
    fn test_source_name_for_stdin() {
        assert_eq!(source_name("-"), "stdin");
        assert_eq!(source_name("bench.txt"), "bench.txt");
    }
}
