//! Bench command implementation
//!
//! Handles `benchgraph bench`: runs the Go benchmarks of the current module,
//! saves the raw report and renders one chart per metric and group.

use anyhow::{Context, Result};
use console::style;
use std::env;

use super::parse::parse_report;
use super::summary::print_summary;
use crate::config::{ConfigLoader, ConfigOverrides};
use crate::error::BenchgraphError;
use crate::fmt::{CHECKMARK, ROCKET, SPARKLES};
use crate::render::ChartRenderer;
use crate::report::ReportParser;
use crate::runner::BenchRunner;

/// Run Go benchmarks and chart the results
///
/// # Examples
///
/// ```no_run
/// use benchgraph::cmd::cmd_bench;
/// use benchgraph::config::ConfigOverrides;
///
/// cmd_bench(ConfigOverrides {
///     groups: vec!["Sort".to_string(), "Search".to_string()],
///     ..ConfigOverrides::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_bench(overrides: ConfigOverrides) -> Result<()> {
    let project_root = env::current_dir().context("Failed to determine current directory")?;
    let config = ConfigLoader::load(&project_root)?.with_overrides(overrides);
    config
        .validate()
        .context("Invalid group configuration")?;

    println!(
        "{} {} Running Go benchmarks",
        ROCKET,
        style("benchgraph bench").bold()
    );

    let renderer = ChartRenderer::new(&config.output_dir);
    renderer
        .ensure_output_dir()
        .map_err(BenchgraphError::from)?;

    let runner = BenchRunner::new(&config.packages, &config.bench)
        .show_progress(console::user_attended());
    let report = runner.run().map_err(BenchgraphError::from)?;

    let raw_path = renderer
        .write_raw_output(&report)
        .map_err(BenchgraphError::from)?;

    let parser = ReportParser::new(config.groups.clone(), config.on_group_mismatch);
    let aggregate = parse_report(&parser, &report, "go test output")?;

    println!();
    print_summary(&aggregate);

    let charts = renderer
        .render(&aggregate, !parser.resolver().is_implicit())
        .map_err(BenchgraphError::from)?;

    println!();
    println!(
        "{} Saved raw report to {}",
        CHECKMARK,
        style(raw_path.display()).cyan()
    );
    println!(
        "{} Wrote {} chart(s) to {}",
        SPARKLES,
        charts.len(),
        style(config.output_dir.display()).cyan().bold()
    );

    Ok(())
}
