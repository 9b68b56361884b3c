//! Chart rendering and report output
//!
//! Every (metric kind, group) pair of an [`Aggregate`] becomes one SVG bar
//! chart. The raw report text is saved next to the charts as `output.txt`.

mod naming;

pub use naming::{chart_file_name, chart_title, chart_width, display_title, BAR_WIDTH, CHART_HEIGHT};

use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{Aggregate, MetricKind, MetricPoint};
use log::{debug, info};
use plotters::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the raw report dump inside the output directory
pub const RAW_OUTPUT_FILE: &str = "output.txt";

const TITLE_FONT_SIZE: u32 = 20;
const AXIS_FONT_SIZE: u32 = 14;
const LABEL_FONT_SIZE: u32 = 12;

/// Errors that can occur while writing charts or the raw report
#[derive(Error, Debug)]
pub enum RenderError {
    /// I/O error writing output
    #[error("I/O error writing {path}: {source}")]
    Io {
        /// File or directory being written
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Drawing a chart failed
    #[error("Failed to draw chart {path}: {message}")]
    Draw {
        /// Chart file
        path: PathBuf,
        /// Backend error message
        message: String,
    },
}

/// One chart to draw
#[derive(Debug)]
struct ChartJob<'a> {
    kind: MetricKind,
    title: String,
    path: PathBuf,
    points: &'a [MetricPoint],
}

/// Writes charts and the raw report into an output directory
pub struct ChartRenderer<FS: FileSystem = RealFileSystem> {
    output_dir: PathBuf,
    fs: FS,
}

impl ChartRenderer<RealFileSystem> {
    /// Create a renderer writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(output_dir, RealFileSystem)
    }
}

impl<FS: FileSystem> ChartRenderer<FS> {
    /// Create a renderer with a custom filesystem implementation
    pub fn with_fs(output_dir: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            output_dir: output_dir.into(),
            fs,
        }
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_dir(&self) -> Result<(), RenderError> {
        if self.fs.exists(&self.output_dir) {
            return Ok(());
        }
        debug!("Creating {}", self.output_dir.display());
        self.fs
            .create_dir_all(&self.output_dir)
            .map_err(|source| RenderError::Io {
                path: self.output_dir.clone(),
                source,
            })
    }

    /// Save the raw report as `output.txt`
    pub fn write_raw_output(&self, report: &str) -> Result<PathBuf, RenderError> {
        let path = self.output_dir.join(RAW_OUTPUT_FILE);
        self.fs
            .write(&path, report)
            .map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Paths of the charts [`render`](Self::render) would write, in render order
    #[cfg(test)]
    fn planned_charts(&self, aggregate: &Aggregate, grouped: bool) -> Vec<PathBuf> {
        self.jobs(aggregate, grouped)
            .into_iter()
            .map(|job| job.path)
            .collect()
    }

    fn jobs<'a>(&self, aggregate: &'a Aggregate, grouped: bool) -> Vec<ChartJob<'a>> {
        MetricKind::ALL
            .into_iter()
            .flat_map(|kind| {
                aggregate
                    .series(kind)
                    .iter()
                    .map(move |(group, points)| (kind, group, points))
            })
            .map(|(kind, group, points)| {
                let title = chart_title(group, kind, grouped);
                ChartJob {
                    kind,
                    path: self.output_dir.join(chart_file_name(&title)),
                    title: display_title(&title),
                    points,
                }
            })
            .collect()
    }

    /// Render one chart per (metric kind, group)
    ///
    /// `grouped` is false in implicit single-group mode, where titles omit the
    /// group name. Returns the paths written, in metric kind then group order.
    /// Charts are drawn in parallel, each into its own file.
    pub fn render(
        &self,
        aggregate: &Aggregate,
        grouped: bool,
    ) -> Result<Vec<PathBuf>, RenderError> {
        self.ensure_output_dir()?;

        let jobs = self.jobs(aggregate, grouped);
        let written = jobs
            .par_iter()
            .map(draw_chart)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Rendered {} chart(s) into {}",
            written.len(),
            self.output_dir.display()
        );
        Ok(written)
    }
}

fn draw_chart(job: &ChartJob<'_>) -> Result<PathBuf, RenderError> {
    let draw_err = |e: &dyn std::fmt::Display| RenderError::Draw {
        path: job.path.clone(),
        message: e.to_string(),
    };

    let bars = job.points.len();
    let max = job
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

    let root = SVGBackend::new(&job.path, (chart_width(bars), CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| draw_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&job.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .margin_top(60)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0..bars).into_segmented(), 0.0..y_max)
        .map_err(|e| draw_err(&e))?;

    let labels: Vec<&str> = job.points.iter().map(|p| p.label.as_str()).collect();
    let x_formatter = |x: &SegmentValue<usize>| match x {
        SegmentValue::CenterOf(i) => labels.get(*i).map(|l| l.to_string()).unwrap_or_default(),
        _ => String::new(),
    };
    let integer = job.kind.is_integer();
    let y_formatter = |y: &f64| {
        if integer {
            format!("{:.0}", y)
        } else {
            format!("{:.2}", y)
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.max(1))
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .y_desc(job.kind.unit())
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_FONT_SIZE))
        .draw()
        .map_err(|e| draw_err(&e))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(BAR_WIDTH / 4)
                .data(job.points.iter().enumerate().map(|(i, p)| (i, p.value))),
        )
        .map_err(|e| draw_err(&e))?;

    root.present().map_err(|e| draw_err(&e))?;
    debug!("Wrote {}", job.path.display());

    Ok(job.path.clone())
}
