//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Documentation links
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use benchgraph::error::BenchgraphError;
//! use benchgraph::report::ReportError;
//!
//! let error = BenchgraphError::from(ReportError::GroupNotFound {
//!     identifier: "BenchmarkParseJSON-8".to_string(),
//! });
//!
//! assert!(error.to_string().contains("BenchmarkParseJSON-8"));
//! assert_eq!(error.exit_code(), 65);
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::render::RenderError;
use crate::report::ReportError;
use crate::tools::ToolError;

const GO_INSTALL_DOCS: &str = "https://go.dev/doc/install";
const GO_BENCHMARK_DOCS: &str = "https://pkg.go.dev/testing#hdr-Benchmarks";

/// benchgraph errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BenchgraphError {
    /// Running or locating an external tool failed
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The benchmark report could not be parsed
    #[error("Failed to parse benchmark report: {0}")]
    Report(#[from] ReportError),

    /// Writing charts or the raw report failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The report contained no usable benchmark lines
    #[error("No benchmark results found in {source_name}")]
    NoBenchmarks {
        /// Where the report came from (file path, stdin, `go test`)
        source_name: String,
        /// Whether groups were configured
        grouped: bool,
    },

    /// Report file given on the command line does not exist
    #[error("Report file not found: {path}")]
    InputNotFound {
        /// Missing path
        path: PathBuf,
    },

    /// `init` would overwrite an existing configuration
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Existing config file
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BenchgraphError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchgraph::error::BenchgraphError;
    /// use benchgraph::tools::ToolError;
    ///
    /// let error = BenchgraphError::from(ToolError::MissingTool("go".to_string()));
    /// assert!(error.suggestion().unwrap().contains("Go toolchain"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Tool(ToolError::MissingTool(tool)) => Some(format!(
                "Install the Go toolchain and make sure `{}` is on your PATH",
                tool
            )),
            Self::Tool(ToolError::CommandFailed { .. }) => Some(
                "Fix the failing tests or compile errors shown above, then run again".to_string(),
            ),
            Self::Tool(_) => Some("Check that `go version` works in this shell".to_string()),
            Self::Report(ReportError::GroupNotFound { .. }) => Some(
                "Add a matching --group, or set on-group-mismatch = \"skip\" in .benchgraph.toml"
                    .to_string(),
            ),
            Self::Report(ReportError::RecordMalformed { .. }) => Some(
                "Expected `go test -bench . -benchmem` output; drop --abort-on-mismatch to skip odd lines"
                    .to_string(),
            ),
            Self::Report(ReportError::Io(_)) => {
                Some("Check that the report can be read completely".to_string())
            }
            Self::Render(_) => Some(
                "Check that the output directory is writable (see --output-dir)".to_string(),
            ),
            Self::NoBenchmarks { grouped, .. } => {
                if *grouped {
                    Some("No benchmark matched the configured groups. Check --group values and the -bench pattern".to_string())
                } else {
                    Some("Make sure the package has Benchmark functions and the -bench pattern matches them".to_string())
                }
            }
            Self::InputNotFound { path } => Some(format!(
                "Capture a report first: go test -bench . -benchmem > {}",
                path.display()
            )),
            Self::ConfigExists { path } => Some(format!(
                "Edit {} directly or delete it to start over",
                path.display()
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::Tool(ToolError::MissingTool(_)) => Some(GO_INSTALL_DOCS),
            Self::Report(ReportError::RecordMalformed { .. }) | Self::NoBenchmarks { .. } => {
                Some(GO_BENCHMARK_DOCS)
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Tool(ToolError::MissingTool(_)) => 127, // Command not found
            Self::Tool(_) => 1,
            Self::Report(ReportError::Io(_)) => 74, // EX_IOERR
            Self::Report(_) => 65,                  // EX_DATAERR
            Self::Render(_) => 73,                  // EX_CANTCREAT
            Self::NoBenchmarks { .. } => 65,        // EX_DATAERR
            Self::InputNotFound { .. } => 66,       // EX_NOINPUT
            Self::ConfigExists { .. } => 73,        // EX_CANTCREAT
            Self::Io { .. } => 74,                  // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bg_error) = Self::find(error) {
            if let Some(suggestion) = bg_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = bg_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, BenchgraphError::exit_code)
    }

    /// First [`BenchgraphError`] in the chain, looking through added context
    fn find(error: &anyhow::Error) -> Option<&BenchgraphError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<BenchgraphError>())
    }
}
