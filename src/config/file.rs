//! Configuration file data structures

use crate::report::MismatchPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".benchgraph.toml";

/// Directory charts and the raw report are written to by default
pub const DEFAULT_OUTPUT_DIR: &str = "benchgraph-graphs";

/// benchgraph configuration file structure
///
/// ```toml
/// groups = ["Sort", "Search"]
/// on-group-mismatch = "abort"
/// output-dir = "graphs"
/// packages = "./..."
/// bench = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Benchmark groups, in match order (empty = one implicit group)
    #[serde(default)]
    pub groups: Vec<String>,

    /// Whether unmatched or malformed benchmark lines are skipped or fatal
    #[serde(default)]
    pub on_group_mismatch: MismatchPolicy,

    /// Where charts and `output.txt` are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Package pattern passed to `go test`
    #[serde(default = "default_packages")]
    pub packages: String,

    /// Benchmark regex passed to `-bench`
    #[serde(default = "default_bench")]
    pub bench: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_packages() -> String {
    "./...".to_string()
}

fn default_bench() -> String {
    ".".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            on_group_mismatch: MismatchPolicy::default(),
            output_dir: default_output_dir(),
            packages: default_packages(),
            bench: default_bench(),
        }
    }
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--group`, replaces the configured groups when non-empty
    pub groups: Vec<String>,
    /// `--abort-on-mismatch`
    pub abort_on_mismatch: bool,
    /// `--output-dir`
    pub output_dir: Option<PathBuf>,
    /// `--package`
    pub packages: Option<String>,
    /// `--bench`
    pub bench: Option<String>,
}

impl ConfigFile {
    /// Validate group names
    ///
    /// Names must be non-empty (an empty name matches every benchmark) and
    /// unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.trim().is_empty() {
                anyhow::bail!("Group names cannot be empty");
            }
            if !seen.insert(group.as_str()) {
                anyhow::bail!("Group '{}' is listed more than once", group);
            }
        }
        Ok(())
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if !overrides.groups.is_empty() {
            self.groups = overrides.groups;
        }
        if overrides.abort_on_mismatch {
            self.on_group_mismatch = MismatchPolicy::Abort;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(packages) = overrides.packages {
            self.packages = packages;
        }
        if let Some(bench) = overrides.bench {
            self.bench = bench;
        }
        self
    }
}
