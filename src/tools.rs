//! External tool detection and verification
//!
//! benchgraph needs the Go toolchain (`go`) on PATH to run benchmarks.

use crate::infra::{CommandExecutor, RealCommandExecutor};
use thiserror::Error;

/// Errors that can occur during tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// I/O error during tool execution
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool execution failed
    #[error("Failed to get version for {0}")]
    VersionFailed(String),

    /// Required tool is missing
    #[error("Required tool missing: {0}")]
    MissingTool(String),

    /// Tool ran but exited unsuccessfully
    #[error("`{command}` exited with status {status}\n{output}")]
    CommandFailed {
        /// Command line that was run
        command: String,
        /// Exit code, -1 if terminated by a signal
        status: i32,
        /// Captured stdout followed by stderr
        output: String,
    },
}

/// An external program benchgraph shells out to
///
/// # Examples
///
/// ```no_run
/// use benchgraph::tools::{Tool, ToolStatus};
///
/// match Tool::go().check() {
///     ToolStatus::Available(version) => println!("found {}", version),
///     ToolStatus::InstalledButVersionUnknown => println!("found go"),
///     ToolStatus::Missing => eprintln!("go is not installed"),
/// }
/// ```
#[derive(Debug)]
pub struct Tool<CE: CommandExecutor = RealCommandExecutor> {
    /// Human-readable name
    pub name: &'static str,
    /// Binary name in PATH
    pub binary: &'static str,
    /// Arguments that print the version
    pub version_args: &'static [&'static str],
    cmd_executor: CE,
}

impl Tool<RealCommandExecutor> {
    /// The Go toolchain
    pub fn go() -> Self {
        Self::go_with_executor(RealCommandExecutor)
    }
}

impl<CE: CommandExecutor> Tool<CE> {
    /// The Go toolchain with a custom command executor
    pub fn go_with_executor(cmd_executor: CE) -> Self {
        Self {
            name: "Go toolchain",
            binary: "go",
            version_args: &["version"],
            cmd_executor,
        }
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        which::which(self.binary).is_ok()
    }

    /// Get the version string of the installed tool
    pub fn version(&self) -> Result<String, ToolError> {
        let output = self
            .cmd_executor
            .execute(|cmd| cmd.args(self.version_args), self.binary)?;

        if !output.status.success() {
            return Err(ToolError::VersionFailed(self.name.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .to_string())
    }

    /// Check and report the tool status
    pub fn check(&self) -> ToolStatus {
        if self.is_installed() {
            match self.version() {
                Ok(version) => ToolStatus::Available(version),
                Err(_) => ToolStatus::InstalledButVersionUnknown,
            }
        } else {
            ToolStatus::Missing
        }
    }

    /// Command executor used to run this tool
    pub fn executor(&self) -> &CE {
        &self.cmd_executor
    }
}

/// Status of a tool check
#[derive(Debug)]
pub enum ToolStatus {
    /// Tool is available and version was successfully retrieved
    Available(String),
    /// Tool binary exists but version check failed
    InstalledButVersionUnknown,
    /// Tool binary not found
    Missing,
}
