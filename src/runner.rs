//! Go benchmark execution
//!
//! Runs `go test <packages> -bench <regex> -benchmem` and captures the report
//! it prints on stdout.

use crate::infra::{CommandExecutor, RealCommandExecutor};
use crate::tools::{Tool, ToolError, ToolStatus};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::time::Duration;

/// Runs Go benchmarks and returns the raw report
pub struct BenchRunner<CE: CommandExecutor = RealCommandExecutor> {
    go: Tool<CE>,
    packages: String,
    bench: String,
    show_progress: bool,
}

impl BenchRunner<RealCommandExecutor> {
    /// Create a runner for the given package pattern and benchmark regex
    pub fn new(packages: impl Into<String>, bench: impl Into<String>) -> Self {
        Self::with_executor(packages, bench, RealCommandExecutor)
    }
}

impl<CE: CommandExecutor> BenchRunner<CE> {
    /// Create a runner with a custom command executor
    pub fn with_executor(
        packages: impl Into<String>,
        bench: impl Into<String>,
        cmd_executor: CE,
    ) -> Self {
        Self {
            go: Tool::go_with_executor(cmd_executor),
            packages: packages.into(),
            bench: bench.into(),
            show_progress: true,
        }
    }

    /// Enable or disable the spinner shown while benchmarks run
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Arguments passed to `go`
    pub fn args(&self) -> Vec<String> {
        vec![
            "test".to_string(),
            self.packages.clone(),
            "-bench".to_string(),
            self.bench.clone(),
            "-benchmem".to_string(),
        ]
    }

    /// Check that `go` is installed, then run the benchmarks
    pub fn run(&self) -> Result<String, ToolError> {
        match self.go.check() {
            ToolStatus::Available(version) => info!("Using {}", version),
            ToolStatus::InstalledButVersionUnknown => debug!("Could not determine Go version"),
            ToolStatus::Missing => {
                return Err(ToolError::MissingTool(self.go.binary.to_string()));
            }
        }
        self.execute()
    }

    /// Run the benchmarks without checking PATH first
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::CommandFailed`] with the captured output when `go`
    /// exits unsuccessfully (compile errors, failing tests).
    pub fn execute(&self) -> Result<String, ToolError> {
        let args = self.args();
        let command = format!("{} {}", self.go.binary, args.join(" "));
        info!("Running `{}`", command);

        let spinner = self.spinner(&command);
        let result = self
            .go
            .executor()
            .execute(|cmd| cmd.args(&args), self.go.binary);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let output = result?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::CommandFailed {
                command,
                status: output.status.code().unwrap_or(-1),
                output: format!("{}{}", stdout, stderr),
            });
        }

        debug!("Benchmark report is {} bytes", stdout.len());
        Ok(stdout)
    }

    fn spinner(&self, command: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Running {}", command));
        spinner.enable_steady_tick(Duration::from_millis(120));
        Some(spinner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock_exit_status;
    use std::cell::RefCell;
    use std::process::{Command, Output};

    #[derive(Default)]
    struct RecordingExecutor {
        code: i32,
        stdout: String,
        stderr: String,
        seen: RefCell<Vec<String>>,
    }

    impl CommandExecutor for RecordingExecutor {
        fn output(&self, cmd: &mut Command) -> std::io::Result<Output> {
            let line = std::iter::once(cmd.get_program())
                .chain(cmd.get_args())
                .map(|s| s.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            self.seen.borrow_mut().push(line);
            Ok(Output {
                status: mock_exit_status(self.code),
                stdout: self.stdout.clone().into_bytes(),
                stderr: self.stderr.clone().into_bytes(),
            })
        }
    }

    #[test]
    fn test_execute_runs_go_test_with_benchmem() {
        let executor = RecordingExecutor {
            stdout: "goos: linux\nPASS\n".to_string(),
            ..Default::default()
        };
        let runner = BenchRunner::with_executor("./...", ".", executor).show_progress(false);

        let report = runner.execute().unwrap();

        assert_eq!(report, "goos: linux\nPASS\n");
        assert_eq!(
            runner.go.executor().seen.borrow().as_slice(),
            ["go test ./... -bench . -benchmem"]
        );
    }

    #[test]
    fn test_execute_failure_carries_output() {
        let executor = RecordingExecutor {
            code: 2,
            stdout: "--- FAIL: BenchmarkBroken\n".to_string(),
            stderr: "exit status 1\n".to_string(),
            ..Default::default()
        };
        let runner = BenchRunner::with_executor("./pkg", "Sort", executor).show_progress(false);

        match runner.execute() {
            Err(ToolError::CommandFailed {
                command,
                status,
                output,
            }) => {
                assert_eq!(command, "go test ./pkg -bench Sort -benchmem");
                assert_eq!(status, 2);
                assert!(output.contains("BenchmarkBroken"));
                assert!(output.contains("exit status 1"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_run_without_go_on_path_fails_before_executing() {
        let mut runner = BenchRunner::with_executor("./...", ".", RecordingExecutor::default())
            .show_progress(false);
        runner.go.binary = "nonexistent_go_xyz_123";

        let err = runner.run().unwrap_err();

        assert!(matches!(err, ToolError::MissingTool(ref tool) if tool == "nonexistent_go_xyz_123"));
        assert!(runner.go.executor().seen.borrow().is_empty());
    }
}
