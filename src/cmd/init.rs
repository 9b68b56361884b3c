//! Init command implementation
//!
//! Handles the `benchgraph init` command which writes a default
//! `.benchgraph.toml` into the current directory.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::error::BenchgraphError;
use crate::fmt::{CHECKMARK, INFO, ROCKET};

/// Create a default benchgraph configuration in the current directory
///
/// Refuses to overwrite an existing `.benchgraph.toml`.
///
/// # Examples
///
/// ```no_run
/// use benchgraph::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    println!(
        "{} {} Initializing benchgraph",
        ROCKET,
        style("benchgraph init").bold()
    );
    println!();

    let project_root = env::current_dir().context("Failed to determine current directory")?;
    let path = init_in(&project_root)?;

    println!("{} Created {}", CHECKMARK, style(path.display()).cyan().bold());
    println!();
    println!("{}  Next Steps:", INFO);
    println!(
        "   1. List your benchmark groups under {} (leave empty for one chart per metric)",
        style("groups").green()
    );
    println!(
        "   2. Run {} inside your Go module",
        style("benchgraph bench").cyan()
    );
    println!(
        "   3. Or chart a saved report with {}",
        style("benchgraph parse bench.txt --render").cyan()
    );

    Ok(())
}

/// Write the default configuration into `project_root`
///
/// Returns the path of the created file.
pub fn init_in(project_root: &Path) -> Result<PathBuf> {
    let path = project_root.join(config::CONFIG_FILE_NAME);
    if ConfigLoader::exists(project_root) {
        return Err(BenchgraphError::ConfigExists { path }.into());
    }

    ConfigLoader::save(&ConfigFile::default(), project_root)?;
    Ok(path)
}
