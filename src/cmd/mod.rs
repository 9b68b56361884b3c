//! Command handlers for benchgraph CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod bench;
pub mod completions;
pub mod init;
pub mod parse;

mod summary;

// Re-export command functions for convenient access
pub use bench::cmd_bench;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use parse::{cmd_parse, ParseOptions};
