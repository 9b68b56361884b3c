//! Configuration file management
//!
//! benchgraph reads an optional `.benchgraph.toml` from the working directory.
//! Command-line flags override the values it contains.

pub mod file;
pub mod loader;

pub use file::{ConfigFile, ConfigOverrides, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR};
pub use loader::ConfigLoader;
