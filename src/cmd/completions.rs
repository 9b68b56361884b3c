//! Completions command implementation
//!
//! Handles the `benchgraph completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

const BIN_NAME: &str = "benchgraph";

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// benchgraph completions bash > /etc/bash_completion.d/benchgraph
///
/// # Zsh
/// benchgraph completions zsh > ~/.zfunc/_benchgraph
///
/// # Fish
/// benchgraph completions fish > ~/.config/fish/completions/benchgraph.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) {
    generate(shell, cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn sample_command() -> Command {
        Command::new(BIN_NAME)
            .subcommand(Command::new("bench").arg(Arg::new("group").long("group")))
            .subcommand(Command::new("parse"))
    }

    #[test]
    fn test_write_completions_all_shells_mention_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut out = Vec::new();
            write_completions(shell, &mut sample_command(), &mut out);

            let script = String::from_utf8(out).unwrap();
            assert!(script.contains("benchgraph"), "{:?} script names the binary", shell);
            assert!(script.contains("parse"), "{:?} script lists subcommands", shell);
        }
    }
}
