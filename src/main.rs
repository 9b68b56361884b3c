use benchgraph::cmd;
use benchgraph::config::ConfigOverrides;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Go benchmark charts
///
/// benchgraph runs `go test -bench . -benchmem` (or reads a saved report),
/// groups the benchmarks and draws one bar chart per metric and group.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Grouping and output flags shared by `bench` and `parse`
#[derive(Args)]
struct GroupArgs {
    /// Benchmark group; repeat for several, matched in the order given
    #[arg(short, long = "group", value_name = "GROUP")]
    groups: Vec<String>,

    /// Fail on the first line that matches no group or cannot be decoded
    #[arg(long)]
    abort_on_mismatch: bool,

    /// Directory for charts and output.txt
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl GroupArgs {
    fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            groups: self.groups,
            abort_on_mismatch: self.abort_on_mismatch,
            output_dir: self.output_dir,
            ..ConfigOverrides::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run Go benchmarks and chart the results
    Bench {
        #[command(flatten)]
        group_args: GroupArgs,

        /// Package pattern passed to `go test`
        #[arg(short, long = "package", value_name = "PATTERN")]
        package: Option<String>,

        /// Benchmark regex passed to `-bench`
        #[arg(short, long, value_name = "REGEX")]
        bench: Option<String>,
    },

    /// Parse a saved benchmark report
    Parse {
        /// Report file, or `-` to read stdin
        #[arg(value_name = "FILE")]
        input: String,

        #[command(flatten)]
        group_args: GroupArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also write charts and output.txt
        #[arg(long)]
        render: bool,
    },

    /// Initialize benchgraph configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match cli.command {
        Some(Commands::Bench {
            group_args,
            package,
            bench,
        }) => cmd::cmd_bench(ConfigOverrides {
            packages: package,
            bench,
            ..group_args.into_overrides()
        }),
        Some(Commands::Parse {
            input,
            group_args,
            json,
            render,
        }) => cmd::cmd_parse(cmd::ParseOptions {
            input,
            overrides: group_args.into_overrides(),
            json,
            render,
        }),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("benchgraph v{}", env!("CARGO_PKG_VERSION"));
            println!("Go benchmark charts\n");
            println!("Usage: benchgraph <COMMAND>\n");
            println!("Commands:");
            println!("  bench        Run Go benchmarks and chart the results");
            println!("  parse        Parse a saved benchmark report");
            println!("  init         Initialize benchgraph configuration");
            println!("  completions  Generate shell completions");
            println!("\nRun 'benchgraph <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use benchgraph::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
