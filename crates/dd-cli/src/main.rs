//! CLI frontend for the Dungeons and Dragons character stats dashboard.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::RangeArgs;

#[derive(Parser)]
#[command(
    name = "ddash",
    about = "Dungeons and Dragons Dashboard: synthetic character stats",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug detail to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, filter, and summarize one dataset
    Summary {
        #[command(flatten)]
        ranges: RangeArgs,

        /// Number of characters to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed for a reproducible dataset
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print one JSON document instead of the dashboard cards
        #[arg(long)]
        json: bool,
    },

    /// Print a raw generated dataset as JSON
    Generate {
        #[command(flatten)]
        ranges: RangeArgs,

        /// Comma-separated character classes
        #[arg(long, value_delimiter = ',')]
        classes: Vec<String>,

        /// Number of characters to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed for a reproducible dataset
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Launch the interactive terminal dashboard
    Tui {
        /// RNG seed for reproducible datasets
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write debug logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // The dashboard owns the terminal; it logs to a file instead.
    if !matches!(cli.command, Commands::Tui { .. }) {
        init_logging(cli.verbose, cli.debug);
    }
    tracing::info!("ddash v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Summary {
            ranges,
            count,
            seed,
            config,
            json,
        } => commands::summary::run(&ranges, count, seed, config.as_deref(), json),
        Commands::Generate {
            ranges,
            classes,
            count,
            seed,
        } => commands::generate::run(&ranges, &classes, count, seed),
        Commands::Tui {
            seed,
            config,
            log_file,
        } => commands::tui::run(seed, config.as_deref(), log_file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install a stderr subscriber: `warn` by default, `info` with `--verbose`,
/// `debug` with `--debug`.
fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
