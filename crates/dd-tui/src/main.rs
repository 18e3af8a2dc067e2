//! Standalone dashboard binary.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use dd_engine::DashboardConfig;

#[derive(Parser)]
#[command(
    name = "dd-tui",
    about = "Terminal dashboard for synthetic D&D character stats",
    version
)]
struct Args {
    /// JSON config file (classes, dataset size, ranges)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible datasets (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(path) = &args.log_file {
        dd_tui::logging::init_file(path)?;
    }

    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_json_file(path)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = dd_tui::app::DashboardApp::new(&config);
    dd_tui::terminal::run(app)
}
