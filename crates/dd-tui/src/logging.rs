//! File logging for the dashboard.
//!
//! The terminal belongs to the UI while it runs, so logs only go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Send `tracing` output to `path`, honouring `RUST_LOG` (default `debug`).
pub fn init_file(path: &Path) -> Result<(), String> {
    let file =
        File::create(path).map_err(|e| format!("cannot create {}: {e}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| format!("cannot install logger: {e}"))
}
