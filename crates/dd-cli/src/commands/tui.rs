use std::path::Path;

use dd_tui::app::DashboardApp;

pub fn run(
    seed: Option<u64>,
    config: Option<&Path>,
    log_file: Option<&Path>,
) -> Result<(), String> {
    if let Some(path) = log_file {
        dd_tui::logging::init_file(path)?;
    }

    let mut config = super::load_config(config)?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    dd_tui::terminal::run(DashboardApp::new(&config))
}
