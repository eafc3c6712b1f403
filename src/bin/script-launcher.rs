// src/bin/script-launcher.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use script_launcher::{
    cli::{Cli, dispatcher},
    core::paths,
    state::AppState,
    system::settings,
    t,
};

/// Sets up logging, loads settings and the catalogue, dispatches, then saves
/// the catalogue if the action changed it. Errors are reported in one place.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let settings = settings::load_settings().context(t!("error.settings_load"))?;
    let store_path = paths::get_store_path(&settings)?;
    let mut state = AppState::load(&store_path)?;

    let result = dispatcher::dispatch(cli.args, &mut state, &settings);

    // Whatever the action managed to change before failing is still saved.
    if state.needs_saving() {
        state
            .persist()
            .with_context(|| format!(t!("error.store_save"), path = store_path.display()))?;
    }
    result
}
