// src/cli/handlers/show.rs

use anyhow::Result;
use clap::Parser;

use crate::{cli::handlers::commons, models::Settings, state::AppState};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Shows the details of one command.")]
struct ShowArgs {
    /// Position in the list (1-based) or name of the command.
    selector: String,
}

pub fn handle(args: Vec<String>, state: &mut AppState, _settings: &Settings) -> Result<()> {
    let show_args = ShowArgs::try_parse_from(&args)?;
    let index = commons::resolve_selector(state, &show_args.selector)?;
    if let Some(command) = state.commands().get(index) {
        commons::print_command_details(index, command);
    }
    Ok(())
}
