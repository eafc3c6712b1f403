// src/cli/handlers/delete.rs

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;

use crate::{cli::handlers::commons, core::store, models::Settings, state::AppState};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Deletes a command from the catalogue.")]
struct DeleteArgs {
    /// Position in the list (1-based) or name of the command.
    selector: String,

    /// Do not ask for confirmation.
    #[arg(long, short)]
    yes: bool,
}

pub fn handle(args: Vec<String>, state: &mut AppState, _settings: &Settings) -> Result<()> {
    let delete_args = DeleteArgs::try_parse_from(&args)?;
    let index = commons::resolve_selector(state, &delete_args.selector)?;
    delete_command(index, delete_args.yes, state)?;
    Ok(())
}

/// Removes the command at `index` after confirmation. Returns whether it was removed.
pub fn delete_command(index: usize, assume_yes: bool, state: &mut AppState) -> Result<bool> {
    let target = state
        .commands()
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow!(t!("error.command_missing"), position = index + 1))?;

    let prompt = format!(t!("delete.prompt.are_you_sure"), name = target.name);
    if !commons::confirm(&prompt, assume_yes)? {
        return Ok(false);
    }

    log::info!("Deleting command '{}'", target.name);
    let removed = store::remove_command(state.commands_mut(), &target);
    if removed {
        println!(
            "\n{}",
            format!(t!("delete.success"), name = target.name).green().bold()
        );
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommandSpec, ShellKind};

    #[test]
    fn test_delete_with_yes_removes_exactly_one() {
        let twin = CommandSpec::new("Echo", ShellKind::Bash, "", "echo hi");
        let mut state = AppState::with_commands("unused.toml", vec![twin.clone(), twin.clone()]);

        handle(vec!["1".into(), "--yes".into()], &mut state, &Settings::default()).unwrap();

        assert_eq!(state.commands(), [twin].as_slice());
        assert!(state.needs_saving());
    }
}
