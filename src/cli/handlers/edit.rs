// src/cli/handlers/edit.rs

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;

use crate::{
    cli::handlers::commons::{self, CommandFields},
    core::store,
    models::Settings,
    state::AppState,
};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Edits a stored command.")]
struct EditArgs {
    /// Position in the list (1-based) or name of the command.
    selector: String,

    #[command(flatten)]
    fields: CommandFields,
}

pub fn handle(args: Vec<String>, state: &mut AppState, _settings: &Settings) -> Result<()> {
    let edit_args = EditArgs::try_parse_from(&args)?;
    let index = commons::resolve_selector(state, &edit_args.selector)?;
    edit_command(index, &edit_args.fields, state)
}

/// Rebuilds the command at `index` with prompts prefilled from its current values.
pub fn edit_command(index: usize, fields: &CommandFields, state: &mut AppState) -> Result<()> {
    let original = state
        .commands()
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow!(t!("error.command_missing"), position = index + 1))?;

    let updated = commons::fill_command(fields, &original)?;
    if updated == original {
        println!("\n{}", t!("edit.info.no_change").yellow());
        return Ok(());
    }

    log::info!("Updating command '{}'", original.name);
    if !store::replace_command(state.commands_mut(), &original, updated) {
        return Err(anyhow!(t!("error.command_missing"), position = index + 1));
    }

    println!("\n{}", t!("edit.success").green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommandSpec, ShellKind};

    fn state() -> AppState {
        AppState::with_commands(
            "unused.toml",
            vec![
                CommandSpec::new("List", ShellKind::Bash, "/tmp", "ls"),
                CommandSpec::new("Dir", ShellKind::Cmd, "", "dir"),
            ],
        )
    }

    #[test]
    fn test_edit_by_name_changes_only_given_fields() {
        let mut state = state();
        handle(
            vec!["dir".into(), "--shell".into(), "PowerShell".into(), "--no-input".into()],
            &mut state,
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(
            state.commands().get(1),
            Some(&CommandSpec::new("Dir", ShellKind::PowerShell, "", "dir"))
        );
        assert!(state.needs_saving());
    }

    #[test]
    fn test_edit_without_changes_keeps_state_clean() {
        let mut state = state();
        handle(
            vec!["1".into(), "--no-input".into()],
            &mut state,
            &Settings::default(),
        )
        .unwrap();
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_edit_unknown_selector_fails() {
        let mut state = state();
        let result = handle(
            vec!["Deploy".into(), "--no-input".into()],
            &mut state,
            &Settings::default(),
        );
        assert!(result.is_err());
    }
}
