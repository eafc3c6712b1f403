// src/cli/handlers/add.rs

use anyhow::Result;
use clap::Parser;
use colored::*;

use crate::{
    cli::handlers::commons::{self, CommandFields},
    models::{CommandSpec, Settings},
    state::AppState,
};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Adds a command to the catalogue.")]
struct AddArgs {
    #[command(flatten)]
    fields: CommandFields,
}

pub fn handle(args: Vec<String>, state: &mut AppState, settings: &Settings) -> Result<()> {
    let add_args = AddArgs::try_parse_from(&args)?;
    add_command(&add_args.fields, state, settings)
}

/// Builds a new command (prompting as needed) and appends it.
pub fn add_command(fields: &CommandFields, state: &mut AppState, settings: &Settings) -> Result<()> {
    let initial = CommandSpec {
        shell_kind: settings.default_shell,
        ..Default::default()
    };
    let command = commons::fill_command(fields, &initial)?;

    log::info!("Adding command '{}'", command.name);
    let name = command.name.clone();
    state.commands_mut().push(command);

    println!(
        "\n{} {}",
        t!("add.success").green().bold(),
        format!("#{} {}", state.commands().len(), name).dimmed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShellKind;

    #[test]
    fn test_add_uses_default_shell_and_marks_dirty() {
        let mut state = AppState::with_commands("unused.toml", Vec::new());
        let settings = Settings {
            default_shell: ShellKind::Bash,
            ..Default::default()
        };

        handle(
            vec![
                "--name".into(),
                "Uptime".into(),
                "--command".into(),
                "uptime".into(),
                "--no-input".into(),
            ],
            &mut state,
            &settings,
        )
        .unwrap();

        assert!(state.needs_saving());
        assert_eq!(
            state.commands(),
            [CommandSpec::new("Uptime", ShellKind::Bash, "", "uptime")].as_slice()
        );
    }

    #[test]
    fn test_add_without_text_fails_and_leaves_state_clean() {
        let mut state = AppState::with_commands("unused.toml", Vec::new());
        let result = handle(
            vec!["-n".into(), "Empty".into(), "--no-input".into()],
            &mut state,
            &Settings::default(),
        );
        assert!(result.is_err());
        assert!(!state.needs_saving());
    }
}
