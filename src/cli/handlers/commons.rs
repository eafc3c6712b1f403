// src/cli/handlers/commons.rs

// Shared helpers for the action handlers.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::{
    core::{
        selector,
        store::{self, ValidationError},
    },
    models::{CommandSpec, ShellKind},
    state::AppState,
    system::{
        launcher::{HostEnvironment, LaunchError, LaunchPlan, LaunchStatus, Launcher},
        locator::PathLocator,
        spawner::SystemSpawner,
    },
};

/// Field flags shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct CommandFields {
    /// Display name, also used as the terminal window title.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Shell to run the command with: PowerShell, Cmd or Bash.
    #[arg(long, short)]
    pub shell: Option<String>,

    /// Working directory. Empty means the launcher's own directory.
    #[arg(long, short = 'd')]
    pub dir: Option<String>,

    /// The command text.
    #[arg(long, short)]
    pub command: Option<String>,

    /// Do not prompt; keep current or default values for anything not given.
    #[arg(long)]
    pub no_input: bool,
}

/// Resolves a selector against the catalogue, returning the 0-based index.
pub fn resolve_selector(state: &AppState, selector: &str) -> Result<usize> {
    Ok(selector::resolve(state.commands(), selector)?)
}

/// Parses a user-supplied shell name.
pub fn parse_shell(name: &str) -> Result<ShellKind> {
    ShellKind::from_name(name).ok_or_else(|| anyhow!(t!("error.unknown_shell"), name = name))
}

/// Builds the finished command from flags, prompting for whatever is missing.
///
/// `initial` supplies the prefilled values (the current command for `edit`,
/// defaults for `add`).
pub fn fill_command(fields: &CommandFields, initial: &CommandSpec) -> Result<CommandSpec> {
    let theme = ColorfulTheme::default();
    let interactive = !fields.no_input;

    let name = match &fields.name {
        Some(name) => name.clone(),
        None if interactive => Input::<String>::with_theme(&theme)
            .with_prompt(t!("form.prompt.name"))
            .with_initial_text(initial.name.as_str())
            .interact_text()?,
        None => initial.name.clone(),
    };

    let shell_kind = match &fields.shell {
        Some(shell) => parse_shell(shell)?,
        None if interactive => {
            let default = ShellKind::ALL
                .iter()
                .position(|kind| *kind == initial.shell_kind)
                .unwrap_or_default();
            let names: Vec<&str> = ShellKind::ALL.iter().map(|kind| kind.as_str()).collect();
            let choice = Select::with_theme(&theme)
                .with_prompt(t!("form.prompt.shell"))
                .items(&names)
                .default(default)
                .interact()?;
            ShellKind::ALL
                .get(choice)
                .copied()
                .unwrap_or(initial.shell_kind)
        }
        None => initial.shell_kind,
    };

    let working_directory = match &fields.dir {
        Some(dir) => dir.clone(),
        None if interactive => Input::<String>::with_theme(&theme)
            .with_prompt(t!("form.prompt.directory"))
            .with_initial_text(initial.working_directory.as_str())
            .allow_empty(true)
            .interact_text()?,
        None => initial.working_directory.clone(),
    };

    let command_text = match &fields.command {
        Some(command) => command.clone(),
        None if interactive => Input::<String>::with_theme(&theme)
            .with_prompt(t!("form.prompt.command"))
            .with_initial_text(initial.command_text.as_str())
            .interact_text()?,
        None => initial.command_text.clone(),
    };

    let command = CommandSpec {
        name,
        shell_kind,
        working_directory,
        command_text,
    };
    store::validate_command(command).map_err(|e| match e {
        ValidationError::EmptyName => anyhow!(t!("form.error.empty_name")),
        ValidationError::EmptyCommandText => anyhow!(t!("form.error.empty_command")),
    })
}

/// Asks a yes/no question. `assume_yes` skips the prompt.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !answer {
        println!("\n{}", t!("common.info.operation_cancelled"));
    }
    Ok(answer)
}

/// Prints the detail view of one command.
pub fn print_command_details(position: usize, command: &CommandSpec) {
    let directory = if command.working_directory.trim().is_empty() {
        t!("details.launcher_directory").dimmed().to_string()
    } else {
        command.working_directory.clone()
    };

    println!("\n{} {}", format!("#{}", position + 1).dimmed(), command.name.cyan().bold());
    println!("  {:<12} {}", t!("details.shell").blue(), command.shell_kind);
    println!("  {:<12} {}", t!("details.directory").blue(), directory);
    println!("  {}", t!("details.command").blue());
    for line in command.command_text.lines() {
        println!("    {}", line);
    }
}

/// Launches through the real host: PATH lookup and OS process creation.
pub fn launch(command: Option<&CommandSpec>) -> LaunchStatus {
    let locator = PathLocator::from_env();
    let spawner = SystemSpawner;
    Launcher::new(HostEnvironment::detect(), &locator, &spawner).launch(command)
}

/// Plans a launch on the real host without any side effect.
pub fn plan(command: &CommandSpec) -> Result<LaunchPlan, LaunchError> {
    let locator = PathLocator::from_env();
    let spawner = SystemSpawner;
    Launcher::new(HostEnvironment::detect(), &locator, &spawner).plan(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_only_fill_without_prompting() {
        let fields = CommandFields {
            name: Some("  Build ".to_string()),
            shell: Some("bash".to_string()),
            dir: None,
            command: Some("make".to_string()),
            no_input: true,
        };
        let command = fill_command(&fields, &CommandSpec::default()).unwrap();
        assert_eq!(command, CommandSpec::new("Build", ShellKind::Bash, "", "make"));
    }

    #[test]
    fn test_missing_fields_keep_initial_values() {
        let initial = CommandSpec::new("List", ShellKind::Cmd, "C:\\", "dir");
        let fields = CommandFields {
            command: Some("dir /b".to_string()),
            no_input: true,
            ..Default::default()
        };
        let command = fill_command(&fields, &initial).unwrap();
        assert_eq!(command, CommandSpec::new("List", ShellKind::Cmd, "C:\\", "dir /b"));
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let fields = CommandFields {
            shell: Some("fish".to_string()),
            no_input: true,
            ..Default::default()
        };
        let err = fill_command(&fields, &CommandSpec::default()).unwrap_err();
        assert!(err.to_string().contains("fish"));

        let fields = CommandFields {
            name: Some("Build".to_string()),
            no_input: true,
            ..Default::default()
        };
        assert!(fill_command(&fields, &CommandSpec::default()).is_err());
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(confirm("unused", true).unwrap());
    }
}
