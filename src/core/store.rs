// src/core/store.rs

//! # Command Catalogue Store
//!
//! Commands are persisted as numbered TOML tables:
//!
//! ```toml
//! [Command_001]
//! Name = "List"
//! Shell = "Bash"
//! WorkingDirectory = "/tmp"
//! CommandText = "ls -la"
//! ```
//!
//! Tables are read in numeric order starting at `Command_001`; reading stops at
//! the first gap or the first table with an empty `Name`. Saving renumbers
//! everything from 1, so gaps never survive a save.

use crate::constants::STORE_SECTION_PREFIX;
use crate::models::{CommandSpec, ShellKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read command store '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write command store '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Command store '{}' is not valid TOML: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize command store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk shape of one command.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct StoredCommand<'a> {
    name: &'a str,
    shell: ShellKind,
    working_directory: &'a str,
    command_text: &'a str,
}

fn section_name(index: usize) -> String {
    format!("{}{:03}", STORE_SECTION_PREFIX, index)
}

/// Loads every command from `path`. A missing file is an empty catalogue.
pub fn load_commands(path: &Path) -> Result<Vec<CommandSpec>, StoreError> {
    if !path.exists() {
        log::debug!("No command store at '{}', starting empty.", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = toml::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_sections(&table))
}

fn parse_sections(table: &toml::Table) -> Vec<CommandSpec> {
    let mut commands = Vec::new();
    let mut index = 1;
    loop {
        let name = section_name(index);
        let Some(value) = table.get(&name) else {
            break;
        };
        index += 1;

        let Some(section) = value.as_table() else {
            log::warn!("Skipping malformed section '{}': not a table.", name);
            continue;
        };

        let field = |key: &str| {
            section
                .get(key)
                .and_then(toml::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let command_name = field("Name");
        if command_name.is_empty() {
            break;
        }

        commands.push(CommandSpec {
            name: command_name,
            shell_kind: section
                .get("Shell")
                .and_then(toml::Value::as_str)
                .map(ShellKind::from_name_lenient)
                .unwrap_or_default(),
            working_directory: field("WorkingDirectory"),
            command_text: field("CommandText"),
        });
    }
    log::debug!("Loaded {} command(s) from the store.", commands.len());
    commands
}

/// Renders the catalogue in its on-disk form, numbered from `Command_001`.
pub fn render_commands(commands: &[CommandSpec]) -> Result<String, StoreError> {
    let sections: BTreeMap<String, StoredCommand<'_>> = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            (
                section_name(i + 1),
                StoredCommand {
                    name: &cmd.name,
                    shell: cmd.shell_kind,
                    working_directory: &cmd.working_directory,
                    command_text: &cmd.command_text,
                },
            )
        })
        .collect();
    Ok(toml::to_string_pretty(&sections)?)
}

/// Saves the whole catalogue, replacing the file atomically.
pub fn save_commands(path: &Path, commands: &[CommandSpec]) -> Result<(), StoreError> {
    let content = render_commands(commands)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(write_err)?;

    let mut temp = tempfile::NamedTempFile::new_in(&parent).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    log::debug!("Saved {} command(s) to '{}'.", commands.len(), path.display());
    Ok(())
}

/// Trims the name and directory, and rejects commands that cannot be run.
pub fn validate_command(mut command: CommandSpec) -> Result<CommandSpec, ValidationError> {
    command.name = command.name.trim().to_string();
    command.working_directory = command.working_directory.trim().to_string();
    if command.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if command.command_text.trim().is_empty() {
        return Err(ValidationError::EmptyCommandText);
    }
    Ok(command)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A command needs a name.")]
    EmptyName,
    #[error("A command needs some command text.")]
    EmptyCommandText,
}

/// Replaces the first command equal to `old`. Returns `false` when none matched.
pub fn replace_command(commands: &mut [CommandSpec], old: &CommandSpec, new: CommandSpec) -> bool {
    match commands.iter_mut().find(|c| **c == *old) {
        Some(slot) => {
            *slot = new;
            true
        }
        None => false,
    }
}

/// Removes the first command equal to `target`. Returns `false` when none matched.
pub fn remove_command(commands: &mut Vec<CommandSpec>, target: &CommandSpec) -> bool {
    match commands.iter().position(|c| c == target) {
        Some(index) => {
            commands.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("List", ShellKind::Bash, "/tmp", "ls -la"),
            CommandSpec::new("Dir", ShellKind::Cmd, "", "dir /b"),
            CommandSpec::new(
                "Quote \"test\"",
                ShellKind::PowerShell,
                "C:\\Users\\me",
                "Write-Host 'hi'\nGet-Date",
            ),
        ]
    }

    #[test]
    fn test_missing_file_is_empty_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        let commands = load_commands(&dir.path().join("commands.toml")).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("commands.toml");

        save_commands(&path, &sample()).unwrap();
        assert_eq!(load_commands(&path).unwrap(), sample());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("[Command_001]"));
        assert!(text.contains("Name = \"List\""));
        assert!(text.contains("Shell = \"Bash\""));
        assert!(text.contains("WorkingDirectory = \"/tmp\""));
        assert!(text.contains("[Command_003]"));
    }

    #[test]
    fn test_loading_stops_at_gap_or_empty_name() {
        let table: toml::Table = toml::from_str(
            r#"
            [Command_001]
            Name = "one"
            CommandText = "echo 1"

            [Command_002]
            Name = "two"
            Shell = "Cmd"

            [Command_004]
            Name = "unreachable"
            "#,
        )
        .unwrap();
        let commands = parse_sections(&table);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].shell_kind, ShellKind::PowerShell);
        assert_eq!(commands[0].working_directory, "");
        assert_eq!(commands[1].shell_kind, ShellKind::Cmd);
        assert_eq!(commands[1].command_text, "");

        let table: toml::Table = toml::from_str(
            r#"
            [Command_001]
            Name = ""
            [Command_002]
            Name = "hidden"
            "#,
        )
        .unwrap();
        assert!(parse_sections(&table).is_empty());
    }

    #[test]
    fn test_unknown_shell_and_malformed_section() {
        let table: toml::Table = toml::from_str(
            r#"
            Command_001 = "not a table"

            [Command_002]
            Name = "fish"
            Shell = "Fish"
            CommandText = "echo hi"
            "#,
        )
        .unwrap();
        let commands = parse_sections(&table);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "fish");
        assert_eq!(commands[0].shell_kind, ShellKind::PowerShell);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.toml");
        fs::write(&path, "[Command_001\nName = ").unwrap();
        assert!(matches!(load_commands(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_validate_trims_and_rejects_blank_fields() {
        let ok = validate_command(CommandSpec::new("  Build ", ShellKind::Bash, " /src ", "make"))
            .unwrap();
        assert_eq!(ok.name, "Build");
        assert_eq!(ok.working_directory, "/src");

        assert_eq!(
            validate_command(CommandSpec::new("  ", ShellKind::Bash, "", "make")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_command(CommandSpec::new("Build", ShellKind::Bash, "", " \n ")),
            Err(ValidationError::EmptyCommandText)
        );
    }

    #[test]
    fn test_replace_and_remove_match_on_all_fields() {
        let mut commands = sample();
        let target = commands[1].clone();
        let mut lookalike = target.clone();
        lookalike.working_directory = "/elsewhere".to_string();

        assert!(!replace_command(&mut commands, &lookalike, target.clone()));
        let renamed = CommandSpec::new("Dir2", ShellKind::Cmd, "", "dir");
        assert!(replace_command(&mut commands, &target, renamed.clone()));
        assert_eq!(commands[1], renamed);

        assert!(!remove_command(&mut commands, &target));
        assert!(remove_command(&mut commands, &renamed));
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].name, "Quote \"test\"");
    }
}
