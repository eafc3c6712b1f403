// src/cli/handlers/list.rs

use anyhow::Result;
use clap::Parser;
use colored::*;

use crate::{models::Settings, state::AppState};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Lists the stored commands.")]
struct ListArgs {
    /// Also print each command's text.
    #[arg(long, short)]
    long: bool,
}

pub fn handle(args: Vec<String>, state: &mut AppState, _settings: &Settings) -> Result<()> {
    let list_args = ListArgs::try_parse_from(&args)?;
    let commands = state.commands();

    if commands.is_empty() {
        println!("{}", t!("list.info.empty").yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!(t!("list.header"), count = commands.len()).bold()
    );
    let name_width = commands.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);

    for (i, command) in commands.iter().enumerate() {
        let directory = if command.working_directory.trim().is_empty() {
            "-".dimmed().to_string()
        } else {
            command.working_directory.clone()
        };
        println!(
            "{:>4}  {:<width$}  {:<10}  {}",
            (i + 1).to_string().dimmed(),
            command.name.cyan(),
            command.shell_kind.as_str().green(),
            directory,
            width = name_width
        );
        if list_args.long {
            for line in command.command_text.lines() {
                println!("{:>4}  {}", "", line.dimmed());
            }
        }
    }
    Ok(())
}
