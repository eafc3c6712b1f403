// src/cli/handlers/browse.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Select, theme::ColorfulTheme};

use crate::{
    cli::handlers::{
        add,
        commons::{self, CommandFields},
        delete, edit, run,
    },
    models::Settings,
    state::AppState,
};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Opens the interactive command browser.")]
struct BrowseArgs {}

/// What can be done with the selected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandAction {
    Run,
    Show,
    Edit,
    Delete,
    Back,
}

impl CommandAction {
    const ALL: [Self; 5] = [Self::Run, Self::Show, Self::Edit, Self::Delete, Self::Back];

    fn label(self) -> &'static str {
        match self {
            Self::Run => t!("browse.action.run"),
            Self::Show => t!("browse.action.show"),
            Self::Edit => t!("browse.action.edit"),
            Self::Delete => t!("browse.action.delete"),
            Self::Back => t!("browse.action.back"),
        }
    }
}

/// Entries of the main menu: every command, then Add and Quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Command(usize),
    Add,
    Quit,
}

fn menu_choice(selection: Option<usize>, command_count: usize) -> MenuChoice {
    match selection {
        Some(i) if i < command_count => MenuChoice::Command(i),
        Some(i) if i == command_count => MenuChoice::Add,
        _ => MenuChoice::Quit,
    }
}

pub fn handle(args: Vec<String>, state: &mut AppState, settings: &Settings) -> Result<()> {
    BrowseArgs::try_parse_from(&args)?;
    let theme = ColorfulTheme::default();

    println!(
        "{}",
        format!(t!("browse.info.loaded"), count = state.commands().len()).dimmed()
    );

    loop {
        let mut items: Vec<String> = state
            .commands()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:>3}. {} [{}]", i + 1, c.name, c.shell_kind))
            .collect();
        items.push(t!("browse.menu.add").to_string());
        items.push(t!("browse.menu.quit").to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt(t!("browse.prompt.select_command"))
            .items(&items)
            .default(0)
            .interact_opt()?;

        let outcome = match menu_choice(selection, state.commands().len()) {
            MenuChoice::Quit => break,
            MenuChoice::Add => add::add_command(&CommandFields::default(), state, settings),
            MenuChoice::Command(index) => command_menu(&theme, index, state),
        };
        if let Err(e) = outcome {
            eprintln!("{}: {}", "Error".red().bold(), e);
        }

        if state.persist()? {
            log::debug!("Catalogue saved to '{}'", state.store_path().display());
        }
    }
    Ok(())
}

fn command_menu(theme: &ColorfulTheme, index: usize, state: &mut AppState) -> Result<()> {
    let Some(command) = state.commands().get(index).cloned() else {
        return Ok(());
    };

    let labels: Vec<&str> = CommandAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(format!(t!("browse.prompt.select_action"), name = command.name))
        .items(&labels)
        .default(0)
        .interact_opt()?;
    let action = selection
        .and_then(|i| CommandAction::ALL.get(i).copied())
        .unwrap_or(CommandAction::Back);

    match action {
        CommandAction::Run => run::run_command(Some(&command)),
        CommandAction::Show => {
            commons::print_command_details(index, &command);
            Ok(())
        }
        CommandAction::Edit => edit::edit_command(index, &CommandFields::default(), state),
        CommandAction::Delete => delete::delete_command(index, false, state).map(|_| ()),
        CommandAction::Back => Ok(()),
    }
}
