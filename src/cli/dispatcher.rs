// src/cli/dispatcher.rs

use anyhow::Result;

use crate::{cli::handlers, models::Settings, state::AppState};

/// Defines an action, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &mut AppState, &Settings) -> Result<()>,
}

/// The single source of truth for all actions.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "add",
        aliases: &["new"],
        handler: handlers::add::handle,
    },
    CommandDefinition {
        name: "browse",
        aliases: &["ui"],
        handler: handlers::browse::handle,
    },
    CommandDefinition {
        name: "delete",
        aliases: &["del", "rm"],
        handler: handlers::delete::handle,
    },
    CommandDefinition {
        name: "edit",
        aliases: &[],
        handler: handlers::edit::handle,
    },
    CommandDefinition {
        name: "list",
        aliases: &["ls"],
        handler: handlers::list::handle,
    },
    CommandDefinition {
        name: "run",
        aliases: &[],
        handler: handlers::run::handle,
    },
    CommandDefinition {
        name: "show",
        aliases: &[],
        handler: handlers::show::handle,
    },
];

/// Finds an action in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Maps raw arguments to an action and the arguments for its handler.
///
/// - no arguments: the interactive browser
/// - `<action> [args...]`: that action
/// - anything else: shortcut for `run <args...>`
fn route(all_args: Vec<String>) -> (&'static str, Vec<String>) {
    let Some((first, rest)) = all_args.split_first() else {
        return ("browse", Vec::new());
    };
    match find_command(first) {
        Some(command) => (command.name, rest.to_vec()),
        None => ("run", all_args),
    }
}

/// Routes the arguments and runs the matching handler.
pub fn dispatch(all_args: Vec<String>, state: &mut AppState, settings: &Settings) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let (action, handler_args) = route(all_args);
    match find_command(action) {
        Some(command) => (command.handler)(handler_args, state, settings),
        None => handlers::run::handle(handler_args, state, settings),
    }
}
