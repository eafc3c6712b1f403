// src/cli/handlers/run.rs

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;

use crate::{
    cli::handlers::commons,
    models::{CommandSpec, Settings},
    state::AppState,
    system::launcher::LaunchStatus,
};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Runs a command in a new terminal window."
)]
struct RunArgs {
    /// Position in the list (1-based) or name of the command.
    selector: String,

    /// Print what would be launched without starting anything or writing any file.
    #[arg(long)]
    dry_run: bool,
}

pub fn handle(args: Vec<String>, state: &mut AppState, _settings: &Settings) -> Result<()> {
    let run_args = RunArgs::try_parse_from(&args)?;
    let index = commons::resolve_selector(state, &run_args.selector)?;
    let command = state.commands().get(index).cloned();

    if run_args.dry_run {
        let command =
            command.ok_or_else(|| anyhow!(t!("error.command_missing"), position = index + 1))?;
        let plan = commons::plan(&command)?;
        println!("{}", t!("run.info.dry_run").yellow());
        println!("{}", plan);
        return Ok(());
    }

    run_command(command.as_ref())
}

/// Launches `command` and reports the outcome. A failed launch becomes an error
/// carrying the status message.
pub fn run_command(command: Option<&CommandSpec>) -> Result<()> {
    if let Some(command) = command {
        println!(
            "{}",
            format!(t!("run.info.running"), name = command.name).dimmed()
        );
    }
    report(commons::launch(command))
}

fn report(status: LaunchStatus) -> Result<()> {
    if status.is_success() {
        println!("{}", status.to_string().green());
        Ok(())
    } else {
        Err(anyhow!("{}", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::launcher::LaunchError;

    #[test]
    fn test_report_success_and_failure() {
        let ok = LaunchStatus::Launched {
            name: "List".to_string(),
            pid: 7,
        };
        assert!(report(ok).is_ok());

        let failed = LaunchStatus::Failed {
            name: None,
            error: LaunchError::NoCommand,
        };
        assert_eq!(report(failed).unwrap_err().to_string(), "No command selected");
    }

    #[test]
    fn test_run_without_command_launches_nothing() {
        let err = run_command(None).unwrap_err();
        assert_eq!(err.to_string(), "No command selected");
    }

    #[test]
    fn test_run_rejects_unknown_selector() {
        let mut state = AppState::with_commands("unused.toml", Vec::new());
        assert!(handle(vec!["Deploy".into()], &mut state, &Settings::default()).is_err());
    }
}
