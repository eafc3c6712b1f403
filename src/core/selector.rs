// src/core/selector.rs

use crate::models::CommandSpec;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectorError {
    #[error("No command matches '{0}'. Use `list` to see the available commands.")]
    NotFound(String),
    #[error(
        "'{selector}' matches several commands (#{}). Select one by number instead.",
        .positions.iter().map(ToString::to_string).collect::<Vec<_>>().join(", #")
    )]
    Ambiguous {
        selector: String,
        positions: Vec<usize>,
    },
}

/// Finds a command by 1-based position, exact name, or unique case-insensitive name,
/// in that order. Returns the 0-based index.
pub fn resolve(commands: &[CommandSpec], selector: &str) -> Result<usize, SelectorError> {
    let selector = selector.trim();

    if let Ok(position) = selector.parse::<usize>() {
        if (1..=commands.len()).contains(&position) {
            return Ok(position - 1);
        }
    }

    let exact = matching_positions(commands, |name| name == selector);
    let candidates = if exact.is_empty() {
        matching_positions(commands, |name| name.eq_ignore_ascii_case(selector))
    } else {
        exact
    };

    match candidates.as_slice() {
        [] => Err(SelectorError::NotFound(selector.to_string())),
        [only] => Ok(*only),
        many => Err(SelectorError::Ambiguous {
            selector: selector.to_string(),
            positions: many.iter().map(|i| i + 1).collect(),
        }),
    }
}

fn matching_positions(commands: &[CommandSpec], pred: impl Fn(&str) -> bool) -> Vec<usize> {
    commands
        .iter()
        .enumerate()
        .filter(|(_, cmd)| pred(&cmd.name))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShellKind;

    fn catalogue() -> Vec<CommandSpec> {
        ["Build", "build", "Deploy", "Test", "Test", "42"]
            .into_iter()
            .map(|name| CommandSpec::new(name, ShellKind::Bash, "", "true"))
            .collect()
    }

    #[test]
    fn test_position_wins_over_name() {
        let commands = catalogue();
        assert_eq!(resolve(&commands, "1"), Ok(0));
        assert_eq!(resolve(&commands, " 3 "), Ok(2));
        // Out of range numbers fall through to name matching.
        assert_eq!(resolve(&commands, "42"), Ok(5));
        assert_eq!(
            resolve(&commands, "0"),
            Err(SelectorError::NotFound("0".to_string()))
        );
    }

    #[test]
    fn test_exact_name_before_case_insensitive() {
        let commands = catalogue();
        assert_eq!(resolve(&commands, "build"), Ok(1));
        assert_eq!(resolve(&commands, "Build"), Ok(0));
        assert_eq!(resolve(&commands, "DEPLOY"), Ok(2));
    }

    #[test]
    fn test_ambiguous_names_report_positions() {
        let commands = catalogue();
        let err = resolve(&commands, "Test").unwrap_err();
        assert_eq!(
            err,
            SelectorError::Ambiguous {
                selector: "Test".to_string(),
                positions: vec![4, 5],
            }
        );
        assert!(err.to_string().contains("#4, #5"));

        assert!(matches!(
            resolve(&commands, "BUILD"),
            Err(SelectorError::Ambiguous { .. })
        ));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            resolve(&catalogue(), "Release"),
            Err(SelectorError::NotFound("Release".to_string()))
        );
    }
}
