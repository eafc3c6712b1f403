// src/cli/mod.rs

use clap::Parser;

pub mod dispatcher;
pub mod handlers;

/// Styles for the tags used in `cli.help.template`.
const HELP_TAGS: [(&str, &str); 6] = [
    ("title", "\x1b[1;33m"),
    ("group", "\x1b[1;32m"),
    ("cmd", "\x1b[36m"),
    ("hl", "\x1b[1;36m"),
    ("err", "\x1b[91m"),
    ("dim", "\x1b[2m"),
];

/// Replaces `<tag>`/`</tag>` pairs with ANSI styles, or strips them.
fn render_help(template: &str, use_colors: bool) -> String {
    HELP_TAGS.iter().fold(template.to_string(), |text, (tag, style)| {
        let (open, close) = if use_colors { (*style, "\x1b[0m") } else { ("", "") };
        text.replace(&format!("<{}>", tag), open)
            .replace(&format!("</{}>", tag), close)
    })
}

fn build_help_string() -> &'static str {
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();
    Box::leak(render_help(t!("cli.help.template"), use_colors).into_boxed_str())
}

/// script-launcher: keep a catalogue of shell commands and run each one in its own terminal.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    help_template = { build_help_string() },
    disable_help_subcommand = true,
    trailing_var_arg = true
)]
pub struct Cli {
    /// The action followed by its arguments. Empty opens the interactive browser.
    #[arg()]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_tags_are_stripped_without_colors() {
        let rendered = render_help("<title>x</title> <cmd>run</cmd> <command>", false);
        assert_eq!(rendered, "x run <command>");
    }

    #[test]
    fn test_help_tags_become_ansi_styles() {
        let rendered = render_help("<err>rm</err>", true);
        assert_eq!(rendered, "\x1b[91mrm\x1b[0m");
    }

    #[test]
    fn test_cli_collects_action_and_arguments() {
        let cli = Cli::try_parse_from(["script-launcher", "run", "Deploy", "--dry-run"]).unwrap();
        assert_eq!(cli.args, vec!["run", "Deploy", "--dry-run"]);
    }
}
