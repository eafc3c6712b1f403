// src/system/windows.rs

use crate::models::{CommandSpec, ProcessDescriptor, ShellKind};
use std::path::Path;

use super::launcher::window_title;

/// Maps a shell kind to the executable and arguments that run `command_text`
/// and keep the shell open afterwards.
pub fn shell_invocation(spec: &CommandSpec) -> (&'static str, Vec<String>) {
    let script = spec.command_text.clone();
    match spec.shell_kind {
        ShellKind::PowerShell => (
            "powershell.exe",
            vec!["-NoExit".to_string(), "-Command".to_string(), script],
        ),
        ShellKind::Cmd => ("cmd.exe", vec!["/k".to_string(), script]),
        ShellKind::Bash => (
            "bash.exe",
            vec!["-c".to_string(), format!("{}; exec bash", script)],
        ),
    }
}

/// Builds `cmd.exe /c start <title> /d <dir> <shell> <shell args...>`.
///
/// The console host itself stays hidden; `start` opens the visible window.
pub fn build_descriptor(spec: &CommandSpec, working_directory: &Path) -> ProcessDescriptor {
    let dir = working_directory.to_string_lossy().into_owned();

    let mut arguments = vec![
        "/c".to_string(),
        "start".to_string(),
        window_title(&spec.name).to_string(),
    ];
    if !dir.trim().is_empty() {
        arguments.push("/d".to_string());
        arguments.push(dir);
    }

    let (shell_exe, shell_args) = shell_invocation(spec);
    arguments.push(shell_exe.to_string());
    arguments.extend(shell_args);

    ProcessDescriptor {
        executable: "cmd.exe".to_string(),
        arguments,
        working_directory: working_directory.to_path_buf(),
        window_visible: false,
    }
}

/// Characters the outer `cmd /c` acts on when they appear outside quotes.
const CMD_METACHARACTERS: [char; 10] = [' ', '\t', '"', '&', '|', '<', '>', '^', '(', ')'];

/// Quotes one argument for `cmd.exe`: wrapped in double quotes when it contains
/// whitespace, a quote or a cmd metacharacter, with embedded quotes doubled.
pub fn quote_cmd_argument(argument: &str) -> String {
    if argument.contains(CMD_METACHARACTERS) {
        force_quote(argument)
    } else {
        argument.to_string()
    }
}

fn force_quote(argument: &str) -> String {
    format!("\"{}\"", argument.replace('"', "\"\""))
}

/// Renders an argument vector as a `cmd.exe` command line.
///
/// The argument right after the first `start` verb is the window title and is
/// always quoted: `start` only treats a quoted first argument as the title.
pub fn cmd_command_line(arguments: &[String]) -> String {
    let title_position = arguments
        .iter()
        .position(|arg| arg.eq_ignore_ascii_case("start"))
        .map(|start| start + 1);

    arguments
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            if Some(i) == title_position {
                force_quote(arg)
            } else {
                quote_cmd_argument(arg)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn spec(shell_kind: ShellKind) -> CommandSpec {
        CommandSpec::new("List", shell_kind, "/tmp", "ls -la")
    }

    #[test]
    fn test_bash_command_matches_expected_invocation() {
        let descriptor = build_descriptor(&spec(ShellKind::Bash), &PathBuf::from("/tmp"));
        assert_eq!(descriptor.executable, "cmd.exe");
        assert_eq!(
            descriptor.arguments,
            vec!["/c", "start", "List", "/d", "/tmp", "bash.exe", "-c", "ls -la; exec bash"]
        );
        assert!(!descriptor.window_visible);
        assert_eq!(descriptor.working_directory, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_each_shell_stays_open() {
        let (exe, args) = shell_invocation(&spec(ShellKind::PowerShell));
        assert_eq!(exe, "powershell.exe");
        assert_eq!(args, vec!["-NoExit", "-Command", "ls -la"]);

        let (exe, args) = shell_invocation(&spec(ShellKind::Cmd));
        assert_eq!(exe, "cmd.exe");
        assert_eq!(args, vec!["/k", "ls -la"]);
    }

    #[test]
    fn test_unknown_shell_name_launches_powershell() {
        let mut command = spec(ShellKind::Bash);
        command.shell_kind = ShellKind::from_name_lenient("tcsh");

        let descriptor = build_descriptor(&command, &PathBuf::from("C:\\work"));
        assert_eq!(
            &descriptor.arguments[5..],
            &["powershell.exe", "-NoExit", "-Command", "ls -la"]
        );
    }

    #[test]
    fn test_blank_name_uses_default_title() {
        let mut command = spec(ShellKind::Cmd);
        command.name = "   ".to_string();
        let descriptor = build_descriptor(&command, &PathBuf::from("C:\\work"));
        assert_eq!(descriptor.arguments[2], "Script Launcher");
    }

    #[test]
    fn test_command_text_is_a_single_argument() {
        let mut command = spec(ShellKind::PowerShell);
        command.command_text = "Write-Host \"a b\"; Get-Date".to_string();
        let descriptor = build_descriptor(&command, &PathBuf::from("C:\\work"));
        assert_eq!(
            descriptor.arguments.last().map(String::as_str),
            Some("Write-Host \"a b\"; Get-Date")
        );
    }

    #[test]
    fn test_quote_cmd_argument() {
        assert_eq!(quote_cmd_argument("plain"), "plain");
        assert_eq!(quote_cmd_argument("two words"), "\"two words\"");
        assert_eq!(quote_cmd_argument("say \"hi\""), "\"say \"\"hi\"\"\"");
        for risky in ["a&b", "a|b", "a<b", "a>b", "a^b", "(a)"] {
            assert_eq!(quote_cmd_argument(risky), format!("\"{}\"", risky));
        }
    }

    #[test]
    fn test_cmd_command_line_always_quotes_title() {
        let descriptor = build_descriptor(&spec(ShellKind::Bash), &PathBuf::from("C:\\My Dir"));
        assert_eq!(
            cmd_command_line(&descriptor.arguments),
            "/c start \"List\" /d \"C:\\My Dir\" bash.exe -c \"ls -la; exec bash\""
        );
    }

    #[test]
    fn test_title_named_start_only_quotes_title() {
        let command = CommandSpec::new("Start", ShellKind::Cmd, "", "dir");
        let descriptor = build_descriptor(&command, &PathBuf::from("C:\\work"));
        assert_eq!(
            cmd_command_line(&descriptor.arguments),
            "/c start \"Start\" /d C:\\work cmd.exe /k dir"
        );
    }

    #[test]
    fn test_metacharacters_stay_inside_the_new_window() {
        let command = CommandSpec::new("X", ShellKind::Cmd, "", "dir&pause");
        let descriptor = build_descriptor(&command, &PathBuf::from("C:\\work"));
        assert_eq!(
            cmd_command_line(&descriptor.arguments),
            "/c start \"X\" /d C:\\work cmd.exe /k \"dir&pause\""
        );

        let command = CommandSpec::new("Log", ShellKind::PowerShell, "", "(Get-Date) > out.txt");
        let descriptor = build_descriptor(&command, &PathBuf::from("C:\\work"));
        assert_eq!(
            cmd_command_line(&descriptor.arguments),
            "/c start \"Log\" /d C:\\work powershell.exe -NoExit -Command \"(Get-Date) > out.txt\""
        );
    }
}
