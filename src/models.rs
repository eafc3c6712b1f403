// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// --- COMMAND CATALOGUE MODELS ---

/// The command interpreter a stored command is written for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShellKind {
    /// Windows PowerShell (`pwsh`-compatible syntax). Default for new commands.
    #[default]
    PowerShell,
    /// Windows Command Prompt.
    Cmd,
    /// GNU Bash.
    Bash,
}

impl ShellKind {
    /// Every shell kind, in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::PowerShell, Self::Cmd, Self::Bash];

    /// The persisted name of this shell kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PowerShell => "PowerShell",
            Self::Cmd => "Cmd",
            Self::Bash => "Bash",
        }
    }

    /// Parses a shell name, case-insensitively. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Parses a shell name, treating anything unrecognised as PowerShell.
    ///
    /// Stored catalogues written by hand (or by newer versions) may carry shell
    /// names this build does not know; those commands still launch, using the
    /// PowerShell invocation.
    pub fn from_name_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("Unknown shell '{}', falling back to PowerShell.", name);
            Self::PowerShell
        })
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-authored, runnable command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    /// Display name, also used as the window title.
    pub name: String,
    /// Interpreter that runs `command_text`.
    pub shell_kind: ShellKind,
    /// Directory to run in. Empty means "the launcher's own directory",
    /// resolved at launch time.
    pub working_directory: String,
    /// The command text, passed verbatim to the shell.
    pub command_text: String,
}

impl CommandSpec {
    /// Convenience constructor used by handlers and tests.
    pub fn new(
        name: impl Into<String>,
        shell_kind: ShellKind,
        working_directory: impl Into<String>,
        command_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shell_kind,
            working_directory: working_directory.into(),
            command_text: command_text.into(),
        }
    }
}

// --- LAUNCH MODELS ---

/// Everything needed to create one OS process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    /// Program name or path.
    pub executable: String,
    /// Discrete arguments, never joined into one shell string.
    pub arguments: Vec<String>,
    /// Directory the process starts in.
    pub working_directory: PathBuf,
    /// Whether the spawned process itself should own a visible window.
    /// On Windows the console host is hidden because `start` opens the real window.
    pub window_visible: bool,
}

impl ProcessDescriptor {
    /// Renders the descriptor as a single line for logs and `--dry-run` output.
    /// Arguments containing whitespace or quotes are wrapped in double quotes.
    pub fn display_line(&self) -> String {
        let mut line = self.executable.clone();
        for arg in &self.arguments {
            line.push(' ');
            if arg.is_empty() || arg.contains([' ', '\t', '"', '\'']) {
                line.push('"');
                line.push_str(&arg.replace('"', "\\\""));
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Operating system family, which decides the launch strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Launches through `cmd.exe /c start`.
    Windows,
    /// Launches a generated script in Terminal.app.
    MacOs,
    /// Linux and every other Unix-like system.
    Linux,
}

impl HostOs {
    /// The family of the OS this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }
}

// --- `settings.toml` MODEL ---

/// User settings, read from `settings.toml` in the config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Overrides the location of the command catalogue. `~` and `$VARS` are expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,
    /// Shell preselected when adding a command.
    pub default_shell: ShellKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: None,
            default_shell: ShellKind::PowerShell,
        }
    }
}
