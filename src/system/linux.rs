// src/system/linux.rs

//! Terminal emulator detection and argument construction for Linux (and other
//! Unix-like desktops). Each emulator has its own flag dialect, captured in
//! [`Dialect`]; the command always runs inside `bash -c` and ends with
//! `exec bash` so the window stays open.

use crate::models::{CommandSpec, ProcessDescriptor};
use std::fmt;
use std::path::Path;

use super::launcher::{LaunchError, window_title};
use super::locator::ExecutableLocator;

/// The terminal emulators we know how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEmulator {
    /// GNOME Terminal.
    GnomeTerminal,
    /// KDE Konsole.
    Konsole,
    /// Xfce Terminal.
    Xfce4Terminal,
    /// MATE Terminal.
    MateTerminal,
    /// LXDE terminal.
    LxTerminal,
    /// Plain xterm, the last resort.
    Xterm,
}

/// How the window title is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleFlag {
    /// `<flag> <title>` as two arguments.
    Separate(&'static str),
    /// `<flag><title>` as one argument, e.g. `--title=List`.
    Joined(&'static str),
}

/// How the `bash -c` payload is handed to the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStyle {
    /// `bash`, `-c`, `<script>` as discrete arguments.
    Argv,
    /// A single string the emulator splits itself: `bash -c '<script>'`.
    JoinedString,
}

/// Per-emulator argument syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Arguments placed before the title, e.g. `--new-tab`.
    pub leading_args: &'static [&'static str],
    /// How the window title is passed.
    pub title: TitleFlag,
    /// Flag that introduces the command to run (`--` for gnome-terminal).
    pub exec_flag: &'static str,
    /// How the `bash -c` payload follows the exec flag.
    pub payload: PayloadStyle,
}

impl TerminalEmulator {
    /// Detection order: the first one found on `PATH` wins.
    pub const CANDIDATES: [Self; 6] = [
        Self::GnomeTerminal,
        Self::Konsole,
        Self::Xfce4Terminal,
        Self::MateTerminal,
        Self::LxTerminal,
        Self::Xterm,
    ];

    /// The binary name looked up on `PATH`.
    pub fn binary_name(self) -> &'static str {
        match self {
            Self::GnomeTerminal => "gnome-terminal",
            Self::Konsole => "konsole",
            Self::Xfce4Terminal => "xfce4-terminal",
            Self::MateTerminal => "mate-terminal",
            Self::LxTerminal => "lxterminal",
            Self::Xterm => "xterm",
        }
    }

    /// The flag syntax this emulator expects.
    pub fn dialect(self) -> Dialect {
        match self {
            Self::GnomeTerminal => Dialect {
                leading_args: &[],
                title: TitleFlag::Separate("--title"),
                exec_flag: "--",
                payload: PayloadStyle::Argv,
            },
            Self::Konsole => Dialect {
                leading_args: &["--new-tab"],
                title: TitleFlag::Joined("--title="),
                exec_flag: "-e",
                payload: PayloadStyle::Argv,
            },
            Self::Xfce4Terminal => Dialect {
                leading_args: &[],
                title: TitleFlag::Separate("--title"),
                exec_flag: "-e",
                payload: PayloadStyle::JoinedString,
            },
            Self::MateTerminal => Dialect {
                leading_args: &[],
                title: TitleFlag::Separate("--title"),
                exec_flag: "--command",
                payload: PayloadStyle::JoinedString,
            },
            Self::LxTerminal => Dialect {
                leading_args: &[],
                title: TitleFlag::Joined("--title="),
                exec_flag: "-e",
                payload: PayloadStyle::JoinedString,
            },
            Self::Xterm => Dialect {
                leading_args: &[],
                title: TitleFlag::Separate("-title"),
                exec_flag: "-e",
                payload: PayloadStyle::JoinedString,
            },
        }
    }
}

impl fmt::Display for TerminalEmulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Returns the first installed emulator in priority order.
pub fn detect_terminal(locator: &dyn ExecutableLocator) -> Result<TerminalEmulator, LaunchError> {
    for terminal in TerminalEmulator::CANDIDATES {
        if let Some(path) = locator.locate(terminal.binary_name()) {
            log::debug!("Detected terminal: {} at {}", terminal, path.display());
            return Ok(terminal);
        }
        log::trace!("Terminal '{}' not found on PATH", terminal);
    }
    Err(LaunchError::TerminalNotFound {
        candidates: TerminalEmulator::CANDIDATES
            .iter()
            .map(|t| t.binary_name().to_string())
            .collect(),
    })
}

/// Escapes a string for use between single quotes: every `'` becomes `'\''`.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// The script bash runs: enter the directory, run the command, then stay interactive.
pub fn bash_payload(spec: &CommandSpec, working_directory: &Path) -> String {
    let dir = working_directory.to_string_lossy();
    format!(
        "cd '{}' && {}; exec bash",
        escape_single_quotes(&dir),
        spec.command_text
    )
}

/// Builds the emulator invocation for `spec`.
pub fn build_descriptor(
    terminal: TerminalEmulator,
    spec: &CommandSpec,
    working_directory: &Path,
) -> ProcessDescriptor {
    let dialect = terminal.dialect();
    let title = window_title(&spec.name);
    let payload = bash_payload(spec, working_directory);

    let mut arguments: Vec<String> = dialect
        .leading_args
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    match dialect.title {
        TitleFlag::Separate(flag) => {
            arguments.push(flag.to_string());
            arguments.push(title.to_string());
        }
        TitleFlag::Joined(flag) => arguments.push(format!("{}{}", flag, title)),
    }

    arguments.push(dialect.exec_flag.to_string());
    match dialect.payload {
        PayloadStyle::Argv => {
            arguments.push("bash".to_string());
            arguments.push("-c".to_string());
            arguments.push(payload);
        }
        PayloadStyle::JoinedString => {
            // The emulator splits this string once more, so the whole script is quoted again.
            arguments.push(format!("bash -c '{}'", escape_single_quotes(&payload)));
        }
    }

    ProcessDescriptor {
        executable: terminal.binary_name().to_string(),
        arguments,
        working_directory: working_directory.to_path_buf(),
        window_visible: true,
    }
}
