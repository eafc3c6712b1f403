// src/system/launcher.rs

//! # Launch Strategy Selector
//!
//! Turns a [`CommandSpec`] into exactly one spawned terminal session. The work is
//! split into a pure planning step ([`Launcher::plan`]), an optional side effect
//! ([`LaunchPlan::materialize`], which writes the macOS script) and the spawn
//! itself, delegated to a [`ProcessSpawner`].
//!
//! [`Launcher::launch`] is the recovering boundary: every failure is logged and
//! turned into a single status message, so a bad command never takes the
//! application down with it.

use crate::constants::DEFAULT_WINDOW_TITLE;
use crate::models::{CommandSpec, HostOs, ProcessDescriptor};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::locator::ExecutableLocator;
use super::macos::{self, MacScript};
use super::spawner::ProcessSpawner;
use super::{linux, windows};

/// Why a launch did not produce a process.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// No command was given to launch.
    #[error("No command selected.")]
    NoCommand,
    /// Linux only: none of the known terminal emulators is on `PATH`.
    #[error(
        "No terminal emulator found. Please install one of: {}.",
        .candidates.join(", ")
    )]
    TerminalNotFound {
        /// Every binary name that was looked up, in priority order.
        candidates: Vec<String>,
    },
    /// The OS refused to create the process.
    #[error("Failed to start '{executable}': {source}")]
    Spawn {
        /// The program that failed to start.
        executable: String,
        #[source]
        source: std::io::Error,
    },
    /// macOS only: the temporary launch script could not be written.
    #[error("Could not write launch script '{}': {source}", .path.display())]
    ScriptWrite {
        /// The script path, or its directory when creation failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The parts of the host a launch depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Decides the launch strategy.
    pub os: HostOs,
    /// Directory used when a command has no working directory.
    pub base_dir: PathBuf,
    /// Where macOS launch scripts are written.
    pub temp_dir: PathBuf,
}

impl HostEnvironment {
    /// Reads the current host: OS family, the directory of the running
    /// executable and the system temp directory.
    pub fn detect() -> Self {
        let base_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            os: HostOs::current(),
            base_dir: dunce::simplified(&base_dir).to_path_buf(),
            temp_dir: env::temp_dir(),
        }
    }
}

/// Blank names get the default window title.
pub fn window_title(name: &str) -> &str {
    if name.trim().is_empty() {
        DEFAULT_WINDOW_TITLE
    } else {
        name
    }
}

/// A blank working directory means the launcher's own directory. Nothing is
/// checked here; a missing directory surfaces when the process is spawned.
pub fn resolve_working_directory(spec: &CommandSpec, base_dir: &Path) -> PathBuf {
    if spec.working_directory.trim().is_empty() {
        base_dir.to_path_buf()
    } else {
        PathBuf::from(&spec.working_directory)
    }
}

/// What a launch will do, before any side effect happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Spawn this process as-is.
    Direct(ProcessDescriptor),
    /// Write this script first, then open it in Terminal.
    Script(MacScript),
}

impl LaunchPlan {
    /// Performs the plan's side effects and returns the descriptor to spawn.
    pub fn materialize(self) -> Result<ProcessDescriptor, LaunchError> {
        match self {
            Self::Direct(descriptor) => Ok(descriptor),
            Self::Script(script) => {
                let path = script.write()?;
                Ok(macos::build_descriptor(&path, &script.working_directory))
            }
        }
    }
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(descriptor) => {
                writeln!(f, "{}", descriptor.display_line())?;
                write!(f, "  cwd: {}", descriptor.working_directory.display())
            }
            Self::Script(script) => {
                writeln!(
                    f,
                    "/usr/bin/open -a {} {}",
                    crate::constants::MAC_TERMINAL_APP,
                    script
                        .temp_dir
                        .join(format!("{}<unique>.sh", crate::constants::MAC_SCRIPT_PREFIX))
                        .display()
                )?;
                write!(f, "{}", script.contents.trim_end())
            }
        }
    }
}

/// Proof of a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    /// PID of the spawned process (the console host or `open`, not the shell).
    pub pid: u32,
    /// What was spawned.
    pub descriptor: ProcessDescriptor,
}

/// The single human-readable outcome of [`Launcher::launch`].
#[derive(Debug)]
pub enum LaunchStatus {
    /// One process was created.
    Launched {
        /// Name of the launched command.
        name: String,
        /// PID of the spawned process.
        pid: u32,
    },
    /// Nothing was spawned.
    Failed {
        /// Name of the command, when there was one.
        name: Option<String>,
        /// What went wrong.
        error: LaunchError,
    },
}

impl LaunchStatus {
    /// True for [`LaunchStatus::Launched`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Launched { .. })
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launched { name, .. } => write!(f, t!("launch.status.executed"), name = name),
            Self::Failed { error: LaunchError::NoCommand, .. } => {
                f.write_str(t!("launch.status.no_command"))
            }
            Self::Failed { error, .. } => write!(f, t!("launch.status.failed"), error = error),
        }
    }
}

/// Launches commands on one host, through injectable PATH lookup and process creation.
pub struct Launcher<'a> {
    host: HostEnvironment,
    locator: &'a dyn ExecutableLocator,
    spawner: &'a dyn ProcessSpawner,
}

impl fmt::Debug for Launcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Launcher").field("host", &self.host).finish()
    }
}

impl<'a> Launcher<'a> {
    /// Wires a launcher to a host and its two seams.
    pub fn new(
        host: HostEnvironment,
        locator: &'a dyn ExecutableLocator,
        spawner: &'a dyn ProcessSpawner,
    ) -> Self {
        Self {
            host,
            locator,
            spawner,
        }
    }

    /// Chooses the OS branch and builds the launch without touching the filesystem.
    /// On Linux this probes `PATH` for a terminal emulator.
    pub fn plan(&self, spec: &CommandSpec) -> Result<LaunchPlan, LaunchError> {
        let working_directory = resolve_working_directory(spec, &self.host.base_dir);
        log::debug!(
            "Planning '{}' ({}) for {:?} in '{}'",
            spec.name,
            spec.shell_kind,
            self.host.os,
            working_directory.display()
        );

        let plan = match self.host.os {
            HostOs::Windows => {
                LaunchPlan::Direct(windows::build_descriptor(spec, &working_directory))
            }
            HostOs::MacOs => LaunchPlan::Script(MacScript {
                contents: macos::render_script(spec, &working_directory),
                temp_dir: self.host.temp_dir.clone(),
                working_directory,
            }),
            HostOs::Linux => {
                let terminal = linux::detect_terminal(self.locator)?;
                LaunchPlan::Direct(linux::build_descriptor(terminal, spec, &working_directory))
            }
        };
        Ok(plan)
    }

    /// Plans, materializes and spawns. Exactly one process is created on success.
    pub fn try_launch(&self, spec: Option<&CommandSpec>) -> Result<LaunchReceipt, LaunchError> {
        let spec = spec.ok_or(LaunchError::NoCommand)?;
        let descriptor = self.plan(spec)?.materialize()?;

        let pid = self
            .spawner
            .spawn(&descriptor)
            .map_err(|source| LaunchError::Spawn {
                executable: descriptor.executable.clone(),
                source,
            })?;

        log::info!("Launched '{}' (pid {}): {}", spec.name, pid, descriptor.display_line());
        Ok(LaunchReceipt { pid, descriptor })
    }

    /// Like [`Self::try_launch`], but never fails: errors are logged and
    /// reported through the returned status.
    pub fn launch(&self, spec: Option<&CommandSpec>) -> LaunchStatus {
        match self.try_launch(spec) {
            Ok(receipt) => LaunchStatus::Launched {
                name: spec.map(|s| s.name.clone()).unwrap_or_default(),
                pid: receipt.pid,
            },
            Err(error) => {
                log::error!("Launch failed: {}", error);
                LaunchStatus::Failed {
                    name: spec.map(|s| s.name.clone()),
                    error,
                }
            }
        }
    }
}
