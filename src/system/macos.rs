// src/system/macos.rs

use crate::constants::{MAC_SCRIPT_PREFIX, MAC_TERMINAL_APP};
use crate::models::{CommandSpec, ProcessDescriptor};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::launcher::LaunchError;
use super::linux::escape_single_quotes;

/// A rendered launch script that still has to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacScript {
    /// Full script text, see [`render_script`].
    pub contents: String,
    /// Directory the script file is created in.
    pub temp_dir: PathBuf,
    /// Resolved working directory of the command.
    pub working_directory: PathBuf,
}

impl MacScript {
    /// Writes the script under `temp_dir` with a fresh unique name, marks it
    /// executable and returns its path.
    ///
    /// The file is kept on purpose: Terminal reads it after we have returned.
    pub fn write(&self) -> Result<PathBuf, LaunchError> {
        let mut file = tempfile::Builder::new()
            .prefix(MAC_SCRIPT_PREFIX)
            .suffix(".sh")
            .tempfile_in(&self.temp_dir)
            .map_err(|source| LaunchError::ScriptWrite {
                path: self.temp_dir.clone(),
                source,
            })?;

        let path = file.path().to_path_buf();
        file.write_all(self.contents.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| LaunchError::ScriptWrite {
                path: path.clone(),
                source,
            })?;

        let (_, path) = file.keep().map_err(|e| LaunchError::ScriptWrite {
            path: path.clone(),
            source: e.error,
        })?;

        mark_executable(&path).map_err(|source| LaunchError::ScriptWrite {
            path: path.clone(),
            source,
        })?;

        log::debug!("Launch script written to '{}'", path.display());
        Ok(path)
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    // No execute bit outside Unix; just confirm the file is there.
    fs::metadata(path).map(|_| ())
}

/// Renders the bash script that enters the directory, runs the command and
/// then drops into an interactive shell so the window stays open.
pub fn render_script(spec: &CommandSpec, working_directory: &Path) -> String {
    let dir = escape_single_quotes(&working_directory.to_string_lossy());
    // A newline in the name would turn the rest of it into a command.
    let name = spec.name.replace(['\r', '\n'], " ");

    let mut script = String::new();
    script.push_str("#!/bin/bash\n");
    script.push_str(&format!("# Script Launcher - {}\n", name));
    script.push_str(&format!("cd '{}' || exit 1\n", dir));
    script.push_str(&format!("echo 'Running command in: {}'\n", dir));
    script.push_str("echo ''\n");
    script.push_str(&spec.command_text);
    script.push('\n');
    script.push_str("echo ''\n");
    script.push_str("echo 'Press Ctrl+C to close...'\n");
    script.push_str("exec bash\n");
    script
}

/// `open -a Terminal.app <script>`.
pub fn build_descriptor(script_path: &Path, working_directory: &Path) -> ProcessDescriptor {
    ProcessDescriptor {
        executable: "/usr/bin/open".to_string(),
        arguments: vec![
            "-a".to_string(),
            MAC_TERMINAL_APP.to_string(),
            script_path.to_string_lossy().into_owned(),
        ],
        working_directory: working_directory.to_path_buf(),
        window_visible: true,
    }
}
