// src/system/spawner.rs

use crate::models::ProcessDescriptor;
use std::io;
use std::process::{Command as StdCommand, Stdio};

/// Creates OS processes from descriptors. Fire-and-forget: implementations return
/// as soon as the child exists and never wait for it.
pub trait ProcessSpawner {
    /// Spawns the described process and returns its PID.
    fn spawn(&self, descriptor: &ProcessDescriptor) -> io::Result<u32>;
}

/// Spawns real processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, descriptor: &ProcessDescriptor) -> io::Result<u32> {
        let clean_cwd = dunce::simplified(&descriptor.working_directory);

        let mut command = StdCommand::new(&descriptor.executable);
        command
            .current_dir(clean_cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        apply_arguments(&mut command, descriptor);

        log::debug!(
            "Spawning '{}' in '{}'",
            descriptor.display_line(),
            clean_cwd.display()
        );

        // The child handle is dropped on purpose; the terminal outlives us.
        let child = command.spawn()?;
        Ok(child.id())
    }
}

#[cfg(not(windows))]
fn apply_arguments(command: &mut StdCommand, descriptor: &ProcessDescriptor) {
    command.args(&descriptor.arguments);
}

#[cfg(windows)]
fn apply_arguments(command: &mut StdCommand, descriptor: &ProcessDescriptor) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    // cmd.exe has its own parsing rules, so its command line is rendered by hand.
    if descriptor.executable.eq_ignore_ascii_case("cmd.exe") {
        command.raw_arg(super::windows::cmd_command_line(&descriptor.arguments));
    } else {
        command.args(&descriptor.arguments);
    }
    if !descriptor.window_visible {
        command.creation_flags(CREATE_NO_WINDOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_executable_is_an_error() {
        let descriptor = ProcessDescriptor {
            executable: "script-launcher-definitely-not-a-program".to_string(),
            arguments: vec![],
            working_directory: std::env::temp_dir(),
            window_visible: true,
        };
        let err = SystemSpawner.spawn(&descriptor).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_working_directory_is_an_error() {
        let descriptor = ProcessDescriptor {
            executable: "script-launcher-definitely-not-a-program".to_string(),
            arguments: vec![],
            working_directory: PathBuf::from("/script-launcher/no/such/dir"),
            window_visible: true,
        };
        assert!(SystemSpawner.spawn(&descriptor).is_err());
    }
}
