// src/state.rs

use crate::core::store::{self, StoreError};
use crate::models::CommandSpec;
use std::path::{Path, PathBuf};

/// Represents the state of the command catalogue.
/// It holds the current list and, after the first mutable access, a snapshot
/// of the list as it was loaded.
#[derive(Debug)]
enum StoreState {
    /// No mutable access has been requested yet.
    Pristine(Vec<CommandSpec>),
    /// A mutation has been requested. We hold both the original snapshot
    /// and the current, mutable list.
    Dirty {
        original: Vec<CommandSpec>,
        current: Vec<CommandSpec>,
    },
}

/// The catalogue loaded from one store file, with change tracking.
#[derive(Debug)]
pub struct AppState {
    store_path: PathBuf,
    state: StoreState,
}

impl AppState {
    /// Loads the catalogue at `store_path`. A missing file is an empty catalogue.
    pub fn load(store_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store_path = store_path.into();
        let commands = store::load_commands(&store_path)?;
        log::info!(
            "Loaded {} commands from '{}'",
            commands.len(),
            store_path.display()
        );
        Ok(Self::with_commands(store_path, commands))
    }

    pub fn with_commands(store_path: impl Into<PathBuf>, commands: Vec<CommandSpec>) -> Self {
        Self {
            store_path: store_path.into(),
            state: StoreState::Pristine(commands),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Read-only access to the current list.
    pub fn commands(&self) -> &[CommandSpec] {
        match &self.state {
            StoreState::Pristine(commands) => commands,
            StoreState::Dirty { current, .. } => current,
        }
    }

    /// Mutable access to the list. The first call snapshots the original.
    pub fn commands_mut(&mut self) -> &mut Vec<CommandSpec> {
        if let StoreState::Pristine(commands) = &mut self.state {
            let current = std::mem::take(commands);
            self.state = StoreState::Dirty {
                original: current.clone(),
                current,
            };
        }

        match &mut self.state {
            StoreState::Dirty { current, .. } => current,
            StoreState::Pristine(commands) => commands,
        }
    }

    /// True when the list differs from what was loaded (or last saved).
    pub fn needs_saving(&self) -> bool {
        match &self.state {
            StoreState::Pristine(_) => false,
            StoreState::Dirty { original, current } => original != current,
        }
    }

    /// Writes the list back to the store when it changed. Returns whether a write happened.
    pub fn persist(&mut self) -> Result<bool, StoreError> {
        if !self.needs_saving() {
            log::debug!("Catalogue unchanged, nothing to save.");
            return Ok(false);
        }

        store::save_commands(&self.store_path, self.commands())?;

        let state = std::mem::replace(&mut self.state, StoreState::Pristine(Vec::new()));
        self.state = match state {
            StoreState::Dirty { current, .. } => StoreState::Pristine(current),
            pristine => pristine,
        };
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShellKind;

    fn sample() -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("List", ShellKind::Bash, "/tmp", "ls -la"),
            CommandSpec::new("Dir", ShellKind::Cmd, "", "dir"),
        ]
    }

    #[test]
    fn test_read_access_keeps_state_pristine() {
        let state = AppState::with_commands("unused.toml", sample());
        assert_eq!(state.commands().len(), 2);
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_mutation_that_reverts_is_not_dirty() {
        let mut state = AppState::with_commands("unused.toml", sample());
        let removed = state.commands_mut().pop().unwrap();
        assert!(state.needs_saving());
        state.commands_mut().push(removed);
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_persist_writes_once_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.toml");

        let mut state = AppState::load(&path).unwrap();
        assert!(state.commands().is_empty());
        assert!(!state.persist().unwrap());
        assert!(!path.exists());

        state.commands_mut().extend(sample());
        assert!(state.persist().unwrap());
        assert!(!state.needs_saving());
        assert!(!state.persist().unwrap());

        let reloaded = AppState::load(&path).unwrap();
        assert_eq!(reloaded.commands(), sample().as_slice());
    }
}
