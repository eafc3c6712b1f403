// src/system/locator.rs

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Resolves bare executable names the way a shell would, by searching a list of directories.
pub trait ExecutableLocator {
    /// Returns the full path of `name` if it can be executed, `None` otherwise.
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Looks executables up on a `PATH`-style search list.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Uses the `PATH` of the current process.
    pub fn from_env() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    /// Uses an explicit search list (platform path separator).
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ExecutableLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        for dir in env::split_paths(search_path) {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
            if cfg!(target_os = "windows") {
                let with_ext = dir.join(format!("{}.exe", name));
                if is_executable(&with_ext) {
                    return Some(with_ext);
                }
            }
        }
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
