// src/constants.rs

/// Window title used when a command has a blank name.
pub const DEFAULT_WINDOW_TITLE: &str = "Script Launcher";

/// Name of the directory (inside the platform config dir) holding our files.
pub const CONFIG_DIR_NAME: &str = "script-launcher";

/// The command catalogue file.
pub const STORE_FILENAME: &str = "commands.toml";

/// The user settings file.
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Prefix of the numbered catalogue sections (`Command_001`, `Command_002`, ...).
pub const STORE_SECTION_PREFIX: &str = "Command_";

/// Environment variable that overrides the catalogue location.
pub const STORE_PATH_ENV: &str = "SCRIPT_LAUNCHER_STORE";

/// Prefix of the temporary scripts generated for macOS launches.
pub const MAC_SCRIPT_PREFIX: &str = "script-launcher-";

/// Terminal application the macOS scripts are opened with.
pub const MAC_TERMINAL_APP: &str = "Terminal.app";
