//! # System Interaction Layer
//!
//! The boundary between the catalogue and the operating system.
//!
//! ## Modules
//!
//! - **`launcher`**: Picks the launch strategy for the host OS and turns a command into
//!   exactly one new terminal session, reporting the outcome as a status.
//! - **`windows`**, **`macos`**, **`linux`**: Per-OS argument vectors, temporary scripts
//!   and terminal emulator dialects.
//! - **`locator`** and **`spawner`**: The two host seams (PATH lookup and process
//!   creation), replaceable in tests.
//! - **`settings`**: Loading of `settings.toml`.

pub mod launcher;
pub mod linux;
pub mod locator;
pub mod macos;
pub mod settings;
pub mod spawner;
pub mod windows;
