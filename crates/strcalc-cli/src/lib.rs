//! Host-side plumbing for the strcalc evaluator: settings files, hot reload
//! and the interactive shell.

pub mod settings;
pub mod shell;
pub mod watch;

pub use settings::{load_from_path, resolve, SettingsError, DEFAULT_SETTINGS_FILE};
pub use shell::Shell;
