use serde::Deserialize;
use std::path::{Path, PathBuf};
use strcalc_core::Configuration;
use thiserror::Error;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk layout: calculator settings live under their own section so the
/// file can carry unrelated host settings.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(rename = "CalculatorSettings", default)]
    calculator: Configuration,
}

/// Reads and parses a settings file.
pub fn load_from_path(path: &Path) -> Result<Configuration, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SettingsFile =
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Loaded calculator settings from {:?}", path);
    Ok(file.calculator.sanitized())
}

/// Resolves the settings to start with.
///
/// An explicit path must exist. Without one, [`DEFAULT_SETTINGS_FILE`] is used
/// if present, otherwise built-in defaults apply. Returns the path that was
/// loaded so it can be watched.
pub fn resolve(explicit: Option<&Path>) -> Result<(Configuration, Option<PathBuf>), SettingsError> {
    if let Some(path) = explicit {
        return Ok((load_from_path(path)?, Some(path.to_path_buf())));
    }

    let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
    if fallback.exists() {
        let config = load_from_path(&fallback)?;
        Ok((config, Some(fallback)))
    } else {
        log::info!("No settings file found, using defaults");
        Ok((Configuration::default(), None))
    }
}
