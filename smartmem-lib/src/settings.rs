//! Settings file: user-supplied sensor candidates.
//!
//! The file is `~/.config/smartmem/settings.toml` unless overridden:
//!
//! ```toml
//! [[sensors]]
//! label = "EMC1412 - Custom"
//! reg6 = "0x1234"
//! reg7 = "0x5678"
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use smartmem_core::{RegisterPair, SchemeError, SensorCandidate};

/// Environment variable that overrides the settings path.
pub const SETTINGS_ENV: &str = "SMARTMEM_SETTINGS";

/// Default settings location: `<config dir>/smartmem/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("smartmem").join("settings.toml")
}

/// Resolve the settings path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `SMARTMEM_SETTINGS` environment variable
/// 3. [`settings_path`]
pub fn resolve_settings_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_settings_path_from(cli_override, std::env::var_os(SETTINGS_ENV))
}

/// Same as [`resolve_settings_path`] with the environment value passed in.
pub fn resolve_settings_path_from(
    cli_override: Option<PathBuf>,
    env_value: Option<OsString>,
) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    match env_value {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => settings_path(),
    }
}

/// Parsed contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub sensors: Vec<SensorEntry>,
}

/// One `[[sensors]]` table. Registers are kept as text until validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SensorEntry {
    pub label: String,
    pub reg6: String,
    pub reg7: String,
}

impl Settings {
    /// Load settings from `path`. A missing file yields empty settings.
    pub fn load(path: &Path) -> Result<Self, SchemeError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&contents)
            .map_err(|e| SchemeError::settings(format!("{}: {}", path.display(), e)))
    }

    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self, SchemeError> {
        toml::from_str(contents).map_err(|e| SchemeError::settings(e.to_string()))
    }

    /// Validate the configured sensors into candidates, in file order.
    pub fn sensor_candidates(&self) -> Result<Vec<SensorCandidate>, SchemeError> {
        self.sensors
            .iter()
            .map(|entry| {
                if entry.label.trim().is_empty() {
                    return Err(SchemeError::settings("sensor entry with empty label"));
                }
                let registers = RegisterPair::parse(&entry.reg6, &entry.reg7).map_err(|e| {
                    SchemeError::settings(format!("sensor '{}': {}", entry.label, e))
                })?;
                Ok(SensorCandidate::new(entry.label.trim(), registers))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
