//! Application configuration.
//!
//! Configuration is optional: when no file is present the explorer runs on
//! defaults. A file can be passed explicitly or picked up from the platform
//! config directory (`<config_dir>/floatchat/config.toml`).

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::map::{MAX_ZOOM, MIN_ZOOM};

/// Tunable settings for the explorer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Delay before a scripted chat reply is delivered, in milliseconds.
    pub reply_delay_ms: u64,
    /// Initial map zoom level, also the target of a zoom reset.
    pub default_zoom: u8,
    /// UI tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            default_zoom: 6,
            tick_rate_ms: 250,
        }
    }
}

impl ExplorerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path` when given, otherwise from the
    /// platform config directory when a file exists there, otherwise
    /// returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only when a file was found but could not be loaded.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// The scripted-reply delay as a duration.
    pub fn reply_delay(&self) -> Duration {
        Duration::milliseconds(self.reply_delay_ms as i64)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.default_zoom) {
            return Err(ExplorerError::config(format!(
                "default_zoom must be between {} and {}, got {}",
                MIN_ZOOM, MAX_ZOOM, self.default_zoom
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(ExplorerError::config("tick_rate_ms must be non-zero"));
        }
        Ok(())
    }
}

/// Default location of the config file, if a platform config dir exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("floatchat").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.reply_delay_ms, 1000);
        assert_eq!(config.default_zoom, 6);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let (_dir, path) = write_config("reply_delay_ms = 50\n");
        let config = ExplorerConfig::load(&path).unwrap();
        assert_eq!(config.reply_delay_ms, 50);
        assert_eq!(config.default_zoom, 6);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let (_dir, path) = write_config("reply_delay_ms = \"soon\"\n");
        let err = ExplorerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ExplorerError::Serialization { .. }));
    }

    #[test]
    fn test_load_rejects_out_of_range_zoom() {
        let (_dir, path) = write_config("default_zoom = 11\n");
        let err = ExplorerConfig::load(&path).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_or_default_with_explicit_path() {
        let (_dir, path) = write_config("tick_rate_ms = 100\n");
        let config = ExplorerConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(ExplorerConfig::load_or_default(Some(&path)).is_err());
    }
}
