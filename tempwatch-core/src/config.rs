use anyhow::{Context, Result, anyhow, ensure};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{analysis::DEFAULT_ANOMALY_THRESHOLD, model::Location};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// anomaly_threshold = 3.0
/// request_timeout_secs = 30
///
/// [location]
/// name = "Hyderabad"
/// latitude = 17.385
/// longitude = 78.4867
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub location: Location,

    /// Day-over-day max temperature change (°C) that counts as an anomaly.
    pub anomaly_threshold: f64,

    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: Location::default(),
            anomaly_threshold: DEFAULT_ANOMALY_THRESHOLD,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config dir, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tempwatch", "tempwatch")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        let Location { latitude, longitude, .. } = self.location;

        ensure!(
            (-90.0..=90.0).contains(&latitude),
            "latitude {latitude} is outside -90..=90"
        );
        ensure!(
            (-180.0..=180.0).contains(&longitude),
            "longitude {longitude} is outside -180..=180"
        );
        ensure!(
            self.anomaly_threshold.is_finite() && self.anomaly_threshold >= 0.0,
            "anomaly_threshold must be a non-negative number, got {}",
            self.anomaly_threshold
        );
        ensure!(self.request_timeout_secs > 0, "request_timeout_secs must be greater than zero");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_location() {
        let cfg = Config::default();

        assert_eq!(cfg.location.name, "Hyderabad");
        assert_eq!(cfg.location.latitude, 17.3850);
        assert_eq!(cfg.location.longitude, 78.4867);
        assert_eq!(cfg.anomaly_threshold, 3.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            location: Location { name: "Oslo".into(), latitude: 59.91, longitude: 10.75 },
            anomaly_threshold: 5.0,
            request_timeout_secs: 10,
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "anomaly_threshold = 4.5\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();

        assert_eq!(cfg.anomaly_threshold, 4.5);
        assert_eq!(cfg.location, Location::default());
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let mut cfg = Config::default();
        cfg.location.latitude = 91.0;

        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let cfg = Config { anomaly_threshold: -1.0, ..Config::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "request_timeout_secs = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
