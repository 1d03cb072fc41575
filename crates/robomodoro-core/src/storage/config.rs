//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Status label style (minutes only or `MM:SS`)
//! - Countdown lengths and long-break cadence
//! - Notification presentation
//!
//! Configuration is stored at `~/.config/robomodoro/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::ports::PresentationPolicy;
use crate::timer::{
    Durations, EngineSettings, BREAK_SECS, LONG_BREAK_INTERVAL, LONG_BREAK_SECS, WORK_SECS,
};

/// Status label configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show `MM:SS` instead of rounded minutes.
    #[serde(default)]
    pub show_seconds: bool,
}

/// Countdown configuration, all values in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationsConfig {
    #[serde(default = "default_work_secs")]
    pub work_secs: u64,
    #[serde(default = "default_break_secs")]
    pub break_secs: u64,
    #[serde(default = "default_long_break_secs")]
    pub long_break_secs: u64,
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// How long a notification stays on screen.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/robomodoro/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub durations: DurationsConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// Default functions
fn default_work_secs() -> u64 {
    WORK_SECS
}
fn default_break_secs() -> u64 {
    BREAK_SECS
}
fn default_long_break_secs() -> u64 {
    LONG_BREAK_SECS
}
fn default_long_break_interval() -> u32 {
    LONG_BREAK_INTERVAL
}
fn default_true() -> bool {
    true
}
fn default_timeout_secs() -> u32 {
    3
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            work_secs: default_work_secs(),
            break_secs: default_break_secs(),
            long_break_secs: default_long_break_secs(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|e| invalid(e.to_string()))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("not a leaf value".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults there if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Ok(Self::load_from(&path)?)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default config: {e}");
            Self::default()
        })
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        Ok(self.save_to(&Self::path()?)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is not valid
    /// for it. The config is left untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject countdowns that would expire immediately.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("durations.work_secs", self.durations.work_secs),
            ("durations.break_secs", self.durations.break_secs),
            ("durations.long_break_secs", self.durations.long_break_secs),
            (
                "durations.long_break_interval",
                u64::from(self.durations.long_break_interval),
            ),
        ];
        for (key, value) in checks {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    pub fn durations(&self) -> Durations {
        Durations {
            work_secs: self.durations.work_secs,
            break_secs: self.durations.break_secs,
            long_break_secs: self.durations.long_break_secs,
        }
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            durations: self.durations(),
            long_break_interval: self.durations.long_break_interval,
            show_seconds: self.display.show_seconds,
        }
    }

    pub fn presentation_policy(&self) -> PresentationPolicy {
        PresentationPolicy::from(self.notifications.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(!parsed.display.show_seconds);
        assert_eq!(parsed.durations.work_secs, 1500);
        assert_eq!(parsed.durations.long_break_interval, 4);
        assert!(parsed.notifications.enabled);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[display]\nshow_seconds = true\n").unwrap();
        assert!(parsed.display.show_seconds);
        assert_eq!(parsed.durations.break_secs, 300);
        assert_eq!(parsed.durations.long_break_secs, 900);
        assert_eq!(parsed.notifications.timeout_secs, 3);
    }

    #[test]
    fn get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("durations.work_secs").as_deref(), Some("1500"));
        assert_eq!(cfg.get("display.show_seconds").as_deref(), Some("false"));
        assert_eq!(cfg.get("display"), None);
        assert_eq!(cfg.get("nope"), None);
    }

    #[test]
    fn set_updates_and_validates() {
        let mut cfg = Config::default();
        cfg.set("display.show_seconds", "true").unwrap();
        cfg.set("durations.break_secs", "420").unwrap();
        assert!(cfg.display.show_seconds);
        assert_eq!(cfg.durations.break_secs, 420);

        assert!(matches!(
            cfg.set("durations.work_secs", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg.durations.work_secs, 1500);

        assert!(matches!(
            cfg.set("durations.work_secs", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("display.colour", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn engine_settings_follow_config() {
        let mut cfg = Config::default();
        cfg.set("durations.long_break_interval", "3").unwrap();
        cfg.set("display.show_seconds", "true").unwrap();
        let settings = cfg.engine_settings();
        assert_eq!(settings.long_break_interval, 3);
        assert!(settings.show_seconds);
        assert_eq!(settings.durations, Durations::default());
    }

    #[test]
    fn disabled_notifications_never_present() {
        let mut cfg = Config::default();
        assert!(cfg.presentation_policy().should_present());
        cfg.set("notifications.enabled", "false").unwrap();
        assert!(!cfg.presentation_policy().should_present());
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.set("durations.work_secs", "3000").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.durations.work_secs, 3000);
    }

    #[test]
    fn load_rejects_zero_duration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[durations]\nbreak_secs = 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[durations\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn missing_file_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(&dir.path().join("absent.toml")),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
