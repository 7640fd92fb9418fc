//! Application settings configuration
//!
//! Network timeouts, the default port and expiry thresholds.

use crate::certificate::ExpiryThresholds;
use crate::target::DEFAULT_PORT;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings for acquiring a certificate
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadSettings {
    pub connect_timeout_secs: u64,
    pub handshake_timeout_secs: u64,
    pub default_port: u16,
}

impl Default for ReadSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            handshake_timeout_secs: 10,
            default_port: DEFAULT_PORT,
        }
    }
}

impl ReadSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }

    /// Apply one timeout to both the connect and handshake stages
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self.handshake_timeout_secs = secs;
        self
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub read: ReadSettings,
    #[serde(default)]
    pub expiry: ExpiryThresholds,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.expiry.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.read.default_port, 443);
        assert_eq!(settings.read.connect_timeout(), Duration::from_secs(10));
        assert_eq!(settings.expiry.warning_days, 7);
        assert_eq!(settings.expiry.critical_days, 0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            [read]
            handshake_timeout_secs = 3

            [expiry]
            warning_days = 30
            "#,
        )
        .unwrap();
        assert_eq!(settings.read.handshake_timeout_secs, 3);
        assert_eq!(settings.read.connect_timeout_secs, 10);
        assert_eq!(settings.expiry.warning_days, 30);
        assert_eq!(settings.expiry.critical_days, 0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml("[read\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_out_of_range_threshold() {
        let err = Settings::from_toml("[expiry]\nwarning_days = 9223372036854775807\n").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "expiry.warning_days"),
            "{}",
            err
        );

        let err = Settings::from_toml("[expiry]\ncritical_days = -5\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from_file("/nonexistent/tls.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_with_timeout() {
        let read = ReadSettings::default().with_timeout(2);
        assert_eq!(read.connect_timeout(), Duration::from_secs(2));
        assert_eq!(read.handshake_timeout(), Duration::from_secs(2));
    }
}
