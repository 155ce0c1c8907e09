//! Configuration for the User Settings Sync module.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the User Settings Sync module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UserSettingsSyncConfig {
    /// Upper bound on one remote save. Expiry resolves the save as failed.
    /// Default: `30s`
    #[serde(with = "humantime_serde")]
    pub save_timeout: Duration,

    /// Maximum length in bytes of a setting key.
    /// Default: `100`
    pub max_key_length: usize,
}

impl Default for UserSettingsSyncConfig {
    fn default() -> Self {
        Self {
            save_timeout: Duration::from_secs(30),
            max_key_length: 100,
        }
    }
}

/// Configuration error for the module config section.
#[derive(thiserror::Error, Debug)]
#[error("invalid config for module '{module}': {source}")]
pub struct ConfigError {
    module: String,
    #[source]
    source: serde_json::Error,
}

impl UserSettingsSyncConfig {
    pub const MODULE_NAME: &'static str = "user_settings_sync";

    /// Reads the config from a raw module entry (`{ "config": { ... } }`).
    ///
    /// A missing entry, a non-object entry, or a missing `config` key yields defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the `config` section exists but cannot be deserialized.
    pub fn from_module_value(module_raw: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        let Some(section) = module_raw
            .and_then(serde_json::Value::as_object)
            .and_then(|obj| obj.get("config"))
        else {
            return Ok(Self::default());
        };

        serde_json::from_value(section.clone()).map_err(|source| ConfigError {
            module: Self::MODULE_NAME.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let cfg = UserSettingsSyncConfig::default();
        assert_eq!(cfg.save_timeout, Duration::from_secs(30));
        assert_eq!(cfg.max_key_length, 100);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let cfg = UserSettingsSyncConfig::from_module_value(None).unwrap();
        assert_eq!(cfg, UserSettingsSyncConfig::default());

        let raw = json!({"database": {}});
        let cfg = UserSettingsSyncConfig::from_module_value(Some(&raw)).unwrap();
        assert_eq!(cfg, UserSettingsSyncConfig::default());
    }

    #[test]
    fn test_parses_humantime_timeout() {
        let raw = json!({"config": {"save_timeout": "1m 30s"}});
        let cfg = UserSettingsSyncConfig::from_module_value(Some(&raw)).unwrap();
        assert_eq!(cfg.save_timeout, Duration::from_secs(90));
        assert_eq!(cfg.max_key_length, 100);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let raw = json!({"config": {"retries": 3}});
        let err = UserSettingsSyncConfig::from_module_value(Some(&raw)).unwrap_err();
        assert!(err.to_string().contains("user_settings_sync"));
    }

    #[test]
    fn test_rejects_malformed_duration() {
        let raw = json!({"config": {"save_timeout": "soon"}});
        assert!(UserSettingsSyncConfig::from_module_value(Some(&raw)).is_err());
    }

    #[test]
    fn test_serializes_timeout_as_humantime() {
        let cfg = UserSettingsSyncConfig {
            save_timeout: Duration::from_secs(15),
            max_key_length: 64,
        };
        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value, json!({"save_timeout": "15s", "max_key_length": 64}));
    }
}
