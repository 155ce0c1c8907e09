//! Public models for the user-settings-sync module.
//!
//! `SettingsState` is the aggregate snapshot consumers read. Its two maps
//! sit behind `Arc` so that a transition which leaves a slice untouched
//! hands the very same allocation to the next state, and consumers can
//! detect change with a pointer comparison.

use std::sync::Arc;

use serde::Serialize;

/// Name of one user-configurable setting. Keys are opaque: `"meta.theme"` is
/// a top-level key like any other.
pub type SettingKey = String;

/// Opaque setting value.
pub type SettingValue = serde_json::Value;

/// Mapping from setting key to value.
pub type SettingsMap = serde_json::Map<String, SettingValue>;

/// Aggregate settings state: confirmed values, pending edits, and save lifecycle flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    settings: Arc<SettingsMap>,
    unsaved_settings: Arc<SettingsMap>,
    updating: bool,
    updating_password: bool,
}

impl SettingsState {
    /// Assembles a state from its four slices.
    #[must_use]
    pub fn from_parts(
        settings: Arc<SettingsMap>,
        unsaved_settings: Arc<SettingsMap>,
        updating: bool,
        updating_password: bool,
    ) -> Self {
        Self {
            settings,
            unsaved_settings,
            updating,
            updating_password,
        }
    }

    /// Last settings confirmed as saved by the remote service.
    #[must_use]
    pub fn settings(&self) -> &Arc<SettingsMap> {
        &self.settings
    }

    /// Local edits not yet confirmed saved.
    #[must_use]
    pub fn unsaved_settings(&self) -> &Arc<SettingsMap> {
        &self.unsaved_settings
    }

    /// Whether a save is in flight.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Whether the in-flight save changes the password.
    #[must_use]
    pub fn is_updating_password(&self) -> bool {
        self.updating_password
    }

    #[must_use]
    pub fn has_unsaved_settings(&self) -> bool {
        !self.unsaved_settings.is_empty()
    }

    /// Pending value of `key`, if the user edited it.
    #[must_use]
    pub fn get_unsaved_setting(&self, key: &str) -> Option<&SettingValue> {
        self.unsaved_settings.get(key)
    }

    /// Confirmed value of `key`, ignoring pending edits.
    #[must_use]
    pub fn get_original_setting(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    /// Effective value of `key`: the pending edit if any, else the confirmed value.
    #[must_use]
    pub fn get_setting(&self, key: &str) -> Option<&SettingValue> {
        self.get_unsaved_setting(key)
            .or_else(|| self.get_original_setting(key))
    }

    /// Whether both maps are the same allocations as in `other` and the flags match.
    ///
    /// This is the shallow comparison consumers use to skip re-rendering.
    #[must_use]
    pub fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.settings, &other.settings)
            && Arc::ptr_eq(&self.unsaved_settings, &other.unsaved_settings)
            && self.updating == other.updating
            && self.updating_password == other.updating_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> Arc<SettingsMap> {
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = SettingsState::default();

        assert!(state.settings().is_empty());
        assert!(state.unsaved_settings().is_empty());
        assert!(!state.is_updating());
        assert!(!state.is_updating_password());
        assert!(!state.has_unsaved_settings());
    }

    #[test]
    fn test_get_setting_prefers_unsaved_value() {
        let state = SettingsState::from_parts(
            map(json!({"displayName": "Ann", "language": "en"})),
            map(json!({"displayName": "Bob"})),
            false,
            false,
        );

        assert_eq!(state.get_setting("displayName"), Some(&json!("Bob")));
        assert_eq!(state.get_setting("language"), Some(&json!("en")));
        assert_eq!(state.get_original_setting("displayName"), Some(&json!("Ann")));
        assert_eq!(state.get_setting("missing"), None);
    }

    #[test]
    fn test_dotted_keys_are_read_verbatim() {
        let state = SettingsState::from_parts(
            map(json!({"meta": {"theme": "light"}, "meta.theme": "dark"})),
            Arc::new(SettingsMap::new()),
            false,
            false,
        );

        assert_eq!(state.get_setting("meta.theme"), Some(&json!("dark")));
        assert_eq!(state.get_setting("meta"), Some(&json!({"theme": "light"})));
    }

    #[test]
    fn test_serializes_to_snapshot_shape() {
        let state = SettingsState::from_parts(
            map(json!({"language": "en"})),
            map(json!({"language": "fr"})),
            true,
            false,
        );

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "settings": {"language": "en"},
                "unsavedSettings": {"language": "fr"},
                "updating": true,
                "updatingPassword": false
            })
        );
    }

    #[test]
    fn test_shallow_eq_compares_map_identity() {
        let state = SettingsState::default();
        let cloned = state.clone();
        assert!(state.shallow_eq(&cloned));

        let rebuilt = SettingsState::from_parts(
            Arc::new(SettingsMap::new()),
            Arc::clone(state.unsaved_settings()),
            false,
            false,
        );
        assert_eq!(state, rebuilt);
        assert!(!state.shallow_eq(&rebuilt));
    }
}
