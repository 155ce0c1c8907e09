//! Action vocabulary of the settings reducer.

use crate::models::{SettingKey, SettingValue, SettingsMap};

/// An event that drives a settings state transition.
///
/// The enum is `#[non_exhaustive]`: reducers outside this crate keep a
/// pass-through arm, so actions added later are identity transitions for
/// older reducers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsAction {
    /// A save was initiated. `overrides` is `Some` when the caller saves an
    /// explicit set of values instead of the whole pending buffer.
    SaveRequested { overrides: Option<SettingsMap> },

    /// The remote service confirmed a save.
    ///
    /// `setting_values` is merged into the confirmed settings. `saved_keys`
    /// selects which pending edits to drop: `None` drops every pending edit,
    /// `Some(keys)` drops only `keys`.
    SaveSucceeded {
        setting_values: SettingsMap,
        saved_keys: Option<Vec<SettingKey>>,
    },

    /// The remote service rejected a save, or the save was abandoned.
    SaveFailed { error: String },

    /// Settings loaded from the remote service outside of a save.
    SettingsReceived { setting_values: SettingsMap },

    /// A local edit.
    UnsavedSet { key: SettingKey, value: SettingValue },

    /// Discard the local edit of one key.
    UnsavedRemove { key: SettingKey },

    /// Discard local edits.
    ///
    /// `None` discards every pending edit. `Some(keys)` discards only `keys`,
    /// so `Some(vec![])` discards nothing.
    UnsavedClear { keys: Option<Vec<SettingKey>> },
}

impl SettingsAction {
    /// Stable name of the action, safe to log: it never includes setting values.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SaveRequested { .. } => "save_requested",
            Self::SaveSucceeded { .. } => "save_succeeded",
            Self::SaveFailed { .. } => "save_failed",
            Self::SettingsReceived { .. } => "settings_received",
            Self::UnsavedSet { .. } => "unsaved_set",
            Self::UnsavedRemove { .. } => "unsaved_remove",
            Self::UnsavedClear { .. } => "unsaved_clear",
        }
    }

    #[must_use]
    pub fn save_requested(overrides: Option<SettingsMap>) -> Self {
        Self::SaveRequested { overrides }
    }

    /// Save confirmation that drops the pending edits of the confirmed keys only.
    #[must_use]
    pub fn save_succeeded(setting_values: SettingsMap) -> Self {
        let saved_keys = setting_values.keys().cloned().collect();
        Self::SaveSucceeded {
            setting_values,
            saved_keys: Some(saved_keys),
        }
    }

    /// Save confirmation that drops every pending edit.
    #[must_use]
    pub fn save_succeeded_clearing_all(setting_values: SettingsMap) -> Self {
        Self::SaveSucceeded {
            setting_values,
            saved_keys: None,
        }
    }

    #[must_use]
    pub fn save_failed(error: impl Into<String>) -> Self {
        Self::SaveFailed {
            error: error.into(),
        }
    }

    #[must_use]
    pub fn settings_received(setting_values: SettingsMap) -> Self {
        Self::SettingsReceived { setting_values }
    }

    #[must_use]
    pub fn set_unsaved(key: impl Into<SettingKey>, value: SettingValue) -> Self {
        Self::UnsavedSet {
            key: key.into(),
            value,
        }
    }

    #[must_use]
    pub fn remove_unsaved(key: impl Into<SettingKey>) -> Self {
        Self::UnsavedRemove { key: key.into() }
    }

    /// Discards every pending edit.
    #[must_use]
    pub fn clear_all_unsaved() -> Self {
        Self::UnsavedClear { keys: None }
    }

    /// Discards the pending edits of `keys`. An empty list discards nothing.
    #[must_use]
    pub fn clear_unsaved<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SettingKey>,
    {
        Self::UnsavedClear {
            keys: Some(keys.into_iter().map(Into::into).collect()),
        }
    }
}
