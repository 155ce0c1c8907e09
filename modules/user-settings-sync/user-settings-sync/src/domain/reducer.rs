//! Settings reducer.
//!
//! One pure reducer per slice of `SettingsState`, combined by [`reduce`].
//! A reducer that has nothing to change returns its input `Arc`, so an
//! action that touches no slice yields the input state itself.

use std::sync::Arc;

use user_settings_sync_sdk::{SettingKey, SettingsAction, SettingsMap, SettingsState};

use super::fields::SettingsFields;

/// Computes the state that follows `state` after `action`.
///
/// Never mutates `state`. Returns a clone of the input `Arc` when no slice changed.
#[must_use]
pub fn reduce(state: &Arc<SettingsState>, action: &SettingsAction) -> Arc<SettingsState> {
    let next = SettingsState::from_parts(
        settings(state.settings(), action),
        unsaved_settings(state.unsaved_settings(), action),
        updating(state.is_updating(), action),
        updating_password(state.is_updating_password(), action),
    );

    if next.shallow_eq(state) {
        Arc::clone(state)
    } else {
        Arc::new(next)
    }
}

/// Confirmed settings. Changes only when the remote service reports values.
#[must_use]
pub fn settings(state: &Arc<SettingsMap>, action: &SettingsAction) -> Arc<SettingsMap> {
    match action {
        SettingsAction::SaveSucceeded { setting_values, .. }
        | SettingsAction::SettingsReceived { setting_values } => merge(state, setting_values),
        _ => Arc::clone(state),
    }
}

/// Pending edits.
#[must_use]
pub fn unsaved_settings(state: &Arc<SettingsMap>, action: &SettingsAction) -> Arc<SettingsMap> {
    match action {
        SettingsAction::UnsavedSet { key, value } => {
            if state.get(key) == Some(value) {
                return Arc::clone(state);
            }
            let mut next = SettingsMap::clone(state);
            next.insert(key.clone(), value.clone());
            Arc::new(next)
        }
        SettingsAction::UnsavedRemove { key } => remove_keys(state, std::slice::from_ref(key)),
        SettingsAction::UnsavedClear { keys: None }
        | SettingsAction::SaveSucceeded {
            saved_keys: None, ..
        } => clear(state),
        SettingsAction::UnsavedClear { keys: Some(keys) }
        | SettingsAction::SaveSucceeded {
            saved_keys: Some(keys),
            ..
        } => remove_keys(state, keys),
        _ => Arc::clone(state),
    }
}

/// Whether a save is in flight.
#[must_use]
pub fn updating(state: bool, action: &SettingsAction) -> bool {
    match action {
        SettingsAction::SaveRequested { .. } => true,
        SettingsAction::SaveSucceeded { .. } | SettingsAction::SaveFailed { .. } => false,
        _ => state,
    }
}

/// Whether the in-flight save carries a credential change.
#[must_use]
pub fn updating_password(state: bool, action: &SettingsAction) -> bool {
    match action {
        SettingsAction::SaveRequested { overrides } => overrides
            .as_ref()
            .is_some_and(SettingsFields::changes_credentials),
        SettingsAction::SaveSucceeded { .. } | SettingsAction::SaveFailed { .. } => false,
        _ => state,
    }
}

fn merge(state: &Arc<SettingsMap>, values: &SettingsMap) -> Arc<SettingsMap> {
    if values.iter().all(|(key, value)| state.get(key) == Some(value)) {
        return Arc::clone(state);
    }
    let mut next = SettingsMap::clone(state);
    for (key, value) in values {
        next.insert(key.clone(), value.clone());
    }
    Arc::new(next)
}

fn clear(state: &Arc<SettingsMap>) -> Arc<SettingsMap> {
    if state.is_empty() {
        Arc::clone(state)
    } else {
        Arc::new(SettingsMap::new())
    }
}

fn remove_keys(state: &Arc<SettingsMap>, keys: &[SettingKey]) -> Arc<SettingsMap> {
    if !keys.iter().any(|key| state.contains_key(key)) {
        return Arc::clone(state);
    }
    let mut next = SettingsMap::clone(state);
    for key in keys {
        next.remove(key);
    }
    Arc::new(next)
}
