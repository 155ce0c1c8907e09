//! `SettingsSyncApi` trait definition.
//!
//! This trait defines the public API of the user-settings-sync module as seen
//! by settings forms: read snapshots, edit locally, save.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SettingsSyncError;
use crate::models::{SettingKey, SettingValue, SettingsMap, SettingsState};

/// Public API trait for the user-settings-sync module.
#[async_trait]
pub trait SettingsSyncApi: Send + Sync {
    /// Current immutable snapshot of the settings state.
    async fn snapshot(&self) -> Arc<SettingsState>;

    /// Records a local edit of `key`.
    ///
    /// # Errors
    /// Returns `Validation` if `key` is empty or too long.
    async fn set_unsaved(
        &self,
        key: SettingKey,
        value: SettingValue,
    ) -> Result<Arc<SettingsState>, SettingsSyncError>;

    /// Discards the local edit of `key`.
    ///
    /// # Errors
    /// Returns `Validation` if `key` is empty or too long.
    async fn remove_unsaved(
        &self,
        key: SettingKey,
    ) -> Result<Arc<SettingsState>, SettingsSyncError>;

    /// Discards local edits: all of them for `None`, only `keys` for `Some(keys)`.
    async fn clear_unsaved(&self, keys: Option<Vec<SettingKey>>) -> Arc<SettingsState>;

    /// Saves `overrides`, or every pending edit when `None`.
    ///
    /// Returns the settings the remote service confirmed.
    ///
    /// # Errors
    /// Returns `SaveAlreadyInProgress` without contacting the remote service
    /// while another save is in flight, `SaveFailed` when the remote service
    /// rejects the save, and `Superseded` when the consumer detached first.
    async fn request_save(
        &self,
        overrides: Option<SettingsMap>,
    ) -> Result<SettingsMap, SettingsSyncError>;

    /// Loads the confirmed settings from the remote service.
    ///
    /// # Errors
    /// Returns `FetchFailed` with the remote error detail when loading fails.
    async fn fetch(&self) -> Result<Arc<SettingsState>, SettingsSyncError>;
}
