//! User Settings Sync Module Implementation
//!
//! Keeps a session-local cache of user settings, a buffer of pending edits,
//! and the lifecycle of the save that reconciles them with the remote
//! settings service. The public API is defined in `user-settings-sync-sdk`
//! and re-exported here.

pub use user_settings_sync_sdk::{
    SettingKey, SettingValue, SettingsAction, SettingsMap, SettingsState, SettingsSyncApi,
    SettingsSyncError,
};

pub mod config;
pub mod local_client;

pub use config::UserSettingsSyncConfig;
pub use domain::backend::SettingsBackend;
pub use domain::service::SettingsSyncService;
pub use infra::InMemorySettingsBackend;
pub use local_client::LocalClient;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
