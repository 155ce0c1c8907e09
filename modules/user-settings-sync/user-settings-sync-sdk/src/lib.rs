//! User Settings Sync SDK
//!
//! This crate provides the public contract of the user-settings-sync module:
//! - `SettingsSyncApi` trait for consumers (settings forms)
//! - `SettingsAction`, the action vocabulary accepted by the reducer
//! - `SettingsState`, the immutable snapshot consumers read
//! - Error type (`SettingsSyncError`)
//!
//! Consumers hold the client behind the trait:
//! ```ignore
//! let client: Arc<dyn SettingsSyncApi> = Arc::new(LocalClient::new(service));
//! client.set_unsaved("displayName".to_owned(), json!("Ann")).await?;
//! client.request_save(None).await?;
//! ```

#![forbid(unsafe_code)]

pub mod actions;
pub mod api;
pub mod errors;
pub mod models;

pub use actions::SettingsAction;
pub use api::SettingsSyncApi;
pub use errors::SettingsSyncError;
pub use models::{SettingKey, SettingValue, SettingsMap, SettingsState};
