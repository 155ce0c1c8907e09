use std::sync::Arc;

use async_trait::async_trait;
use user_settings_sync_sdk::{
    SettingKey, SettingValue, SettingsMap, SettingsState, SettingsSyncApi, SettingsSyncError,
};

use crate::domain::service::SettingsSyncService;

pub struct LocalClient {
    service: Arc<SettingsSyncService>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<SettingsSyncService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsSyncApi for LocalClient {
    async fn snapshot(&self) -> Arc<SettingsState> {
        self.service.snapshot()
    }

    async fn set_unsaved(
        &self,
        key: SettingKey,
        value: SettingValue,
    ) -> Result<Arc<SettingsState>, SettingsSyncError> {
        self.service.set_unsaved(key, value).map_err(Into::into)
    }

    async fn remove_unsaved(
        &self,
        key: SettingKey,
    ) -> Result<Arc<SettingsState>, SettingsSyncError> {
        self.service.remove_unsaved(key).map_err(Into::into)
    }

    async fn clear_unsaved(&self, keys: Option<Vec<SettingKey>>) -> Arc<SettingsState> {
        self.service.clear_unsaved(keys)
    }

    async fn request_save(
        &self,
        overrides: Option<SettingsMap>,
    ) -> Result<SettingsMap, SettingsSyncError> {
        self.service.request_save(overrides).await.map_err(Into::into)
    }

    async fn fetch(&self) -> Result<Arc<SettingsState>, SettingsSyncError> {
        self.service.fetch().await.map_err(Into::into)
    }
}
