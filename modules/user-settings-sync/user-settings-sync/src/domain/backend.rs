use async_trait::async_trait;
use user_settings_sync_sdk::SettingsMap;

/// Remote settings service the sync state is reconciled against.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Loads the user's persisted settings.
    async fn fetch_settings(&self) -> anyhow::Result<SettingsMap>;

    /// Persists `settings` and returns the subset the service confirmed.
    async fn save_settings(&self, settings: &SettingsMap) -> anyhow::Result<SettingsMap>;
}
