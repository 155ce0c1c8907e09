//! In-process settings backend.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use user_settings_sync_sdk::SettingsMap;

use crate::domain::backend::SettingsBackend;

/// Settings backend that keeps the persisted settings in memory.
///
/// Saves merge the submitted values into the stored map and confirm all of
/// them. Used by tests and by hosts that run without a settings service.
#[derive(Default)]
pub struct InMemorySettingsBackend {
    stored: RwLock<SettingsMap>,
}

impl InMemorySettingsBackend {
    #[must_use]
    pub fn new(initial: SettingsMap) -> Self {
        Self {
            stored: RwLock::new(initial),
        }
    }

    /// Copy of everything persisted so far.
    #[must_use]
    pub fn stored(&self) -> SettingsMap {
        self.stored.read().clone()
    }
}

#[async_trait]
impl SettingsBackend for InMemorySettingsBackend {
    async fn fetch_settings(&self) -> anyhow::Result<SettingsMap> {
        Ok(self.stored())
    }

    async fn save_settings(&self, settings: &SettingsMap) -> anyhow::Result<SettingsMap> {
        let mut stored = self.stored.write();
        for (key, value) in settings {
            stored.insert(key.clone(), value.clone());
        }
        debug!(keys = settings.len(), "Stored settings in memory");
        Ok(settings.clone())
    }
}
