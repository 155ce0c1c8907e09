#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for user-settings-sync integration tests

use std::sync::Arc;

use serde_json::Value;
use user_settings_sync::{
    InMemorySettingsBackend, SettingsMap, SettingsSyncService, UserSettingsSyncConfig,
};

pub fn map(value: Value) -> SettingsMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn create_service() -> (Arc<SettingsSyncService>, Arc<InMemorySettingsBackend>) {
    create_service_with(SettingsMap::new())
}

pub fn create_service_with(
    stored: SettingsMap,
) -> (Arc<SettingsSyncService>, Arc<InMemorySettingsBackend>) {
    let backend = Arc::new(InMemorySettingsBackend::new(stored));
    let service = Arc::new(SettingsSyncService::new(
        backend.clone(),
        UserSettingsSyncConfig::default(),
    ));
    (service, backend)
}
