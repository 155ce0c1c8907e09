use serde_json::Value;

use user_settings_sync_sdk::SettingsMap;

pub struct SettingsFields;

impl SettingsFields {
    pub const DISPLAY_NAME: &'static str = "displayName";
    pub const PASSWORD: &'static str = "password";

    /// Fields whose change replaces the user's credentials.
    pub const CREDENTIALS: &'static [&'static str] = &[Self::PASSWORD];

    /// Whether `overrides` sets a credential field to a truthy value.
    #[must_use]
    pub fn changes_credentials(overrides: &SettingsMap) -> bool {
        Self::CREDENTIALS
            .iter()
            .any(|field| overrides.get(*field).is_some_and(is_truthy))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
