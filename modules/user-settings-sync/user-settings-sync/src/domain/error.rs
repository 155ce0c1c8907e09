use std::time::Duration;

use user_settings_sync_sdk::SettingsSyncError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("A settings save is already in progress")]
    SaveInProgress,

    #[error("Validation error on key '{key}': {message}")]
    Validation { key: String, message: String },

    #[error("Remote save failed: {0:#}")]
    SaveRemote(#[source] anyhow::Error),

    #[error("Remote save timed out after {}s", .0.as_secs())]
    SaveTimeout(Duration),

    #[error("Remote fetch failed: {0:#}")]
    FetchRemote(#[source] anyhow::Error),

    #[error("Save resolved after the consumer detached")]
    Superseded,
}

impl DomainError {
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Detail recorded in the `SaveFailed` action for a failed save.
    #[must_use]
    pub fn failure_detail(&self) -> String {
        match self {
            Self::SaveRemote(e) => format!("{e:#}"),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for SettingsSyncError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::SaveInProgress => Self::SaveAlreadyInProgress,
            DomainError::Validation { key, message } => {
                Self::validation(format!("{key}: {message}"))
            }
            DomainError::SaveRemote(_) | DomainError::SaveTimeout(_) => {
                Self::save_failed(e.failure_detail())
            }
            DomainError::FetchRemote(err) => Self::fetch_failed(format!("{err:#}")),
            DomainError::Superseded => Self::Superseded,
        }
    }
}
