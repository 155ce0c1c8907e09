//! Error types for the user-settings-sync SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsSyncError {
    /// A save is already in flight; the remote service was not contacted.
    #[error("A settings save is already in progress")]
    SaveAlreadyInProgress,

    #[error("Settings save failed: {message}")]
    SaveFailed { message: String },

    #[error("Settings fetch failed: {message}")]
    FetchFailed { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The save resolved after its consumer detached; the result was discarded.
    #[error("Settings save was superseded")]
    Superseded,
}

impl SettingsSyncError {
    #[must_use]
    pub fn save_failed(message: impl Into<String>) -> Self {
        Self::SaveFailed {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
