//! Domain service for the User Settings Sync module.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use user_settings_sync_sdk::{SettingKey, SettingValue, SettingsAction, SettingsMap, SettingsState};

use crate::config::UserSettingsSyncConfig;

use super::backend::SettingsBackend;
use super::error::DomainError;
use super::reducer;
use super::ticket::{SaveGeneration, SaveTicket};

/// Detail recorded when a consumer detaches while a save is in flight.
const DETACHED_DETAIL: &str = "consumer detached before the save resolved";

/// A save that has been started and not yet resolved.
struct InFlightSave {
    payload: SettingsMap,
    /// Pending edits as they were when the save started.
    pending: Arc<SettingsMap>,
    ticket: SaveTicket,
}

impl InFlightSave {
    /// Sent keys whose pending edit has not changed since the save started.
    fn settled_keys(&self, unsaved: &SettingsMap) -> Vec<SettingKey> {
        self.payload
            .keys()
            .filter(|key| unsaved.get(key.as_str()) == self.pending.get(key.as_str()))
            .cloned()
            .collect()
    }
}

/// Owner of the settings state.
///
/// Every transition runs the reducer under the state channel's write lock,
/// so transitions never interleave. Readers get immutable snapshots, either
/// on demand or by subscribing to the channel.
pub struct SettingsSyncService {
    backend: Arc<dyn SettingsBackend>,
    config: UserSettingsSyncConfig,
    state: watch::Sender<Arc<SettingsState>>,
    generation: SaveGeneration,
}

impl SettingsSyncService {
    #[must_use]
    pub fn new(backend: Arc<dyn SettingsBackend>, config: UserSettingsSyncConfig) -> Self {
        let (state, _) = watch::channel(Arc::new(SettingsState::default()));
        Self {
            backend,
            config,
            state,
            generation: SaveGeneration::default(),
        }
    }

    /// Current immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SettingsState> {
        self.state.borrow().clone()
    }

    /// Receiver notified after every transition that changed the state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<SettingsState>> {
        self.state.subscribe()
    }

    /// Applies `action` and returns the resulting snapshot.
    ///
    /// Subscribers are only notified when the state actually changed.
    pub fn dispatch(&self, action: &SettingsAction) -> Arc<SettingsState> {
        let mut next = None;
        self.state.send_if_modified(|current| {
            let reduced = reducer::reduce(current, action);
            let changed = !Arc::ptr_eq(&reduced, current);
            *current = Arc::clone(&reduced);
            next = Some(reduced);
            changed
        });
        debug!(action = action.kind(), "Dispatched settings action");
        next.unwrap_or_else(|| self.snapshot())
    }

    /// Records a local edit of `key`.
    ///
    /// # Errors
    /// Returns `DomainError::Validation` if `key` is empty or too long.
    pub fn set_unsaved(
        &self,
        key: SettingKey,
        value: SettingValue,
    ) -> Result<Arc<SettingsState>, DomainError> {
        self.validate_key(&key)?;
        Ok(self.dispatch(&SettingsAction::set_unsaved(key, value)))
    }

    /// Discards the local edit of `key`.
    ///
    /// # Errors
    /// Returns `DomainError::Validation` if `key` is empty or too long.
    pub fn remove_unsaved(&self, key: SettingKey) -> Result<Arc<SettingsState>, DomainError> {
        self.validate_key(&key)?;
        Ok(self.dispatch(&SettingsAction::remove_unsaved(key)))
    }

    /// Discards every local edit for `None`, or only `keys`. An empty list discards nothing.
    pub fn clear_unsaved(&self, keys: Option<Vec<SettingKey>>) -> Arc<SettingsState> {
        self.dispatch(&SettingsAction::UnsavedClear { keys })
    }

    /// Saves `overrides`, or the whole pending buffer when `None`.
    ///
    /// Only one save may be in flight. On success the confirmed values are
    /// merged into the settings and the sent keys leave the pending buffer.
    /// Edits made while the save was in flight stay pending. Fetches issued
    /// before the save resolved are superseded.
    ///
    /// # Errors
    /// - `SaveInProgress` if a save is already in flight; nothing is sent and
    ///   the state is untouched.
    /// - `Validation` if an override key is empty or too long.
    /// - `SaveRemote` / `SaveTimeout` if the remote save fails; the lifecycle
    ///   flags are reset and the pending edits kept.
    /// - `Superseded` if the consumer detached before the save resolved.
    #[instrument(skip_all, fields(overrides = overrides.as_ref().map(SettingsMap::len)))]
    pub async fn request_save(
        &self,
        overrides: Option<SettingsMap>,
    ) -> Result<SettingsMap, DomainError> {
        if let Some(overrides) = &overrides {
            for key in overrides.keys() {
                self.validate_key(key)?;
            }
        }

        let save = self.begin_save(overrides).inspect_err(|_| {
            warn!("Rejected settings save: another save is in flight");
        })?;
        info!(keys = save.payload.len(), "Saving user settings");

        let result = match tokio::time::timeout(
            self.config.save_timeout,
            self.backend.save_settings(&save.payload),
        )
        .await
        {
            Ok(Ok(confirmed)) => Ok(confirmed),
            Ok(Err(e)) => Err(DomainError::SaveRemote(e)),
            Err(_) => Err(DomainError::SaveTimeout(self.config.save_timeout)),
        };

        match result {
            Ok(confirmed) => {
                self.resolve(save.ticket, |current| {
                    // Remote reads issued before this point predate the confirmed values.
                    self.generation.bump();
                    SettingsAction::SaveSucceeded {
                        setting_values: confirmed.clone(),
                        saved_keys: Some(save.settled_keys(current.unsaved_settings())),
                    }
                })?;
                info!(keys = confirmed.len(), "User settings saved");
                Ok(confirmed)
            }
            Err(e) => {
                let detail = e.failure_detail();
                self.resolve(save.ticket, |_| SettingsAction::save_failed(detail))?;
                warn!(error = %e, "User settings save failed");
                Err(e)
            }
        }
    }

    /// Loads the confirmed settings from the remote service.
    ///
    /// Pending edits and the save lifecycle are left alone.
    ///
    /// # Errors
    /// - `FetchRemote` if the remote service fails.
    /// - `Superseded` if the consumer detached or a save was confirmed before
    ///   the fetch resolved.
    #[instrument(skip_all)]
    pub async fn fetch(&self) -> Result<Arc<SettingsState>, DomainError> {
        let ticket = self.generation.issue();
        let settings = self.backend.fetch_settings().await.map_err(|e| {
            warn!(error = %format!("{e:#}"), "Fetching user settings failed");
            DomainError::FetchRemote(e)
        })?;
        debug!(keys = settings.len(), "Fetched user settings");
        self.resolve(ticket, |_| SettingsAction::settings_received(settings))
    }

    /// Marks the current consumer as gone.
    ///
    /// Saves and fetches still in flight resolve as `Superseded` and leave the
    /// state alone. A save in flight is recorded as failed right away, so the
    /// lifecycle flags are free for the next consumer.
    pub fn detach(&self) {
        self.state.send_if_modified(|current| {
            self.generation.bump();
            if !current.is_updating() {
                return false;
            }
            *current = reducer::reduce(current, &SettingsAction::save_failed(DETACHED_DETAIL));
            true
        });
        debug!("Settings consumer detached");
    }

    /// Marks a save as started unless one is in flight.
    fn begin_save(&self, overrides: Option<SettingsMap>) -> Result<InFlightSave, DomainError> {
        let mut started = Err(DomainError::SaveInProgress);
        self.state.send_if_modified(|current| {
            if current.is_updating() {
                return false;
            }
            let pending = Arc::clone(current.unsaved_settings());
            let payload = match &overrides {
                Some(overrides) => overrides.clone(),
                None => SettingsMap::clone(&pending),
            };
            *current = reducer::reduce(current, &SettingsAction::save_requested(overrides));
            started = Ok(InFlightSave {
                payload,
                pending,
                ticket: self.generation.issue(),
            });
            true
        });
        started
    }

    /// Applies the resolution of an async operation if its ticket is still current.
    ///
    /// `resolution` builds the action from the state it will be applied to.
    fn resolve<F>(
        &self,
        ticket: SaveTicket,
        resolution: F,
    ) -> Result<Arc<SettingsState>, DomainError>
    where
        F: FnOnce(&SettingsState) -> SettingsAction,
    {
        let mut next = None;
        self.state.send_if_modified(|current| {
            if !self.generation.is_current(ticket) {
                return false;
            }
            let action = resolution(current);
            debug!(action = action.kind(), "Resolved settings operation");
            let reduced = reducer::reduce(current, &action);
            let changed = !Arc::ptr_eq(&reduced, current);
            *current = Arc::clone(&reduced);
            next = Some(reduced);
            changed
        });
        next.ok_or_else(|| {
            debug!("Discarding a resolution that was superseded");
            DomainError::Superseded
        })
    }

    fn validate_key(&self, key: &str) -> Result<(), DomainError> {
        if key.is_empty() {
            return Err(DomainError::validation(key, "must not be empty"));
        }
        if key.len() > self.config.max_key_length {
            return Err(DomainError::validation(
                key,
                format!("exceeds maximum length of {}", self.config.max_key_length),
            ));
        }
        Ok(())
    }
}
