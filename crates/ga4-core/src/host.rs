//! Host integration seam.
//!
//! A host stores parameters, knows whether the app is installed, and asks the
//! page for a save answer whenever the administrator clicks save. The page
//! publishes state snapshots; only the most recent one is ever used.

use crate::config_page::{compute_save_result, ConfigState, SaveOutcome, SaveResult};
use crate::error::Result;
use crate::models::Parameters;

/// What a host knows about the app when the page mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Installation {
    pub parameters: Option<Parameters>,
    pub is_installed: bool,
}

/// Parameter persistence provided by the host platform.
pub trait ParameterStore: Clone + 'static {
    /// Previously persisted parameters, `None` if nothing was saved.
    fn load_parameters(&self) -> Result<Option<Parameters>>;
    fn is_installed(&self) -> Result<bool>;
    /// Persist an accepted save.
    fn save_configuration(&self, result: &SaveResult) -> Result<()>;

    /// Parameters and install flag together. Stores that answer both from
    /// one read should override this.
    fn load_installation(&self) -> Result<Installation> {
        Ok(Installation {
            parameters: self.load_parameters()?,
            is_installed: self.is_installed()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    version: u64,
    state: ConfigState,
}

/// Bridges a [`ParameterStore`] and the config page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAdapter<S: ParameterStore> {
    store: S,
    latest: Option<Snapshot>,
}

impl<S: ParameterStore> HostAdapter<S> {
    pub const fn new(store: S) -> Self {
        Self {
            store,
            latest: None,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load stored parameters once and publish the initial state.
    pub fn mount(&mut self) -> Result<ConfigState> {
        let Installation {
            parameters,
            is_installed,
        } = self.store.load_installation()?;
        tracing::info!(
            installed = is_installed,
            has_parameters = parameters.is_some(),
            "Config page mounted"
        );

        let state = ConfigState::load(parameters, is_installed);
        self.publish(&state);
        Ok(state)
    }

    /// Replace the snapshot used by [`Self::configure`]. Returns its version.
    pub fn publish(&mut self, state: &ConfigState) -> u64 {
        let version = self.latest.as_ref().map_or(0, |snapshot| snapshot.version + 1);
        self.latest = Some(Snapshot {
            version,
            state: state.clone(),
        });
        version
    }

    /// Version of the latest published snapshot.
    pub fn version(&self) -> Option<u64> {
        self.latest.as_ref().map(|snapshot| snapshot.version)
    }

    /// Answer a host save request from the latest snapshot.
    ///
    /// Accepted results are persisted before returning. Nothing is written
    /// on rejection.
    pub fn configure(&self) -> Result<SaveOutcome> {
        let Some(snapshot) = self.latest.as_ref() else {
            tracing::warn!("Save requested before the config page published any state");
            return Ok(SaveOutcome::Rejected);
        };

        let outcome = compute_save_result(&snapshot.state);
        if let SaveOutcome::Accepted(result) = &outcome {
            self.store.save_configuration(result)?;
            tracing::info!(
                version = snapshot.version,
                content_types = result.parameters.content_types.len(),
                "Configuration saved"
            );
        }
        Ok(outcome)
    }
}
