//! Config page state shared through Dioxus context.

use dioxus::prelude::*;

use ga4_core::api::BackendApiClient;
use ga4_core::config_page::{ConfigEvent, ConfigState};
use ga4_core::host::HostAdapter;

use crate::services::FileParameterStore;

/// Handles every config page component reads from context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Current config page state
    pub state: Signal<ConfigState>,
    /// Host bridge holding the latest published snapshot
    pub adapter: Signal<HostAdapter<FileParameterStore>>,
    /// Backend client, absent when the backend URL is not configured
    pub api: Signal<Option<BackendApiClient>>,
    /// Result of the last save attempt, shown in the toolbar
    pub save_message: Signal<Option<String>>,
}

impl PageContext {
    /// Reduce an event and publish the new snapshot to the host.
    pub fn dispatch(self, event: ConfigEvent) {
        let mut state = self.state;
        let mut adapter = self.adapter;

        state.write().apply(event);
        let version = adapter.write().publish(&state.peek());
        tracing::trace!(version, "Published config page snapshot");
    }
}
