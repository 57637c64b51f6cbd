//! Config page state and its reducer.
//!
//! All mutation goes through [`ConfigState::apply`]. The state keeps the
//! parameters as last persisted by the host next to the working copy being
//! edited, so a rejected or cancelled key can always fall back to what is
//! installed.

use crate::models::{
    is_property_id, parse_key_file, AccountSummary, KeyFileError, Parameters, ServiceAccountKeyId,
    ValidatedKey,
};

use super::event::{ConfigEvent, KeyFileText, RequestToken};

/// Which flow the page is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPhase {
    NotInstalled,
    InstalledViewing,
    InstalledEditing,
}

/// Outcome of validating the key file input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyFileCheck {
    /// Nothing pasted
    #[default]
    Empty,
    Invalid(KeyFileError),
    Valid(ValidatedKey),
}

impl KeyFileCheck {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Progress of the account summaries fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountSummariesState {
    #[default]
    Idle,
    Loading(RequestToken),
    Loaded(Vec<AccountSummary>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    persisted: Parameters,
    parameters: Parameters,
    is_app_installed: bool,
    is_in_edit_mode: bool,
    is_saving_private_key_file: bool,
    /// The persisted key passed validation when it was loaded or saved
    persisted_key_valid: bool,
    key_file_input: KeyFileText,
    key_file_check: KeyFileCheck,
    account_summaries: AccountSummariesState,
    next_request: u64,
}

impl ConfigState {
    /// Build the initial state from what the host has stored.
    pub fn load(parameters: Option<Parameters>, is_app_installed: bool) -> Self {
        let mut persisted = parameters.unwrap_or_default();
        let persisted_key_valid = persisted.verify_stored_key();
        Self {
            parameters: persisted.clone(),
            persisted,
            is_app_installed,
            is_in_edit_mode: false,
            is_saving_private_key_file: false,
            persisted_key_valid,
            key_file_input: KeyFileText::default(),
            key_file_check: KeyFileCheck::Empty,
            account_summaries: AccountSummariesState::Idle,
            next_request: 0,
        }
    }

    pub const fn phase(&self) -> ConfigPhase {
        match (self.is_app_installed, self.is_in_edit_mode) {
            (false, _) => ConfigPhase::NotInstalled,
            (true, false) => ConfigPhase::InstalledViewing,
            (true, true) => ConfigPhase::InstalledEditing,
        }
    }

    /// Whether a usable service account key is present for saving.
    ///
    /// A non-blank paste must itself be valid. With nothing pasted, an
    /// installed app falls back to the key it already stores, provided that
    /// key passed validation.
    pub const fn is_valid_service_account(&self) -> bool {
        match &self.key_file_check {
            KeyFileCheck::Valid(_) => true,
            KeyFileCheck::Invalid(_) => false,
            KeyFileCheck::Empty => self.is_app_installed && self.persisted_key_valid,
        }
    }

    /// Parameters as last persisted by the host.
    pub const fn persisted(&self) -> &Parameters {
        &self.persisted
    }

    /// Working parameters including unsaved edits.
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub const fn is_app_installed(&self) -> bool {
        self.is_app_installed
    }

    pub const fn is_in_edit_mode(&self) -> bool {
        self.is_in_edit_mode
    }

    /// A freshly validated key is waiting for the next save.
    pub const fn is_saving_private_key_file(&self) -> bool {
        self.is_saving_private_key_file
    }

    pub const fn key_file_input(&self) -> &KeyFileText {
        &self.key_file_input
    }

    pub const fn key_file_check(&self) -> &KeyFileCheck {
        &self.key_file_check
    }

    pub const fn account_summaries(&self) -> &AccountSummariesState {
        &self.account_summaries
    }

    /// Token of the outstanding account summaries request, if any.
    pub const fn pending_request(&self) -> Option<RequestToken> {
        match self.account_summaries {
            AccountSummariesState::Loading(token) => Some(token),
            _ => None,
        }
    }

    /// Key identity shown by the display card and sent to the backend.
    pub const fn service_account_key_id(&self) -> Option<&ServiceAccountKeyId> {
        self.parameters.service_account_key_id.as_ref()
    }

    /// Reduce one event into the state.
    pub fn apply(&mut self, event: ConfigEvent) {
        let kind = event.kind();
        let identity_before = self.parameters.service_account_key_id.clone();

        match event {
            ConfigEvent::KeyPasted(text) => self.on_key_pasted(text),
            ConfigEvent::EditRequested => {
                if self.is_app_installed {
                    self.is_in_edit_mode = true;
                } else {
                    tracing::debug!("Ignoring edit request before installation");
                }
            }
            ConfigEvent::EditCancelled => {
                if self.is_app_installed {
                    self.reset_key_input();
                    self.is_in_edit_mode = false;
                } else {
                    tracing::debug!("Ignoring cancel before installation");
                }
            }
            ConfigEvent::PropertySelected(property_id) => self.on_property_selected(property_id),
            ConfigEvent::ContentTypeMapped {
                content_type_id,
                mapping,
            } => {
                let content_type_id = content_type_id.trim();
                if content_type_id.is_empty() {
                    tracing::warn!("Ignoring content type mapping without an id");
                } else {
                    self.parameters
                        .content_types
                        .insert(content_type_id.to_string(), mapping);
                }
            }
            ConfigEvent::ContentTypeUnmapped(content_type_id) => {
                self.parameters.content_types.remove(content_type_id.trim());
            }
            ConfigEvent::AccountSummariesRequested => {
                let token = RequestToken(self.next_request);
                self.next_request += 1;
                self.account_summaries = AccountSummariesState::Loading(token);
            }
            ConfigEvent::AccountSummariesLoaded { token, result } => {
                self.on_account_summaries_loaded(token, result);
            }
            ConfigEvent::SaveCompleted(mut parameters) => {
                self.persisted_key_valid = parameters.verify_stored_key();
                self.persisted = parameters.clone();
                self.parameters = parameters;
                self.is_app_installed = true;
                self.is_in_edit_mode = false;
                self.is_saving_private_key_file = false;
                self.key_file_input = KeyFileText::default();
                self.key_file_check = KeyFileCheck::Empty;
            }
        }

        if self.parameters.service_account_key_id != identity_before {
            self.account_summaries = AccountSummariesState::Idle;
        }

        tracing::debug!(
            event = kind,
            phase = ?self.phase(),
            valid = self.is_valid_service_account(),
            "Config page event applied"
        );
    }

    fn on_key_pasted(&mut self, text: KeyFileText) {
        let check = parse_key_file(text.as_str());
        self.key_file_input = text;

        match check {
            Ok(validated) => {
                self.parameters.apply_key(&validated);
                self.is_saving_private_key_file = true;
                if self.is_app_installed {
                    self.is_in_edit_mode = false;
                }
                self.key_file_check = KeyFileCheck::Valid(validated);
            }
            Err(KeyFileError::Empty) => {
                self.parameters.restore_key_from(&self.persisted);
                self.is_saving_private_key_file = false;
                self.key_file_check = KeyFileCheck::Empty;
            }
            Err(error) => {
                tracing::debug!("Pasted key file rejected: {}", error);
                self.parameters.restore_key_from(&self.persisted);
                self.is_saving_private_key_file = false;
                self.key_file_check = KeyFileCheck::Invalid(error);
            }
        }
    }

    fn reset_key_input(&mut self) {
        self.parameters.restore_key_from(&self.persisted);
        self.is_saving_private_key_file = false;
        self.key_file_input = KeyFileText::default();
        self.key_file_check = KeyFileCheck::Empty;
    }

    fn on_property_selected(&mut self, property_id: Option<String>) {
        let Some(property_id) = property_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        else {
            self.parameters.property_id = None;
            return;
        };

        if is_property_id(property_id) {
            self.parameters.property_id = Some(property_id.to_string());
        } else {
            tracing::warn!("Ignoring malformed property id '{}'", property_id);
        }
    }

    fn on_account_summaries_loaded(
        &mut self,
        token: RequestToken,
        result: Result<Vec<AccountSummary>, String>,
    ) {
        if self.pending_request() != Some(token) {
            tracing::warn!("Discarding stale account summaries response {:?}", token);
            return;
        }

        self.account_summaries = match result {
            Ok(summaries) => {
                tracing::info!("Loaded {} account summaries", summaries.len());
                AccountSummariesState::Loaded(summaries)
            }
            Err(message) => {
                tracing::error!("Failed to load account summaries: {}", message);
                AccountSummariesState::Failed(message)
            }
        };
    }
}
