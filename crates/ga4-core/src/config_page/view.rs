//! Presentation models for the API access section.
//!
//! These are pure projections of [`ConfigState`]; UI hosts render them as-is.

use crate::models::ServiceAccountKeyId;

use super::state::{AccountSummariesState, ConfigState, KeyFileCheck};

pub const API_ACCESS_HEADING: &str = "API access";
pub const API_ACCESS_DESCRIPTION: &str =
    "Authorize this application to access Google Analytics Admin & Data APIs";
pub const SERVICE_ACCOUNT_HEADING: &str = "Google Service Account Details";
pub const KEY_FILE_LABEL: &str = "Private Key File";
pub const KEY_FILE_HELP: &str =
    "Paste the JSON key file downloaded for your Google Cloud service account.";

/// Card shown in the API access section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAccessCard {
    Setup,
    Display,
}

impl ApiAccessCard {
    pub const fn select(is_in_edit_mode: bool, is_app_installed: bool, has_key_id: bool) -> Self {
        if !is_in_edit_mode && is_app_installed && has_key_id {
            Self::Display
        } else {
            Self::Setup
        }
    }

    pub const fn for_state(state: &ConfigState) -> Self {
        Self::select(
            state.is_in_edit_mode(),
            state.is_app_installed(),
            state.service_account_key_id().is_some(),
        )
    }
}

/// Status indicator on the display card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceAccountStatus {
    /// A new key was validated but not yet saved
    PendingSave,
    Checking,
    Active,
    Error(String),
    NotChecked,
}

impl ServiceAccountStatus {
    pub fn for_state(state: &ConfigState) -> Self {
        if state.is_saving_private_key_file() {
            return Self::PendingSave;
        }
        match state.account_summaries() {
            AccountSummariesState::Idle => Self::NotChecked,
            AccountSummariesState::Loading(_) => Self::Checking,
            AccountSummariesState::Loaded(_) => Self::Active,
            AccountSummariesState::Failed(message) => Self::Error(message.clone()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::PendingSave => "New key file will be applied on save".to_string(),
            Self::Checking => "Checking access".to_string(),
            Self::Active => "Active".to_string(),
            Self::Error(message) => format!("Error: {message}"),
            Self::NotChecked => "Not checked".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
}

/// What the display card shows for an installed key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCardModel {
    pub rows: Vec<DisplayRow>,
    pub status: ServiceAccountStatus,
}

impl DisplayCardModel {
    pub fn new(key_id: &ServiceAccountKeyId, status: ServiceAccountStatus) -> Self {
        Self {
            rows: vec![
                DisplayRow {
                    label: "Service Account",
                    value: key_id.client_email.clone(),
                },
                DisplayRow {
                    label: "Key ID",
                    value: key_id.id.clone(),
                },
                DisplayRow {
                    label: "Project ID",
                    value: key_id.project_id.clone(),
                },
            ],
            status,
        }
    }

    /// `None` unless the state has an identity to show.
    pub fn for_state(state: &ConfigState) -> Option<Self> {
        state
            .service_account_key_id()
            .map(|key_id| Self::new(key_id, ServiceAccountStatus::for_state(state)))
    }
}

/// Feedback line under the key file input.
pub fn key_file_message(check: &KeyFileCheck) -> Option<String> {
    match check {
        KeyFileCheck::Empty => None,
        KeyFileCheck::Invalid(error) => Some(error.to_string()),
        KeyFileCheck::Valid(validated) => Some(format!(
            "Key file for {} is valid. Save to apply it.",
            validated.key_id.client_email
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_card_requires_installed_key_outside_edit_mode() {
        assert_eq!(ApiAccessCard::select(false, true, true), ApiAccessCard::Display);
        assert_eq!(ApiAccessCard::select(true, true, true), ApiAccessCard::Setup);
        assert_eq!(ApiAccessCard::select(false, false, true), ApiAccessCard::Setup);
        assert_eq!(ApiAccessCard::select(false, true, false), ApiAccessCard::Setup);
    }

    #[test]
    fn error_status_label_includes_message() {
        let status = ServiceAccountStatus::Error("HTTP 403".to_string());
        assert_eq!(status.label(), "Error: HTTP 403");
    }
}
