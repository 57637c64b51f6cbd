//! Save computation handed to the host.
//!
//! [`compute_save_result`] reads nothing but the state it is given, so hosts
//! may call it with whichever snapshot is current.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{ContentTypes, Parameters};

use super::state::{ConfigState, KeyFileCheck};

/// Sidebar slot the analytics widget is placed in.
pub const SIDEBAR_POSITION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarPlacement {
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInterfaceTarget {
    pub sidebar: SidebarPlacement,
}

/// Editor layout changes the host applies alongside the parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetState {
    #[serde(rename = "EditorInterface")]
    pub editor_interface: BTreeMap<String, EditorInterfaceTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub parameters: Parameters,
    pub target_state: TargetState,
}

/// Answer to a host save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Do not persist, keep the page open
    Rejected,
    Accepted(SaveResult),
}

impl SaveOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(self) -> Option<SaveResult> {
        match self {
            Self::Accepted(result) => Some(result),
            Self::Rejected => None,
        }
    }

    /// Wire form expected by the host: `false`, or `{ parameters, targetState }`.
    pub fn to_host_value(&self) -> serde_json::Result<Value> {
        match self {
            Self::Rejected => Ok(Value::Bool(false)),
            Self::Accepted(result) => serde_json::to_value(result),
        }
    }
}

/// Sidebar placement for every content type with a configured slug field.
pub fn target_state_for(content_types: &ContentTypes) -> TargetState {
    let editor_interface = content_types
        .iter()
        .filter(|(_, mapping)| mapping.has_slug_field())
        .map(|(content_type_id, _)| {
            (
                content_type_id.clone(),
                EditorInterfaceTarget {
                    sidebar: SidebarPlacement {
                        position: SIDEBAR_POSITION,
                    },
                },
            )
        })
        .collect();
    TargetState { editor_interface }
}

/// Decide whether the current state may be saved and build what to persist.
///
/// Persisted parameters form the base; a freshly validated key replaces the
/// stored key and identity; property and content type edits always come from
/// the working copy.
pub fn compute_save_result(state: &ConfigState) -> SaveOutcome {
    if !state.is_valid_service_account() {
        tracing::warn!(
            phase = ?state.phase(),
            "Rejecting save without a valid service account key"
        );
        return SaveOutcome::Rejected;
    }

    let working = state.parameters();
    let mut parameters = state.persisted().clone();
    if let KeyFileCheck::Valid(validated) = state.key_file_check() {
        parameters.apply_key(validated);
    }
    parameters.property_id.clone_from(&working.property_id);
    parameters.content_types.clone_from(&working.content_types);

    let target_state = target_state_for(&parameters.content_types);
    SaveOutcome::Accepted(SaveResult {
        parameters,
        target_state,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::models::ContentTypeMapping;

    #[test]
    fn target_state_skips_content_types_without_slug_field() {
        let mut content_types = ContentTypes::new();
        content_types.insert(
            "course".to_string(),
            ContentTypeMapping::new("shortDescription", "about"),
        );
        content_types.insert("page".to_string(), ContentTypeMapping::new("", "pages"));

        let target = target_state_for(&content_types);
        assert_eq!(
            serde_json::to_value(target).unwrap(),
            json!({ "EditorInterface": { "course": { "sidebar": { "position": 1 } } } })
        );
    }

    #[test]
    fn rejected_outcome_is_false_on_the_wire() {
        assert_eq!(SaveOutcome::Rejected.to_host_value().unwrap(), json!(false));
        assert!(!SaveOutcome::Rejected.is_accepted());
    }

    #[test]
    fn save_without_key_is_rejected() {
        let state = ConfigState::load(None, false);
        assert_eq!(compute_save_result(&state), SaveOutcome::Rejected);
    }
}
