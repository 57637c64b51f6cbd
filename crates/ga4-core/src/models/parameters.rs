//! Persisted app installation parameters

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::service_account::{ServiceAccountKey, ServiceAccountKeyId, ValidatedKey};

static PROPERTY_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^properties/\d+$").expect("valid property id regex"));

/// Content type id to analytics mapping. Keys are unique; order carries no meaning.
pub type ContentTypes = BTreeMap<String, ContentTypeMapping>;

/// How entries of one content type map to pages tracked in Google Analytics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeMapping {
    /// Field holding the entry's URL slug
    #[serde(default)]
    pub slug_field: String,
    /// Path prepended to the slug, e.g. `about`
    #[serde(default)]
    pub url_prefix: String,
}

impl ContentTypeMapping {
    pub fn new(slug_field: impl Into<String>, url_prefix: impl Into<String>) -> Self {
        Self {
            slug_field: slug_field.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Whether a slug field has been chosen for this content type.
    pub fn has_slug_field(&self) -> bool {
        !self.slug_field.trim().is_empty()
    }
}

/// Installation parameters stored by the host platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_key: Option<ServiceAccountKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_key_id: Option<ServiceAccountKeyId>,
    /// Selected GA4 property, `properties/<number>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default)]
    pub content_types: ContentTypes,
}

impl Parameters {
    /// Whether both the key and its derived identity are present.
    pub const fn has_service_account(&self) -> bool {
        self.service_account_key.is_some() && self.service_account_key_id.is_some()
    }

    /// Replace the stored key and identity with a freshly validated key.
    pub fn apply_key(&mut self, validated: &ValidatedKey) {
        self.service_account_key = Some(validated.key.clone());
        self.service_account_key_id = Some(validated.key_id.clone());
    }

    /// Check a key loaded from storage and re-derive its identity.
    ///
    /// Returns whether the stored key is usable. A stored identity that does
    /// not match the key's own fields is replaced.
    pub fn verify_stored_key(&mut self) -> bool {
        let Some(key) = &self.service_account_key else {
            return false;
        };
        if let Err(error) = key.validate() {
            tracing::warn!("Stored service account key is unusable: {}", error);
            return false;
        }

        let key_id = key.key_id();
        if self.service_account_key_id.as_ref() != Some(&key_id) {
            tracing::warn!("Stored service account key id did not match its key; re-derived");
            self.service_account_key_id = Some(key_id);
        }
        true
    }

    /// Copy the key and identity fields from `other`, leaving everything else.
    pub fn restore_key_from(&mut self, other: &Self) {
        self.service_account_key.clone_from(&other.service_account_key);
        self.service_account_key_id
            .clone_from(&other.service_account_key_id);
    }
}

/// Check whether `value` is a GA4 property resource name.
pub fn is_property_id(value: &str) -> bool {
    PROPERTY_ID_PATTERN.is_match(value)
}
