//! Events emitted by the config page sections

use std::fmt;

use crate::models::{AccountSummary, ContentTypeMapping, Parameters};

/// Raw text pasted into the key file input.
///
/// `Debug` prints only the length so pasted private keys never reach a log line.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyFileText(pub String);

impl KeyFileText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for KeyFileText {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "KeyFileText([REDACTED; {} bytes])", self.0.len())
    }
}

impl From<String> for KeyFileText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for KeyFileText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifies one account summaries request so late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(pub u64);

/// Everything that can change config page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    /// Setup card input changed
    KeyPasted(KeyFileText),
    /// Display card "edit" clicked
    EditRequested,
    /// Setup card "cancel" clicked while replacing an installed key
    EditCancelled,
    PropertySelected(Option<String>),
    ContentTypeMapped {
        content_type_id: String,
        mapping: ContentTypeMapping,
    },
    ContentTypeUnmapped(String),
    /// Display card is about to fetch account summaries
    AccountSummariesRequested,
    AccountSummariesLoaded {
        token: RequestToken,
        result: Result<Vec<AccountSummary>, String>,
    },
    /// Host persisted these parameters
    SaveCompleted(Parameters),
}

impl ConfigEvent {
    pub fn key_pasted(text: impl Into<String>) -> Self {
        Self::KeyPasted(KeyFileText(text.into()))
    }

    /// Short name for log lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::KeyPasted(_) => "key_pasted",
            Self::EditRequested => "edit_requested",
            Self::EditCancelled => "edit_cancelled",
            Self::PropertySelected(_) => "property_selected",
            Self::ContentTypeMapped { .. } => "content_type_mapped",
            Self::ContentTypeUnmapped(_) => "content_type_unmapped",
            Self::AccountSummariesRequested => "account_summaries_requested",
            Self::AccountSummariesLoaded { .. } => "account_summaries_loaded",
            Self::SaveCompleted(_) => "save_completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_file_text_debug_hides_contents() {
        let text = KeyFileText::from(r#"{"private_key":"secret"}"#);
        let rendered = format!("{:?}", ConfigEvent::KeyPasted(text));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("24 bytes"));
    }
}
