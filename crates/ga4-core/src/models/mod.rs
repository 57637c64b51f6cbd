//! Data models for the GA4 config page

mod account_summary;
mod parameters;
mod service_account;

pub use account_summary::{property_options, AccountSummary, PropertyOption, PropertySummary};
pub use parameters::{is_property_id, ContentTypeMapping, ContentTypes, Parameters};
pub use service_account::{
    parse_key_file, KeyFileError, ServiceAccountKey, ServiceAccountKeyId, ValidatedKey,
    REQUIRED_KEY_FIELDS,
};

#[cfg(test)]
pub(crate) use service_account::fixtures;
