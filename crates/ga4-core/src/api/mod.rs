//! Backend API client for Google Analytics account data.
//!
//! The backend holds the installed service account key and calls the Google
//! Analytics Admin API on the page's behalf. Requests identify the key through
//! its non-secret [`ServiceAccountKeyId`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::models::{AccountSummary, ServiceAccountKeyId};
use crate::config::normalize_backend_url;

/// Header carrying the base64-encoded JSON key identity.
pub const SERVICE_ACCOUNT_KEY_ID_HEADER: &str = "X-Contentful-ServiceAccountKeyId";

const ACCOUNT_SUMMARIES_PATH: &str = "/api/account_summaries";
/// Longest raw response body quoted in an error message
const MAX_ERROR_BODY_CHARS: usize = 180;

/// HTTP client for the GA4 app backend
#[derive(Debug, Clone)]
pub struct BackendApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_backend_url(&base_url.into())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the accounts and properties visible to the service account.
    pub async fn list_account_summaries(
        &self,
        key_id: &ServiceAccountKeyId,
    ) -> Result<Vec<AccountSummary>> {
        let url = format!("{}{ACCOUNT_SUMMARIES_PATH}", self.base_url);
        tracing::debug!(key_id = %key_id.id, "Requesting account summaries");

        let response = self
            .client
            .get(url)
            .header(SERVICE_ACCOUNT_KEY_ID_HEADER, encode_key_id_header(key_id)?)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(parse_api_error(status, &body)));
        }

        Ok(response.json::<Vec<AccountSummary>>().await?)
    }
}

/// Base64 of the key identity's JSON form.
pub fn encode_key_id_header(key_id: &ServiceAccountKeyId) -> Result<String> {
    let json = serde_json::to_vec(key_id)?;
    Ok(STANDARD.encode(json))
}

#[derive(Debug, serde::Deserialize)]
struct BackendErrorResponse {
    message: Option<String>,
    #[serde(rename = "errorType")]
    error_type: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<BackendErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.error_type) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}
