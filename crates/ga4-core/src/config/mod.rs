//! Runtime configuration for config page hosts.
//!
//! Values come from the process environment. [`AppConfig::from_lookup`] takes
//! an arbitrary lookup so callers can exercise parsing without touching the
//! real environment.

use crate::error::{Error, Result};

pub const BACKEND_API_URL_VAR: &str = "GA4_BACKEND_API_URL";
pub const VERSION_VAR: &str = "GA4_VERSION";
pub const RELEASE_VAR: &str = "GA4_RELEASE";

/// Settings every config page host needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the backend that proxies Google Analytics Admin API calls
    pub backend_api_url: String,
    pub version: String,
    pub release: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let backend_api_url = var(BACKEND_API_URL_VAR).ok_or_else(|| {
            Error::Config(format!("Missing environment variable: '{BACKEND_API_URL_VAR}'"))
        })?;
        let backend_api_url = normalize_backend_url(&backend_api_url)?;

        let version = var(VERSION_VAR).map_or_else(
            || env!("CARGO_PKG_VERSION").to_string(),
            |version| version.trim().to_string(),
        );

        Ok(Self {
            backend_api_url,
            version,
            release: var(RELEASE_VAR).map(|release| release.trim().to_string()),
        })
    }
}

/// Trim a backend base URL and drop trailing slashes.
///
/// The URL must be absolute http(s); request paths are appended to it as is.
pub(crate) fn normalize_backend_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("Backend API URL must not be empty".to_string()));
    }
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(Error::Config(format!(
            "Backend API URL must include http:// or https://, got '{trimmed}'"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn missing_backend_url_names_the_variable() {
        let error = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Configuration error: Missing environment variable: 'GA4_BACKEND_API_URL'"
        );
    }

    #[test]
    fn backend_url_requires_http_scheme() {
        let error =
            AppConfig::from_lookup(lookup_from(&[(BACKEND_API_URL_VAR, "api.example.com")]))
                .unwrap_err();
        assert!(error.to_string().contains("http://"));
    }

    #[test]
    fn version_defaults_to_crate_version() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            BACKEND_API_URL_VAR,
            "https://api.example.com/",
        )]))
        .unwrap();
        assert_eq!(config.backend_api_url, "https://api.example.com");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.release, None);
    }

    #[test]
    fn backend_url_drops_every_trailing_slash() {
        assert_eq!(
            normalize_backend_url(" http://localhost:3000// ").unwrap(),
            "http://localhost:3000"
        );
        assert!(normalize_backend_url("/").is_err());
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BACKEND_API_URL_VAR, " https://api.example.com "),
            (VERSION_VAR, " 2.0.1 "),
            (RELEASE_VAR, "  "),
        ]))
        .unwrap();
        assert_eq!(config.version, "2.0.1");
        assert_eq!(config.release, None);
    }
}
