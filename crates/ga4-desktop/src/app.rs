//! Main application component

use dioxus::prelude::*;

use ga4_core::api::BackendApiClient;
use ga4_core::config::AppConfig;
use ga4_core::config_page::ConfigState;
use ga4_core::host::HostAdapter;

use crate::components::{ConfigPage, Toolbar};
use crate::services::FileParameterStore;
use crate::state::PageContext;

const STYLES: &str = r"
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; color: #1b273a; background: #f7f9fa; }
.app-container { max-width: 760px; margin: 0 auto; padding: 24px; }
.toolbar { display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px; }
.toolbar-message { font-size: 14px; color: #536171; }
.config-section { background: #fff; border: 1px solid #cfd9e0; border-radius: 6px; padding: 20px; margin-bottom: 20px; }
.section-heading { font-size: 18px; font-weight: 600; margin: 0 0 4px; }
.section-description { font-size: 14px; color: #536171; margin: 0 0 16px; }
.card { border: 1px solid #e5ebed; border-radius: 6px; padding: 16px; }
.card-heading { font-size: 15px; font-weight: 600; margin: 0 0 12px; }
.card-row { display: flex; gap: 12px; margin-bottom: 8px; font-size: 14px; }
.card-row-label { width: 140px; color: #536171; }
.key-file-input { width: 100%; min-height: 160px; font-family: monospace; font-size: 12px; box-sizing: border-box; }
.field-label { display: block; font-size: 14px; font-weight: 600; margin-bottom: 6px; }
.field-help { font-size: 13px; color: #536171; margin: 6px 0; }
.field-error { font-size: 13px; color: #bd002a; margin: 6px 0; }
.field-ok { font-size: 13px; color: #006d23; margin: 6px 0; }
.actions { display: flex; gap: 8px; margin-top: 12px; }
.content-type-row { display: grid; grid-template-columns: 1fr 1fr 1fr auto; gap: 8px; margin-bottom: 8px; align-items: center; }
.error-screen { padding: 40px; color: #bd002a; }
";

/// Everything the page needs from startup, resolved once.
#[derive(Debug, Clone, PartialEq)]
struct BootedPage {
    adapter: HostAdapter<FileParameterStore>,
    initial_state: ConfigState,
    backend_api_url: Option<String>,
    config_warning: Option<String>,
}

fn boot_page() -> Result<BootedPage, String> {
    let store = FileParameterStore::from_env().map_err(|error| error.to_string())?;
    tracing::info!("Using parameter file {}", store.path().display());

    let mut adapter = HostAdapter::new(store);
    let initial_state = adapter
        .mount()
        .map_err(|error| format!("Failed to load stored parameters: {error}"))?;

    let (backend_api_url, config_warning) = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                version = %config.version,
                release = ?config.release,
                "Loaded app configuration"
            );
            (Some(config.backend_api_url), None)
        }
        Err(error) => {
            tracing::warn!("Account summaries disabled: {}", error);
            (None, Some(error.to_string()))
        }
    };

    Ok(BootedPage {
        adapter,
        initial_state,
        backend_api_url,
        config_warning,
    })
}

/// Root application component
#[component]
pub fn App() -> Element {
    let booted = use_hook(boot_page);

    let body = match booted {
        Ok(page) => rsx! {
            PageRoot { page }
        },
        Err(message) => rsx! {
            div {
                class: "error-screen",
                h2 { "Unable to open the configuration" }
                p { "{message}" }
            }
        },
    };

    rsx! {
        style { {STYLES} }
        {body}
    }
}

#[component]
fn PageRoot(page: BootedPage) -> Element {
    let state = use_signal(|| page.initial_state.clone());
    let adapter = use_signal(|| page.adapter.clone());
    let api = use_signal(|| {
        page.backend_api_url
            .as_deref()
            .and_then(|url| match BackendApiClient::new(url) {
                Ok(client) => Some(client),
                Err(error) => {
                    tracing::error!("Failed to build backend API client: {}", error);
                    None
                }
            })
    });
    let save_message = use_signal(|| None::<String>);

    use_context_provider(|| PageContext {
        state,
        adapter,
        api,
        save_message,
    });

    rsx! {
        div {
            class: "app-container",
            Toolbar { config_warning: page.config_warning.clone() }
            ConfigPage {}
        }
    }
}
