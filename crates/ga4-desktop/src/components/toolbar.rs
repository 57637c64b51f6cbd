//! Host toolbar: the save action the platform would normally own.

use dioxus::prelude::*;

use ga4_core::config_page::{ConfigEvent, SaveOutcome};

use crate::state::PageContext;

const REJECTED_MESSAGE: &str = "Provide a valid service account key file before saving.";

#[component]
pub fn Toolbar(config_warning: Option<String>) -> Element {
    let ctx = use_context::<PageContext>();
    let mut save_message = ctx.save_message;

    let save = move |_: MouseEvent| {
        let outcome = ctx.adapter.read().configure();
        match outcome {
            Ok(SaveOutcome::Accepted(result)) => {
                ctx.dispatch(ConfigEvent::SaveCompleted(result.parameters));
                save_message.set(Some("Configuration saved.".to_string()));
            }
            Ok(SaveOutcome::Rejected) => {
                save_message.set(Some(REJECTED_MESSAGE.to_string()));
            }
            Err(error) => {
                tracing::error!("Failed to save configuration: {}", error);
                save_message.set(Some(format!("Save failed: {error}")));
            }
        }
    };

    rsx! {
        div {
            class: "toolbar",

            div {
                h1 {
                    class: "section-heading",
                    "Google Analytics 4"
                }
                if let Some(message) = save_message() {
                    div {
                        class: "toolbar-message",
                        "{message}"
                    }
                }
                if let Some(warning) = config_warning {
                    div {
                        class: "field-error",
                        "{warning}"
                    }
                }
            }
            button {
                class: "button-primary",
                onclick: save,
                "Save"
            }
        }
    }
}
