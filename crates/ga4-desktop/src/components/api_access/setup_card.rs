use dioxus::prelude::*;

use ga4_core::config_page::{KEY_FILE_HELP, KEY_FILE_LABEL, SERVICE_ACCOUNT_HEADING};

/// Paste-a-key-file card shown until a key is installed, or while replacing one.
#[component]
pub(super) fn SetupServiceAccountCard(
    key_file_input: String,
    message: Option<String>,
    is_valid: bool,
    is_invalid: bool,
    is_in_edit_mode: bool,
    on_key_file_input: EventHandler<String>,
    on_cancel: EventHandler<MouseEvent>,
) -> Element {
    let message_class = if is_invalid { "field-error" } else { "field-ok" };

    rsx! {
        div {
            class: "card",

            h3 {
                class: "card-heading",
                "{SERVICE_ACCOUNT_HEADING}"
            }
            label {
                class: "field-label",
                r#for: "private-key-file",
                "{KEY_FILE_LABEL}"
            }
            textarea {
                id: "private-key-file",
                class: "key-file-input",
                spellcheck: "false",
                value: "{key_file_input}",
                oninput: move |event: FormEvent| {
                    on_key_file_input.call(event.value());
                },
            }
            div {
                class: "field-help",
                "{KEY_FILE_HELP}"
            }

            if let Some(text) = message {
                div {
                    class: message_class,
                    "data-valid": "{is_valid}",
                    "{text}"
                }
            }

            if is_in_edit_mode {
                div {
                    class: "actions",
                    button {
                        class: "button-secondary",
                        onclick: move |event| on_cancel.call(event),
                        "Cancel"
                    }
                }
            }
        }
    }
}
