use dioxus::prelude::*;

use ga4_core::config_page::{
    AccountSummariesState, ApiAccessCard, ConfigEvent, DisplayCardModel, ServiceAccountStatus,
    SERVICE_ACCOUNT_HEADING,
};

use crate::state::PageContext;

/// Start an account summaries request for the installed key.
///
/// The response is tagged with the request's token; the reducer drops it if a
/// newer request or a key change superseded it in the meantime.
pub(super) fn fetch_account_summaries(ctx: PageContext) {
    let Some(key_id) = ctx.state.peek().service_account_key_id().cloned() else {
        return;
    };

    ctx.dispatch(ConfigEvent::AccountSummariesRequested);
    let Some(token) = ctx.state.peek().pending_request() else {
        return;
    };
    let api = ctx.api.peek().clone();

    spawn(async move {
        let result = match api {
            Some(api) => api
                .list_account_summaries(&key_id)
                .await
                .map_err(|error| error.to_string()),
            None => Err("Backend API is not configured".to_string()),
        };
        ctx.dispatch(ConfigEvent::AccountSummariesLoaded { token, result });
    });
}

/// Identity card for an installed service account key.
#[component]
pub(super) fn DisplayServiceAccountCard(
    model: DisplayCardModel,
    on_edit: EventHandler<MouseEvent>,
    on_refresh: EventHandler<MouseEvent>,
) -> Element {
    let ctx = use_context::<PageContext>();

    // Fetch once per identity; a new key resets the summaries to idle
    use_effect(move || {
        let state = ctx.state.read();
        let should_fetch = ApiAccessCard::for_state(&state) == ApiAccessCard::Display
            && !state.is_saving_private_key_file()
            && *state.account_summaries() == AccountSummariesState::Idle;
        drop(state);

        if should_fetch {
            fetch_account_summaries(ctx);
        }
    });

    let checking = model.status == ServiceAccountStatus::Checking;
    let pending_save = model.status == ServiceAccountStatus::PendingSave;
    let status_label = model.status.label();

    rsx! {
        div {
            class: "card",

            h3 {
                class: "card-heading",
                "{SERVICE_ACCOUNT_HEADING}"
            }

            for row in model.rows {
                div {
                    key: "{row.label}",
                    class: "card-row",
                    div {
                        class: "card-row-label",
                        "{row.label}"
                    }
                    div {
                        "{row.value}"
                    }
                }
            }

            div {
                class: "card-row",
                div {
                    class: "card-row-label",
                    "Status"
                }
                div {
                    "{status_label}"
                }
            }

            div {
                class: "actions",
                button {
                    id: "editServiceAccountButton",
                    class: "button-secondary",
                    onclick: move |event| on_edit.call(event),
                    "Edit"
                }
                button {
                    class: "button-secondary",
                    disabled: checking || pending_save,
                    onclick: move |event| on_refresh.call(event),
                    "Check access"
                }
            }
        }
    }
}
