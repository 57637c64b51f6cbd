//! API access section: setup card or display card for the service account.

mod display_card;
mod setup_card;

use dioxus::prelude::*;

use ga4_core::config_page::{
    key_file_message, ApiAccessCard, ConfigEvent, DisplayCardModel, KeyFileCheck,
    API_ACCESS_DESCRIPTION, API_ACCESS_HEADING,
};

use self::display_card::{fetch_account_summaries, DisplayServiceAccountCard};
use self::setup_card::SetupServiceAccountCard;
use super::section::Section;
use crate::state::PageContext;

#[component]
pub(super) fn ApiAccessSection() -> Element {
    let ctx = use_context::<PageContext>();
    let state = ctx.state.read();
    let card = ApiAccessCard::for_state(&state);

    let body = match (card, DisplayCardModel::for_state(&state)) {
        (ApiAccessCard::Display, Some(model)) => rsx! {
            DisplayServiceAccountCard {
                model,
                on_edit: move |_| ctx.dispatch(ConfigEvent::EditRequested),
                on_refresh: move |_| fetch_account_summaries(ctx),
            }
        },
        _ => {
            let check = state.key_file_check();
            rsx! {
                SetupServiceAccountCard {
                    key_file_input: state.key_file_input().as_str().to_string(),
                    message: key_file_message(check),
                    is_valid: check.is_valid(),
                    is_invalid: matches!(check, KeyFileCheck::Invalid(_)),
                    is_in_edit_mode: state.is_in_edit_mode(),
                    on_key_file_input: move |text: String| ctx.dispatch(ConfigEvent::key_pasted(text)),
                    on_cancel: move |_| ctx.dispatch(ConfigEvent::EditCancelled),
                }
            }
        }
    };

    rsx! {
        Section {
            heading: API_ACCESS_HEADING,
            description: API_ACCESS_DESCRIPTION,
            {body}
        }
    }
}
