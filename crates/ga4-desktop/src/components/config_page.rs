//! Config page root component

use dioxus::prelude::*;

use super::api_access::ApiAccessSection;
use super::content_types_section::ContentTypesSection;
use super::property_section::PropertySection;
use crate::state::PageContext;

/// Config page: API access first, then the sections that need a working key
#[component]
pub fn ConfigPage() -> Element {
    let ctx = use_context::<PageContext>();
    let has_valid_key = ctx.state.read().is_valid_service_account();

    rsx! {
        div {
            class: "config-page",

            ApiAccessSection {}

            if has_valid_key {
                PropertySection {}
                ContentTypesSection {}
            }
        }
    }
}
