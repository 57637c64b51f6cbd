//! GA4 property selection

use dioxus::prelude::*;

use ga4_core::config_page::{AccountSummariesState, ConfigEvent};
use ga4_core::models::{property_options, PropertyOption};

use super::section::Section;
use crate::state::PageContext;

#[component]
pub(super) fn PropertySection() -> Element {
    let ctx = use_context::<PageContext>();
    let state = ctx.state.read();
    let selected = state.parameters().property_id.clone().unwrap_or_default();

    let (mut options, hint) = match state.account_summaries() {
        AccountSummariesState::Loaded(summaries) if summaries.is_empty() => (
            Vec::new(),
            Some("The service account has no access to any Google Analytics account yet."),
        ),
        AccountSummariesState::Loaded(summaries) => (property_options(summaries), None),
        AccountSummariesState::Loading(_) => (Vec::new(), Some("Loading properties...")),
        AccountSummariesState::Failed(_) => (
            Vec::new(),
            Some("Properties could not be loaded. Check the service account status above."),
        ),
        AccountSummariesState::Idle => (Vec::new(), Some("Save the key file to list properties.")),
    };
    drop(state);

    // Keep a saved selection visible even when it is not in the fetched list
    if !selected.is_empty() && !options.iter().any(|option| option.property_id == selected) {
        options.push(PropertyOption {
            property_id: selected.clone(),
            label: selected.clone(),
        });
    }

    rsx! {
        Section {
            heading: "Google Analytics 4 property",
            description: "Select the property whose data appears in the entry sidebar",

            select {
                value: "{selected}",
                onchange: move |event: FormEvent| {
                    ctx.dispatch(ConfigEvent::PropertySelected(Some(event.value())));
                },
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select a property"
                }
                for choice in options {
                    option {
                        key: "{choice.property_id}",
                        value: "{choice.property_id}",
                        selected: choice.property_id == selected,
                        "{choice.label}"
                    }
                }
            }

            if let Some(hint) = hint {
                div {
                    class: "field-help",
                    "{hint}"
                }
            }
        }
    }
}
