//! Content type to slug field / URL prefix mapping

use dioxus::prelude::*;

use ga4_core::config_page::ConfigEvent;
use ga4_core::models::ContentTypeMapping;

use super::section::Section;
use crate::state::PageContext;

#[component]
pub(super) fn ContentTypesSection() -> Element {
    let ctx = use_context::<PageContext>();
    let mut new_content_type = use_signal(String::new);
    let content_types = ctx.state.read().parameters().content_types.clone();

    let add_content_type = move |_: MouseEvent| {
        let content_type_id = new_content_type().trim().to_string();
        if content_type_id.is_empty() {
            return;
        }
        ctx.dispatch(ConfigEvent::ContentTypeMapped {
            content_type_id,
            mapping: ContentTypeMapping::default(),
        });
        new_content_type.set(String::new());
    };

    rsx! {
        Section {
            heading: "Content types",
            description: "Map content types to the slug field and URL prefix of their pages",

            div {
                class: "content-type-row",
                div { class: "field-label", "Content type" }
                div { class: "field-label", "Slug field" }
                div { class: "field-label", "URL prefix" }
                div {}
            }

            for (content_type_id, mapping) in content_types {
                ContentTypeRow {
                    key: "{content_type_id}",
                    content_type_id: content_type_id.clone(),
                    mapping,
                }
            }

            div {
                class: "actions",
                input {
                    placeholder: "Content type id",
                    value: "{new_content_type}",
                    oninput: move |event: FormEvent| new_content_type.set(event.value()),
                }
                button {
                    class: "button-secondary",
                    onclick: add_content_type,
                    "Add content type"
                }
            }
        }
    }
}

#[component]
fn ContentTypeRow(content_type_id: String, mapping: ContentTypeMapping) -> Element {
    let ctx = use_context::<PageContext>();

    let slug_id = content_type_id.clone();
    let slug_mapping = mapping.clone();
    let prefix_id = content_type_id.clone();
    let prefix_mapping = mapping.clone();
    let remove_id = content_type_id.clone();

    rsx! {
        div {
            class: "content-type-row",
            div { "{content_type_id}" }
            input {
                placeholder: "slug",
                value: "{mapping.slug_field}",
                oninput: move |event: FormEvent| {
                    ctx.dispatch(ConfigEvent::ContentTypeMapped {
                        content_type_id: slug_id.clone(),
                        mapping: ContentTypeMapping {
                            slug_field: event.value(),
                            ..slug_mapping.clone()
                        },
                    });
                },
            }
            input {
                placeholder: "blog",
                value: "{mapping.url_prefix}",
                oninput: move |event: FormEvent| {
                    ctx.dispatch(ConfigEvent::ContentTypeMapped {
                        content_type_id: prefix_id.clone(),
                        mapping: ContentTypeMapping {
                            url_prefix: event.value(),
                            ..prefix_mapping.clone()
                        },
                    });
                },
            }
            button {
                class: "button-secondary",
                onclick: move |_| ctx.dispatch(ConfigEvent::ContentTypeUnmapped(remove_id.clone())),
                "Remove"
            }
        }
    }
}
