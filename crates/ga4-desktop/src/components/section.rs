use dioxus::prelude::*;

/// Shared layout for config page sections.
#[component]
pub(super) fn Section(
    #[props(into)] heading: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "config-section",

            h2 {
                class: "section-heading",
                "{heading}"
            }
            p {
                class: "section-description",
                "{description}"
            }
            {children}
        }
    }
}
