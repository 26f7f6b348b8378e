use dioxus::prelude::*;

/// Page header container. Wraps a title and optional actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

/// Page title rendered as an h1, with an optional subtitle below it.
#[component]
pub fn PageTitle(#[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "page-title-block",
            h1 { class: "page-title", {children} }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Container for action buttons in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
