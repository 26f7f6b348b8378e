use dioxus::prelude::*;

/// Horizontal, wrapping strip of tab buttons. Selection is owned by the caller.
#[component]
pub fn TabBar(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "tab-bar", role: "tablist", "aria-label": "{label}",
            {children}
        }
    }
}

/// One tab in a `TabBar`. An optional `count` renders as a trailing pill.
#[component]
pub fn TabButton(
    active: bool,
    #[props(default)] count: Option<i64>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "tab-button",
            role: "tab",
            "aria-selected": if active { "true" } else { "false" },
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            {children}
            if let Some(n) = count {
                if n > 0 {
                    span { class: "tab-count", "{n}" }
                }
            }
        }
    }
}
