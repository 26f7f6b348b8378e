use dioxus::prelude::*;

/// Labelled single-line text input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] id: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] invalid: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "input-required", " *" }
                    }
                }
            }
            input {
                r#type: "text",
                id: "{id}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
