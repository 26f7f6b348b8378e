use dioxus::prelude::*;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Responsive grid of form fields.
#[component]
pub fn FormGrid(children: Element) -> Element {
    rsx! {
        div { class: "form-grid", {children} }
    }
}

/// Inline error message under a field.
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "field-error", role: "alert", "{message}" }
    }
}
