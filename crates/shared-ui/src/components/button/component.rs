use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// A button that can show a pending state.
///
/// While `busy` is set the button is disabled, carries `aria-busy` and
/// renders `busy_label` in place of its children when one is given.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub busy: bool,
    #[props(default)]
    pub busy_label: Option<String>,
    /// Render as a form submit button.
    #[props(default = false)]
    pub submit: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let busy = props.busy;
    let kind = if props.submit { "submit" } else { "button" };
    let content = match (busy, props.busy_label.as_deref()) {
        (true, Some(label)) => rsx! { "{label}" },
        _ => props.children.clone(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: kind,
            disabled: props.disabled || busy,
            "aria-busy": if busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if busy {
                span { class: "button-spinner", "aria-hidden": "true" }
            }
            {content}
        }
    }
}
