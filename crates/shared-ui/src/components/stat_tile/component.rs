use dioxus::prelude::*;

/// Tone for a stat tile's value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Alert,
    Info,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "neutral",
            StatTone::Alert => "alert",
            StatTone::Info => "info",
        }
    }
}

/// A single headline number with its caption.
#[component]
pub fn StatTile(label: String, value: i64, #[props(default)] tone: StatTone) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-tile", "data-tone": tone.class(),
            span { class: "stat-tile-value", "{value}" }
            span { class: "stat-tile-label", "{label}" }
        }
    }
}
