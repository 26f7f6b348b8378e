use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page introuvable" }
                p { class: "not-found-message",
                    "La page "
                    code { "{path}" }
                    " n'existe pas."
                }
                Link { to: Route::Tracker {},
                    class: "not-found-link",
                    "Retour au suivi des absences"
                }
            }
        }
    }
}
