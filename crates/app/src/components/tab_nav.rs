use dioxus::prelude::*;
use shared_types::{ClassStatistic, ALL_CLASSES};
use shared_ui::{TabBar, TabButton};

use crate::store::{Command, Intent, Tab};

/// Tab strip: home, dashboard, then one tab per class with its absence count.
#[component]
pub fn TabNav(active: Tab, statistics: Vec<ClassStatistic>) -> Element {
    let store = use_coroutine_handle::<Intent>();
    let select = move |tab: Tab| store.send(Intent::new(Command::SelectTab(tab)));

    let count_for = |tab: Tab| {
        let classe = tab.classe()?;
        statistics
            .iter()
            .find(|s| s.classe == classe)
            .map(|s| s.total_absences)
    };

    let home_label = Tab::Home.label();
    let dashboard_label = Tab::Dashboard.label();

    rsx! {
        TabBar { label: "Navigation",
            TabButton {
                active: active == Tab::Home,
                onclick: move |_| select(Tab::Home),
                "{home_label}"
            }
            TabButton {
                active: active == Tab::Dashboard,
                onclick: move |_| select(Tab::Dashboard),
                "{dashboard_label}"
            }
            for classe in ALL_CLASSES {
                TabButton {
                    key: "{classe}",
                    active: active == Tab::Classe(classe),
                    count: count_for(Tab::Classe(classe)),
                    onclick: move |_| select(Tab::Classe(classe)),
                    "{classe}"
                }
            }
        }
    }
}
