use dioxus::prelude::*;
use shared_types::{Absence, Classe};
use shared_ui::{PageHeader, PageTitle};

use super::absence_form::AbsenceForm;
use super::absence_list::AbsenceList;
use crate::projections::absences_for_class;

/// Entry form and absence list for one class.
#[component]
pub fn ClassView(classe: Classe, absences: Vec<Absence>) -> Element {
    let rows = absences_for_class(&absences, classe);

    rsx! {
        div { class: "class-view",
            PageHeader {
                PageTitle { subtitle: "Saisie et suivi des absences de la classe",
                    "{classe}"
                }
            }
            AbsenceForm { classe }
            AbsenceList { classe, absences: rows }
        }
    }
}
