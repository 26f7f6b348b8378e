use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileSpreadsheet, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{Absence, Classe};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, PageActions,
};

use crate::store::{Command, Intent};

const COLUMNS: usize = 7;

fn count_label(count: usize) -> String {
    match count {
        0 => "Aucune absence enregistrée".to_string(),
        1 => "1 absence enregistrée".to_string(),
        n => format!("{n} absences enregistrées"),
    }
}

/// Absences of one class with delete and export actions.
///
/// `absences` is already filtered to `classe`. Rows only disappear after the
/// store reloads.
#[component]
pub fn AbsenceList(classe: Classe, absences: Vec<Absence>) -> Element {
    let store = use_coroutine_handle::<Intent>();
    let summary = count_label(absences.len());

    rsx! {
        Card { class: "absence-list-card",
            CardHeader {
                CardTitle { "Absences de la classe {classe}" }
                CardDescription { "{summary}" }
            }
            CardContent {
                PageActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| store.send(Intent::new(Command::Export(Some(classe)))),
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Exporter {classe}"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| store.send(Intent::new(Command::Export(None))),
                        Icon::<LdFileSpreadsheet> { icon: LdFileSpreadsheet, width: 16, height: 16 }
                        "Exporter toutes les classes"
                    }
                }

                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Date" }
                        DataTableColumn { "Nom" }
                        DataTableColumn { "Prénom" }
                        DataTableColumn { "Motif" }
                        DataTableColumn { "Justifié" }
                        DataTableColumn { "Remarques" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if absences.is_empty() {
                            DataTableEmpty { columns: COLUMNS,
                                "Aucune absence enregistrée pour cette classe"
                            }
                        }
                        for absence in absences.iter() {
                            AbsenceRow { key: "{absence.id}", absence: absence.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AbsenceRow(absence: Absence) -> Element {
    let store = use_coroutine_handle::<Intent>();
    let unjustified = absence.is_unjustified();
    let id = absence.id.clone();
    let variant = if unjustified {
        BadgeVariant::Danger
    } else {
        BadgeVariant::Success
    };

    rsx! {
        DataTableRow { highlight: unjustified,
            DataTableCell { "{absence.date}" }
            DataTableCell { "{absence.nom}" }
            DataTableCell { "{absence.prenom}" }
            DataTableCell { {absence.motif.label()} }
            DataTableCell {
                Badge { variant, {absence.justifie.label()} }
            }
            DataTableCell { "{absence.remarques}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Supprimer l'absence de {absence.prenom} {absence.nom}",
                    onclick: move |_| store.send(Intent::new(Command::RequestDelete(id.clone()))),
                    Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                }
            }
        }
    }
}
