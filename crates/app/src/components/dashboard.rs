use dioxus::prelude::*;
use shared_types::ClassStatistic;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    StatTile, StatTone,
};

use crate::projections::DashboardTotals;

/// School-wide totals and the per-class statistics table.
#[component]
pub fn Dashboard(statistics: Vec<ClassStatistic>) -> Element {
    let totals = DashboardTotals::from_stats(&statistics);

    rsx! {
        div { class: "dashboard-page",
            div { class: "dashboard-tiles",
                StatTile { label: "Total des absences", value: totals.total }
                StatTile {
                    label: "Non justifiées",
                    value: totals.unjustified,
                    tone: StatTone::Alert,
                }
                StatTile {
                    label: "Absences récentes (7 jours)",
                    value: totals.recent,
                    tone: StatTone::Info,
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Statistiques par classe" }
                    CardDescription { "Les classes avec des absences non justifiées sont signalées." }
                }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Classe" }
                            DataTableColumn { "Total" }
                            DataTableColumn { "Non justifiées" }
                            DataTableColumn { "Récentes" }
                        }
                        DataTableBody {
                            if statistics.is_empty() {
                                DataTableEmpty { columns: 4usize, "Aucune statistique disponible" }
                            }
                            for stat in statistics.iter() {
                                StatRow { key: "{stat.classe}", stat: stat.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatRow(stat: ClassStatistic) -> Element {
    let flagged = stat.absences_non_justifiees > 0;
    let variant = if flagged {
        BadgeVariant::Danger
    } else {
        BadgeVariant::Neutral
    };

    rsx! {
        DataTableRow { highlight: flagged,
            DataTableCell { "{stat.classe}" }
            DataTableCell { "{stat.total_absences}" }
            DataTableCell {
                Badge { variant, "{stat.absences_non_justifiees}" }
            }
            DataTableCell { "{stat.absences_recentes}" }
        }
    }
}
