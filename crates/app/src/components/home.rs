use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdFileSpreadsheet, LdLayoutDashboard};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Welcome page with usage instructions.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            Card {
                CardHeader {
                    CardTitle { "Bienvenue dans le suivi des absences" }
                    CardDescription {
                        "Enregistrez et consultez les absences des élèves de toutes les classes."
                    }
                }
                CardContent {
                    div { class: "home-steps",
                        div { class: "home-step",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                            div {
                                h3 { "Saisir une absence" }
                                p {
                                    "Choisissez une classe dans les onglets, remplissez le formulaire "
                                    "(date, nom, prénom, motif, justification) puis cliquez sur "
                                    strong { "Enregistrer" }
                                    "."
                                }
                            }
                        }
                        div { class: "home-step",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 }
                            div {
                                h3 { "Suivre les statistiques" }
                                p {
                                    "Le tableau de bord présente le total des absences, les absences "
                                    "non justifiées et celles des sept derniers jours, classe par classe."
                                }
                            }
                        }
                        div { class: "home-step",
                            Icon::<LdFileSpreadsheet> { icon: LdFileSpreadsheet, width: 20, height: 20 }
                            div {
                                h3 { "Exporter vers Excel" }
                                p {
                                    "Depuis une classe, exportez ses absences ou l'ensemble des classes "
                                    "dans un classeur Excel. Les absences non justifiées y sont surlignées."
                                }
                            }
                        }
                    }
                    p { class: "home-note",
                        "Les motifs possibles sont : Maladie, Rendez-vous, Famille et Autre."
                    }
                }
            }
        }
    }
}
