use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{Classe, Justifie, Motif, ALL_JUSTIFIE, ALL_MOTIFS};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FieldError, Form, FormGrid,
    FormSelect, Input, Textarea,
};

use crate::draft::{AbsenceDraft, DraftField};
use crate::store::{Command, Intent, Outcome};

/// Form recording a new absence for `classe`.
///
/// The draft stays local until submitted. It resets to today's defaults once
/// the store reports the absence created and is kept on any failure.
#[component]
pub fn AbsenceForm(classe: Classe) -> Element {
    let store = use_coroutine_handle::<Intent>();
    let mut draft = use_signal(AbsenceDraft::today);
    let mut busy = use_signal(|| false);
    let mut missing = use_signal(Vec::<DraftField>::new);

    let handle_submit = move |_: FormEvent| {
        if busy() {
            return;
        }
        let (intent, reply) = Intent::with_reply(Command::Submit(draft.read().clone()));
        busy.set(true);
        store.send(intent);

        spawn(async move {
            match reply.await {
                Ok(Outcome::Created) => {
                    draft.set(AbsenceDraft::today());
                    missing.set(Vec::new());
                }
                Ok(Outcome::Rejected(err)) => missing.set(err.missing),
                Ok(_) => {}
                Err(_) => tracing::warn!("absence store dropped the submit reply"),
            }
            busy.set(false);
        });
    };

    let current = draft.read().clone();
    let is_missing = |field: DraftField| missing.read().contains(&field);

    rsx! {
        Card { class: "absence-form-card",
            CardHeader {
                CardTitle { "Nouvelle absence" }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    FormGrid {
                        div {
                            Input {
                                id: "absence-date",
                                label: "Date (JJ/MM/AAAA) *",
                                placeholder: "JJ/MM/AAAA",
                                value: current.date.clone(),
                                required: true,
                                invalid: is_missing(DraftField::Date),
                                disabled: busy(),
                                on_input: move |e: FormEvent| draft.write().date = e.value(),
                            }
                            if is_missing(DraftField::Date) {
                                FieldError { message: "La date est requise" }
                            }
                        }
                        div {
                            Input {
                                id: "absence-nom",
                                label: "Nom *",
                                value: current.nom.clone(),
                                required: true,
                                invalid: is_missing(DraftField::Nom),
                                disabled: busy(),
                                on_input: move |e: FormEvent| draft.write().nom = e.value(),
                            }
                            if is_missing(DraftField::Nom) {
                                FieldError { message: "Le nom est requis" }
                            }
                        }
                        div {
                            Input {
                                id: "absence-prenom",
                                label: "Prénom *",
                                value: current.prenom.clone(),
                                required: true,
                                invalid: is_missing(DraftField::Prenom),
                                disabled: busy(),
                                on_input: move |e: FormEvent| draft.write().prenom = e.value(),
                            }
                            if is_missing(DraftField::Prenom) {
                                FieldError { message: "Le prénom est requis" }
                            }
                        }
                        FormSelect {
                            id: "absence-motif",
                            label: "Motif",
                            value: current.motif.as_str().to_string(),
                            disabled: busy(),
                            onchange: move |e: Event<FormData>| {
                                if let Some(motif) = Motif::from_str_opt(&e.value()) {
                                    draft.write().motif = motif;
                                }
                            },
                            for motif in ALL_MOTIFS {
                                option {
                                    value: motif.as_str(),
                                    selected: motif == current.motif,
                                    {motif.label()}
                                }
                            }
                        }
                        FormSelect {
                            id: "absence-justifie",
                            label: "Justifié",
                            value: current.justifie.as_str().to_string(),
                            disabled: busy(),
                            onchange: move |e: Event<FormData>| {
                                if let Some(justifie) = Justifie::from_str_opt(&e.value()) {
                                    draft.write().justifie = justifie;
                                }
                            },
                            for justifie in ALL_JUSTIFIE {
                                option {
                                    value: justifie.as_str(),
                                    selected: justifie == current.justifie,
                                    {justifie.label()}
                                }
                            }
                        }
                    }
                    Textarea {
                        id: "absence-remarques",
                        label: "Remarques",
                        placeholder: "Informations complémentaires (facultatif)",
                        value: current.remarques.clone(),
                        disabled: busy(),
                        on_input: move |e: FormEvent| draft.write().remarques = e.value(),
                    }
                    div { class: "absence-form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            submit: true,
                            busy: busy(),
                            busy_label: "Enregistrement...".to_string(),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Enregistrer l'absence ({classe})"
                        }
                    }
                }
            }
        }
    }
}
