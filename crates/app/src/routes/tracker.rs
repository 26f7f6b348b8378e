use dioxus::prelude::*;
use shared_types::Absence;
#[allow(unused_imports)]
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Skeleton, ToastOptions,
};

use crate::components::{ClassView, Dashboard, Home, TabNav};
#[allow(unused_imports)]
use crate::store::{
    acknowledgment, perform, Acknowledgment, AbsenceStore, AppSnapshot, Command, Effect, Intent,
    Outcome, Settled, Step, Tab,
};
#[cfg(not(feature = "server"))]
use crate::api::AbsenceApi;

/// Root of the tracker: owns the store and renders the active tab.
///
/// One coroutine owns the store. Local commands apply as soon as they arrive;
/// backend effects run alongside and settle in completion order, so a tab
/// switch or export never waits on the network. Components only read the
/// mirrored snapshot.
#[component]
#[allow(unused_variables, unused_mut)]
pub fn Tracker() -> Element {
    let toast = use_toast();
    let mut snapshot = use_signal(AppSnapshot::initial);

    use_coroutine(move |mut rx: UnboundedReceiver<Intent>| async move {
        // The backend is reached over HTTP from the hydrated client; during
        // SSR the page renders its loading state.
        #[cfg(feature = "server")]
        return;

        #[cfg(not(feature = "server"))]
        {
            use futures::stream::FuturesUnordered;
            use futures::StreamExt;

            let api = crate::api::HttpAbsenceApi::from_env();
            let mut store = AbsenceStore::new(api.clone());
            let mut in_flight = FuturesUnordered::new();
            in_flight.push(in_background(api.clone(), Effect::Load, Ticket::default()));

            loop {
                futures::select! {
                    intent = rx.select_next_some() => {
                        let Intent { command, reply } = intent;
                        let ticket = Ticket { failure: command.failure_message(), reply };
                        match store.apply(command) {
                            Step::Done(outcome) => finish(&toast, outcome, ticket),
                            Step::Await(effect) => {
                                in_flight.push(in_background(api.clone(), effect, ticket));
                            }
                        }
                    }
                    (settled, ticket) = in_flight.select_next_some() => {
                        let (outcome, follow_up) = store.settle(settled);
                        if let Some(effect) = follow_up {
                            in_flight.push(in_background(api.clone(), effect, Ticket::default()));
                        }
                        finish(&toast, outcome, ticket);
                    }
                    complete => break,
                }
                snapshot.set(store.snapshot().clone());
            }
        }
    });

    let snap = snapshot.read().clone();

    rsx! {
        div { class: "tracker",
            header { class: "tracker-header",
                h1 { "Suivi des Absences Scolaires" }
                p { class: "tracker-subtitle", "Enregistrement et suivi des absences par classe" }
            }

            TabNav { active: snap.active_tab, statistics: snap.statistics.clone() }

            main { class: "tracker-content",
                if snap.loading {
                    LoadingState {}
                } else {
                    match snap.active_tab {
                        Tab::Home => rsx! { Home {} },
                        Tab::Dashboard => rsx! {
                            Dashboard { statistics: snap.statistics.clone() }
                        },
                        Tab::Classe(classe) => rsx! {
                            ClassView { key: "{classe}", classe, absences: snap.absences.clone() }
                        },
                    }
                }
            }

            DeleteConfirmation {
                open: snap.pending_delete.is_some(),
                absence: snap.pending_absence().cloned(),
            }
        }
    }
}

/// Where an outcome goes once known: the failure toast text of the command
/// that produced it and the component waiting on it, if any.
#[cfg(not(feature = "server"))]
#[derive(Default)]
struct Ticket {
    failure: Option<&'static str>,
    reply: Option<futures::channel::oneshot::Sender<Outcome>>,
}

#[cfg(not(feature = "server"))]
async fn in_background<A: AbsenceApi>(api: A, effect: Effect, ticket: Ticket) -> (Settled, Ticket) {
    (perform(&api, effect).await, ticket)
}

/// Toast, open exports, and answer the waiting component.
#[cfg(not(feature = "server"))]
fn finish(toast: &shared_ui::Toasts, outcome: Outcome, ticket: Ticket) {
    match acknowledgment(ticket.failure, &outcome) {
        Some(Acknowledgment::Success(message)) => {
            toast.success(message, ToastOptions::new());
        }
        Some(Acknowledgment::Failure(message)) => {
            toast.error(message, ToastOptions::new());
        }
        None => {}
    }

    if let Outcome::OpenExport(url) = &outcome {
        open_in_new_context(url);
    }

    if let Some(reply) = ticket.reply {
        let _ = reply.send(outcome);
    }
}

/// Open `url` in a new browsing context.
#[cfg(not(feature = "server"))]
fn open_in_new_context(url: &str) {
    let literal = serde_json::Value::String(url.to_string());
    document::eval(&format!("window.open({literal}, '_blank');"));
}

#[component]
fn LoadingState() -> Element {
    rsx! {
        div { class: "tracker-loading", "aria-busy": "true",
            p { "Chargement des données..." }
            for _ in 0..3 {
                Skeleton { class: "tracker-loading-line" }
            }
        }
    }
}

/// Confirmation dialog for the absence awaiting deletion.
#[component]
fn DeleteConfirmation(open: bool, absence: Option<Absence>) -> Element {
    let store = use_coroutine_handle::<Intent>();
    let id = absence.as_ref().map(|a| a.id.clone());
    let who = absence
        .as_ref()
        .map(|a| format!("de {} {} du {}", a.prenom, a.nom, a.date))
        .unwrap_or_default();

    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    store.send(Intent::new(Command::CancelDelete));
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Supprimer l'absence" }
                AlertDialogDescription {
                    "Êtes-vous sûr de vouloir supprimer l'absence {who} ? Cette action est irréversible."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Annuler" }
                    AlertDialogAction {
                        on_click: move |_| {
                            if let Some(id) = id.clone() {
                                store.send(Intent::new(Command::ConfirmDelete(id)));
                            }
                        },
                        "Supprimer"
                    }
                }
            }
        }
    }
}
