//! Application state and the commands that change it.
//!
//! Components never touch the network. They send a [`Command`] to the
//! [`AbsenceStore`], which applies the local part at once and hands back an
//! [`Effect`] when the backend is involved. The effect runs outside the store;
//! its [`Settled`] answer is fed back, and successful mutations ask for a
//! reload.

use futures::channel::oneshot;
use shared_types::{Absence, ClassStatistic, Classe, CreateAbsenceRequest};

use crate::api::{AbsenceApi, ApiError};
use crate::draft::{AbsenceDraft, DraftError};

/// Which view the root renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Dashboard,
    Classe(Classe),
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Accueil",
            Tab::Dashboard => "Tableau de bord",
            Tab::Classe(c) => c.as_str(),
        }
    }

    pub fn classe(&self) -> Option<Classe> {
        match self {
            Tab::Classe(c) => Some(*c),
            _ => None,
        }
    }
}

/// Read-only view of the store handed to components.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSnapshot {
    /// True until the first load settles, whatever its result.
    pub loading: bool,
    pub active_tab: Tab,
    pub absences: Vec<Absence>,
    pub statistics: Vec<ClassStatistic>,
    /// Absence awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl AppSnapshot {
    pub fn initial() -> Self {
        Self {
            loading: true,
            active_tab: Tab::Home,
            absences: Vec::new(),
            statistics: Vec::new(),
            pending_delete: None,
        }
    }

    /// The absence awaiting confirmation, if it is still loaded.
    pub fn pending_absence(&self) -> Option<&Absence> {
        let id = self.pending_delete.as_deref()?;
        self.absences.iter().find(|a| a.id == id)
    }
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Intent raised by a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectTab(Tab),
    Refresh,
    Submit(AbsenceDraft),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete(String),
    Export(Option<Classe>),
}

impl Command {
    /// Message shown to the user when this command fails against the backend.
    /// Commands without one fail silently (logged only).
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            Command::Submit(_) => Some("Erreur lors de l'enregistrement de l'absence"),
            Command::ConfirmDelete(_) => Some("Erreur lors de la suppression de l'absence"),
            _ => None,
        }
    }
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    TabChanged,
    Refreshed,
    Created,
    Rejected(DraftError),
    DeletePending,
    DeleteCancelled,
    Deleted,
    OpenExport(String),
    Failed(ApiError),
    /// Nothing to do (submit outside a class tab, confirm with nothing pending).
    Ignored,
}

/// User-facing feedback for an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    Success(String),
    Failure(String),
}

/// Feedback to show for `outcome`, given the failure message of the command
/// that produced it.
pub fn acknowledgment(failure: Option<&'static str>, outcome: &Outcome) -> Option<Acknowledgment> {
    match outcome {
        Outcome::Created => Some(Acknowledgment::Success(
            "Absence enregistrée avec succès".to_string(),
        )),
        Outcome::Deleted => Some(Acknowledgment::Success(
            "Absence supprimée avec succès".to_string(),
        )),
        Outcome::Rejected(err) => Some(Acknowledgment::Failure(err.to_string())),
        Outcome::Failed(_) => failure.map(|m| Acknowledgment::Failure(m.to_string())),
        _ => None,
    }
}

/// A command plus an optional channel for its outcome, queued to the store's
/// coroutine.
pub struct Intent {
    pub command: Command,
    pub reply: Option<oneshot::Sender<Outcome>>,
}

impl Intent {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            reply: None,
        }
    }

    /// Intent whose outcome is sent back on the returned receiver.
    pub fn with_reply(command: Command) -> (Self, oneshot::Receiver<Outcome>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                command,
                reply: Some(tx),
            },
            rx,
        )
    }
}

/// Backend work a command waits on before it can finish.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch both collections.
    Load,
    Create(CreateAbsenceRequest),
    Delete(String),
}

/// The backend's answer to an [`Effect`].
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Loaded(Result<(Vec<Absence>, Vec<ClassStatistic>), ApiError>),
    Created {
        classe: String,
        result: Result<(), ApiError>,
    },
    Deleted {
        id: String,
        result: Result<(), ApiError>,
    },
}

/// Immediate result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Done(Outcome),
    Await(Effect),
}

/// Run `effect` against the backend. Holds no store borrow, so local commands
/// keep applying while it is in flight.
pub async fn perform<A: AbsenceApi>(api: &A, effect: Effect) -> Settled {
    match effect {
        Effect::Load => {
            let (absences, statistics) =
                futures::join!(api.list_absences(), api.list_statistics());
            Settled::Loaded(absences.and_then(|a| statistics.map(|s| (a, s))))
        }
        Effect::Create(request) => {
            let result = api.create_absence(&request).await;
            Settled::Created {
                classe: request.classe,
                result,
            }
        }
        Effect::Delete(id) => {
            let result = api.delete_absence(&id).await;
            Settled::Deleted { id, result }
        }
    }
}

/// Owns the absence and statistics collections and applies commands to them.
pub struct AbsenceStore<A> {
    api: A,
    snapshot: AppSnapshot,
}

impl<A: AbsenceApi> AbsenceStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            snapshot: AppSnapshot::initial(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    /// Apply the local part of `command`. Commands that need the backend
    /// return the [`Effect`] to run; its answer goes to [`Self::settle`].
    pub fn apply(&mut self, command: Command) -> Step {
        match command {
            Command::SelectTab(tab) => {
                self.snapshot.active_tab = tab;
                Step::Done(Outcome::TabChanged)
            }
            Command::Refresh => Step::Await(Effect::Load),
            Command::Submit(draft) => {
                let Some(classe) = self.snapshot.active_tab.classe() else {
                    tracing::warn!("absence submitted outside a class tab");
                    return Step::Done(Outcome::Ignored);
                };
                match draft.validate(classe) {
                    Ok(request) => Step::Await(Effect::Create(request)),
                    Err(e) => Step::Done(Outcome::Rejected(e)),
                }
            }
            Command::RequestDelete(id) => {
                self.snapshot.pending_delete = Some(id);
                Step::Done(Outcome::DeletePending)
            }
            Command::CancelDelete => {
                self.snapshot.pending_delete = None;
                Step::Done(Outcome::DeleteCancelled)
            }
            // The confirmation carries its own id, so a dialog dismissal
            // processed first does not drop it.
            Command::ConfirmDelete(id) => {
                self.snapshot.pending_delete = None;
                Step::Await(Effect::Delete(id))
            }
            Command::Export(classe) => {
                Step::Done(Outcome::OpenExport(self.api.export_url(classe)))
            }
        }
    }

    /// Apply a backend answer. A successful mutation is reported right away
    /// and asks for a reload, which the caller runs afterwards.
    pub fn settle(&mut self, settled: Settled) -> (Outcome, Option<Effect>) {
        match settled {
            Settled::Loaded(result) => {
                self.snapshot.loading = false;
                match result {
                    // Collections are replaced wholesale; a failed load keeps the previous ones.
                    Ok((absences, statistics)) => {
                        tracing::debug!(
                            absences = absences.len(),
                            classes = statistics.len(),
                            "absences loaded"
                        );
                        self.snapshot.absences = absences;
                        self.snapshot.statistics = statistics;
                        (Outcome::Refreshed, None)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to load absences");
                        (Outcome::Failed(e), None)
                    }
                }
            }
            Settled::Created { classe, result } => match result {
                Ok(()) => {
                    tracing::info!(%classe, "absence created");
                    (Outcome::Created, Some(Effect::Load))
                }
                Err(e) => {
                    tracing::error!(error = %e, %classe, "failed to create absence");
                    (Outcome::Failed(e), None)
                }
            },
            Settled::Deleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(%id, "absence deleted");
                    (Outcome::Deleted, Some(Effect::Load))
                }
                Err(e) => {
                    tracing::error!(error = %e, %id, "failed to delete absence");
                    (Outcome::Failed(e), None)
                }
            },
        }
    }
}
