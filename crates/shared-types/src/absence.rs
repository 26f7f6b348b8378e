use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::{AppError, Classe};

/// Date format used on the wire and in the form (`DD/MM/YYYY`).
pub const FRENCH_DATE_FORMAT: &str = "%d/%m/%Y";

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// Reason code for an absence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Motif {
    /// Maladie.
    #[default]
    #[serde(rename = "M")]
    Maladie,
    /// Rendez-vous.
    #[serde(rename = "RDV")]
    RendezVous,
    /// Famille.
    #[serde(rename = "F")]
    Famille,
    /// Autre.
    #[serde(rename = "A")]
    Autre,
}

/// All motifs in select order.
pub const ALL_MOTIFS: [Motif; 4] = [Motif::Maladie, Motif::RendezVous, Motif::Famille, Motif::Autre];

impl Motif {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maladie => "M",
            Self::RendezVous => "RDV",
            Self::Famille => "F",
            Self::Autre => "A",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "M" => Some(Self::Maladie),
            "RDV" => Some(Self::RendezVous),
            "F" => Some(Self::Famille),
            "A" => Some(Self::Autre),
            _ => None,
        }
    }

    /// Human-readable label shown in the list and the form select.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Maladie => "Maladie",
            Self::RendezVous => "Rendez-vous",
            Self::Famille => "Famille",
            Self::Autre => "Autre",
        }
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an absence has accepted supporting documentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Justifie {
    #[default]
    #[serde(rename = "O")]
    Oui,
    #[serde(rename = "N")]
    Non,
}

/// Both justification values in select order.
pub const ALL_JUSTIFIE: [Justifie; 2] = [Justifie::Oui, Justifie::Non];

impl Justifie {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oui => "O",
            Self::Non => "N",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Self::Oui),
            "N" => Some(Self::Non),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Oui => "Oui",
            Self::Non => "Non",
        }
    }
}

impl fmt::Display for Justifie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `DD/MM/YYYY` string into a real calendar date.
pub fn parse_french_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, FRENCH_DATE_FORMAT).ok()
}

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A stored absence row. Enumerations are kept as text, constrained by CHECKs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct AbsenceRecord {
    pub id: Uuid,
    pub classe: String,
    pub date: String,
    pub nom: String,
    pub prenom: String,
    pub motif: String,
    pub justifie: String,
    pub remarques: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// One recorded absence of a student on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Absence {
    pub id: String,
    pub classe: Classe,
    /// `DD/MM/YYYY`.
    pub date: String,
    pub nom: String,
    pub prenom: String,
    pub motif: Motif,
    pub justifie: Justifie,
    #[serde(default)]
    pub remarques: String,
    pub created_at: DateTime<Utc>,
}

impl Absence {
    pub fn is_unjustified(&self) -> bool {
        self.justifie == Justifie::Non
    }
}

impl TryFrom<AbsenceRecord> for Absence {
    type Error = AppError;

    fn try_from(r: AbsenceRecord) -> Result<Self, Self::Error> {
        let classe = Classe::from_str_opt(&r.classe)
            .ok_or_else(|| AppError::internal(format!("Unknown classe in storage: {}", r.classe)))?;
        let motif = Motif::from_str_opt(&r.motif)
            .ok_or_else(|| AppError::internal(format!("Unknown motif in storage: {}", r.motif)))?;
        let justifie = Justifie::from_str_opt(&r.justifie).ok_or_else(|| {
            AppError::internal(format!("Unknown justifie in storage: {}", r.justifie))
        })?;

        Ok(Self {
            id: r.id.to_string(),
            classe,
            date: r.date,
            nom: r.nom,
            prenom: r.prenom,
            motif,
            justifie,
            remarques: r.remarques,
            created_at: r.created_at,
        })
    }
}

/// Request body for recording a new absence.
///
/// Fields stay as text on the wire so the server can reject unknown values
/// with a readable message instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateAbsenceRequest {
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_classe")))]
    pub classe: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_date")))]
    pub date: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_nom")))]
    pub nom: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_prenom")))]
    pub prenom: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_motif")))]
    pub motif: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_justifie")))]
    pub justifie: String,
    #[serde(default)]
    pub remarques: Option<String>,
}

impl CreateAbsenceRequest {
    /// Build a request from typed values; the result always names a known
    /// class, motif and justification.
    pub fn new(
        classe: Classe,
        date: impl Into<String>,
        nom: impl Into<String>,
        prenom: impl Into<String>,
        motif: Motif,
        justifie: Justifie,
        remarques: impl Into<String>,
    ) -> Self {
        Self {
            classe: classe.as_str().to_string(),
            date: date.into(),
            nom: nom.into(),
            prenom: prenom.into(),
            motif: motif.as_str().to_string(),
            justifie: justifie.as_str().to_string(),
            remarques: Some(remarques.into()),
        }
    }
}

#[cfg(feature = "validation")]
fn rejection(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(std::borrow::Cow::Borrowed(message))
}

#[cfg(feature = "validation")]
fn validate_classe(value: &str) -> Result<(), ValidationError> {
    match Classe::from_str_opt(value) {
        Some(_) => Ok(()),
        None => Err(rejection("classe", "Classe non valide")),
    }
}

#[cfg(feature = "validation")]
fn validate_date(value: &str) -> Result<(), ValidationError> {
    match parse_french_date(value) {
        Some(_) => Ok(()),
        None => Err(rejection(
            "date",
            "Format de date invalide. Utilisez DD/MM/YYYY",
        )),
    }
}

#[cfg(feature = "validation")]
fn validate_nom(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rejection("required", "Le nom est requis"))
    } else {
        Ok(())
    }
}

#[cfg(feature = "validation")]
fn validate_prenom(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rejection("required", "Le prénom est requis"))
    } else {
        Ok(())
    }
}

#[cfg(feature = "validation")]
fn validate_motif(value: &str) -> Result<(), ValidationError> {
    match Motif::from_str_opt(value) {
        Some(_) => Ok(()),
        None => Err(rejection("motif", "Motif invalide")),
    }
}

#[cfg(feature = "validation")]
fn validate_justifie(value: &str) -> Result<(), ValidationError> {
    match Justifie::from_str_opt(value) {
        Some(_) => Ok(()),
        None => Err(rejection("justifie", "Valeur de justification invalide")),
    }
}

/// Per-class counters computed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassStatistic {
    pub classe: Classe,
    pub total_absences: i64,
    pub absences_non_justifiees: i64,
    /// Absences recorded within the trailing seven-day window.
    pub absences_recentes: i64,
}

impl ClassStatistic {
    /// A row with all counters at zero.
    pub fn empty(classe: Classe) -> Self {
        Self {
            classe,
            total_absences: 0,
            absences_non_justifiees: 0,
            absences_recentes: 0,
        }
    }
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body of `GET /api/classes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassesResponse {
    pub classes: Vec<Classe>,
}
