use shared_types::{Classe, CreateAbsenceRequest, Justifie, Motif};
use std::fmt;

/// Form fields that must be filled before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Nom,
    Prenom,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Date => "Date",
            DraftField::Nom => "Nom",
            DraftField::Prenom => "Prénom",
        }
    }
}

/// A draft that cannot be submitted, listing every missing field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct DraftError {
    pub missing: Vec<DraftField>,
}

impl DraftError {
    pub fn is_missing(&self, field: DraftField) -> bool {
        self.missing.contains(&field)
    }
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.missing.iter().map(DraftField::label).collect();
        write!(f, "Champs obligatoires manquants : {}", labels.join(", "))
    }
}

/// Today's local date as `DD/MM/YYYY`.
pub fn today_french() -> String {
    chrono::Local::now()
        .format(shared_types::FRENCH_DATE_FORMAT)
        .to_string()
}

/// Unsaved absence being edited in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceDraft {
    pub date: String,
    pub nom: String,
    pub prenom: String,
    pub motif: Motif,
    pub justifie: Justifie,
    pub remarques: String,
}

impl AbsenceDraft {
    /// Fresh draft dated `date`, with motif Maladie and justified.
    pub fn dated(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            nom: String::new(),
            prenom: String::new(),
            motif: Motif::default(),
            justifie: Justifie::default(),
            remarques: String::new(),
        }
    }

    /// Fresh draft dated today.
    pub fn today() -> Self {
        Self::dated(today_french())
    }

    /// Check required fields and build the create request for `classe`.
    ///
    /// Only presence is checked here; the backend validates the date format.
    pub fn validate(&self, classe: Classe) -> Result<CreateAbsenceRequest, DraftError> {
        let missing: Vec<DraftField> = [
            (DraftField::Date, &self.date),
            (DraftField::Nom, &self.nom),
            (DraftField::Prenom, &self.prenom),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(DraftError { missing });
        }

        Ok(CreateAbsenceRequest::new(
            classe,
            self.date.trim(),
            self.nom.trim(),
            self.prenom.trim(),
            self.motif,
            self.justifie,
            self.remarques.clone(),
        ))
    }
}

impl Default for AbsenceDraft {
    fn default() -> Self {
        Self::today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> AbsenceDraft {
        AbsenceDraft {
            nom: "Martin".to_string(),
            prenom: "Léa".to_string(),
            ..AbsenceDraft::dated("15/01/2026")
        }
    }

    #[test]
    fn fresh_draft_uses_defaults() {
        let draft = AbsenceDraft::dated("01/09/2026");
        assert_eq!(draft.motif, Motif::Maladie);
        assert_eq!(draft.justifie, Justifie::Oui);
        assert!(draft.nom.is_empty() && draft.prenom.is_empty() && draft.remarques.is_empty());
    }

    #[test]
    fn today_is_day_month_year() {
        let today = today_french();
        assert_eq!(today.len(), 10);
        assert!(shared_types::parse_french_date(&today).is_some());
    }

    #[test]
    fn complete_draft_builds_request_for_class() {
        let req = filled().validate(Classe::Soleil).unwrap();
        assert_eq!(req.classe, "Soleil");
        assert_eq!(req.date, "15/01/2026");
        assert_eq!(req.nom, "Martin");
        assert_eq!(req.prenom, "Léa");
        assert_eq!(req.motif, "M");
        assert_eq!(req.justifie, "O");
        assert_eq!(req.remarques.as_deref(), Some(""));
    }

    #[test]
    fn names_are_trimmed() {
        let draft = AbsenceDraft {
            nom: "  Martin ".to_string(),
            ..filled()
        };
        assert_eq!(draft.validate(Classe::Lune).unwrap().nom, "Martin");
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let draft = AbsenceDraft {
            nom: "   ".to_string(),
            prenom: String::new(),
            ..filled()
        };
        let err = draft.validate(Classe::Lune).unwrap_err();
        assert_eq!(err.missing, vec![DraftField::Nom, DraftField::Prenom]);
        assert_eq!(err.to_string(), "Champs obligatoires manquants : Nom, Prénom");
    }

    #[test]
    fn empty_date_is_reported() {
        let draft = AbsenceDraft {
            date: String::new(),
            ..filled()
        };
        let err = draft.validate(Classe::Lune).unwrap_err();
        assert!(err.is_missing(DraftField::Date));
        assert!(!err.is_missing(DraftField::Nom));
    }
}
