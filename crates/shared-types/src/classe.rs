use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed student groups. Absences and statistics are partitioned by class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Classe {
    #[serde(rename = "Salle 2")]
    Salle2,
    #[serde(rename = "Salle 5")]
    Salle5,
    #[serde(rename = "Salle 6")]
    Salle6,
    #[serde(rename = "Salle 7")]
    Salle7,
    #[serde(rename = "Salle 8")]
    Salle8,
    #[serde(rename = "Salle 9")]
    Salle9,
    #[serde(rename = "Salle 10")]
    Salle10,
    #[serde(rename = "Salle 11")]
    Salle11,
    #[serde(rename = "Salle 12")]
    Salle12,
    #[serde(rename = "Salle 13")]
    Salle13,
    #[serde(rename = "Salle 14")]
    Salle14,
    #[serde(rename = "Salle 16")]
    Salle16,
    #[serde(rename = "Salle 18")]
    Salle18,
    #[serde(rename = "Nuage")]
    Nuage,
    #[serde(rename = "Soleil")]
    Soleil,
    #[serde(rename = "Arc-en-ciel")]
    ArcEnCiel,
    #[serde(rename = "Lune")]
    Lune,
    #[serde(rename = "Étoile")]
    Etoile,
}

/// All classes in display order (tabs, statistics rows, export sheets).
pub const ALL_CLASSES: [Classe; 18] = [
    Classe::Salle2,
    Classe::Salle5,
    Classe::Salle6,
    Classe::Salle7,
    Classe::Salle8,
    Classe::Salle9,
    Classe::Salle10,
    Classe::Salle11,
    Classe::Salle12,
    Classe::Salle13,
    Classe::Salle14,
    Classe::Salle16,
    Classe::Salle18,
    Classe::Nuage,
    Classe::Soleil,
    Classe::ArcEnCiel,
    Classe::Lune,
    Classe::Etoile,
];

impl Classe {
    /// Display name, identical to the wire and database value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salle2 => "Salle 2",
            Self::Salle5 => "Salle 5",
            Self::Salle6 => "Salle 6",
            Self::Salle7 => "Salle 7",
            Self::Salle8 => "Salle 8",
            Self::Salle9 => "Salle 9",
            Self::Salle10 => "Salle 10",
            Self::Salle11 => "Salle 11",
            Self::Salle12 => "Salle 12",
            Self::Salle13 => "Salle 13",
            Self::Salle14 => "Salle 14",
            Self::Salle16 => "Salle 16",
            Self::Salle18 => "Salle 18",
            Self::Nuage => "Nuage",
            Self::Soleil => "Soleil",
            Self::ArcEnCiel => "Arc-en-ciel",
            Self::Lune => "Lune",
            Self::Etoile => "Étoile",
        }
    }

    /// Exact-match lookup. Anything outside the fixed set yields `None`.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        ALL_CLASSES.iter().copied().find(|c| c.as_str() == s)
    }

    /// Position in [`ALL_CLASSES`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Classe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a class name belongs to the fixed set.
pub fn is_valid_classe(s: &str) -> bool {
    Classe::from_str_opt(s).is_some()
}
