use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables all
/// optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Tunables for absence listing and statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbsenceSettings {
    /// Maximum number of rows returned by a list or written to one export sheet.
    #[serde(default = "default_list_limit")]
    pub list_limit: i64,
    /// Length of the trailing window counted as "recent" in statistics.
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
}

fn default_list_limit() -> i64 {
    1000
}

fn default_recent_window_days() -> i64 {
    7
}

impl Default for AbsenceSettings {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
            recent_window_days: default_recent_window_days(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub absences: AbsenceSettings,
}
