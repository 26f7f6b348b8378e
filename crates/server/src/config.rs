use shared_types::{AbsenceSettings, AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every setting falls back to its default.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, absences = ?config.absences, "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    });
}

/// Parse config file contents, falling back to defaults on error.
fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags { telemetry: false };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Get the absence listing and statistics settings.
pub fn absence_settings() -> AbsenceSettings {
    CONFIG
        .get()
        .map(|c| c.absences.clone())
        .unwrap_or_default()
}

/// Allowed CORS origins from `CORS_ORIGINS` (comma separated). `None` means any origin.
pub fn cors_origins() -> Option<Vec<String>> {
    let _ = dotenvy::dotenv();
    parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()))
}

fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_config_falls_back_to_defaults() {
        let config = parse_config("this is [not toml");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn wildcard_origin_means_any() {
        assert_eq!(parse_origins("*"), None);
        assert_eq!(parse_origins(""), None);
        assert_eq!(parse_origins("http://a.test, *"), None);
    }

    #[test]
    fn explicit_origins_are_trimmed() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test ,"),
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }
}
