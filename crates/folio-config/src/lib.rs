//! Folio configuration system.
//!
//! TOML-based configuration with full validation. All sections use
//! `#[serde(default)]` so partial configs work out of the box; a
//! commented default file is written on first run.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FolioConfig, CONFIG_SCHEMA_VERSION};

use folio_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// file if none exists.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_theme() {
        let config = FolioConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"folio-dark\""));
        assert!(json.contains("\"theme\""));
    }

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = FolioConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"background\""));
        assert!(json.contains("\"starfield\""));
        assert!(json.contains("\"hud\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = FolioConfig::default();
        let json = config_to_json(&config);
        let parsed: FolioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme.name, "folio-dark");
        assert_eq!(parsed.starfield.points, 5000);
    }
}
