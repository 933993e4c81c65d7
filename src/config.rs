//! Configuration handling for the wizard

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Location pre-filled on every new listing
    pub default_location: String,
    /// Simulated latency of title suggestions
    pub suggestion_delay_ms: u64,
    /// Simulated latency of description drafts
    pub draft_delay_ms: u64,
    /// Length of the "building your preview" screen
    pub preview_build_ms: u64,
    /// Pause between picking a category and showing the basics form
    pub category_transition_ms: u64,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_location: "Montreal, QC".to_string(),
            suggestion_delay_ms: 1200,
            draft_delay_ms: 1500,
            preview_build_ms: 1200,
            category_transition_ms: 300,
            log_filter: "listing_wizard=info".to_string(),
        }
    }
}

impl WizardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "listing-wizard", "listing-wizard")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("listing-wizard.log"))
    }

    /// Load configuration from file, or the defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Write the defaults on first run so there is a file to edit.
    /// Returns whether a file was created.
    pub fn write_defaults_if_missing() -> Result<bool> {
        match Self::config_path() {
            Some(path) => Self::write_defaults_at(&path),
            None => Ok(false),
        }
    }

    fn write_defaults_at(path: &std::path::Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WizardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }

    pub fn draft_delay(&self) -> Duration {
        Duration::from_millis(self.draft_delay_ms)
    }

    pub fn preview_build(&self) -> Duration {
        Duration::from_millis(self.preview_build_ms)
    }

    pub fn category_transition(&self) -> Duration {
        Duration::from_millis(self.category_transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert_eq!(config.default_location, "Montreal, QC");
        assert_eq!(config.suggestion_delay(), Duration::from_millis(1200));
        assert_eq!(config.draft_delay(), Duration::from_millis(1500));
        assert_eq!(config.category_transition(), Duration::from_millis(300));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: WizardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, WizardConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let json = r#"{"default_location": "Quebec City, QC", "draft_delay_ms": 0}"#;
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_location, "Quebec City, QC");
        assert_eq!(parsed.draft_delay(), Duration::ZERO);
        assert_eq!(parsed.suggestion_delay_ms, 1200);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"preview_build_ms": 10, "unknown_field": "value"}"#;
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.preview_build_ms, 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = WizardConfig {
            default_location: "Laval, QC".to_string(),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = WizardConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_defaults_written_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        assert!(WizardConfig::write_defaults_at(&path).unwrap());
        assert_eq!(WizardConfig::load_from(&path).unwrap(), WizardConfig::default());

        fs::write(&path, r#"{"default_location": "Laval, QC"}"#).unwrap();
        assert!(!WizardConfig::write_defaults_at(&path).unwrap());
        assert_eq!(
            WizardConfig::load_from(&path).unwrap().default_location,
            "Laval, QC"
        );
    }

    #[test]
    fn test_unwritable_defaults_report_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a dir").unwrap();

        let result = WizardConfig::write_defaults_at(&blocker.join("config.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(WizardConfig::load_from(&path).is_err());
    }
}
