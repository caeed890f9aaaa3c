//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default width of the dialog panel in columns
pub const DEFAULT_DIALOG_WIDTH: u16 = 50;
const MIN_DIALOG_WIDTH: u16 = 30;
const MAX_DIALOG_WIDTH: u16 = 80;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "xmodal_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Dialog panel width in columns
    pub dialog_width: Option<u16>,
    /// Tracing filter directive, e.g. `xmodal_tui=debug`
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "xmodal", "xmodal-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Panel width, clamped to a usable range
    pub fn dialog_width(&self) -> u16 {
        self.dialog_width
            .unwrap_or(DEFAULT_DIALOG_WIDTH)
            .clamp(MIN_DIALOG_WIDTH, MAX_DIALOG_WIDTH)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("xmodal-tui-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.dialog_width.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.dialog_width(), DEFAULT_DIALOG_WIDTH);
        assert_eq!(config.log_filter(), "xmodal_tui=info");
    }

    #[test]
    fn test_dialog_width_is_clamped() {
        let narrow = TuiConfig {
            dialog_width: Some(10),
            ..Default::default()
        };
        let wide = TuiConfig {
            dialog_width: Some(500),
            ..Default::default()
        };
        assert_eq!(narrow.dialog_width(), 30);
        assert_eq!(wide.dialog_width(), 80);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            dialog_width: Some(60),
            log_filter: Some("xmodal_tui=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"dialog_width": 40, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.dialog_width, Some(40));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let parsed = TuiConfig::load_from(&temp_path("missing.json")).unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_load_from_invalid_json_is_error() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_config_path_points_at_json_file() {
        if let Some(path) = TuiConfig::config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
            assert!(path.to_string_lossy().contains("xmodal"));
        }
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_path("written/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"dialog_width": 42}"#).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.dialog_width, Some(42));
        assert_eq!(loaded.dialog_width(), 42);
        let _ = fs::remove_file(&path);
    }
}
