//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_MIN_EQUITY, DEFAULT_MIN_REVENUE};
use crate::types::SortKey;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Last scan target
    pub municipality_code: Option<String>,

    // Filter thresholds
    pub min_revenue: i64,
    pub min_equity: u8,

    // View
    pub sort_key: SortKey,
    pub compact_view: bool,
    pub show_filters: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            municipality_code: None,
            min_revenue: DEFAULT_MIN_REVENUE,
            min_equity: DEFAULT_MIN_EQUITY,
            sort_key: SortKey::Opportunity,
            compact_view: false,
            show_filters: false,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut settings = Settings::default();
        settings.municipality_code = Some("4601".to_string());
        settings.min_revenue = 8_000_000;
        settings.min_equity = 45;
        settings.sort_key = SortKey::Revenue;
        settings.compact_view = true;
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.municipality_code.as_deref(), Some("4601"));
        assert_eq!(loaded.min_revenue, 8_000_000);
        assert_eq!(loaded.min_equity, 45);
        assert!(loaded.sort_key == SortKey::Revenue);
        assert!(loaded.compact_view);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("settings.json"), "{not json").expect("write");
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.min_revenue, DEFAULT_MIN_REVENUE);
        assert_eq!(loaded.min_equity, DEFAULT_MIN_EQUITY);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = Settings::load(dir.path());
        assert!(loaded.municipality_code.is_none());
        assert!(!loaded.compact_view);
    }
}
