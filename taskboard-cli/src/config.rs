/// Configuration for the taskboard host.
/// Reads config.json from ~/.config/taskboard/config.json (or platform equivalent).
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use taskboard_core::types::{Status, COLUMNS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the task slots live. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_seed")]
    pub seed_on_first_run: bool,
    /// Column targets the text host paints.
    #[serde(default = "default_columns")]
    pub columns_shown: Vec<Status>,
}

fn default_seed() -> bool {
    true
}

fn default_columns() -> Vec<Status> {
    COLUMNS.to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_on_first_run: default_seed(),
            columns_shown: default_columns(),
        }
    }
}

impl AppConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Default config path: ~/.config/taskboard/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskboard")
        .join("config.json")
}

/// Default data dir: ~/.local/share/taskboard
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskboard")
}

/// Load config from path. Returns default if the file doesn't exist or is unreadable.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("[taskboard.config] Failed to parse config {}: {}", path.display(), e);
            AppConfig::default()
        }),
        Err(_) => {
            log::info!("[taskboard.config] No config at {}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.json"));
        assert_eq!(config, AppConfig::default());
        assert!(config.seed_on_first_run);
        assert_eq!(config.columns_shown, COLUMNS.to_vec());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"data_dir": "/tmp/boards", "columns_shown": ["todo", "done"]}"#).unwrap();

        let config = load_config(&path);
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/boards"));
        assert!(config.seed_on_first_run);
        assert_eq!(config.columns_shown, vec![Status::Todo, Status::Done]);
    }

    #[test]
    fn test_unparseable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
