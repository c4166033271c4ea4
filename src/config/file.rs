use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::input::KeyBindings;

pub const DEFAULT_TICK_MS: u64 = 16;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub device: Option<String>,
    #[serde(default = "default_true")]
    pub grab: bool,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    pub keys: Option<KeyBindings>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            device: None,
            grab: true,
            tick_ms: DEFAULT_TICK_MS,
            keys: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

pub fn load_from_path(path: &Path) -> Option<FileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if path.exists() {
            if let Some(config) = load_from_path(&path) {
                return Some(config);
            }
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("ds4pad.toml"));

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join("ds4pad.toml"));
    }

    paths
}
