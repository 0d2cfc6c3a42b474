use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::render::RenderOptions;
use crate::infra::html::HtmlOptions;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderOptions,
    pub html: HtmlOptions,
}

/// Loads the config from `explicit` or the default location.
///
/// A missing file yields the defaults; so does a file that cannot be parsed,
/// with a warning.
pub fn load_config(explicit: Option<&Path>) -> AppConfig {
    let path = explicit.map_or_else(config_path, Path::to_path_buf);
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        log::debug!("no config at {}, using defaults", path.display());
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("DIFFVIEW_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::config_dir() {
        return dir.join("diffview").join("config.toml");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".diffview")
        .join("config.toml")
}
