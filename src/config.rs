use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub layout: LayoutConfig,
    pub thresholds: ThresholdsConfig,
    pub sampler: SamplerConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub top: usize,
    pub clear_screen: bool,
    pub show_process_total: bool,
    /// `always`, `auto` or `never`.
    pub color: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            top: 20,
            clear_screen: true,
            show_process_total: false,
            color: "always".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub memory_width: usize,
    pub spacing: usize,
    /// Only used to size the bar, not the rendered name column.
    pub name_width: usize,
    pub min_bar: usize,
    pub fallback_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            memory_width: 10,
            spacing: 5,
            name_width: 40,
            min_bar: 10,
            fallback_width: 80,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub alert: f64,
    pub warning: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        ThresholdsConfig {
            alert: 0.7,
            warning: 0.4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            program: "ps".to_string(),
            args: vec!["-axo".to_string(), "rss,comm".to_string()],
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("memchart").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring invalid config");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}
