use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use crate::error::HappenError;

const CONFIG_ENV: &str = "HAPPEN_CONFIG";
const CONFIG_FILE: &str = "happen.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HappenConfig {
    pub log_format: LogFormat,
    /// Filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Finished timings above this are logged as warnings
    pub slow_threshold_ms: Option<u64>,
}

impl Default for HappenConfig {
    fn default() -> Self {
        HappenConfig {
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
            slow_threshold_ms: None,
        }
    }
}

impl HappenConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, HappenError> {
        Ok(toml::from_str::<HappenConfig>(content)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, HappenError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

fn get_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(CONFIG_FILE),
    }
}

fn load_config_internal() -> HappenConfig {
    let config_path = get_config_path();
    if !config_path.exists() {
        return HappenConfig::default();
    }

    // No subscriber is installed yet at this point, so report on stderr
    match HappenConfig::load_from(&config_path) {
        Ok(config) => {
            eprintln!("[Config] Loaded happen config from: {:?}", config_path);
            config
        }
        Err(e) => {
            eprintln!("[Config] {} in {:?}, using defaults", e, config_path);
            HappenConfig::default()
        }
    }
}

lazy_static! {
    static ref HAPPEN_CONFIG: HappenConfig = load_config_internal();
}

/// Get the cached configuration (loaded on first use)
pub fn get_config() -> &'static HappenConfig {
    &HAPPEN_CONFIG
}
