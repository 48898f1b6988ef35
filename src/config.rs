//! Screener configuration. Model parameters are loaded separately and
//! validated fail-fast; this file covers the runtime surface around them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Data directory (local response store)
    pub data_dir: PathBuf,
    /// Optional override for the builtin parameter table (JSON, same shape)
    pub params_path: Option<PathBuf>,
    /// Reporting to the tabular backend
    pub uplink: UplinkConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UplinkConfig {
    /// Whether completed responses are reported to the backend
    pub enabled: bool,
    /// Backend base URL when enabled
    pub endpoint: Option<String>,
    /// Bearer token for the backend, if it requires one
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .map(|d| d.join("saa-screener"))
                .unwrap_or_else(|| PathBuf::from(".saa")),
            params_path: None,
            uplink: UplinkConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for UplinkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            api_key: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ScreenerConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ScreenerConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
