use std::path::PathBuf;

use serde::Deserialize;

use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_TOKEN_CACHE_PATH, ENV_TOKEN_CACHE};

/// ================================
/// Client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    /// file backing the default token store
    #[serde(default = "default_token_cache_path")]
    pub token_cache_path: PathBuf,
    /// per-request timeout handed to the HTTP client
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    pub logging: Option<LoggingConfig>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            token_cache_path: default_token_cache_path(),
            timeout_ms: default_timeout_ms(),
            logging: None,
        }
    }
}

impl SettingsConfig {
    pub fn from_env() -> Self {
        let token_cache_path = std::env::var(ENV_TOKEN_CACHE)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_token_cache_path);

        Self {
            token_cache_path,
            timeout_ms: default_timeout_ms(),
            logging: Some(LoggingConfig::new("info".to_owned(), LogFormat::from_env())),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new (level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn default_token_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_TOKEN_CACHE_PATH)
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}
