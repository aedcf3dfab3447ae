use std::env;
use std::path::PathBuf;

use crate::config::constants::ENV_PREFIX;

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Directory for the JSON log file; no file is written when unset
    pub log_dir: Option<PathBuf>,

    /// Filter for console output (default: "porua_normalizer=info"); RUST_LOG wins
    pub console_log_level: String,

    /// Filter for file output (default: "debug")
    pub file_log_level: String,

    /// Console format: "json", "pretty", or "compact" (default: "compact")
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            console_log_level: "porua_normalizer=info".to_string(),
            file_log_level: "debug".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = Self::default();

        if let Some(dir) = var("LOG_DIR").filter(|d| !d.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }

        if let Some(level) = var("LOG_LEVEL").filter(|l| !l.trim().is_empty()) {
            config.file_log_level = level.trim().to_string();
            config.console_log_level = level.trim().to_string();
        }

        if let Some(format_str) = var("LOG_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => LogFormat::Compact,
            };
        }

        config
    }
}
