pub mod constants;

use std::env;
use std::path::PathBuf;
use tracing::warn;

use crate::models::{AbbreviationMode, ContractionMode, ProcessingMode, ProcessingOptions};
use constants::{ENV_PREFIX, MAX_TEXT_LENGTH};

/// Startup configuration for a [`crate::Normalizer`]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizerConfig {
    /// Longest accepted input, in characters (default: 10000)
    pub max_text_length: usize,

    /// Processing mode used when a request does not name one (default: enhanced)
    pub default_mode: ProcessingMode,

    /// Contraction handling for default options (default: hybrid)
    pub contraction_mode: ContractionMode,

    /// Abbreviation handling for default options (default: hybrid)
    pub abbreviation_mode: AbbreviationMode,

    /// JSON file merged over the built-in rule tables
    pub dictionary_file: Option<PathBuf>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            default_mode: ProcessingMode::default(),
            contraction_mode: ContractionMode::default(),
            abbreviation_mode: AbbreviationMode::default(),
            dictionary_file: None,
        }
    }
}

impl NormalizerConfig {
    /// Load configuration from `NORMALIZER_*` environment variables
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = Self::default();

        // Input length limit
        if let Some(val) = var("MAX_TEXT_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_text_length = limit,
                _ => warn!(
                    value = %val,
                    default = MAX_TEXT_LENGTH,
                    "Invalid {}MAX_TEXT_LENGTH, using default",
                    ENV_PREFIX
                ),
            }
        }

        // Default processing mode
        if let Some(val) = var("MODE") {
            match val.parse() {
                Ok(mode) => config.default_mode = mode,
                Err(e) => warn!("{}, using {}", e, config.default_mode.name()),
            }
        }

        // Contraction handling
        if let Some(val) = var("CONTRACTION_MODE") {
            match val.parse() {
                Ok(mode) => config.contraction_mode = mode,
                Err(e) => warn!("{}, using default", e),
            }
        }

        // Abbreviation handling
        if let Some(val) = var("ABBREVIATION_MODE") {
            match val.parse() {
                Ok(mode) => config.abbreviation_mode = mode,
                Err(e) => warn!("{}, using default", e),
            }
        }

        // User dictionary
        if let Some(val) = var("DICTIONARY_FILE") {
            if !val.trim().is_empty() {
                config.dictionary_file = Some(PathBuf::from(val.trim()));
            }
        }

        config
    }

    /// Options applied to requests that don't carry their own
    pub fn default_options(&self) -> ProcessingOptions {
        ProcessingOptions::builder()
            .mode(self.default_mode)
            .contraction_mode(self.contraction_mode)
            .abbreviation_mode(self.abbreviation_mode)
            .build()
            .unwrap_or_else(|_| ProcessingOptions::for_mode(self.default_mode))
    }
}
