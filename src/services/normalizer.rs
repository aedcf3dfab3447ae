use std::sync::Arc;

use uuid::Uuid;

use crate::config::NormalizerConfig;
use crate::error::{NormalizerError, Result};
use crate::models::{NormalizeRequest, NormalizationResult, ProcessingOptions, ProsodyMarker};
use crate::rules::RuleTables;
use crate::text_processing::normalization::compose;
use crate::text_processing::{Pipeline, ProsodyAnnotator};

struct Inner {
    tables: RuleTables,
    pipeline: Pipeline,
    config: NormalizerConfig,
}

/// Entry point for text normalization
///
/// Cheap to clone; clones share the same rule tables. Safe to call from any
/// number of threads at once, since nothing is mutated after construction.
#[derive(Clone)]
pub struct Normalizer {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Normalizer {
    /// Build a normalizer, loading the dictionary file if one is configured
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let tables = match &config.dictionary_file {
            Some(path) => {
                tracing::info!("Loading dictionary overrides from {}", path.display());
                RuleTables::load_with_overrides(path)?
            }
            None => RuleTables::builtin()?,
        };
        Ok(Self::with_tables(config, tables))
    }

    /// Normalizer over the built-in tables with default settings
    pub fn builtin() -> Result<Self> {
        Self::new(NormalizerConfig::default())
    }

    pub fn with_tables(config: NormalizerConfig, tables: RuleTables) -> Self {
        tracing::debug!(
            abbreviations = tables.abbreviations.len(),
            homographs = tables.homographs.len(),
            pronunciations = tables.pronunciations.len(),
            "Rule tables ready"
        );
        Self {
            inner: Arc::new(Inner {
                tables,
                pipeline: Pipeline::new(),
                config,
            }),
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.inner.config
    }

    pub fn tables(&self) -> &RuleTables {
        &self.inner.tables
    }

    /// Options used when a caller has none of its own
    pub fn default_options(&self) -> ProcessingOptions {
        self.inner.config.default_options()
    }

    /// Normalize `text` for speech
    ///
    /// Fails only when the text is longer than the configured limit; every
    /// other problem ends up in the result's warnings.
    pub fn normalize(&self, text: &str, options: &ProcessingOptions) -> Result<NormalizationResult> {
        let length = text.chars().count();
        let max = self.inner.config.max_text_length;
        if length > max {
            tracing::warn!(length, max, "Rejecting oversized input");
            return Err(NormalizerError::InputTooLong { length, max });
        }

        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("normalize", %request_id, mode = %options.mode().name());
        let _guard = span.enter();

        let composed = compose(text);
        let result = self
            .inner
            .pipeline
            .run(&composed, options, &self.inner.tables);

        tracing::debug!(
            changes = result.changes.len(),
            warnings = result.warnings.len(),
            duration_ms = result.duration_ms,
            "Normalization complete"
        );
        Ok(result)
    }

    /// Normalize a deserialized request, validating its options first
    pub fn normalize_request(&self, request: &NormalizeRequest) -> Result<NormalizationResult> {
        let options = request.options()?;
        self.normalize(&request.text, &options)
    }

    /// Prosody markers for text that is already normalized
    pub fn annotate(&self, text: &str) -> Vec<ProsodyMarker> {
        ProsodyAnnotator.annotate(text, &self.inner.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessingMode;
    use std::path::PathBuf;

    #[test]
    fn test_normalizer_is_send_sync_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<Normalizer>();
    }

    #[test]
    fn test_clones_share_tables() {
        let normalizer = Normalizer::builtin().unwrap();
        let clone = normalizer.clone();
        assert!(std::ptr::eq(normalizer.tables(), clone.tables()));
    }

    #[test]
    fn test_length_limit_counts_chars() {
        let config = NormalizerConfig {
            max_text_length: 5,
            ..Default::default()
        };
        let normalizer = Normalizer::new(config).unwrap();
        let options = normalizer.default_options();

        // Five chars, ten bytes
        assert!(normalizer.normalize("ééééé", &options).is_ok());

        let err = normalizer.normalize("hello!", &options).unwrap_err();
        assert!(matches!(
            err,
            NormalizerError::InputTooLong { length: 6, max: 5 }
        ));
    }

    #[test]
    fn test_input_is_composed() {
        let normalizer = Normalizer::builtin().unwrap();
        let options = ProcessingOptions::for_mode(ProcessingMode::Basic);

        let result = normalizer.normalize("cafe\u{0301}", &options).unwrap();

        assert_eq!(result.processed_text, "caf\u{00E9}");
    }

    #[test]
    fn test_normalize_request() {
        let normalizer = Normalizer::builtin().unwrap();
        let request: NormalizeRequest =
            serde_json::from_str(r#"{"text": "50%", "mode": "basic"}"#).unwrap();

        let result = normalizer.normalize_request(&request).unwrap();

        assert_eq!(result.processed_text, "fifty percent");
        assert_eq!(result.mode, ProcessingMode::Basic);
    }

    #[test]
    fn test_missing_dictionary_is_configuration_error() {
        let config = NormalizerConfig {
            dictionary_file: Some(PathBuf::from("/nonexistent/dictionary.json")),
            ..Default::default()
        };
        let err = Normalizer::new(config).err().unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_annotate_is_read_only() {
        let normalizer = Normalizer::builtin().unwrap();
        let markers = normalizer.annotate("Are you sure?");
        assert_eq!(markers.len(), 1);
    }
}
