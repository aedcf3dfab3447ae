use serde::Deserialize;

use super::options::{
    AbbreviationMode, ContractionMode, FeatureToggles, ProcessingMode, ProcessingOptions,
};
use crate::error::Result;

/// Normalization request as received from the API layer
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
    #[serde(default)]
    pub mode: ProcessingMode,
    #[serde(default)]
    pub contraction_mode: Option<ContractionMode>,
    #[serde(default)]
    pub abbreviation_mode: Option<AbbreviationMode>,
    #[serde(default)]
    pub features: FeatureToggles,
}

impl NormalizeRequest {
    /// Validate the request's option fields into [`ProcessingOptions`]
    pub fn options(&self) -> Result<ProcessingOptions> {
        let mut builder = ProcessingOptions::builder()
            .mode(self.mode)
            .features(self.features);

        if let Some(mode) = self.contraction_mode {
            builder = builder.contraction_mode(mode);
        }
        if let Some(mode) = self.abbreviation_mode {
            builder = builder.abbreviation_mode(mode);
        }

        builder.build()
    }
}
