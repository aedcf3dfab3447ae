use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NormalizerError, Result};

/// Pipeline stages, in the only order they ever run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NumericCurrency,
    DateTime,
    Contraction,
    Abbreviation,
    SymbolPunctuation,
    Pronunciation,
    Prosody,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::NumericCurrency,
        Stage::DateTime,
        Stage::Contraction,
        Stage::Abbreviation,
        Stage::SymbolPunctuation,
        Stage::Pronunciation,
        Stage::Prosody,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::NumericCurrency => "numeric_currency",
            Stage::DateTime => "datetime",
            Stage::Contraction => "contraction",
            Stage::Abbreviation => "abbreviation",
            Stage::SymbolPunctuation => "symbol_punctuation",
            Stage::Pronunciation => "pronunciation",
            Stage::Prosody => "prosody",
        }
    }

    /// Whether the stage rewrites text (prosody only annotates)
    pub fn rewrites_text(self) -> bool {
        self != Stage::Prosody
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Processing depth selected by the caller
///
/// Each mode is a superset of the one before it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    Basic,
    Standard,
    #[default]
    Enhanced,
    Premium,
}

impl ProcessingMode {
    /// Whether a stage runs in this mode when no toggle overrides it
    pub fn includes(self, stage: Stage) -> bool {
        match stage {
            Stage::NumericCurrency | Stage::SymbolPunctuation => true,
            Stage::DateTime | Stage::Contraction | Stage::Abbreviation => {
                self >= ProcessingMode::Standard
            }
            Stage::Pronunciation => self >= ProcessingMode::Enhanced,
            Stage::Prosody => self >= ProcessingMode::Premium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProcessingMode::Basic => "basic",
            ProcessingMode::Standard => "standard",
            ProcessingMode::Enhanced => "enhanced",
            ProcessingMode::Premium => "premium",
        }
    }
}

impl FromStr for ProcessingMode {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(ProcessingMode::Basic),
            "standard" => Ok(ProcessingMode::Standard),
            "enhanced" => Ok(ProcessingMode::Enhanced),
            "premium" => Ok(ProcessingMode::Premium),
            other => Err(NormalizerError::InvalidOptions(format!(
                "unknown processing mode '{}'",
                other
            ))),
        }
    }
}

/// How contractions are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractionMode {
    /// Leave every contraction as written
    Natural,
    /// Replace with a phonetic spelling where one is known
    Phonetic,
    /// Expand every contraction
    Expanded,
    /// Expand only contractions known to be mispronounced
    #[default]
    Hybrid,
}

impl FromStr for ContractionMode {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "natural" => Ok(ContractionMode::Natural),
            "phonetic" => Ok(ContractionMode::Phonetic),
            "expanded" | "expand" => Ok(ContractionMode::Expanded),
            "hybrid" => Ok(ContractionMode::Hybrid),
            other => Err(NormalizerError::InvalidOptions(format!(
                "unknown contraction mode '{}'",
                other
            ))),
        }
    }
}

/// How abbreviations and acronyms are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbbreviationMode {
    /// Spell every letter acronym ("ASAP" → "A S A P")
    SpellOut,
    /// Use the written-out expansion where one is known
    Expand,
    /// Spell unpronounceable acronyms, expand titles, keep word-like acronyms
    #[default]
    Hybrid,
}

impl FromStr for AbbreviationMode {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "spell_out" | "spellout" | "spell" => Ok(AbbreviationMode::SpellOut),
            "expand" | "expanded" => Ok(AbbreviationMode::Expand),
            "hybrid" => Ok(AbbreviationMode::Hybrid),
            other => Err(NormalizerError::InvalidOptions(format!(
                "unknown abbreviation mode '{}'",
                other
            ))),
        }
    }
}

/// Per-feature overrides; `None` follows the processing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homographs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prosody: Option<bool>,
}

impl FeatureToggles {
    pub fn for_stage(&self, stage: Stage) -> Option<bool> {
        match stage {
            Stage::NumericCurrency => self.currency,
            Stage::DateTime => self.datetime,
            Stage::Contraction => self.contractions,
            Stage::Abbreviation => self.abbreviations,
            Stage::SymbolPunctuation => self.symbols,
            Stage::Pronunciation => self.homographs,
            Stage::Prosody => self.prosody,
        }
    }

    fn set(&mut self, stage: Stage, enabled: bool) {
        let slot = match stage {
            Stage::NumericCurrency => &mut self.currency,
            Stage::DateTime => &mut self.datetime,
            Stage::Contraction => &mut self.contractions,
            Stage::Abbreviation => &mut self.abbreviations,
            Stage::SymbolPunctuation => &mut self.symbols,
            Stage::Pronunciation => &mut self.homographs,
            Stage::Prosody => &mut self.prosody,
        };
        *slot = Some(enabled);
    }
}

/// Options for a single normalization request
///
/// Built once per request through [`ProcessingOptionsBuilder`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProcessingOptions {
    mode: ProcessingMode,
    contraction_mode: ContractionMode,
    abbreviation_mode: AbbreviationMode,
    features: FeatureToggles,
}

impl ProcessingOptions {
    pub fn builder() -> ProcessingOptionsBuilder {
        ProcessingOptionsBuilder::default()
    }

    /// Options with default sub-modes for the given processing mode
    pub fn for_mode(mode: ProcessingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    pub fn contraction_mode(&self) -> ContractionMode {
        self.contraction_mode
    }

    pub fn abbreviation_mode(&self) -> AbbreviationMode {
        self.abbreviation_mode
    }

    pub fn features(&self) -> &FeatureToggles {
        &self.features
    }

    pub fn is_stage_enabled(&self, stage: Stage) -> bool {
        self.features
            .for_stage(stage)
            .unwrap_or_else(|| self.mode.includes(stage))
    }

    /// Enabled stages in pipeline order
    pub fn active_stages(&self) -> Vec<Stage> {
        Stage::ALL
            .iter()
            .copied()
            .filter(|stage| self.is_stage_enabled(*stage))
            .collect()
    }
}

/// Validating builder for [`ProcessingOptions`]
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptionsBuilder {
    mode: ProcessingMode,
    contraction_mode: Option<ContractionMode>,
    abbreviation_mode: Option<AbbreviationMode>,
    features: FeatureToggles,
}

impl ProcessingOptionsBuilder {
    pub fn mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn contraction_mode(mut self, mode: ContractionMode) -> Self {
        self.contraction_mode = Some(mode);
        self
    }

    pub fn abbreviation_mode(mut self, mode: AbbreviationMode) -> Self {
        self.abbreviation_mode = Some(mode);
        self
    }

    pub fn toggle(mut self, stage: Stage, enabled: bool) -> Self {
        self.features.set(stage, enabled);
        self
    }

    pub fn features(mut self, features: FeatureToggles) -> Self {
        self.features = features;
        self
    }

    pub fn build(self) -> Result<ProcessingOptions> {
        if self.features.contractions == Some(false) {
            if let Some(mode) = self.contraction_mode {
                if mode != ContractionMode::Natural {
                    return Err(NormalizerError::InvalidOptions(format!(
                        "contraction_mode '{:?}' requires contractions to be enabled",
                        mode
                    )));
                }
            }
        }

        if self.features.abbreviations == Some(false) && self.abbreviation_mode.is_some() {
            return Err(NormalizerError::InvalidOptions(
                "abbreviation_mode requires abbreviations to be enabled".to_string(),
            ));
        }

        Ok(ProcessingOptions {
            mode: self.mode,
            contraction_mode: self.contraction_mode.unwrap_or_default(),
            abbreviation_mode: self.abbreviation_mode.unwrap_or_default(),
            features: self.features,
        })
    }
}
