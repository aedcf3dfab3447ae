//! Text normalization for speech synthesis
//!
//! Rewrites numbers, money, dates, contractions, abbreviations, symbols and
//! homographs into words a TTS engine reads naturally, and marks where the
//! voice should rise, pause or stress.
//!
//! ```no_run
//! use porua_normalizer::{Normalizer, ProcessingMode, ProcessingOptions};
//!
//! let normalizer = Normalizer::builtin()?;
//! let options = ProcessingOptions::for_mode(ProcessingMode::Standard);
//! let result = normalizer.normalize("It costs $1,234.56", &options)?;
//! assert_eq!(
//!     result.processed_text,
//!     "It costs one thousand two hundred thirty-four dollars and fifty-six cents"
//! );
//! # Ok::<(), porua_normalizer::NormalizerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod rules;
pub mod services;
pub mod text_processing;

pub use config::NormalizerConfig;
pub use error::{NormalizerError, Result, StageError};
pub use models::{
    AbbreviationMode, Change, ContractionMode, Emotion, FeatureToggles, MarkerKind,
    NormalizationResult, NormalizeRequest, ProcessingMode, ProcessingOptions, ProsodyMarker,
    RuleKind, Stage,
};
pub use rules::RuleTables;
pub use services::Normalizer;
pub use text_processing::normalization::normalize_simple;
