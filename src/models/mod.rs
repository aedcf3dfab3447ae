pub mod options;
pub mod requests;
pub mod result;

pub use options::{
    AbbreviationMode, ContractionMode, FeatureToggles, ProcessingMode, ProcessingOptions,
    ProcessingOptionsBuilder, Stage,
};
pub use requests::NormalizeRequest;
pub use result::{Change, Emotion, MarkerKind, NormalizationResult, ProsodyMarker, RuleKind};
