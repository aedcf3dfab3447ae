use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::options::ProcessingMode;

/// Category of the rule that produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Numeric,
    Currency,
    DateTime,
    Contraction,
    Abbreviation,
    Symbol,
    Homograph,
    Pronunciation,
}

/// One rewrite applied to the text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    /// Byte range in the original (NFC) text
    pub span: Range<usize>,
    pub original: String,
    pub replacement: String,
    pub rule_kind: RuleKind,
    pub processor_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Surprise,
    Fear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "emotion")]
pub enum MarkerKind {
    Question,
    Exclamation,
    Pause,
    Emphasis,
    Emotion(Emotion),
}

/// Prosodic hint attached to a position in the processed text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProsodyMarker {
    /// Byte offset into `processed_text`
    pub offset: usize,
    pub marker_kind: MarkerKind,
    /// 0.0 (barely) to 1.0 (strongly)
    pub strength: f32,
}

/// Outcome of one normalization request
#[derive(Debug, Clone, Serialize)]
pub struct NormalizationResult {
    /// Text handed to the synthesis engine
    pub processed_text: String,
    /// Rewrites in the order they were applied
    pub changes: Vec<Change>,
    pub prosody_markers: Vec<ProsodyMarker>,
    /// Wall-clock processing time in milliseconds
    pub duration_ms: f64,
    pub warnings: Vec<String>,
    /// Mode the request ran in
    pub mode: ProcessingMode,
    /// Names of the stages that ran, in order
    pub stages: Vec<&'static str>,
}

impl NormalizationResult {
    /// Result for input that needed no processing
    pub fn unchanged(text: String, mode: ProcessingMode) -> Self {
        Self {
            processed_text: text,
            changes: Vec::new(),
            prosody_markers: Vec::new(),
            duration_ms: 0.0,
            warnings: Vec::new(),
            mode,
            stages: Vec::new(),
        }
    }

    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn changes_of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(move |c| c.rule_kind == kind)
    }
}
