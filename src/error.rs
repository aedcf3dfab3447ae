use thiserror::Error;

/// Errors surfaced to callers of the normalizer
///
/// Only configuration problems (at startup) and oversized input (before the
/// pipeline runs) ever reach a caller. Everything that goes wrong inside a
/// stage is turned into a warning on the result instead.
#[derive(Debug, Error)]
pub enum NormalizerError {
    // Startup errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid rule pattern for {rule}: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    // Request validation errors
    #[error("Input too long: {length} characters (maximum {max})")]
    InputTooLong { length: usize, max: usize },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    // I/O and serialization errors (dictionary files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NormalizerError {
    /// Compile a regex, tagging failures with the rule they belong to
    pub fn compile(rule: impl Into<String>, pattern: &str) -> Result<regex::Regex> {
        regex::Regex::new(pattern).map_err(|source| NormalizerError::InvalidPattern {
            rule: rule.into(),
            source,
        })
    }

    /// Whether this error is a startup-time configuration failure
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            NormalizerError::Configuration(_)
                | NormalizerError::InvalidPattern { .. }
                | NormalizerError::Io(_)
                | NormalizerError::Json(_)
        )
    }
}

/// Failure of a single pipeline stage
///
/// The orchestrator rolls the stage back and records the message as a warning.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("edit {start}..{end} overlaps a locked span")]
    LockedSpan { start: usize, end: usize },

    #[error("edit {start}..{end} is out of bounds or not on a char boundary")]
    InvalidRange { start: usize, end: usize },

    #[error("{0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
