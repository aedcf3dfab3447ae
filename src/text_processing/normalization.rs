/// Convenience entry points for callers without their own [`Normalizer`]
///
/// `normalize_simple` runs the default pipeline over the built-in tables and
/// returns only the text. It never fails: if the text can't be processed the
/// input comes back unchanged.
use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::services::Normalizer;

lazy_static! {
    static ref DEFAULT_NORMALIZER: Result<Normalizer> = Normalizer::builtin();
}

/// Canonical composition (NFC), applied before any stage sees the text
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Normalize text with default settings, keeping only the output text
pub fn normalize_simple(text: &str) -> String {
    let normalizer = match DEFAULT_NORMALIZER.as_ref() {
        Ok(normalizer) => normalizer,
        Err(e) => {
            tracing::warn!("Default normalizer unavailable: {}", e);
            return text.to_string();
        }
    };

    match normalizer.normalize(text, &normalizer.default_options()) {
        Ok(result) => result.processed_text,
        Err(e) => {
            tracing::warn!("Normalization skipped: {}", e);
            text.to_string()
        }
    }
}
