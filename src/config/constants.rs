/// Maximum allowed text length for a normalization request (in characters)
///
/// This limit bounds worst-case processing time, since several stages are
/// linear in text length times rule count. Requests exceeding this limit are
/// rejected before any stage runs.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Number of tokens before a word inspected by context heuristics
pub const CONTEXT_WINDOW_BEFORE: usize = 3;

/// Number of tokens after a word inspected by context heuristics
pub const CONTEXT_WINDOW_AFTER: usize = 3;

/// Largest amount the numeric stage will spell out
///
/// Anything above is left as digits with a warning.
pub const MAX_SPOKEN_NUMBER: u64 = 999_999_999_999_999_999;

/// Environment variable prefix shared by all normalizer settings
pub const ENV_PREFIX: &str = "NORMALIZER_";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_text_length_reasonable() {
        assert!(MAX_TEXT_LENGTH > 0);
        assert!(MAX_TEXT_LENGTH <= 100_000); // Sanity check
    }

    #[test]
    fn test_context_windows_are_small() {
        assert!(CONTEXT_WINDOW_BEFORE >= 1 && CONTEXT_WINDOW_BEFORE <= 5);
        assert!(CONTEXT_WINDOW_AFTER >= 1 && CONTEXT_WINDOW_AFTER <= 5);
    }

    #[test]
    fn test_max_spoken_number_fits_u64() {
        assert!(MAX_SPOKEN_NUMBER < u64::MAX);
    }
}
