//! Prosody annotation
//!
//! Reads the final text and reports where the voice should rise, pause,
//! stress a word or carry an emotion. The text itself is never changed.

use lazy_static::lazy_static;
use regex::Regex;

use super::context::{is_url_or_path, words_before};
use crate::models::{MarkerKind, ProsodyMarker};
use crate::rules::emotion::INTENSIFIERS;
use crate::rules::RuleTables;

const BASE_STRENGTH: f32 = 0.5;
/// Added per repeated "?" or "!"
const REPEAT_STEP: f32 = 0.25;
const INTENSIFIER_BOOST: f32 = 0.3;
const EXCLAIMED_BOOST: f32 = 0.2;
const EMPHASIS_STRENGTH: f32 = 0.7;
const ELLIPSIS_PAUSE: f32 = 0.6;
const DASH_PAUSE: f32 = 0.4;
const SEMICOLON_PAUSE: f32 = 0.3;

lazy_static! {
    /// Runs of sentence-final punctuation
    /// Matches: ?, !!, ?!
    static ref TERMINAL_REGEX: Regex = Regex::new(r"[?!]+").unwrap();

    /// Pauses
    /// Matches: ..., …, " - ", " -- ", ;
    static ref PAUSE_REGEX: Regex = Regex::new(
        r"(?P<ellipsis>\.{3,}|\x{2026})|(?P<dash>\s-{1,2}\s)|(?P<semicolon>;)"
    ).unwrap();

    /// Shouted words
    static ref CAPS_REGEX: Regex = Regex::new(r"\b[A-Z]{3,}\b").unwrap();

    static ref WORD_REGEX: Regex = Regex::new(r"\b[A-Za-z]+\b").unwrap();
}

/// Read-only final stage
#[derive(Debug, Clone, Copy, Default)]
pub struct ProsodyAnnotator;

impl ProsodyAnnotator {
    /// Markers for `text`, ordered by offset
    pub fn annotate(&self, text: &str, tables: &RuleTables) -> Vec<ProsodyMarker> {
        let mut markers = Vec::new();

        for m in TERMINAL_REGEX.find_iter(text) {
            if is_url_or_path(text, &m.range()) {
                continue;
            }
            let run = m.as_str();
            let questions = run.matches('?').count();
            let exclamations = run.matches('!').count();
            if questions > 0 {
                markers.push(marker(m.start(), MarkerKind::Question, repeated(questions)));
            }
            if exclamations > 0 {
                markers.push(marker(m.start(), MarkerKind::Exclamation, repeated(exclamations)));
            }
        }

        for caps in PAUSE_REGEX.captures_iter(text) {
            let (m, strength) = if let Some(m) = caps.name("ellipsis") {
                (m, ELLIPSIS_PAUSE)
            } else if let Some(m) = caps.name("dash") {
                (m, DASH_PAUSE)
            } else if let Some(m) = caps.name("semicolon") {
                (m, SEMICOLON_PAUSE)
            } else {
                continue;
            };
            markers.push(marker(m.start(), MarkerKind::Pause, strength));
        }

        let shouting = is_shouting(text);
        for m in CAPS_REGEX.find_iter(text) {
            // Known acronyms are names, not stress
            if shouting || tables.abbreviations.get(m.as_str()).is_some() {
                continue;
            }
            markers.push(marker(m.start(), MarkerKind::Emphasis, EMPHASIS_STRENGTH));
        }

        for m in WORD_REGEX.find_iter(text) {
            let Some(emotion) = tables.emotions.get(&m.as_str().to_lowercase()) else {
                continue;
            };
            let mut strength = BASE_STRENGTH;
            let intensified = words_before(text, m.start(), 1)
                .first()
                .is_some_and(|w| INTENSIFIERS.contains(&w.to_lowercase().as_str()));
            if intensified {
                strength += INTENSIFIER_BOOST;
            }
            if sentence_end(text, m.end()) == Some('!') {
                strength += EXCLAIMED_BOOST;
            }
            markers.push(marker(m.start(), MarkerKind::Emotion(*emotion), strength));
        }

        markers.sort_by_key(|m| m.offset);
        tracing::trace!(count = markers.len(), "Prosody markers");
        markers
    }
}

fn marker(offset: usize, marker_kind: MarkerKind, strength: f32) -> ProsodyMarker {
    ProsodyMarker {
        offset,
        marker_kind,
        strength: strength.clamp(0.0, 1.0),
    }
}

fn repeated(count: usize) -> f32 {
    BASE_STRENGTH + REPEAT_STEP * count.saturating_sub(1) as f32
}

/// Punctuation that closes the sentence containing `pos`
fn sentence_end(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().find(|c| matches!(c, '.' | '!' | '?'))
}

/// Whether the whole text is written in capitals
fn is_shouting(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}
