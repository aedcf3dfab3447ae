/// Pronunciation fixes and homograph resolution
///
/// Each word is checked in order against:
/// 1. Interjections ("mm-hmm" → "mhm") and drawn-out spellings ("Hmmm" → "Hm")
/// 2. The pronunciation dictionary ("quinoa" → "keen-wah")
/// 3. Homographs, resolved from the words around them ("had read" → "had red")
///
/// A homograph no context rule decides gets its most frequent reading and a
/// warning.
use lazy_static::lazy_static;
use regex::Regex;

use super::context::{is_url_or_path, match_case, window_text, words_after, words_before};
use super::pipeline::{Processor, StageContext};
use super::working_text::{Edit, WorkingText};
use crate::config::constants::{CONTEXT_WINDOW_AFTER, CONTEXT_WINDOW_BEFORE};
use crate::error::StageError;
use crate::models::{RuleKind, Stage};
use crate::rules::pronunciation::ELONGATIONS;
use crate::rules::{Homograph, RuleTables, Window};

lazy_static! {
    /// Words, hyphenated words and words with an apostrophe
    /// Matches: read, mm-hmm, don't
    static ref WORD_REGEX: Regex = Regex::new(
        r"\b[A-Za-z]+(?:[-'\x{2019}][A-Za-z]+)*\b"
    ).unwrap();

    /// Drawn-out interjections anchored to a whole word
    static ref ELONGATION_PATTERNS: Vec<(Regex, &'static str)> = ELONGATIONS
        .iter()
        .map(|(pattern, spelling)| (Regex::new(&format!("^(?:{})$", pattern)).unwrap(), *spelling))
        .collect();
}

/// Pronunciation/homograph stage
pub struct PronunciationProcessor;

impl Processor for PronunciationProcessor {
    fn stage(&self) -> Stage {
        Stage::Pronunciation
    }

    fn process(
        &self,
        text: &mut WorkingText,
        ctx: &mut StageContext<'_>,
    ) -> Result<(), StageError> {
        let tables = ctx.tables;
        let mut warnings = Vec::new();

        let current = text.text();
        let edits = text.scan(&WORD_REGEX, |caps| {
            let m = caps.get(0)?;
            let word = m.as_str();
            if word.contains(['\'', '\u{2019}']) || is_url_or_path(current, &m.range()) {
                return None;
            }

            let (spoken, kind) = if let Some(spelling) = fixed_spelling(word, tables) {
                (spelling, RuleKind::Pronunciation)
            } else {
                let homograph = tables.homographs.get(&word.to_lowercase())?;
                let variant = match choose_variant(homograph, current, m.start(), m.end()) {
                    Some(variant) => variant,
                    None => {
                        warnings.push(format!(
                            "ambiguous homograph '{}', using default reading '{}'",
                            word, homograph.default_variant
                        ));
                        homograph.default_variant.as_str()
                    }
                };
                tracing::trace!(word, variant, "Homograph resolved");
                (homograph.respelling(variant)?.to_string(), RuleKind::Homograph)
            };

            Some(Edit::new(m.range(), match_case(word, &spoken), kind))
        });
        text.apply(edits, self.name())?;

        for warning in warnings {
            ctx.warn(warning);
        }
        Ok(())
    }
}

/// Interjection or dictionary spelling for a whole word
fn fixed_spelling(word: &str, tables: &RuleTables) -> Option<String> {
    let lower = word.to_lowercase();
    if let Some(spelling) = tables.interjections.get(&lower) {
        return Some(spelling.clone());
    }
    if let Some((_, spelling)) = ELONGATION_PATTERNS.iter().find(|(re, _)| re.is_match(word)) {
        return Some(spelling.to_string());
    }
    if word.contains('-') {
        return None;
    }
    tables.pronunciations.get(&lower).cloned()
}

/// Variant picked by the first matching context rule
fn choose_variant<'h>(
    homograph: &'h Homograph,
    text: &str,
    start: usize,
    end: usize,
) -> Option<&'h str> {
    let before = window_text(&words_before(text, start, CONTEXT_WINDOW_BEFORE));
    let after = window_text(&words_after(text, end, CONTEXT_WINDOW_AFTER));

    homograph
        .rules
        .iter()
        .find(|rule| match rule.window {
            Window::Before => rule.pattern.is_match(&before),
            Window::After => rule.pattern.is_match(&after),
        })
        .map(|rule| rule.variant.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessingMode, ProcessingOptions};

    fn run_with_warnings(input: &str) -> (String, Vec<String>) {
        let tables = RuleTables::builtin().unwrap();
        let options = ProcessingOptions::for_mode(ProcessingMode::Enhanced);
        let mut ctx = StageContext::new(&options, &tables);
        let mut text = WorkingText::new(input);
        PronunciationProcessor.process(&mut text, &mut ctx).unwrap();
        (text.text().to_string(), ctx.warnings().to_vec())
    }

    fn run(input: &str) -> String {
        run_with_warnings(input).0
    }

    // ===== Interjection Tests =====

    #[test]
    fn test_interjections() {
        assert_eq!(run("Hmm, that's odd"), "Hm, that's odd");
        assert_eq!(run("hmmmm okay"), "hm okay");
        assert_eq!(run("mm-hmm, sure"), "mhm, sure");
        assert_eq!(run("Uh-huh."), "Uh huh.");
        assert_eq!(run("shhhh!"), "shh!");
        assert_eq!(run("tsk"), "tisk");
    }

    // ===== Dictionary Tests =====

    #[test]
    fn test_dictionary_overrides() {
        assert_eq!(run("a quinoa salad"), "a keen-wah salad");
        assert_eq!(run("Quinoa is tasty"), "Keen-wah is tasty");
        assert_eq!(run("clear the cache"), "clear the cash");
    }

    #[test]
    fn test_dictionary_skips_urls() {
        assert_eq!(run("see nginx.org/docs"), "see nginx.org/docs");
    }

    // ===== Homograph Tests =====

    #[test]
    fn test_read() {
        assert_eq!(run("I will read the book"), "I will reed the book");
        assert_eq!(run("I had already read it"), "I had already red it");
        assert_eq!(run("She read it yesterday"), "She red it yesterday");
    }

    #[test]
    fn test_lead_and_live() {
        assert_eq!(run("lead poisoning is serious"), "led poisoning is serious");
        assert_eq!(run("they lead the team"), "they leed the team");
        assert_eq!(run("we saw live music"), "we saw lyve music");
        assert_eq!(run("where do you live now"), "where do you liv now");
    }

    #[test]
    fn test_tear_close_minute() {
        assert_eq!(run("a tear rolled down"), "a teer rolled down");
        assert_eq!(run("don't tear it up"), "don't tair it up");
        assert_eq!(run("we are close to home"), "we are klohss to home");
        assert_eq!(run("please close the door"), "please kloze the door");
        assert_eq!(run("wait a minute"), "wait a minit");
        assert_eq!(run("minute details matter"), "mynoot details matter");
    }

    #[test]
    fn test_wound() {
        assert_eq!(run("He wound the clock"), "He wownd the clock");
        assert_eq!(run("she wound it up"), "she wownd it up");
        assert_eq!(run("the wound healed"), "the woond healed");
        assert_eq!(run("clean the wound the nurse found"), "clean the woond the nurse found");
    }

    #[test]
    fn test_sentence_case_kept() {
        assert_eq!(run("Read it to me"), "Reed it to me");
    }

    #[test]
    fn test_default_variant_warns() {
        let (text, warnings) = run_with_warnings("the bow");
        assert_eq!(text, "the bau");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("bow"));
    }

    #[test]
    fn test_contractions_untouched() {
        assert_eq!(run("don't"), "don't");
        assert_eq!(run("nothing to see here"), "nothing to see here");
    }
}
