/// Contraction handling
///
/// Depending on the contraction mode:
/// - natural: leave every contraction as written
/// - expanded: "I'll" → "I will", "it's been" → "it has been"
/// - phonetic: "wasn't" → "wuznt", falling back to natural
/// - hybrid: expand only the forms the engine mispronounces
///
/// `'d` and pronoun `'s` are ambiguous. The word after them decides: a past
/// participle means "had"/"has", anything else "would"/"is". Adverbs in
/// between are skipped. "I'd read it tomorrow" still comes out as "had read",
/// since "read" is also a participle.
use lazy_static::lazy_static;
use regex::Regex;

use super::context::{match_case, words_after};
use super::pipeline::{Processor, StageContext};
use super::working_text::{Edit, WorkingText};
use crate::error::StageError;
use crate::models::{ContractionMode, RuleKind, Stage};
use crate::rules::ContractionTable;

lazy_static! {
    /// Words joined by an apostrophe
    /// Matches: don't, I'll, they’d, y'all
    static ref CONTRACTION_REGEX: Regex = Regex::new(
        r"\b[A-Za-z]+(?:['\x{2019}][A-Za-z]+)+\b"
    ).unwrap();
}

/// Words that keep an apostrophe but are not contractions
const NOT_CONTRACTIONS: &[&str] = &["o'clock"];

/// Contraction stage
pub struct ContractionProcessor;

impl Processor for ContractionProcessor {
    fn stage(&self) -> Stage {
        Stage::Contraction
    }

    fn process(
        &self,
        text: &mut WorkingText,
        ctx: &mut StageContext<'_>,
    ) -> Result<(), StageError> {
        let mode = ctx.options.contraction_mode();
        if mode == ContractionMode::Natural {
            return Ok(());
        }

        let table = &ctx.tables.contractions;
        let current = text.text();
        let edits = text.scan(&CONTRACTION_REGEX, |caps| {
            let m = caps.get(0)?;
            let spoken = rewrite_contraction(m.as_str(), mode, table, &current[m.end()..])?;
            Some(Edit::new(m.range(), spoken, RuleKind::Contraction))
        });
        text.apply(edits, self.name())?;
        Ok(())
    }
}

/// Spoken form of one contraction in the given mode, or `None` to keep it
fn rewrite_contraction(
    word: &str,
    mode: ContractionMode,
    table: &ContractionTable,
    following: &str,
) -> Option<String> {
    let key = word.to_lowercase().replace('\u{2019}', "'");
    if NOT_CONTRACTIONS.contains(&key.as_str()) {
        return None;
    }

    let spoken = match mode {
        ContractionMode::Natural => return None,
        ContractionMode::Phonetic => table.phonetic.get(key.as_str())?.to_string(),
        ContractionMode::Hybrid => {
            if !table.problematic.contains(key.as_str()) {
                return None;
            }
            expand(&key, table, following)?
        }
        ContractionMode::Expanded => expand(&key, table, following)?,
    };

    Some(match_case(word, &spoken))
}

/// Full expansion of a lowercase contraction
fn expand(key: &str, table: &ContractionTable, following: &str) -> Option<String> {
    if let Some(expansion) = table.expansions.get(key) {
        return Some(expansion.to_string());
    }

    let split = key.rfind('\'')?;
    let (base, suffix) = (&key[..split], &key[split + 1..]);
    let subject = if base == "i" { "I" } else { base };

    let verb = match suffix {
        "d" if table.pronouns.contains(base) => {
            match next_verb(table, following) {
                Some(next) if next == "better" || table.is_past_participle(&next) => "had",
                _ => "would",
            }
        }
        // "I's" only comes from a spelled plural acronym ("A P I's")
        "s" if base != "i" && table.pronouns.contains(base) => match next_verb(table, following) {
            Some(next) if table.is_past_participle(&next) => "has",
            _ => "is",
        },
        "ll" => "will",
        "ve" => "have",
        "re" => "are",
        _ => return None,
    };

    Some(format!("{} {}", subject, verb))
}

/// First word after the contraction that is not a skippable adverb
fn next_verb(table: &ContractionTable, following: &str) -> Option<String> {
    words_after(following, 0, 4)
        .into_iter()
        .map(str::to_lowercase)
        .find(|w| !table.skippable_adverbs.contains(w.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessingMode, ProcessingOptions};
    use crate::rules::RuleTables;

    fn run(input: &str, mode: ContractionMode) -> String {
        let tables = RuleTables::builtin().unwrap();
        let options = ProcessingOptions::builder()
            .mode(ProcessingMode::Standard)
            .contraction_mode(mode)
            .build()
            .unwrap();
        let mut ctx = StageContext::new(&options, &tables);
        let mut text = WorkingText::new(input);
        ContractionProcessor.process(&mut text, &mut ctx).unwrap();
        text.text().to_string()
    }

    #[test]
    fn test_hybrid_expands_problematic_only() {
        assert_eq!(run("I'll be there", ContractionMode::Hybrid), "I will be there");
        assert_eq!(run("don't worry", ContractionMode::Hybrid), "don't worry");
        assert_eq!(run("it's fine", ContractionMode::Hybrid), "it's fine");
        assert_eq!(run("We've won", ContractionMode::Hybrid), "We have won");
    }

    #[test]
    fn test_would_or_had() {
        let mode = ContractionMode::Hybrid;
        assert_eq!(run("They'd gone home", mode), "They had gone home");
        assert_eq!(run("you'd like it", mode), "you would like it");
        assert_eq!(run("I'd never gone there", mode), "I had never gone there");
        assert_eq!(run("I'd better go", mode), "I had better go");
        assert_eq!(run("I'd rather stay", mode), "I would rather stay");
        assert_eq!(run("she'd called twice", mode), "she had called twice");
        assert_eq!(run("we'd need help", mode), "we would need help");
    }

    #[test]
    fn test_expanded_mode() {
        let mode = ContractionMode::Expanded;
        assert_eq!(run("can't stop", mode), "cannot stop");
        assert_eq!(run("Don't go", mode), "Do not go");
        assert_eq!(run("DON'T GO", mode), "DO NOT GO");
        assert_eq!(run("let's go", mode), "let us go");
        assert_eq!(run("i'm here", mode), "I am here");
    }

    #[test]
    fn test_pronoun_s() {
        let mode = ContractionMode::Expanded;
        assert_eq!(run("it's been long", mode), "it has been long");
        assert_eq!(run("it's red", mode), "it is red");
        assert_eq!(run("He's already left", mode), "He has already left");
        assert_eq!(run("John's car", mode), "John's car");
        assert_eq!(run("the dog's bone", mode), "the dog's bone");
    }

    #[test]
    fn test_spelled_acronym_plural_untouched() {
        for mode in [ContractionMode::Expanded, ContractionMode::Hybrid] {
            assert_eq!(run("The A P I's are down", mode), "The A P I's are down");
        }
        assert_eq!(run("the C P U's", ContractionMode::Expanded), "the C P U's");
    }

    #[test]
    fn test_typographic_apostrophe() {
        assert_eq!(run("I\u{2019}ll call", ContractionMode::Hybrid), "I will call");
        assert_eq!(
            run("they\u{2019}re late", ContractionMode::Expanded),
            "they are late"
        );
    }

    #[test]
    fn test_oclock_untouched() {
        assert_eq!(run("five o'clock", ContractionMode::Expanded), "five o'clock");
    }

    #[test]
    fn test_phonetic_mode() {
        let mode = ContractionMode::Phonetic;
        assert_eq!(run("it wasn't me", mode), "it wuznt me");
        assert_eq!(run("Don't", mode), "Dohnt");
        assert_eq!(run("it's here", mode), "it's here");
    }

    #[test]
    fn test_natural_mode_changes_nothing() {
        let input = "I'll say they'd gone, won't I?";
        assert_eq!(run(input, ContractionMode::Natural), input);
    }
}
