/// Abbreviation and acronym expansion
///
/// Each known token is read according to its class and the abbreviation mode:
/// - Titles and plain abbreviations always expand: "Dr." → "Doctor", "etc." → "et cetera"
/// - Letter acronyms are spelled: "ASAP" → "A S A P" (or expanded in expand mode)
/// - Word acronyms stay words in hybrid mode: "NASA"
/// - Units are read only after a number: "five km" → "five kilometers"
/// - Contextual forms look at their neighbours: "St. Louis" vs "Main St."
///
/// Unknown all-caps tokens pass through unless they look like a stock ticker.
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

use super::context::{is_url_or_path, prev_char, starts_new_sentence, words_after, words_before};
use super::numbers::is_number_word;
use super::pipeline::{Processor, StageContext};
use super::working_text::{Edit, WorkingText};
use crate::error::StageError;
use crate::models::{AbbreviationMode, RuleKind, Stage};
use crate::rules::{AbbreviationClass, AbbreviationEntry, AbbreviationTable};

lazy_static! {
    /// Candidate tokens
    /// Matches: U.S., e.g., Dr., etc., ASAP, AT&T, km/h, APIs
    static ref TOKEN_REGEX: Regex = Regex::new(
        r"(?:\b[A-Za-z]\.){2,}|\b[A-Za-z]+(?:[&/][A-Za-z]+)*\b\.?"
    ).unwrap();
}

/// Acronyms that are also everyday words when a sentence is shouted
const COMMON_WORD_ACRONYMS: &[&str] = &["IT", "US", "ID", "OS", "PIN", "SIM", "UN", "PC", "AI"];

/// Words near an all-caps token that mark it as a stock ticker
const TICKER_CUES: &[&str] = &[
    "stock", "stocks", "share", "shares", "ticker", "traded", "trading", "nasdaq", "nyse",
    "symbol",
];

/// Abbreviation/acronym stage
pub struct AbbreviationProcessor;

impl Processor for AbbreviationProcessor {
    fn stage(&self) -> Stage {
        Stage::Abbreviation
    }

    fn process(
        &self,
        text: &mut WorkingText,
        ctx: &mut StageContext<'_>,
    ) -> Result<(), StageError> {
        let mode = ctx.options.abbreviation_mode();
        let table = &ctx.tables.abbreviations;
        let current = text.text();

        let edits = text.scan(&TOKEN_REGEX, |caps| {
            let m = caps.get(0)?;
            rewrite_token(current, m.range(), table, mode)
        });
        text.apply(edits, self.name())?;
        Ok(())
    }
}

/// A table entry found for a token
struct Lookup<'t> {
    entry: &'t AbbreviationEntry,
    /// Bytes of the token the entry covers (the trailing period may be left out)
    range: Range<usize>,
    plural: bool,
}

fn lookup<'t>(table: &'t AbbreviationTable, text: &str, range: Range<usize>) -> Option<Lookup<'t>> {
    let token = &text[range.clone()];
    if let Some(entry) = table.get(token) {
        return Some(Lookup {
            entry,
            range,
            plural: false,
        });
    }

    let bare_range = match token.strip_suffix('.') {
        Some(bare) => range.start..range.start + bare.len(),
        None => range,
    };
    let bare = &text[bare_range.clone()];
    if let Some(entry) = table.get(bare) {
        return Some(Lookup {
            entry,
            range: bare_range,
            plural: false,
        });
    }

    // Plural acronyms: "APIs"
    let singular = bare.strip_suffix('s')?;
    if singular.len() < 2 || !singular.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let entry = table.get(singular)?;
    if !matches!(entry.class, AbbreviationClass::SpellOut | AbbreviationClass::Word) {
        return None;
    }
    Some(Lookup {
        entry,
        range: bare_range,
        plural: true,
    })
}

fn rewrite_token(
    text: &str,
    range: Range<usize>,
    table: &AbbreviationTable,
    mode: AbbreviationMode,
) -> Option<Edit> {
    let Some(found) = lookup(table, text, range.clone()) else {
        return ticker(text, range);
    };
    if is_url_or_path(text, &found.range) {
        return None;
    }

    let token = &text[found.range.clone()];
    let entry = found.entry;
    let mut precedes_name = false;

    let mut spoken = match entry.class {
        AbbreviationClass::Title => {
            precedes_name = true;
            entry.expansion.clone()?
        }
        AbbreviationClass::Expand => entry.expansion.clone()?,
        AbbreviationClass::SpellOut => {
            if is_shouted(text, &found.range) && COMMON_WORD_ACRONYMS.contains(&token) {
                return None;
            }
            acronym_reading(token, entry, mode, found.plural, true)?
        }
        AbbreviationClass::Word => acronym_reading(token, entry, mode, found.plural, false)?,
        AbbreviationClass::Unit => unit_reading(text, &found.range, entry)?,
        AbbreviationClass::Contextual => {
            let (reading, before_name) = contextual_reading(text, &found.range, entry)?;
            precedes_name = before_name;
            reading
        }
    };

    // A period that was part of the abbreviation also ended the sentence
    if token.ends_with('.') && !precedes_name && starts_new_sentence(text, found.range.end) {
        spoken.push('.');
    }

    Some(Edit::new(found.range, spoken, RuleKind::Abbreviation))
}

/// Reading of a letter or word acronym in the given mode
fn acronym_reading(
    token: &str,
    entry: &AbbreviationEntry,
    mode: AbbreviationMode,
    plural: bool,
    spelled_by_default: bool,
) -> Option<String> {
    let singular = if plural { &token[..token.len() - 1] } else { token };

    let expansion = entry.expansion.as_deref().filter(|_| mode == AbbreviationMode::Expand);
    if let Some(expansion) = expansion {
        return Some(if plural {
            format!("{}s", expansion)
        } else {
            expansion.to_string()
        });
    }

    let spell = match mode {
        AbbreviationMode::SpellOut => true,
        AbbreviationMode::Expand | AbbreviationMode::Hybrid => spelled_by_default,
    };
    if !spell {
        return None;
    }

    let spelled = spell_out(singular);
    Some(if plural { format!("{}'s", spelled) } else { spelled })
}

/// Letters separated by spaces; "&" reads as "and"
fn spell_out(token: &str) -> String {
    token
        .chars()
        .filter_map(|c| match c {
            '&' => Some("and".to_string()),
            c if c.is_alphanumeric() => Some(c.to_uppercase().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn follows_number(text: &str, range: &Range<usize>) -> Option<bool> {
    let previous = words_before(text, range.start, 1);
    let word = previous.first()?;
    if word.chars().all(|c| c.is_ascii_digit()) || is_number_word(word) {
        Some(word.eq_ignore_ascii_case("one") || *word == "1")
    } else {
        None
    }
}

/// Unit name after a number, singular only after "one"
fn unit_reading(text: &str, range: &Range<usize>, entry: &AbbreviationEntry) -> Option<String> {
    let singular = follows_number(text, range)?;
    if singular {
        entry.expansion.clone()
    } else {
        entry.alternate.clone().or_else(|| entry.expansion.clone())
    }
}

fn starts_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Reading of a context-dependent abbreviation, and whether it precedes a name
///
/// After a capitalized word or a house number, with no name following, the
/// after-name reading applies ("Main St." → "Street"). Entries without one are
/// only expanded before a number ("No. 5").
fn contextual_reading(
    text: &str,
    range: &Range<usize>,
    entry: &AbbreviationEntry,
) -> Option<(String, bool)> {
    let next = words_after(text, range.end, 1);
    let next = next.first();

    let Some(after_name) = &entry.alternate else {
        let before_number =
            next.is_some_and(|w| w.chars().all(|c| c.is_ascii_digit()) || is_number_word(w));
        if !before_number {
            return None;
        }
        return Some((entry.expansion.clone()?, true));
    };

    let previous = words_before(text, range.start, 1);
    let after_a_name = previous
        .first()
        .is_some_and(|w| starts_capitalized(w) || w.chars().all(|c| c.is_ascii_digit()));
    let before_a_name = next.is_some_and(|w| starts_capitalized(w));

    if after_a_name && !before_a_name {
        Some((after_name.clone(), false))
    } else {
        Some((entry.expansion.clone()?, true))
    }
}

fn is_all_caps_word(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().all(|c| c.is_uppercase())
}

/// Whether a neighbouring word is also in capitals ("I LOVE IT")
fn is_shouted(text: &str, range: &Range<usize>) -> bool {
    let before = words_before(text, range.start, 1);
    let after = words_after(text, range.end, 1);
    before.iter().chain(after.iter()).any(|w| is_all_caps_word(w))
}

/// Spell an unknown all-caps token that reads as a stock ticker
///
/// "$TSLA", or a capitalized token near words like "shares" or "stock".
fn ticker(text: &str, range: Range<usize>) -> Option<Edit> {
    let token = &text[range.clone()];
    let letters = token.chars().count();
    if !(1..=5).contains(&letters) || !token.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }

    if prev_char(text, range.start) == Some('$') {
        return Some(Edit::new(
            range.start - 1..range.end,
            spell_out(token),
            RuleKind::Abbreviation,
        ));
    }

    if letters < 2 || is_shouted(text, &range) {
        return None;
    }
    let mut window = words_before(text, range.start, 3);
    window.extend(words_after(text, range.end, 3));
    let cued = window
        .iter()
        .any(|w| TICKER_CUES.contains(&w.to_lowercase().as_str()));
    cued.then(|| Edit::new(range, spell_out(token), RuleKind::Abbreviation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessingMode, ProcessingOptions};
    use crate::rules::RuleTables;

    fn run(input: &str, mode: AbbreviationMode) -> String {
        let tables = RuleTables::builtin().unwrap();
        let options = ProcessingOptions::builder()
            .mode(ProcessingMode::Standard)
            .abbreviation_mode(mode)
            .build()
            .unwrap();
        let mut ctx = StageContext::new(&options, &tables);
        let mut text = WorkingText::new(input);
        AbbreviationProcessor.process(&mut text, &mut ctx).unwrap();
        text.text().to_string()
    }

    fn hybrid(input: &str) -> String {
        run(input, AbbreviationMode::Hybrid)
    }

    #[test]
    fn test_spell_out_mode() {
        let mode = AbbreviationMode::SpellOut;
        assert_eq!(run("ASAP", mode), "A S A P");
        assert_eq!(run("NASA", mode), "N A S A");
        assert_eq!(run("call AT&T now", mode), "call A T and T now");
    }

    #[test]
    fn test_expand_mode() {
        let mode = AbbreviationMode::Expand;
        assert_eq!(run("ASAP", mode), "as soon as possible");
        assert_eq!(run("a URL", mode), "a U R L");
        assert_eq!(run("two CPUs", mode), "two central processing units");
    }

    #[test]
    fn test_hybrid_mode() {
        assert_eq!(hybrid("ASAP"), "A S A P");
        assert_eq!(hybrid("NASA launched"), "NASA launched");
        assert_eq!(hybrid("the FBI agent"), "the F B I agent");
    }

    #[test]
    fn test_titles_and_expansions() {
        assert_eq!(hybrid("Mr. Jones"), "Mister Jones");
        assert_eq!(hybrid("Prof. Lee spoke"), "Professor Lee spoke");
        assert_eq!(hybrid("apples vs. pears"), "apples versus pears");
        assert_eq!(hybrid("apples, pears, etc."), "apples, pears, et cetera.");
        assert_eq!(hybrid("apples etc. and pears"), "apples et cetera and pears");
    }

    #[test]
    fn test_units_after_numbers() {
        assert_eq!(hybrid("five km"), "five kilometers");
        assert_eq!(hybrid("one km"), "one kilometer");
        assert_eq!(hybrid("3 GB left"), "3 gigabytes left");
        assert_eq!(hybrid("the km marker"), "the km marker");
    }

    #[test]
    fn test_contextual_abbreviations() {
        assert_eq!(hybrid("St. Louis"), "Saint Louis");
        assert_eq!(hybrid("Main St. is busy"), "Main Street is busy");
        assert_eq!(hybrid("Call Dr. Smith"), "Call Doctor Smith");
        assert_eq!(hybrid("We live on Oak Dr."), "We live on Oak Drive.");
        assert_eq!(hybrid("No. five"), "number five");
        assert_eq!(hybrid("No. I won't"), "No. I won't");
    }

    #[test]
    fn test_plural_acronyms() {
        assert_eq!(hybrid("two APIs"), "two A P I's");
    }

    #[test]
    fn test_ticker_heuristic() {
        assert_eq!(hybrid("$TSLA rose"), "T S L A rose");
        assert_eq!(hybrid("shares of XYZQ fell"), "shares of X Y Z Q fell");
        assert_eq!(hybrid("the ZORG said"), "the ZORG said");
    }

    #[test]
    fn test_common_words_in_shouting() {
        assert_eq!(hybrid("I LOVE IT"), "I LOVE IT");
        assert_eq!(hybrid("the IT team"), "the I T team");
        assert_eq!(hybrid("the US economy"), "the U S economy");
        assert_eq!(hybrid("help us"), "help us");
    }

    #[test]
    fn test_sentence_period_kept() {
        assert_eq!(hybrid("I work in IT."), "I work in I T.");
        assert_eq!(hybrid("It is on Main St."), "It is on Main Street.");
    }

    #[test]
    fn test_urls_untouched() {
        assert_eq!(hybrid("see https://example.com/API/docs"), "see https://example.com/API/docs");
    }
}
