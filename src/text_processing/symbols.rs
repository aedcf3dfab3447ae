/// Symbol and punctuation normalization
///
/// This stage handles:
/// - Smart quotes → ASCII quotes
/// - En/em dashes → ASCII hyphen
/// - Ellipsis → three dots
/// - Non-breaking spaces → regular spaces, runs of spaces collapsed
/// - Soft hyphens and zero-width characters → removed
/// - Slash shorthand: "w/" → "with", "and/or" → "and or"
/// - "#" → "number" or "hashtag", markdown asterisks stripped
/// - Symbols read as words: "&" → "and", "@" → "at"
///
/// Symbols stay as written inside arithmetic, URLs, paths, e-mail addresses
/// and code.
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

use super::context::{
    is_code_operator, is_code_token, is_math_operator, is_math_symbol, is_url_or_path,
    next_char, prev_char, token_around, words_after,
};
use super::numbers::is_number_word;
use super::pipeline::{Processor, StageContext};
use super::working_text::{Edit, WorkingText};
use crate::error::StageError;
use crate::models::{RuleKind, Stage};
use crate::rules::symbols::{
    symbol_word, typographic_replacement, DASHES, DOUBLE_QUOTES, ELLIPSIS, INVISIBLES,
    SINGLE_QUOTES, SLASH_WORDS, SPACES, SYMBOL_WORDS,
};

fn char_class(chars: impl IntoIterator<Item = char>) -> String {
    let body: String = chars
        .into_iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!("[{}]", body)
}

lazy_static! {
    /// Typographic characters with an ASCII rendering
    static ref TYPOGRAPHIC_REGEX: Regex = Regex::new(&char_class(
        DOUBLE_QUOTES
            .iter()
            .chain(SINGLE_QUOTES)
            .chain(DASHES)
            .chain(SPACES)
            .chain(INVISIBLES)
            .copied()
            .chain(std::iter::once(ELLIPSIS))
    )).unwrap();

    /// Runs of two or more spaces
    static ref SPACE_RUN_REGEX: Regex = Regex::new(r" {2,}").unwrap();

    /// Slash shorthand
    /// Matches: and/or, w/o, w/
    static ref SLASH_WORD_REGEX: Regex = Regex::new(r"(?i)\band/or\b|\bw/o\b|\bw/").unwrap();

    /// Hash sign before a word or number
    static ref HASH_REGEX: Regex = Regex::new(r"#").unwrap();

    /// Markdown emphasis
    static ref ASTERISK_REGEX: Regex = Regex::new(r"\*+").unwrap();

    /// Symbols read as words
    static ref SYMBOL_REGEX: Regex = Regex::new(&char_class(
        SYMBOL_WORDS.iter().map(|(c, _)| *c)
    )).unwrap();
}

/// Symbol/punctuation stage
pub struct SymbolProcessor;

impl Processor for SymbolProcessor {
    fn stage(&self) -> Stage {
        Stage::SymbolPunctuation
    }

    fn process(
        &self,
        text: &mut WorkingText,
        _ctx: &mut StageContext<'_>,
    ) -> Result<(), StageError> {
        let current = text.text();
        let edits = text.scan(&TYPOGRAPHIC_REGEX, |caps| {
            let m = caps.get(0)?;
            let ch = m.as_str().chars().next()?;
            let mut replacement = typographic_replacement(ch)?;
            // A converted space next to a real one would leave a double space
            let beside_space = prev_char(current, m.start()).is_some_and(char::is_whitespace)
                || next_char(current, m.end()).is_some_and(char::is_whitespace);
            if replacement == " " && beside_space {
                replacement = "";
            }
            Some(Edit::new(m.range(), replacement, RuleKind::Symbol))
        });
        text.apply(edits, self.name())?;

        // Before space runs: a deleted asterisk takes its spaces along
        let current = text.text();
        let edits = text.scan(&ASTERISK_REGEX, |caps| {
            let m = caps.get(0)?;
            let keep = is_math_operator(current, &m.range())
                || is_code_operator(current, &m.range())
                || is_url_or_path(current, &m.range());
            if keep {
                return None;
            }
            let range = Some(stray_range(current, m.range()))
                .filter(|range| !text.is_locked(range))
                .unwrap_or_else(|| m.range());
            Some(Edit::new(range, "", RuleKind::Symbol))
        });
        text.apply(edits, self.name())?;

        let edits = text.scan(&SPACE_RUN_REGEX, |caps| {
            let m = caps.get(0)?;
            Some(Edit::new(m.range(), " ", RuleKind::Symbol))
        });
        text.apply(edits, self.name())?;

        let current = text.text();
        let edits = text.scan(&SLASH_WORD_REGEX, |caps| {
            let m = caps.get(0)?;
            if is_url_or_path(current, &m.range()) {
                return None;
            }
            let lower = m.as_str().to_lowercase();
            let (_, word) = SLASH_WORDS.iter().find(|(short, _)| *short == lower)?;
            Some(Edit::new(m.range(), padded(current, &m.range(), word), RuleKind::Symbol))
        });
        text.apply(edits, self.name())?;

        let current = text.text();
        let edits = text.scan(&HASH_REGEX, |caps| rewrite_hash(current, caps.get(0)?.range()));
        text.apply(edits, self.name())?;

        let current = text.text();
        let edits = text.scan(&SYMBOL_REGEX, |caps| rewrite_symbol(current, caps.get(0)?.range()));
        text.apply(edits, self.name())?;

        Ok(())
    }
}

/// `word` with a space against any letter or digit it touches
fn padded(text: &str, range: &Range<usize>, word: &str) -> String {
    let touches = |c: Option<char>| c.is_some_and(char::is_alphanumeric);
    let mut out = String::with_capacity(word.len() + 2);
    if touches(prev_char(text, range.start)) {
        out.push(' ');
    }
    out.push_str(word);
    if touches(next_char(text, range.end)) {
        out.push(' ');
    }
    out
}

/// Range to delete for markup at `range`
///
/// A free-standing run ("a * b", "* item", "done *") takes the spaces on one
/// side along with it.
fn stray_range(text: &str, range: Range<usize>) -> Range<usize> {
    let open_before = prev_char(text, range.start).map_or(true, char::is_whitespace);
    if !open_before {
        return range;
    }
    let after = &text[range.end..];
    let trailing = after.len() - after.trim_start_matches(' ').len();
    if trailing > 0 {
        return range.start..range.end + trailing;
    }
    if after.is_empty() {
        let before = &text[..range.start];
        return before.trim_end_matches(' ').len()..range.end;
    }
    range
}

/// "#1" → "number 1", "#rustlang" → "hashtag rustlang"
fn rewrite_hash(text: &str, range: Range<usize>) -> Option<Edit> {
    // "C#", "F#"
    if prev_char(text, range.start).is_some_and(char::is_alphanumeric) {
        return None;
    }
    if !next_char(text, range.end).is_some_and(char::is_alphanumeric) {
        return None;
    }
    if is_url_or_path(text, &range) || is_code_token(text, &range) {
        return None;
    }

    let next = words_after(text, range.end, 1);
    let word = next.first()?;
    let reading = if word.chars().all(|c| c.is_ascii_digit()) || is_number_word(word) {
        "number "
    } else {
        "hashtag "
    };
    Some(Edit::new(range, reading, RuleKind::Symbol))
}

/// Whether `range` sits inside an HTML-like tag ("<div>")
fn is_markup(text: &str, range: &Range<usize>) -> bool {
    let token = &text[token_around(text, range)];
    token.contains('<') && token.contains('>')
}

fn rewrite_symbol(text: &str, range: Range<usize>) -> Option<Edit> {
    let symbol = text[range.clone()].chars().next()?;
    let word = symbol_word(symbol)?;

    if is_math_symbol(symbol) && is_math_operator(text, &range) {
        return None;
    }
    if is_url_or_path(text, &range) || is_code_token(text, &range) || is_code_operator(text, &range)
    {
        return None;
    }
    if matches!(symbol, '<' | '>') && is_markup(text, &range) {
        return None;
    }

    Some(Edit::new(range.clone(), padded(text, &range, word), RuleKind::Symbol))
}
