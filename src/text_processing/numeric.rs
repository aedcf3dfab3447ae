/// Numeric and currency normalization
///
/// Rewrites written amounts to their spoken form:
/// - Currency with scale: "$10.3 billion" → "ten point three billion dollars"
/// - Currency: "$1,234.56" → "one thousand two hundred thirty-four dollars and fifty-six cents"
/// - Approximate and negative amounts: "~$500", "-$20"
/// - Amount with code: "100 EUR" → "one hundred euros"
/// - Percentages: "50%" → "fifty percent"
/// - Plain numbers, ordinals, years and decades
///
/// Currency patterns run most specific first; each pass locks its output so
/// a more general pattern never re-reads it.
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::ops::Range;

use super::context::{is_math_operand, next_char, prev_char, words_after, words_before};
use super::currency::{format_cents_for_speech, format_currency_for_speech, format_scaled_for_speech};
use super::numbers::{cardinal, decade, digits, ordinal, parse_grouped, year};
use super::pipeline::{Processor, StageContext};
use super::working_text::{Edit, WorkingText};
use crate::config::constants::MAX_SPOKEN_NUMBER;
use crate::error::StageError;
use crate::models::{RuleKind, Stage};
use crate::rules::calendar::{month_number, YEAR_CUE_WORDS};
use crate::rules::currency::{by_code, by_symbol, scale_word};
use crate::rules::{AbbreviationClass, RuleTables};

lazy_static! {
    /// Currency with scale words or suffixes
    /// Matches: $10.3 billion, $5B, ~$2.5M, -€3bn
    static ref CURRENCY_SCALE_REGEX: Regex = Regex::new(
        r"(?P<approx>[~≈]\s?)?(?P<neg>-)?(?P<sym>[$€£¥₹₩₽])(?P<int>\d{1,3}(?:,\d{3})+|\d+)(?:\.(?P<frac>\d+))?\s?(?P<scale>(?i:thousand|million|billion|trillion|bn|mm|k|m|b|t))\b"
    ).unwrap();

    /// Large currency amounts with thousands separators
    /// Matches: $1,234.56, £12,000
    static ref CURRENCY_GROUPED_REGEX: Regex = Regex::new(
        r"(?P<approx>[~≈]\s?)?(?P<neg>-)?(?P<sym>[$€£¥₹₩₽])(?P<int>\d{1,3}(?:,\d{3})+)(?:\.(?P<frac>\d+))?\b"
    ).unwrap();

    /// Approximate amounts
    /// Matches: ~$500, ≈ €20
    static ref CURRENCY_APPROX_REGEX: Regex = Regex::new(
        r"(?P<approx>[~≈]\s?)(?P<neg>-)?(?P<sym>[$€£¥₹₩₽])(?P<int>\d+)(?:\.(?P<frac>\d+))?\b"
    ).unwrap();

    /// Negative amounts
    /// Matches: -$20, $-20
    static ref CURRENCY_NEGATIVE_REGEX: Regex = Regex::new(
        r"(?:(?P<neg>-)(?P<sym>[$€£¥₹₩₽])|(?P<sym2>[$€£¥₹₩₽])(?P<neg2>-))(?P<int>\d+)(?:\.(?P<frac>\d+))?\b"
    ).unwrap();

    /// Simple currency
    /// Matches: $23.45, ¥500
    static ref CURRENCY_SIMPLE_REGEX: Regex = Regex::new(
        r"(?P<sym>[$€£¥₹₩₽])(?P<int>\d+)(?:\.(?P<frac>\d+))?\b"
    ).unwrap();

    /// Amount followed by an ISO code
    /// Matches: 100 USD, 5.50 EUR
    static ref CURRENCY_CODE_REGEX: Regex = Regex::new(
        r"\b(?P<int>\d{1,3}(?:,\d{3})+|\d+)(?:\.(?P<frac>\d+))?\s?(?P<code>USD|EUR|GBP|JPY|INR|KRW|RUB|CAD|AUD|CHF|CNY)\b"
    ).unwrap();

    /// Amount in cents
    /// Matches: 50¢
    static ref CENTS_REGEX: Regex = Regex::new(
        r"\b(?P<int>\d+)\s?¢"
    ).unwrap();

    /// Percentage patterns
    /// Matches: 50%, 33.5%, 1,000%
    static ref PERCENTAGE_REGEX: Regex = Regex::new(
        r"\b(?P<int>\d{1,3}(?:,\d{3})+|\d+)(?:\.(?P<frac>\d+))?\s?%"
    ).unwrap();

    /// Plain numbers with an optional ordinal, plural or unit suffix
    /// Matches: 42, 1,000, 3.14, 21st, 1990s, 5km
    static ref NUMBER_REGEX: Regex = Regex::new(
        r"\b(?P<int>\d{1,3}(?:,\d{3})+|\d+)(?:\.(?P<frac>\d+))?(?P<suffix>[A-Za-z]+)?\b"
    ).unwrap();

    /// Meridiem right after a number ("3 PM", "9 a.m.")
    static ref MERIDIEM_AFTER_REGEX: Regex = Regex::new(
        r"^\s?(?i:[ap]\.?m\b\.?)"
    ).unwrap();
}

/// Currency patterns in priority order
#[derive(Debug, Clone, Copy)]
enum CurrencyPattern {
    Scale,
    Grouped,
    Approximate,
    Negative,
    Simple,
}

const CURRENCY_PASSES: [CurrencyPattern; 5] = [
    CurrencyPattern::Scale,
    CurrencyPattern::Grouped,
    CurrencyPattern::Approximate,
    CurrencyPattern::Negative,
    CurrencyPattern::Simple,
];

impl CurrencyPattern {
    fn regex(self) -> &'static Regex {
        match self {
            CurrencyPattern::Scale => &CURRENCY_SCALE_REGEX,
            CurrencyPattern::Grouped => &CURRENCY_GROUPED_REGEX,
            CurrencyPattern::Approximate => &CURRENCY_APPROX_REGEX,
            CurrencyPattern::Negative => &CURRENCY_NEGATIVE_REGEX,
            CurrencyPattern::Simple => &CURRENCY_SIMPLE_REGEX,
        }
    }
}

/// Numeric/currency stage
pub struct NumericCurrencyProcessor;

impl Processor for NumericCurrencyProcessor {
    fn stage(&self) -> Stage {
        Stage::NumericCurrency
    }

    fn process(
        &self,
        text: &mut WorkingText,
        ctx: &mut StageContext<'_>,
    ) -> Result<(), StageError> {
        let mut warnings = Vec::new();

        for pattern in CURRENCY_PASSES {
            let edits = text.scan(pattern.regex(), |caps| rewrite_currency(caps, &mut warnings));
            if !edits.is_empty() {
                tracing::trace!(pattern = ?pattern, count = edits.len(), "Currency pass");
            }
            text.apply(edits, self.name())?;
        }

        let edits = text.scan(&CURRENCY_CODE_REGEX, |caps| rewrite_currency(caps, &mut warnings));
        text.apply(edits, self.name())?;

        let edits = text.scan(&CENTS_REGEX, |caps| {
            let m = caps.get(0)?;
            let cents = parse_amount(&caps["int"], &mut warnings)?;
            Some(Edit::new(m.range(), format_cents_for_speech(cents), RuleKind::Currency))
        });
        text.apply(edits, self.name())?;

        let current = text.text();
        let edits = text.scan(&PERCENTAGE_REGEX, |caps| {
            rewrite_percentage(current, caps, &mut warnings)
        });
        text.apply(edits, self.name())?;

        let tables = ctx.tables;
        let dates_follow = ctx.options.is_stage_enabled(Stage::DateTime);
        let current = text.text();
        let edits = text.scan(&NUMBER_REGEX, |caps| {
            rewrite_number(current, caps, dates_follow, tables, &mut warnings)
        });
        text.apply(edits, self.name())?;

        for warning in warnings {
            ctx.warn(warning);
        }
        Ok(())
    }
}

/// Parse an integer part, recording a warning when it cannot be spoken
fn parse_amount(int: &str, warnings: &mut Vec<String>) -> Option<u64> {
    match parse_grouped(int) {
        Some(n) if n <= MAX_SPOKEN_NUMBER => Some(n),
        _ => {
            warnings.push(format!("number '{}' is out of the supported range", int));
            None
        }
    }
}

fn rewrite_currency(caps: &Captures<'_>, warnings: &mut Vec<String>) -> Option<Edit> {
    let m = caps.get(0)?;
    let whole = parse_amount(&caps["int"], warnings)?;
    let fraction = caps.name("frac").map(|f| f.as_str());

    let unit = if let Some(code) = caps.name("code") {
        by_code(code.as_str())?
    } else {
        let symbol = caps.name("sym").or_else(|| caps.name("sym2"))?;
        by_symbol(symbol.as_str())?
    };

    let mut spoken = match caps.name("scale") {
        Some(scale) => {
            let scale = scale_word(scale.as_str())?;
            format_scaled_for_speech(unit, whole, fraction, scale)
        }
        None => format_currency_for_speech(unit, whole, fraction),
    };

    if caps.name("neg").or_else(|| caps.name("neg2")).is_some() {
        spoken = format!("negative {}", spoken);
    }
    if caps.name("approx").is_some() {
        spoken = format!("approximately {}", spoken);
    }

    Some(Edit::new(m.range(), spoken, RuleKind::Currency))
}

/// Extend `range` over a leading minus or tilde that is read aloud
///
/// Returns the word the sign reads as: "negative" or "approximately".
fn with_sign(text: &str, range: Range<usize>) -> (Range<usize>, Option<&'static str>) {
    let mut sign_end = range.start;
    if prev_char(text, sign_end) == Some(' ') {
        sign_end -= 1;
    }
    let (sign, word) = match prev_char(text, sign_end) {
        Some('-') if sign_end == range.start => ('-', "negative"),
        Some(c @ ('~' | '≈')) => (c, "approximately"),
        _ => return (range, None),
    };
    let sign_start = sign_end - sign.len_utf8();
    let before = prev_char(text, sign_start);
    if before.map_or(true, |c| c.is_whitespace() || c == '(') {
        return (sign_start..range.end, Some(word));
    }
    (range, None)
}

fn spoken_quantity(int: &str, whole: u64, fraction: Option<&str>) -> String {
    let base = if int.len() > 1 && int.starts_with('0') {
        digits(int)
    } else {
        cardinal(whole)
    };
    match fraction {
        Some(f) => format!("{} point {}", base, digits(f)),
        None => base,
    }
}

fn rewrite_percentage(
    text: &str,
    caps: &Captures<'_>,
    warnings: &mut Vec<String>,
) -> Option<Edit> {
    let m = caps.get(0)?;
    let int = caps.name("int")?;
    if is_embedded(text, int.start()) {
        return None;
    }
    let whole = parse_amount(int.as_str(), warnings)?;
    let fraction = caps.name("frac").map(|f| f.as_str());

    let (range, sign) = with_sign(text, m.range());
    let mut spoken = format!("{} percent", spoken_quantity(int.as_str(), whole, fraction));
    if let Some(sign) = sign {
        spoken = format!("{} {}", sign, spoken);
    }
    Some(Edit::new(range, spoken, RuleKind::Numeric))
}

/// Whether the char before `start` glues the number to other text
///
/// Catches identifiers ("mp3"), the tail of dates and times ("12/25", "14:30"),
/// versions and phone numbers, and amounts a currency pass declined.
fn is_embedded(text: &str, start: usize) -> bool {
    match prev_char(text, start) {
        Some(c) if c.is_alphabetic() || c == '_' => true,
        Some(c) if matches!(c, '/' | ':') || by_symbol(c.encode_utf8(&mut [0; 4])).is_some() => {
            true
        }
        Some('.' | ',' | '-') => prev_char(text, start - 1).is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Whether the number ending at `end` continues into a date, time, version or range
fn continues_into_other_shape(text: &str, end: usize) -> bool {
    match next_char(text, end) {
        Some('/' | ':') => true,
        Some('.' | ',' | '-') => next_char(text, end + 1).is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Day of the month as written in a date: "25", "3rd", "21st"
fn is_day_of_month(word: &str) -> bool {
    let digits = word.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = word[digits.len()..].to_lowercase();
    (1..=2).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(suffix.as_str(), "" | "st" | "nd" | "rd" | "th")
}

/// Whether a number belongs to a time or written date the datetime stage reads
///
/// `range` covers the digits, `end` the whole token including any suffix.
fn is_date_or_time_part(text: &str, range: &Range<usize>, end: usize) -> bool {
    if MERIDIEM_AFTER_REGEX.is_match(&text[range.end..]) {
        return true;
    }

    // "25 December", "25th of December"
    match words_after(text, end, 2).as_slice() {
        [first, ..] if month_number(first).is_some() => return true,
        [of, month] if of.eq_ignore_ascii_case("of") && month_number(month).is_some() => {
            return true
        }
        _ => {}
    }

    // "December 25", "December 25, 2024", "Dec 25th 2024"
    match words_before(text, range.start, 2).as_slice() {
        [.., last] if month_number(last).is_some() => true,
        [month, day] => month_number(month).is_some() && is_day_of_month(day),
        _ => false,
    }
}

/// Spoken number with a financial scale suffix ("2.3M" → "two point three million")
fn scaled_quantity(int: &str, whole: u64, fraction: Option<&str>, scale: &str) -> String {
    let fraction = fraction
        .map(|f| f.trim_end_matches('0'))
        .filter(|f| !f.is_empty());
    format!("{} {}", spoken_quantity(int, whole, fraction), scale)
}

fn rewrite_number(
    text: &str,
    caps: &Captures<'_>,
    dates_follow: bool,
    tables: &RuleTables,
    warnings: &mut Vec<String>,
) -> Option<Edit> {
    let m = caps.get(0)?;
    let int = caps.name("int")?;
    let fraction = caps.name("frac").map(|f| f.as_str());
    let suffix = caps.name("suffix");
    let digits_end = caps.name("frac").map_or(int.end(), |f| f.end());
    let number_range = int.start()..digits_end;

    if is_embedded(text, number_range.start) || continues_into_other_shape(text, m.end()) {
        return None;
    }
    if is_math_operand(text, &number_range) {
        return None;
    }
    if dates_follow && is_date_or_time_part(text, &number_range, m.end()) {
        return None;
    }

    let whole = parse_amount(int.as_str(), warnings)?;

    if let Some(suffix) = suffix {
        let suffix_text = suffix.as_str();
        let lower = suffix_text.to_lowercase();

        // Ordinals: 1st, 22nd, 103rd
        if fraction.is_none() && matches!(lower.as_str(), "st" | "nd" | "rd" | "th") {
            return Some(Edit::new(m.range(), ordinal(whole), RuleKind::Numeric));
        }

        // Decades and plurals: 1990s, 80s
        if fraction.is_none() && suffix_text == "s" {
            let spoken = if int.as_str().len() == 4 && whole % 10 == 0 {
                decade(whole)
            } else if whole % 10 == 0 && whole > 0 && whole < 100 {
                let words = cardinal(whole);
                match words.strip_suffix('y') {
                    Some(stem) => format!("{}ies", stem),
                    None => format!("{}s", words),
                }
            } else {
                return None;
            };
            // "'90s" drops its apostrophe
            let start = match prev_char(text, m.start()) {
                Some(c @ ('\'' | '’'))
                    if !prev_char(text, m.start() - c.len_utf8())
                        .is_some_and(char::is_alphanumeric) =>
                {
                    m.start() - c.len_utf8()
                }
                _ => m.start(),
            };
            return Some(Edit::new(start..m.end(), spoken, RuleKind::Numeric));
        }

        // Financial scale: 2.3M, 50K
        if matches!(suffix_text, "K" | "k" | "M" | "MM" | "B" | "Bn" | "T") {
            let scale = scale_word(suffix_text)?;
            let spoken = scaled_quantity(int.as_str(), whole, fraction, scale);
            return Some(Edit::new(m.range(), spoken, RuleKind::Numeric));
        }

        // Units glued to the number: 5km, 16GB
        let is_unit = tables
            .abbreviations
            .get(suffix_text)
            .is_some_and(|entry| entry.class == AbbreviationClass::Unit);
        if is_unit {
            let spoken = format!("{} ", spoken_quantity(int.as_str(), whole, fraction));
            return Some(Edit::new(number_range, spoken, RuleKind::Numeric));
        }

        return None;
    }

    // Years after a cue word: "in 1999", "since 2010"
    if fraction.is_none() && int.as_str().len() == 4 && !int.as_str().starts_with('0') {
        let previous = words_before(text, number_range.start, 1);
        let cued = previous
            .first()
            .is_some_and(|w| YEAR_CUE_WORDS.contains(&w.to_lowercase().as_str()));
        if cued {
            return Some(Edit::new(number_range, year(whole), RuleKind::Numeric));
        }
    }

    let (range, sign) = with_sign(text, number_range);
    let mut spoken = spoken_quantity(int.as_str(), whole, fraction);
    if let Some(sign) = sign {
        spoken = format!("{} {}", sign, spoken);
    }
    Some(Edit::new(range, spoken, RuleKind::Numeric))
}
