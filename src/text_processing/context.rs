//! Lightweight context checks shared by the stages
//!
//! These are narrow heuristics over the characters and words around a match,
//! not a parse. Each function documents what it gets wrong.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

use crate::rules::symbols::CODE_OPERATORS;

/// Operators that make a digit sequence part of arithmetic
const MATH_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '=', '^', '×', '÷', '<', '>', '≤', '≥', '≠', '≈', '±',
];

lazy_static! {
    /// Host names with a common top-level domain
    static ref DOMAIN_REGEX: Regex = Regex::new(
        r"(?i)^[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:com|org|net|io|dev|edu|gov|co|uk|ai|app|info|rs|me)(?:[/:?#]|$)"
    ).unwrap();

    /// Simple e-mail shape
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+$"
    ).unwrap();
}

/// First non-space char before `pos`, with its byte index
pub fn char_before(text: &str, pos: usize) -> Option<(usize, char)> {
    text[..pos].char_indices().rev().find(|(_, c)| *c != ' ')
}

/// First non-space char at or after `pos`, with its byte index
pub fn char_after(text: &str, pos: usize) -> Option<(usize, char)> {
    text[pos..]
        .char_indices()
        .find(|(_, c)| *c != ' ')
        .map(|(i, c)| (pos + i, c))
}

/// Char immediately before `pos`, spaces included
pub fn prev_char(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

/// Char immediately at `pos`, spaces included
pub fn next_char(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

/// Whether the text after `pos` starts a new sentence
///
/// True at the end of the text, before a line break, or before whitespace
/// followed by a capital letter. Names after an abbreviation look the same.
pub fn starts_new_sentence(text: &str, pos: usize) -> bool {
    let rest = &text[pos..];
    if rest.trim().is_empty() || rest.starts_with('\n') {
        return true;
    }
    rest.starts_with(char::is_whitespace)
        && rest
            .trim_start()
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
}

/// Whether `c` can be an arithmetic operator
pub fn is_math_symbol(c: char) -> bool {
    MATH_OPERATORS.contains(&c)
}

fn is_operand_char(c: char) -> bool {
    c.is_ascii_digit() || c == '(' || c == ')'
}

/// Whether the number at `range` is an operand of an arithmetic expression
///
/// Looks one operator to either side ("2 + 3", "4*5", "x = 10 / 2"). A leading
/// minus with nothing before it is a sign, not an operator. Hyphenated ranges
/// ("10-20") count as math, which is what the numeric stage wants anyway.
pub fn is_math_operand(text: &str, range: &Range<usize>) -> bool {
    if let Some((op_idx, op)) = char_before(text, range.start) {
        if MATH_OPERATORS.contains(&op) {
            if let Some((_, left)) = char_before(text, op_idx) {
                if is_operand_char(left) {
                    return true;
                }
            }
        }
    }
    if let Some((op_idx, op)) = char_after(text, range.end) {
        if MATH_OPERATORS.contains(&op) {
            if let Some((_, right)) = char_after(text, op_idx + op.len_utf8()) {
                if is_operand_char(right) || (right == '-' && op != '-') {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether the symbol at `range` sits between two operands ("3 + 4", "a=b")
///
/// Letters count as operands only when the symbol has no surrounding spaces,
/// so "x=y" is math while "salt & pepper" is prose.
pub fn is_math_operator(text: &str, range: &Range<usize>) -> bool {
    let left = char_before(text, range.start);
    let right = char_after(text, range.end);
    let (Some((left_idx, left)), Some((right_idx, right))) = (left, right) else {
        return false;
    };

    let tight = left_idx + left.len_utf8() == range.start && right_idx == range.end;
    let operand = |c: char| is_operand_char(c) || (tight && c.is_alphanumeric());
    operand(left) && (operand(right) || right == '-')
}

/// Whitespace-delimited token containing `range`
pub fn token_around(text: &str, range: &Range<usize>) -> Range<usize> {
    let start = text[..range.start]
        .rfind(char::is_whitespace)
        .map_or(0, |idx| idx + 1);
    let end = text[range.end..]
        .find(char::is_whitespace)
        .map_or(text.len(), |idx| range.end + idx);
    start..end
}

/// Whether `range` is inside a URL, file path, or e-mail address
///
/// Misses bare host names with unusual TLDs; treats any token with two or
/// more slashes as a path.
pub fn is_url_or_path(text: &str, range: &Range<usize>) -> bool {
    let token_range = token_around(text, range);
    let token = text[token_range].trim_matches(|c: char| {
        matches!(c, '(' | ')' | '"' | '\'' | ',' | ';' | '<' | '>') || (c == '.')
    });

    if token.contains("://") || token.starts_with("www.") {
        return true;
    }
    if EMAIL_REGEX.is_match(token) || DOMAIN_REGEX.is_match(token) {
        return true;
    }
    if token.starts_with('/') && token.len() > 1
        || token.starts_with("./")
        || token.starts_with("../")
        || token.starts_with("~/")
    {
        return true;
    }
    if token.contains('\\') {
        return true;
    }
    token.matches('/').count() >= 2
}

/// Whether `range` is inside a code-like token
///
/// A token is code-like if it contains a multi-char operator, a call
/// ("foo()"), or backticks.
pub fn is_code_token(text: &str, range: &Range<usize>) -> bool {
    let token_range = token_around(text, range);
    let token = &text[token_range];
    CODE_OPERATORS.iter().any(|op| token.contains(op))
        || token.contains("()")
        || token.contains('`')
}

/// Whether `range` is inside a multi-char operator separated by spaces ("a == b")
pub fn is_code_operator(text: &str, range: &Range<usize>) -> bool {
    CODE_OPERATORS.iter().any(|op| {
        let window_start = range.start.saturating_sub(op.len() - 1);
        let window_end = (range.end + op.len() - 1).min(text.len());
        text.get(window_start..window_end)
            .is_some_and(|window| window.contains(op))
    })
}

/// Carry the case of the written word over to its replacement
///
/// ALL-CAPS words stay ALL-CAPS, a leading capital stays a leading capital.
pub fn match_case(original: &str, spoken: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();

    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return spoken.to_uppercase();
    }
    if letters.first().is_some_and(|c| c.is_uppercase()) {
        let mut chars = spoken.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    spoken.to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}

/// Up to `n` words ending before `pos`, earliest first
pub fn words_before(text: &str, pos: usize, n: usize) -> Vec<&str> {
    let mut words = Vec::with_capacity(n);
    let mut end: Option<usize> = None;

    for (idx, c) in text[..pos].char_indices().rev() {
        match (is_word_char(c), end) {
            (true, None) => end = Some(idx + c.len_utf8()),
            (false, Some(word_end)) => {
                words.push(&text[idx + c.len_utf8()..word_end]);
                end = None;
                if words.len() == n {
                    break;
                }
            }
            _ => {}
        }
    }
    if let (Some(word_end), true) = (end, words.len() < n) {
        words.push(&text[..word_end]);
    }

    words.reverse();
    words
}

/// Up to `n` words starting at or after `pos`
pub fn words_after(text: &str, pos: usize, n: usize) -> Vec<&str> {
    let mut words = Vec::with_capacity(n);
    let mut start: Option<usize> = None;

    for (idx, c) in text[pos..].char_indices() {
        let idx = pos + idx;
        match (is_word_char(c), start) {
            (true, None) => start = Some(idx),
            (false, Some(word_start)) => {
                words.push(&text[word_start..idx]);
                start = None;
                if words.len() == n {
                    return words;
                }
            }
            _ => {}
        }
    }
    if let Some(word_start) = start {
        if words.len() < n {
            words.push(&text[word_start..]);
        }
    }
    words
}

/// Lowercase words joined by single spaces, ready for window patterns
pub fn window_text(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase().replace('\u{2019}', "'"))
        .collect::<Vec<_>>()
        .join(" ")
}
