/// Symbols read aloud as words
pub const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('%', "percent"),
    ('@', "at"),
    ('+', "plus"),
    ('=', "equals"),
    ('°', "degrees"),
    ('©', "copyright"),
    ('®', "registered"),
    ('™', "trademark"),
    ('§', "section"),
    ('¶', "paragraph"),
    ('×', "times"),
    ('÷', "divided by"),
    ('±', "plus or minus"),
    ('≈', "approximately"),
    ('≠', "not equal to"),
    ('≤', "less than or equal to"),
    ('≥', "greater than or equal to"),
    ('<', "less than"),
    ('>', "greater than"),
    ('→', "to"),
    ('∞', "infinity"),
    ('√', "square root of"),
    ('π', "pi"),
    ('µ', "micro"),
];

/// Multi-character operators left untouched wherever they appear
pub const CODE_OPERATORS: &[&str] = &[
    "===", "!==", "==", "!=", "=>", "->", "<-", "<=", ">=", "&&", "||", "::", "++", "--", "<<",
    ">>", "+=", "-=", "*=", "/=", "|>",
];

/// Characters rendered as an ASCII double quote
pub const DOUBLE_QUOTES: &[char] = &['\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{00AB}', '\u{00BB}'];

/// Characters rendered as an ASCII apostrophe
pub const SINGLE_QUOTES: &[char] = &[
    '\u{2018}', '\u{2019}', '\u{02BC}', '\u{02BB}', '\u{02BD}', '\u{02C8}', '\u{02CA}', '\u{02CB}',
    '\u{0060}', '\u{00B4}',
];

/// Characters rendered as an ASCII hyphen
pub const DASHES: &[char] = &['\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}'];

/// Characters rendered as a plain space
pub const SPACES: &[char] = &['\u{00A0}', '\u{2007}', '\u{2009}', '\u{202F}', '\u{3000}'];

/// Characters dropped from the text
pub const INVISIBLES: &[char] = &['\u{00AD}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

pub const ELLIPSIS: char = '\u{2026}';

/// Slash shorthand spoken as words (matched case-insensitively)
pub const SLASH_WORDS: &[(&str, &str)] = &[
    ("and/or", "and or"),
    ("w/o", "without"),
    ("w/", "with"),
];

pub fn symbol_word(symbol: char) -> Option<&'static str> {
    SYMBOL_WORDS
        .iter()
        .find(|(ch, _)| *ch == symbol)
        .map(|(_, word)| *word)
}

/// ASCII rendering for a typographic character, if it has one
pub fn typographic_replacement(ch: char) -> Option<&'static str> {
    if DOUBLE_QUOTES.contains(&ch) {
        Some("\"")
    } else if SINGLE_QUOTES.contains(&ch) {
        Some("'")
    } else if DASHES.contains(&ch) {
        Some("-")
    } else if SPACES.contains(&ch) {
        Some(" ")
    } else if INVISIBLES.contains(&ch) {
        Some("")
    } else if ch == ELLIPSIS {
        Some("...")
    } else {
        None
    }
}
