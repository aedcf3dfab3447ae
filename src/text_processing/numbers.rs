/// Number-to-words conversion for speech
///
/// American style throughout: no "and" inside numbers ("one hundred five"),
/// hyphenated tens ("thirty-four").
use crate::rules::calendar::IRREGULAR_ORDINALS;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Spoken form of a whole number ("one thousand two hundred thirty-four")
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut parts: Vec<String> = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        let words = below_thousand(*group);
        if scale == 0 {
            parts.push(words);
        } else {
            parts.push(format!("{} {}", words, SCALES[scale]));
        }
    }
    parts.join(" ")
}

fn below_thousand(n: usize) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => format!("{} hundred", ONES[h]),
        (h, r) => format!("{} hundred {}", ONES[h], below_hundred(r)),
    }
}

fn below_hundred(n: usize) -> String {
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], ONES[n % 10])
    }
}

/// Spoken ordinal ("twenty-first", "one hundredth")
pub fn ordinal(n: u64) -> String {
    to_ordinal_words(&cardinal(n))
}

/// Turn the last word of a spoken cardinal into its ordinal form
pub fn to_ordinal_words(words: &str) -> String {
    let split = words.rfind([' ', '-']).map_or(0, |idx| idx + 1);
    let (head, last) = words.split_at(split);

    let last_ordinal = if let Some((_, irregular)) =
        IRREGULAR_ORDINALS.iter().find(|(card, _)| *card == last)
    {
        irregular.to_string()
    } else if let Some(stem) = last.strip_suffix('y') {
        format!("{}ieth", stem)
    } else {
        format!("{}th", last)
    };

    format!("{}{}", head, last_ordinal)
}

/// Year reading ("nineteen ninety-nine", "two thousand five", "twenty ten")
pub fn year(y: u64) -> String {
    if !(1000..10000).contains(&y) || y % 1000 == 0 || (2001..=2009).contains(&y) {
        return cardinal(y);
    }

    let high = y / 100;
    let low = y % 100;
    match low {
        0 => format!("{} hundred", cardinal(high)),
        1..=9 => format!("{} oh {}", cardinal(high), cardinal(low)),
        _ => format!("{} {}", cardinal(high), cardinal(low)),
    }
}

/// Decade reading ("nineteen nineties", "two thousands")
pub fn decade(y: u64) -> String {
    pluralize_last(&year(y))
}

fn pluralize_last(words: &str) -> String {
    if let Some(stem) = words.strip_suffix('y') {
        format!("{}ies", stem)
    } else if words.ends_with('x') {
        format!("{}es", words)
    } else {
        format!("{}s", words)
    }
}

/// Digits read one at a time ("one four")
pub fn digits(s: &str) -> String {
    s.chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ONES[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse digits with optional thousands commas
///
/// Returns `None` for malformed grouping ("1,23") or overflow.
pub fn parse_grouped(s: &str) -> Option<u64> {
    if s.contains(',') {
        let mut groups = s.split(',');
        let first = groups.next()?;
        if first.is_empty() || first.len() > 3 {
            return None;
        }
        if groups.clone().any(|g| g.len() != 3) {
            return None;
        }
    }
    let plain: String = s.chars().filter(|c| *c != ',').collect();
    if plain.is_empty() || !plain.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    plain.parse().ok()
}

/// Spoken decimal ("three point one four"); the fraction is read digit by digit
pub fn decimal(whole: u64, fraction: &str) -> String {
    if fraction.is_empty() {
        cardinal(whole)
    } else {
        format!("{} point {}", cardinal(whole), digits(fraction))
    }
}

/// Whether a lowercase word is a spoken number ("seven", "twenty-one", "hundred")
pub fn is_number_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower.split('-').all(|part| {
        ONES.contains(&part)
            || TENS[2..].contains(&part)
            || part == "hundred"
            || SCALES[1..].contains(&part)
            || part == "point"
            || part == "half"
            || part == "a"
    }) && lower != "a"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_small() {
        assert_eq!(cardinal(0), "zero");
        assert_eq!(cardinal(7), "seven");
        assert_eq!(cardinal(13), "thirteen");
        assert_eq!(cardinal(40), "forty");
        assert_eq!(cardinal(56), "fifty-six");
    }

    #[test]
    fn test_cardinal_compound() {
        assert_eq!(cardinal(105), "one hundred five");
        assert_eq!(cardinal(1234), "one thousand two hundred thirty-four");
        assert_eq!(cardinal(1_000_000), "one million");
        assert_eq!(cardinal(2_000_500), "two million five hundred");
        assert_eq!(
            cardinal(1_000_000_001),
            "one billion one"
        );
    }

    #[test]
    fn test_cardinal_max() {
        let words = cardinal(u64::MAX);
        assert!(words.starts_with("eighteen quintillion"));
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(2), "second");
        assert_eq!(ordinal(3), "third");
        assert_eq!(ordinal(4), "fourth");
        assert_eq!(ordinal(5), "fifth");
        assert_eq!(ordinal(8), "eighth");
        assert_eq!(ordinal(9), "ninth");
        assert_eq!(ordinal(12), "twelfth");
        assert_eq!(ordinal(20), "twentieth");
        assert_eq!(ordinal(21), "twenty-first");
        assert_eq!(ordinal(25), "twenty-fifth");
        assert_eq!(ordinal(100), "one hundredth");
        assert_eq!(ordinal(103), "one hundred third");
    }

    #[test]
    fn test_year() {
        assert_eq!(year(2024), "twenty twenty-four");
        assert_eq!(year(1999), "nineteen ninety-nine");
        assert_eq!(year(2000), "two thousand");
        assert_eq!(year(2005), "two thousand five");
        assert_eq!(year(2010), "twenty ten");
        assert_eq!(year(1900), "nineteen hundred");
        assert_eq!(year(1905), "nineteen oh five");
        assert_eq!(year(999), "nine hundred ninety-nine");
    }

    #[test]
    fn test_decade() {
        assert_eq!(decade(1990), "nineteen nineties");
        assert_eq!(decade(1800), "eighteen hundreds");
        assert_eq!(decade(2000), "two thousands");
        assert_eq!(decade(2010), "twenty tens");
    }

    #[test]
    fn test_digits_and_decimal() {
        assert_eq!(digits("14"), "one four");
        assert_eq!(decimal(3, "14"), "three point one four");
        assert_eq!(decimal(0, "5"), "zero point five");
        assert_eq!(decimal(10, ""), "ten");
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse_grouped("1,234"), Some(1234));
        assert_eq!(parse_grouped("1,234,567"), Some(1_234_567));
        assert_eq!(parse_grouped("1234"), Some(1234));
        assert_eq!(parse_grouped("1,23"), None);
        assert_eq!(parse_grouped("1234,567"), None);
        assert_eq!(parse_grouped("99999999999999999999999"), None);
        assert_eq!(parse_grouped(""), None);
    }

    #[test]
    fn test_is_number_word() {
        assert!(is_number_word("five"));
        assert!(is_number_word("Twenty-One"));
        assert!(is_number_word("hundred"));
        assert!(!is_number_word("a"));
        assert!(!is_number_word("fives"));
        assert!(!is_number_word("dollars"));
    }
}
