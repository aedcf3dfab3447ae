/// Month names with their common abbreviations
pub const MONTHS: [(&str, &[&str]); 12] = [
    ("January", &["jan"]),
    ("February", &["feb"]),
    ("March", &["mar"]),
    ("April", &["apr"]),
    ("May", &[]),
    ("June", &["jun"]),
    ("July", &["jul"]),
    ("August", &["aug"]),
    ("September", &["sep", "sept"]),
    ("October", &["oct"]),
    ("November", &["nov"]),
    ("December", &["dec"]),
];

pub const WEEKDAYS: [(&str, &[&str]); 7] = [
    ("Monday", &["mon"]),
    ("Tuesday", &["tue", "tues"]),
    ("Wednesday", &["wed"]),
    ("Thursday", &["thu", "thur", "thurs"]),
    ("Friday", &["fri"]),
    ("Saturday", &["sat"]),
    ("Sunday", &["sun"]),
];

/// Suffixes written after ordinal digits ("1st", "22nd")
pub const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Cardinal words whose ordinal form is irregular
pub const IRREGULAR_ORDINALS: [(&str, &str); 7] = [
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

/// Words that, right before a four-digit number, mark it as a year
pub const YEAR_CUE_WORDS: &[&str] = &[
    "in", "since", "by", "during", "year", "until", "till", "from", "circa", "before", "after",
    "around", "of", "early", "late", "mid", "spring", "summer", "autumn", "fall", "winter",
];

/// Month name (1-based) for a month number
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTHS[(month - 1) as usize].0)
    } else {
        None
    }
}

/// Month number (1-based) for a full or abbreviated month name
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches('.').to_lowercase();
    MONTHS
        .iter()
        .position(|(full, abbrevs)| full.to_lowercase() == lower || abbrevs.contains(&lower.as_str()))
        .map(|idx| idx as u32 + 1)
}

/// Regex alternation of every month spelling, longest first
pub fn month_alternation() -> String {
    let mut names: Vec<String> = Vec::new();
    for (full, abbrevs) in MONTHS.iter() {
        names.push(full.to_string());
        for abbrev in abbrevs.iter() {
            let mut chars = abbrev.chars();
            if let Some(first) = chars.next() {
                names.push(format!("{}{}", first.to_ascii_uppercase(), chars.as_str()));
            }
        }
    }
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    names.join("|")
}

pub fn weekday_name(abbrev: &str) -> Option<&'static str> {
    let lower = abbrev.trim_end_matches('.').to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(full, abbrevs)| full.to_lowercase() == lower || abbrevs.contains(&lower.as_str()))
        .map(|(full, _)| *full)
}
