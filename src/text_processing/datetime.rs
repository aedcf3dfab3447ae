/// Date and time normalization
///
/// Handles:
/// - ISO dates: "2024-12-25" → "December twenty-fifth, twenty twenty-four"
/// - US dates: "12/25/2024", "12/25/24"
/// - Written dates: "December 25, 2024", "Dec. 25th", "25 December 2024"
/// - Times: "14:30" → "two thirty PM", "3pm" → "three PM"
///
/// Dates are checked against the calendar; impossible ones stay as written.
use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::context::{next_char, prev_char, starts_new_sentence, words_before};
use super::numbers::{cardinal, ordinal, year};
use super::pipeline::{Processor, StageContext};
use super::working_text::{Edit, WorkingText};
use crate::error::StageError;
use crate::models::{RuleKind, Stage};
use crate::rules::calendar::{month_alternation, month_name, month_number};

/// Two-digit years below this are 20xx, the rest 19xx
const SHORT_YEAR_PIVOT: i32 = 50;

lazy_static! {
    /// ISO dates
    /// Matches: 2024-12-25, 2024-1-5
    static ref ISO_DATE_REGEX: Regex = Regex::new(
        r"\b(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})\b"
    ).unwrap();

    /// US dates, month first
    /// Matches: 12/25/2024, 1/5/99
    static ref US_DATE_REGEX: Regex = Regex::new(
        r"\b(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{4}|\d{2})\b"
    ).unwrap();

    /// Written dates, month first
    /// Matches: December 25, 2024 / Dec. 25th / Sept 3
    static ref WRITTEN_DATE_REGEX: Regex = Regex::new(&format!(
        r"\b(?P<month>{})\.?\s+(?P<day>\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(?P<year>\d{{4}})\b)?",
        month_alternation()
    )).unwrap();

    /// Written dates, day first
    /// Matches: 25 December 2024 / 3rd of May
    static ref DAY_FIRST_DATE_REGEX: Regex = Regex::new(&format!(
        r"\b(?P<day>\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?(?P<month>{})\b(?:\.?,?\s+(?P<year>\d{{4}})\b)?",
        month_alternation()
    )).unwrap();

    /// Month and year
    /// Matches: March 1990
    static ref MONTH_YEAR_REGEX: Regex = Regex::new(&format!(
        r"\b(?P<month>{})\.?\s+(?P<year>\d{{4}})\b",
        month_alternation()
    )).unwrap();

    /// Clock times with minutes
    /// Matches: 14:30, 3:30 PM, 3:30pm, 09:05, 10:15:30 a.m.
    static ref CLOCK_TIME_REGEX: Regex = Regex::new(
        r"\b(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?(?:\s?(?P<meridiem>[AaPp]\.?[Mm]\b\.?)|\b)"
    ).unwrap();

    /// Hour with a meridiem
    /// Matches: 3pm, 9 a.m., 11 PM
    static ref HOUR_MERIDIEM_REGEX: Regex = Regex::new(
        r"\b(?P<hour>\d{1,2})\s?(?P<meridiem>[AaPp]\.?[Mm]\b\.?)"
    ).unwrap();
}

/// How a date is read aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateStyle {
    /// "December twenty-fifth, twenty twenty-four"
    MonthFirst,
    /// "the twenty-fifth of December, twenty twenty-four"
    DayFirst,
    /// "twenty-fifth of December", the text already has "the"
    DayFirstAfterArticle,
}

/// DateTime stage
pub struct DateTimeProcessor;

impl Processor for DateTimeProcessor {
    fn stage(&self) -> Stage {
        Stage::DateTime
    }

    fn process(
        &self,
        text: &mut WorkingText,
        ctx: &mut StageContext<'_>,
    ) -> Result<(), StageError> {
        let mut warnings = Vec::new();

        let current = text.text();
        let edits = text.scan(&ISO_DATE_REGEX, |caps| {
            if continues_numerically(current, caps) {
                return None;
            }
            let year_value = caps["year"].parse().ok();
            rewrite_date(caps, year_value, DateStyle::MonthFirst, &mut warnings)
        });
        text.apply(edits, self.name())?;

        let current = text.text();
        let edits = text.scan(&US_DATE_REGEX, |caps| {
            let m = caps.get(0)?;
            let in_path = prev_char(current, m.start()) == Some('/')
                || next_char(current, m.end()) == Some('/');
            if in_path || continues_numerically(current, caps) {
                return None;
            }
            let year_value = expand_year(&caps["year"]);
            rewrite_date(caps, year_value, DateStyle::MonthFirst, &mut warnings)
        });
        text.apply(edits, self.name())?;

        let edits = text.scan(&WRITTEN_DATE_REGEX, |caps| {
            let year_value = caps.name("year").and_then(|y| y.as_str().parse().ok());
            rewrite_date(caps, year_value, DateStyle::MonthFirst, &mut warnings)
        });
        text.apply(edits, self.name())?;

        let current = text.text();
        let edits = text.scan(&DAY_FIRST_DATE_REGEX, |caps| {
            let m = caps.get(0)?;
            let year_value = caps.name("year").and_then(|y| y.as_str().parse().ok());
            let has_article = words_before(current, m.start(), 1)
                .first()
                .is_some_and(|w| w.eq_ignore_ascii_case("the"));
            let style = if has_article {
                DateStyle::DayFirstAfterArticle
            } else {
                DateStyle::DayFirst
            };
            rewrite_date(caps, year_value, style, &mut warnings)
        });
        text.apply(edits, self.name())?;

        let edits = text.scan(&MONTH_YEAR_REGEX, |caps| {
            let m = caps.get(0)?;
            let month = month_number(&caps["month"]).and_then(month_name)?;
            let year_value: u64 = caps["year"].parse().ok()?;
            Some(Edit::new(
                m.range(),
                format!("{} {}", month, year(year_value)),
                RuleKind::DateTime,
            ))
        });
        text.apply(edits, self.name())?;

        for regex in [&*CLOCK_TIME_REGEX, &*HOUR_MERIDIEM_REGEX] {
            let current = text.text();
            let edits = text.scan(regex, |caps| {
                if continues_numerically(current, caps) {
                    return None;
                }
                rewrite_time(current, caps, &mut warnings)
            });
            text.apply(edits, self.name())?;
        }

        for warning in warnings {
            ctx.warn(warning);
        }
        Ok(())
    }
}

/// Whether the match is part of a longer numeric run ("1.2.2024-5", "10:30:45:12")
fn continues_numerically(text: &str, caps: &Captures<'_>) -> bool {
    let Some(m) = caps.get(0) else {
        return false;
    };
    let glued = |c: Option<char>| matches!(c, Some('/' | ':' | '-' | '.'));
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());

    // Glue chars are ASCII, so one byte past them is a char boundary
    let digit_before = glued(prev_char(text, m.start())) && is_digit(prev_char(text, m.start() - 1));
    let digit_after = glued(next_char(text, m.end()))
        && is_digit(text.get(m.end() + 1..).and_then(|rest| rest.chars().next()));
    digit_before || digit_after
}

/// Four-digit years as written, two-digit years around the pivot
fn expand_year(written: &str) -> Option<i32> {
    let value: i32 = written.parse().ok()?;
    if written.len() == 2 {
        if value < SHORT_YEAR_PIVOT {
            Some(2000 + value)
        } else {
            Some(1900 + value)
        }
    } else {
        Some(value)
    }
}

/// Whether the day exists in that month, in a leap year when no year is given
fn is_valid_date(year_value: Option<i32>, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year_value.unwrap_or(2000), month, day).is_some()
}

fn rewrite_date(
    caps: &Captures<'_>,
    year_value: Option<i32>,
    style: DateStyle,
    warnings: &mut Vec<String>,
) -> Option<Edit> {
    let m = caps.get(0)?;
    let month_text = &caps["month"];
    let month = match month_text.parse::<u32>() {
        Ok(n) => n,
        Err(_) => month_number(month_text)?,
    };
    let day: u32 = caps["day"].parse().ok()?;

    if !is_valid_date(year_value, month, day) {
        warnings.push(format!("invalid date '{}' left unchanged", m.as_str()));
        return None;
    }

    let month = month_name(month)?;
    let day = ordinal(u64::from(day));
    let mut spoken = match style {
        DateStyle::MonthFirst => format!("{} {}", month, day),
        DateStyle::DayFirst => format!("the {} of {}", day, month),
        DateStyle::DayFirstAfterArticle => format!("{} of {}", day, month),
    };
    if let Some(y) = year_value {
        spoken.push_str(", ");
        spoken.push_str(&year(u64::try_from(y).ok()?));
    }

    Some(Edit::new(m.range(), spoken, RuleKind::DateTime))
}

/// "AM" or "PM" for a written meridiem ("p.m.", "pm", "PM")
fn meridiem_word(written: &str) -> &'static str {
    if written.starts_with(['p', 'P']) {
        "PM"
    } else {
        "AM"
    }
}

fn minute_words(minute: u32) -> String {
    match minute {
        0 => String::new(),
        1..=9 => format!("oh {}", cardinal(u64::from(minute))),
        _ => cardinal(u64::from(minute)),
    }
}

/// Spoken clock time
///
/// 24-hour forms (hour above 12, hour zero, or a zero-padded hour) gain AM/PM.
/// Bare 12-hour times read without one, and on the hour as "o'clock".
fn rewrite_time(text: &str, caps: &Captures<'_>, warnings: &mut Vec<String>) -> Option<Edit> {
    let m = caps.get(0)?;
    let hour_text = &caps["hour"];
    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = caps
        .name("minute")
        .map_or(Some(0), |mm| mm.as_str().parse().ok())?;
    let second: u32 = caps
        .name("second")
        .map_or(Some(0), |s| s.as_str().parse().ok())?;
    let meridiem = caps.name("meridiem");

    let valid = NaiveTime::from_hms_opt(hour, minute, second).is_some()
        && (meridiem.is_none() || (1..=12).contains(&hour));
    if !valid {
        warnings.push(format!("invalid time '{}' left unchanged", m.as_str()));
        return None;
    }

    let twenty_four_hour = meridiem.is_none()
        && (hour > 12 || hour == 0 || (hour_text.len() == 2 && hour_text.starts_with('0')));

    let (display_hour, suffix) = match meridiem {
        Some(written) => (hour, Some(meridiem_word(written.as_str()))),
        None if twenty_four_hour => {
            let suffix = if hour < 12 { "AM" } else { "PM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            (display, Some(suffix))
        }
        None => (hour, None),
    };

    let mut spoken = cardinal(u64::from(display_hour));
    let minutes = minute_words(minute);
    if !minutes.is_empty() {
        spoken.push(' ');
        spoken.push_str(&minutes);
    }
    match suffix {
        Some(suffix) => {
            spoken.push(' ');
            spoken.push_str(suffix);
        }
        None if minute == 0 => spoken.push_str(" o'clock"),
        None => {}
    }
    if second > 0 {
        spoken.push_str(&format!(" and {} seconds", cardinal(u64::from(second))));
    }

    // "a.m." at the end of a sentence also carried its full stop
    if meridiem.is_some_and(|w| w.as_str().ends_with('.')) && starts_new_sentence(text, m.end()) {
        spoken.push('.');
    }

    Some(Edit::new(m.range(), spoken, RuleKind::DateTime))
}
