use serde::Deserialize;
use std::collections::HashMap;

/// How an abbreviation is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbbreviationClass {
    /// Letter-by-letter acronym ("FBI")
    SpellOut,
    /// Acronym pronounced as a word ("NASA")
    Word,
    /// Personal title ("Dr.", "Mrs.")
    Title,
    /// Always replaced by its expansion ("etc.")
    Expand,
    /// Measurement unit, read only after a number ("km")
    Unit,
    /// Reading depends on the neighbouring words ("St.")
    Contextual,
}

/// One abbreviation entry
///
/// For units `expansion` is the singular and `alternate` the plural. For
/// contextual entries `expansion` is the reading before a name and
/// `alternate` the reading after one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbbreviationEntry {
    pub class: AbbreviationClass,
    #[serde(default)]
    pub expansion: Option<String>,
    #[serde(default)]
    pub alternate: Option<String>,
}

impl AbbreviationEntry {
    fn new(class: AbbreviationClass, expansion: Option<&str>, alternate: Option<&str>) -> Self {
        Self {
            class,
            expansion: expansion.map(str::to_string),
            alternate: alternate.map(str::to_string),
        }
    }
}

/// Abbreviation lookup
///
/// Keys ending in a period match case-insensitively; bare tokens (acronyms,
/// units) are case-sensitive so "US" and "us" stay distinct.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    period_forms: HashMap<String, AbbreviationEntry>,
    tokens: HashMap<String, AbbreviationEntry>,
}

impl AbbreviationTable {
    pub fn builtin() -> Self {
        use AbbreviationClass::*;

        let mut table = Self::default();
        for (key, expansion) in TITLES {
            table.insert(key, AbbreviationEntry::new(Title, Some(expansion), None));
        }
        for (key, expansion) in EXPANSIONS {
            table.insert(key, AbbreviationEntry::new(Expand, Some(expansion), None));
        }
        for (key, expansion) in SPELLED_ACRONYMS {
            table.insert(key, AbbreviationEntry::new(SpellOut, *expansion, None));
        }
        for (key, expansion) in WORD_ACRONYMS {
            table.insert(key, AbbreviationEntry::new(Word, *expansion, None));
        }
        for (key, singular, plural) in UNITS {
            table.insert(key, AbbreviationEntry::new(Unit, Some(singular), Some(plural)));
        }
        for (key, before_name, after_name) in CONTEXTUAL {
            table.insert(
                key,
                AbbreviationEntry::new(Contextual, Some(before_name), *after_name),
            );
        }
        table
    }

    pub fn insert(&mut self, key: &str, entry: AbbreviationEntry) {
        if key.ends_with('.') {
            self.period_forms.insert(key.to_lowercase(), entry);
        } else {
            self.tokens.insert(key.to_string(), entry);
        }
    }

    pub fn get(&self, token: &str) -> Option<&AbbreviationEntry> {
        if token.ends_with('.') {
            self.period_forms.get(&token.to_lowercase())
        } else {
            self.tokens.get(token)
        }
    }

    pub fn len(&self) -> usize {
        self.period_forms.len() + self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const TITLES: &[(&str, &str)] = &[
    ("Mr.", "Mister"),
    ("Mrs.", "Missus"),
    ("Ms.", "Miz"),
    ("Prof.", "Professor"),
    ("Sr.", "Senior"),
    ("Jr.", "Junior"),
    ("Rev.", "Reverend"),
    ("Gen.", "General"),
    ("Capt.", "Captain"),
    ("Lt.", "Lieutenant"),
    ("Sgt.", "Sergeant"),
    ("Col.", "Colonel"),
    ("Gov.", "Governor"),
    ("Sen.", "Senator"),
    ("Rep.", "Representative"),
    ("Hon.", "Honorable"),
    ("Pres.", "President"),
];

const EXPANSIONS: &[(&str, &str)] = &[
    ("etc.", "et cetera"),
    ("vs.", "versus"),
    ("e.g.", "for example"),
    ("i.e.", "that is"),
    ("approx.", "approximately"),
    ("dept.", "department"),
    ("est.", "established"),
    ("misc.", "miscellaneous"),
    ("Ave.", "Avenue"),
    ("Blvd.", "Boulevard"),
    ("Rd.", "Road"),
    ("Mt.", "Mount"),
    ("Ft.", "Fort"),
    ("Inc.", "Incorporated"),
    ("Corp.", "Corporation"),
    ("Ltd.", "Limited"),
    ("Co.", "Company"),
    ("U.S.", "U S"),
    ("U.K.", "U K"),
    ("a.m.", "A M"),
    ("p.m.", "P M"),
    ("Jan.", "January"),
    ("Feb.", "February"),
    ("Mar.", "March"),
    ("Apr.", "April"),
    ("Jun.", "June"),
    ("Jul.", "July"),
    ("Aug.", "August"),
    ("Sep.", "September"),
    ("Sept.", "September"),
    ("Oct.", "October"),
    ("Nov.", "November"),
    ("Dec.", "December"),
    ("Mon.", "Monday"),
    ("Tue.", "Tuesday"),
    ("Tues.", "Tuesday"),
    ("Wed.", "Wednesday"),
    ("Thu.", "Thursday"),
    ("Thurs.", "Thursday"),
    ("Fri.", "Friday"),
    ("Sat.", "Saturday"),
    ("Sun.", "Sunday"),
];

const SPELLED_ACRONYMS: &[(&str, Option<&str>)] = &[
    ("ASAP", Some("as soon as possible")),
    ("FBI", Some("Federal Bureau of Investigation")),
    ("CIA", Some("Central Intelligence Agency")),
    ("USA", Some("United States of America")),
    ("US", Some("United States")),
    ("UK", Some("United Kingdom")),
    ("EU", Some("European Union")),
    ("UN", Some("United Nations")),
    ("CEO", Some("chief executive officer")),
    ("CFO", Some("chief financial officer")),
    ("CTO", Some("chief technology officer")),
    ("HR", Some("human resources")),
    ("PR", Some("public relations")),
    ("IT", Some("information technology")),
    ("AI", Some("artificial intelligence")),
    ("ML", Some("machine learning")),
    ("API", Some("application programming interface")),
    ("CPU", Some("central processing unit")),
    ("GPU", Some("graphics processing unit")),
    ("URL", None),
    ("HTML", Some("hypertext markup language")),
    ("CSS", None),
    ("PDF", None),
    ("SQL", None),
    ("USB", None),
    ("DNA", None),
    ("ATM", None),
    ("FAQ", Some("frequently asked questions")),
    ("DIY", Some("do it yourself")),
    ("FYI", Some("for your information")),
    ("BTW", Some("by the way")),
    ("IDK", Some("I don't know")),
    ("TBD", Some("to be determined")),
    ("ETA", Some("estimated time of arrival")),
    ("RSVP", None),
    ("IBM", None),
    ("BBC", None),
    ("CNN", None),
    ("NBA", None),
    ("NFL", None),
    ("MIT", None),
    ("UCLA", None),
    ("NYSE", Some("New York Stock Exchange")),
    ("ID", None),
    ("TV", Some("television")),
    ("PC", Some("personal computer")),
    ("VIP", Some("very important person")),
    ("IRS", Some("Internal Revenue Service")),
    ("SUV", Some("sport utility vehicle")),
    ("MVP", Some("most valuable player")),
    ("KPI", Some("key performance indicator")),
    ("ROI", Some("return on investment")),
    ("AWS", Some("Amazon Web Services")),
    ("HTTP", None),
    ("HTTPS", None),
    ("SSH", None),
    ("DNS", None),
    ("IP", None),
    ("OS", Some("operating system")),
    ("UI", Some("user interface")),
    ("UX", Some("user experience")),
    ("SDK", Some("software development kit")),
    ("CLI", Some("command line interface")),
    ("LLM", Some("large language model")),
    ("TTS", Some("text to speech")),
    ("AT&T", None),
];

const WORD_ACRONYMS: &[(&str, Option<&str>)] = &[
    ("NASA", Some("National Aeronautics and Space Administration")),
    ("NATO", Some("North Atlantic Treaty Organization")),
    ("SCUBA", None),
    ("LASER", None),
    ("RADAR", None),
    ("UNESCO", None),
    ("UNICEF", None),
    ("FIFA", None),
    ("NASDAQ", None),
    ("OPEC", None),
    ("JSON", None),
    ("YAML", None),
    ("SIM", None),
    ("PIN", Some("personal identification number")),
    ("COVID", None),
    ("GIF", None),
    ("YOLO", Some("you only live once")),
    ("IKEA", None),
];

/// Units: (abbreviation, singular, plural)
const UNITS: &[(&str, &str, &str)] = &[
    ("km", "kilometer", "kilometers"),
    ("cm", "centimeter", "centimeters"),
    ("mm", "millimeter", "millimeters"),
    ("kg", "kilogram", "kilograms"),
    ("mg", "milligram", "milligrams"),
    ("mi", "mile", "miles"),
    ("ft", "foot", "feet"),
    ("lb", "pound", "pounds"),
    ("lbs", "pounds", "pounds"),
    ("oz", "ounce", "ounces"),
    ("mph", "mile per hour", "miles per hour"),
    ("kph", "kilometer per hour", "kilometers per hour"),
    ("km/h", "kilometer per hour", "kilometers per hour"),
    ("KB", "kilobyte", "kilobytes"),
    ("MB", "megabyte", "megabytes"),
    ("GB", "gigabyte", "gigabytes"),
    ("TB", "terabyte", "terabytes"),
    ("Hz", "hertz", "hertz"),
    ("kHz", "kilohertz", "kilohertz"),
    ("MHz", "megahertz", "megahertz"),
    ("GHz", "gigahertz", "gigahertz"),
    ("ms", "millisecond", "milliseconds"),
    ("sec", "second", "seconds"),
    ("min", "minute", "minutes"),
    ("hr", "hour", "hours"),
    ("hrs", "hours", "hours"),
];

/// Contextual: (abbreviation, reading before a name, reading after a name)
///
/// With no after-name reading the abbreviation is only expanded before a number.
const CONTEXTUAL: &[(&str, &str, Option<&str>)] = &[
    ("St.", "Saint", Some("Street")),
    ("Dr.", "Doctor", Some("Drive")),
    ("No.", "number", None),
];
