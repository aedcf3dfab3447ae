/// Spoken names for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyUnit {
    pub symbol: &'static str,
    pub code: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    /// Minor unit (cents, pence); `None` reads decimals as "point"
    pub minor_singular: Option<&'static str>,
    pub minor_plural: Option<&'static str>,
}

impl CurrencyUnit {
    const fn new(
        symbol: &'static str,
        code: &'static str,
        singular: &'static str,
        plural: &'static str,
        minor: Option<(&'static str, &'static str)>,
    ) -> Self {
        let (minor_singular, minor_plural) = match minor {
            Some((s, p)) => (Some(s), Some(p)),
            None => (None, None),
        };
        Self {
            symbol,
            code,
            singular,
            plural,
            minor_singular,
            minor_plural,
        }
    }

    pub fn major(&self, count: u64) -> &'static str {
        if count == 1 {
            self.singular
        } else {
            self.plural
        }
    }

    pub fn minor(&self, count: u64) -> Option<&'static str> {
        if count == 1 {
            self.minor_singular
        } else {
            self.minor_plural
        }
    }
}

/// Currencies recognized by symbol or ISO code
///
/// Entries with an empty symbol are only matched by code.
pub const CURRENCIES: &[CurrencyUnit] = &[
    CurrencyUnit::new("$", "USD", "dollar", "dollars", Some(("cent", "cents"))),
    CurrencyUnit::new("€", "EUR", "euro", "euros", Some(("cent", "cents"))),
    CurrencyUnit::new("£", "GBP", "pound", "pounds", Some(("penny", "pence"))),
    CurrencyUnit::new("¥", "JPY", "yen", "yen", None),
    CurrencyUnit::new("₹", "INR", "rupee", "rupees", Some(("paisa", "paise"))),
    CurrencyUnit::new("₩", "KRW", "won", "won", None),
    CurrencyUnit::new("₽", "RUB", "ruble", "rubles", Some(("kopek", "kopeks"))),
    CurrencyUnit::new(
        "",
        "CAD",
        "Canadian dollar",
        "Canadian dollars",
        Some(("cent", "cents")),
    ),
    CurrencyUnit::new(
        "",
        "AUD",
        "Australian dollar",
        "Australian dollars",
        Some(("cent", "cents")),
    ),
    CurrencyUnit::new(
        "",
        "CHF",
        "Swiss franc",
        "Swiss francs",
        Some(("centime", "centimes")),
    ),
    CurrencyUnit::new("", "CNY", "yuan", "yuan", None),
];

/// Regex character class matching every currency symbol in [`CURRENCIES`]
pub const SYMBOL_CLASS: &str = "[$€£¥₹₩₽]";

/// Regex alternation matching every currency code in [`CURRENCIES`]
pub const CODE_ALTERNATION: &str = "USD|EUR|GBP|JPY|INR|KRW|RUB|CAD|AUD|CHF|CNY";

/// Financial scale suffixes and words
pub const SCALE_WORDS: &[(&str, &str)] = &[
    ("k", "thousand"),
    ("m", "million"),
    ("mm", "million"),
    ("b", "billion"),
    ("bn", "billion"),
    ("t", "trillion"),
    ("tn", "trillion"),
    ("thousand", "thousand"),
    ("million", "million"),
    ("billion", "billion"),
    ("trillion", "trillion"),
];

pub fn by_symbol(symbol: &str) -> Option<&'static CurrencyUnit> {
    CURRENCIES
        .iter()
        .find(|c| !c.symbol.is_empty() && c.symbol == symbol)
}

pub fn by_code(code: &str) -> Option<&'static CurrencyUnit> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

pub fn scale_word(suffix: &str) -> Option<&'static str> {
    let lower = suffix.to_lowercase();
    SCALE_WORDS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, word)| *word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_is_in_symbol_class() {
        for unit in CURRENCIES.iter().filter(|c| !c.symbol.is_empty()) {
            assert!(SYMBOL_CLASS.contains(unit.symbol), "{}", unit.symbol);
        }
    }

    #[test]
    fn test_every_code_is_in_alternation() {
        let codes: Vec<&str> = CODE_ALTERNATION.split('|').collect();
        for unit in CURRENCIES {
            assert!(codes.contains(&unit.code), "{}", unit.code);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(by_symbol("£").unwrap().minor(2), Some("pence"));
        assert_eq!(by_code("usd").unwrap().major(1), "dollar");
        assert_eq!(by_symbol("¥").unwrap().minor(5), None);
        assert!(by_symbol("").is_none());
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(scale_word("K"), Some("thousand"));
        assert_eq!(scale_word("Bn"), Some("billion"));
        assert_eq!(scale_word("Million"), Some("million"));
        assert_eq!(scale_word("x"), None);
    }
}
