/// Spoken forms for money amounts
///
/// Examples:
/// - $23.45 → "twenty-three dollars and forty-five cents"
/// - $0.50 → "fifty cents"
/// - $10.3 billion → "ten point three billion dollars"
/// - ¥500 → "five hundred yen"
use super::numbers::{cardinal, decimal};
use crate::rules::CurrencyUnit;

/// Round a fraction string to whole minor units (cents)
///
/// Returns the minor units and whether rounding carried into the next major
/// unit ("0.999" → (0, true)).
fn minor_units(fraction: &str) -> (u64, bool) {
    let digits: Vec<u64> = fraction
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .collect();

    let tens = digits.first().copied().unwrap_or(0);
    let ones = digits.get(1).copied().unwrap_or(0);
    let mut cents = tens * 10 + ones;
    if digits.get(2).copied().unwrap_or(0) >= 5 {
        cents += 1;
    }

    if cents >= 100 {
        (cents - 100, true)
    } else {
        (cents, false)
    }
}

/// Format an amount in a currency with a minor unit, or "point" digits without one
///
/// Trailing ".00" is dropped, fractions beyond two digits are rounded to the
/// minor unit, and zero reads "zero dollars".
pub fn format_currency_for_speech(unit: &CurrencyUnit, whole: u64, fraction: Option<&str>) -> String {
    let fraction = fraction.filter(|f| f.chars().any(|c| c != '0'));

    if unit.minor_plural.is_none() {
        return match fraction {
            Some(f) => format!("{} {}", decimal(whole, f), unit.plural),
            None => format!("{} {}", cardinal(whole), unit.major(whole)),
        };
    }

    let (cents, carry) = fraction.map_or((0, false), minor_units);
    let whole = if carry { whole.saturating_add(1) } else { whole };

    let major = |n: u64| format!("{} {}", cardinal(n), unit.major(n));
    let minor = |n: u64| match unit.minor(n) {
        Some(name) => format!("{} {}", cardinal(n), name),
        None => cardinal(n),
    };

    match (whole, cents) {
        (0, 0) => format!("zero {}", unit.plural),
        (0, c) => minor(c),
        (d, 0) => major(d),
        (d, c) => format!("{} and {}", major(d), minor(c)),
    }
}

/// Format an amount with a scale word ("two point three million dollars")
///
/// Scaled amounts always take the plural unit.
pub fn format_scaled_for_speech(
    unit: &CurrencyUnit,
    whole: u64,
    fraction: Option<&str>,
    scale: &str,
) -> String {
    let fraction = fraction.map(|f| f.trim_end_matches('0')).unwrap_or("");
    format!("{} {} {}", decimal(whole, fraction), scale, unit.plural)
}

/// Format a bare cents amount ("50¢" → "fifty cents")
pub fn format_cents_for_speech(cents: u64) -> String {
    if cents == 1 {
        "one cent".to_string()
    } else {
        format!("{} cents", cardinal(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::currency::{by_code, by_symbol};

    fn dollars() -> &'static CurrencyUnit {
        by_symbol("$").unwrap()
    }

    #[test]
    fn test_format_currency_for_speech() {
        assert_eq!(
            format_currency_for_speech(dollars(), 23, Some("45")),
            "twenty-three dollars and forty-five cents"
        );
        assert_eq!(format_currency_for_speech(dollars(), 1, None), "one dollar");
        assert_eq!(format_currency_for_speech(dollars(), 0, Some("01")), "one cent");
        assert_eq!(
            format_currency_for_speech(dollars(), 100, None),
            "one hundred dollars"
        );
    }

    #[test]
    fn test_zero_and_trailing_zeros() {
        assert_eq!(format_currency_for_speech(dollars(), 0, None), "zero dollars");
        assert_eq!(format_currency_for_speech(dollars(), 0, Some("00")), "zero dollars");
        assert_eq!(format_currency_for_speech(dollars(), 5, Some("00")), "five dollars");
        assert_eq!(format_currency_for_speech(dollars(), 0, Some("50")), "fifty cents");
    }

    #[test]
    fn test_single_fraction_digit_is_tens_of_cents() {
        assert_eq!(
            format_currency_for_speech(dollars(), 1, Some("5")),
            "one dollar and fifty cents"
        );
    }

    #[test]
    fn test_long_fraction_rounds() {
        assert_eq!(
            format_currency_for_speech(dollars(), 2, Some("499")),
            "two dollars and fifty cents"
        );
        assert_eq!(
            format_currency_for_speech(dollars(), 0, Some("999")),
            "one dollar"
        );
    }

    #[test]
    fn test_pounds_and_pence() {
        let pounds = by_symbol("£").unwrap();
        assert_eq!(
            format_currency_for_speech(pounds, 3, Some("01")),
            "three pounds and one penny"
        );
        assert_eq!(format_currency_for_speech(pounds, 0, Some("20")), "twenty pence");
    }

    #[test]
    fn test_currency_without_minor_unit() {
        let yen = by_symbol("¥").unwrap();
        assert_eq!(format_currency_for_speech(yen, 500, None), "five hundred yen");
        assert_eq!(format_currency_for_speech(yen, 2, Some("5")), "two point five yen");
    }

    #[test]
    fn test_code_only_currency() {
        let cad = by_code("CAD").unwrap();
        assert_eq!(
            format_currency_for_speech(cad, 1, None),
            "one Canadian dollar"
        );
    }

    #[test]
    fn test_format_scaled_for_speech() {
        assert_eq!(
            format_scaled_for_speech(dollars(), 10, Some("3"), "billion"),
            "ten point three billion dollars"
        );
        assert_eq!(
            format_scaled_for_speech(dollars(), 2, Some("50"), "million"),
            "two point five million dollars"
        );
        assert_eq!(
            format_scaled_for_speech(dollars(), 1, None, "million"),
            "one million dollars"
        );
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents_for_speech(1), "one cent");
        assert_eq!(format_cents_for_speech(50), "fifty cents");
    }
}
