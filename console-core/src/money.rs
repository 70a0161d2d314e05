//! Money helpers using rust_decimal for precision
//!
//! All monetary arithmetic runs on `Decimal` and converts back to `f64`
//! only at the wire boundary. Amounts are whole currency units (the
//! backend stores VND), rounded half away from zero.

use rust_decimal::prelude::*;

/// Rounding for monetary values (whole currency units).
const DECIMAL_PLACES: u32 = 0;

/// Separator inserted between thousands groups when displaying money.
const GROUP_SEPARATOR: char = ' ';

/// Convert f64 to Decimal for calculation
///
/// Non-finite input logs and clamps to zero rather than corrupting a
/// money calculation; invalid user input is coerced, not rejected.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for the wire, rounded to whole units
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: a Decimal rounded to whole units is always within f64
        // representable range
        .expect("Decimal rounded to whole units is always representable as f64")
}

/// Round a raw amount to whole currency units.
#[inline]
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Compare two monetary values after rounding to whole units.
pub fn money_eq(a: f64, b: f64) -> bool {
    round_money(a) == round_money(b)
}

/// Format an amount with thousands grouping: `500000` -> `"500 000"`.
pub fn format_money(value: f64) -> String {
    let rounded = to_decimal(value)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Parse operator-entered money text, stripping grouping characters
/// (spaces, commas, underscores) first. Invalid input parses to zero;
/// the console coerces silently instead of raising a validation error.
pub fn parse_money(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | ',' | '_'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse::<f64>().map(round_money).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_space_grouping() {
        assert_eq!(format_money(500000.0), "500 000");
        assert_eq!(format_money(1234567.0), "1 234 567");
        assert_eq!(format_money(999.0), "999");
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(-45000.0), "-45 000");
    }

    #[test]
    fn rounds_to_whole_units_half_away_from_zero() {
        assert_eq!(round_money(49999.5), 50000.0);
        assert_eq!(round_money(49999.4), 49999.0);
        assert_eq!(round_money(-0.5), -1.0);
    }

    #[test]
    fn parse_strips_grouping() {
        assert_eq!(parse_money("500 000"), 500000.0);
        assert_eq!(parse_money("1,234,567"), 1234567.0);
        assert_eq!(parse_money("  45000 "), 45000.0);
    }

    #[test]
    fn invalid_input_parses_to_zero() {
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("abc"), 0.0);
        assert_eq!(parse_money("12x3"), 0.0);
    }

    #[test]
    fn format_parse_round_trip() {
        for x in [0.0, 7.0, 999.0, 1000.0, 50000.0, 500000.0, 123456789.0] {
            assert_eq!(parse_money(&format_money(x)), round_money(x), "x = {x}");
        }
    }

    #[test]
    fn money_eq_compares_rounded_values() {
        assert!(money_eq(49999.6, 50000.0));
        assert!(money_eq(50000.4, 50000.0));
        assert!(!money_eq(49999.0, 50000.0));
    }

    #[test]
    fn non_finite_clamps_to_zero() {
        assert_eq!(round_money(f64::NAN), 0.0);
        assert_eq!(round_money(f64::INFINITY), 0.0);
        assert_eq!(parse_money("inf"), 0.0);
    }
}
