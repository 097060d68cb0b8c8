//! Display formatting for operand strings.

use super::evaluation::parse_operand;

/// Format a stored operand for display.
///
/// The integer part is grouped with thousand separators. The fractional part,
/// including an empty one left by a trailing decimal point, is passed through
/// verbatim. An integer part that is not a number (`"-"`, `""`) renders as an
/// empty string.
pub fn format_operand(operand: &str) -> String {
    let (integer_digits, decimal_digits) = match operand.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (operand, None),
    };

    let integer_display = parse_operand(integer_digits)
        .map(format_with_separators)
        .unwrap_or_default();

    match decimal_digits {
        Some(decimals) => format!("{}.{}", integer_display, decimals),
        None => integer_display,
    }
}

/// Format an integral value with thousand separators.
///
/// Fractional digits are dropped. Negative zero keeps its sign so that
/// an operand typed as `-0.5` displays as `-0.5`. Integer parts too large
/// for an `f64` display as `∞`.
fn format_with_separators(value: f64) -> String {
    let is_negative = value.is_sign_negative();
    if value.is_infinite() {
        return if is_negative { "-∞" } else { "∞" }.to_string();
    }
    let s = format!("{}", value.abs().trunc());

    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let formatted: String = result.chars().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_operand("1234567.5"), "1,234,567.5");
        assert_eq!(format_operand("1000000"), "1,000,000");
        assert_eq!(format_operand("999"), "999");
        assert_eq!(format_operand("-1234"), "-1,234");
    }

    #[test]
    fn test_fraction_passed_through_verbatim() {
        assert_eq!(format_operand("12."), "12.");
        assert_eq!(format_operand("0.500"), "0.500");
        assert_eq!(format_operand("1234.000001"), "1,234.000001");
    }

    #[test]
    fn test_non_numeric_integer_part() {
        assert_eq!(format_operand("-"), "");
        assert_eq!(format_operand(""), "");
        assert_eq!(format_operand("-."), ".");
        assert_eq!(format_operand("Error"), "");
    }

    #[test]
    fn test_large_integers_keep_stored_digits() {
        assert_eq!(
            format_operand("12345678901234567000"),
            "12,345,678,901,234,567,000"
        );
        assert_eq!(
            format_operand("1152921504606847000"),
            "1,152,921,504,606,847,000"
        );
    }

    #[test]
    fn test_overflowing_integer_part() {
        assert_eq!(format_operand(&"9".repeat(400)), "∞");
        assert_eq!(format_operand(&format!("-{}.5", "9".repeat(400))), "-∞.5");
    }

    #[test]
    fn test_negative_zero_integer_part() {
        assert_eq!(format_operand("-0.5"), "-0.5");
        assert_eq!(format_operand("-007"), "-7");
    }
}
