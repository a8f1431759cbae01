//! Conversions between display text and numbers.
//!
//! Results are rendered the way a pocket calculator display expects:
//! integral values carry no fractional part, negative zero reads as `0`, and
//! very large or very small magnitudes switch to exponential notation with
//! an explicit exponent sign.

/// Magnitude at or above which numbers render in exponential form.
const EXPONENTIAL_UPPER: f64 = 1e21;

/// Non-zero magnitude below which numbers render in exponential form.
const EXPONENTIAL_LOWER: f64 = 1e-6;

/// Render a number as display text.
///
/// # Example
///
/// ```rust
/// use keycalc::core::format_number;
///
/// assert_eq!(format_number(56.0), "56");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENTIAL_UPPER || magnitude < EXPONENTIAL_LOWER {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Read the numeric value of display text.
///
/// Uses the longest leading prefix that parses as a number, so a trailing
/// decimal point (`"3."`) or stray characters never make the display
/// unreadable. Text with no numeric prefix reads as `0.0`.
///
/// ```rust
/// use keycalc::core::parse_operand;
///
/// assert_eq!(parse_operand("3."), 3.0);
/// assert_eq!(parse_operand("0.25"), 0.25);
/// assert_eq!(parse_operand("1e+21."), 1e21);
/// assert_eq!(parse_operand(""), 0.0);
/// ```
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions_use_shortest_round_trip() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn extreme_magnitudes_switch_to_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
    }

    #[test]
    fn non_finite_values_are_named() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn parse_reads_display_text() {
        assert_eq!(parse_operand("0"), 0.0);
        assert_eq!(parse_operand("42"), 42.0);
        assert_eq!(parse_operand("-7.25"), -7.25);
        assert_eq!(parse_operand("0."), 0.0);
        assert_eq!(parse_operand("1e-7"), 1e-7);
    }

    #[test]
    fn parse_uses_longest_numeric_prefix() {
        assert_eq!(parse_operand("12.5."), 12.5);
        assert_eq!(parse_operand("Infinity5"), f64::INFINITY);
        assert_eq!(parse_operand("abc"), 0.0);
    }

    #[test]
    fn formatted_numbers_parse_back() {
        for value in [0.0, 1.0, -56.0, 0.1 + 0.2, 1e21, 3.5e-9, 123456.789] {
            assert_eq!(parse_operand(&format_number(value)), value);
        }
    }
}
