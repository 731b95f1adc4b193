//! Lenient number parsing for attribute cells
//!
//! Spreadsheet exports are messy: decimal commas, units after the value,
//! stray whitespace. A cell is read by taking the longest numeric prefix
//! after turning the first `,` into `.`; anything that does not start with
//! a number is missing.

/// Parse an attribute cell
///
/// Replaces the first `,` with `.` and reads the leading number. Returns
/// `None` for text without a numeric prefix and for non-finite results.
pub fn parse_cell_number(text: &str) -> Option<f64> {
    let normalized = text.replacen(',', ".", 1);
    parse_leading_number(&normalized).filter(|value| value.is_finite())
}

/// Read the longest decimal literal at the start of `text`
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction and exponent, or `Infinity`. Trailing characters are ignored,
/// so `"12.5kg"` reads as `12.5`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(42.0))]
    #[case("  -3.5", Some(-3.5))]
    #[case("+7", Some(7.0))]
    #[case(".25", Some(0.25))]
    #[case("5.", Some(5.0))]
    #[case("1e3", Some(1000.0))]
    #[case("2.5E-1x", Some(0.25))]
    #[case("12.5kg", Some(12.5))]
    #[case("3e", Some(3.0))]
    #[case("Infinity", Some(f64::INFINITY))]
    #[case("-Infinity", Some(f64::NEG_INFINITY))]
    #[case("", None)]
    #[case("abc", None)]
    #[case(".", None)]
    #[case("-", None)]
    #[case("n/a", None)]
    fn test_parse_leading_number(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_leading_number(input), expected);
    }

    #[rstest]
    #[case("4,35", Some(4.35))]
    #[case("1,234,5", Some(1.234))]
    #[case("  17 ", Some(17.0))]
    #[case("Infinity", None)]
    #[case("", None)]
    #[case("-", None)]
    fn test_parse_cell_number(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_cell_number(input), expected);
    }
}
