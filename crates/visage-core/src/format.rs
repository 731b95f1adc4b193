//! Number formatting for tables and reports

/// Placeholder for a value that could not be computed
pub const MISSING: &str = "–";

/// Format with a fixed number of fraction digits; absent or NaN prints as `–`
pub fn format_number(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.digits$}"),
        _ => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3.14159), 4, "3.1416")]
    #[case(Some(2.0), 0, "2")]
    #[case(Some(-0.5), 2, "-0.50")]
    #[case(None, 4, "–")]
    #[case(Some(f64::NAN), 4, "–")]
    fn test_format_number(#[case] value: Option<f64>, #[case] digits: usize, #[case] expected: &str) {
        assert_eq!(format_number(value, digits), expected);
    }
}
