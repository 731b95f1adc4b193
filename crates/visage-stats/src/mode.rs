//! Frequency-based mode with fixed-precision bucketing
//!
//! Values are bucketed by rounding to three decimal digits before counting,
//! so `1.0001` and `1.0002` both land in the `1.000` bucket. Ties between
//! equally frequent buckets resolve to the bucket that was seen first in the
//! input.

use std::collections::HashMap;

/// Number of decimal digits kept when bucketing values
pub const MODE_PRECISION: usize = 3;

/// Most frequent value of a series after rounding to [`MODE_PRECISION`] digits
///
/// Returns `None` for an empty series. The returned value is the rounded
/// bucket value, not one of the original samples.
pub fn mode(series: &[f64]) -> Option<f64> {
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut buckets: Vec<(f64, usize)> = Vec::new();

    for &value in series {
        let key = round_to_precision(value);
        match index.get(&key.to_bits()) {
            Some(&slot) => buckets[slot].1 += 1,
            None => {
                index.insert(key.to_bits(), buckets.len());
                buckets.push((key, 1));
            }
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for &(value, count) in &buckets {
        // Strictly greater: the earliest bucket keeps a tie.
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Round to three decimals the way a fixed-point decimal formatter does
///
/// The exact binary value decides the rounding direction. Values exactly
/// half-way between two thousandths round away from zero. Such values are
/// precisely the odd multiples of 1/16, and for them `x * 1000` is exact.
pub fn round_to_precision(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let sixteenths = value * 16.0;
    let rounded = if sixteenths.fract() == 0.0 && sixteenths.abs() % 2.0 == 1.0 {
        (value * 1000.0).round() / 1000.0
    } else {
        format!("{:.*}", MODE_PRECISION, value)
            .parse::<f64>()
            .unwrap_or(value)
    };

    // -0.0 and 0.0 share a bucket
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_mode_single() {
        assert_eq!(mode(&[4.25]), Some(4.25));
    }

    #[test]
    fn test_mode_most_frequent() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 2.0, 1.0]), Some(2.0));
    }

    #[test]
    fn test_mode_tie_resolves_to_first_inserted_bucket() {
        // 1.0001 and 1.0002 share the 1.000 bucket, which ties with 2.
        assert_eq!(mode(&[1.0001, 1.0002, 2.0, 2.0]), Some(1.0));
        // Same counts, other order: 2 is seen first.
        assert_eq!(mode(&[2.0, 2.0, 1.0001, 1.0002]), Some(2.0));
    }

    #[test]
    fn test_mode_all_distinct_returns_first() {
        assert_eq!(mode(&[5.0, 3.0, 9.0]), Some(5.0));
    }

    #[test]
    fn test_mode_returns_bucket_value() {
        assert_eq!(mode(&[0.12345, 0.12349, 7.0]), Some(0.123));
    }

    #[rstest]
    #[case(1.0001, 1.0)]
    #[case(2.71828, 2.718)]
    #[case(-2.71828, -2.718)]
    #[case(0.0625, 0.063)]
    #[case(-0.0625, -0.063)]
    #[case(0.1875, 0.188)]
    #[case(-0.0001, 0.0)]
    #[case(123456.0, 123456.0)]
    fn test_round_to_precision(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_to_precision(value), expected);
    }

    #[test]
    fn test_negative_zero_shares_bucket() {
        assert_eq!(mode(&[-0.0001, 0.0, 5.0]), Some(0.0));
    }
}
