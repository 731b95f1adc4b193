//! Linear-interpolation quantiles
//!
//! A quantile at probability `p` is read off a sorted sample by placing `p`
//! on the index axis `[0, n-1]` and interpolating between the two
//! neighbouring order statistics. This is the only quantile definition used
//! anywhere in visage.

use serde::{Deserialize, Serialize};

/// Quantile of an ascending slice at probability `p`
///
/// Returns `None` only for an empty slice. A single element is returned
/// as-is for every `p`. `p` is clamped to `[0, 1]`.
///
/// The slice must already be sorted ascending; see [`sort_ascending`].
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    debug_assert!(
        !sorted.windows(2).any(|w| w[0] > w[1]),
        "quantile input must be sorted ascending"
    );

    let n = sorted.len();
    match n {
        0 => None,
        1 => Some(sorted[0]),
        _ => {
            let pos = (n - 1) as f64 * p.clamp(0.0, 1.0);
            let lower_index = pos.floor() as usize;
            let upper_index = pos.ceil() as usize;

            if lower_index == upper_index {
                return Some(sorted[lower_index]);
            }

            let lower = sorted[lower_index];
            let upper = sorted[upper_index];
            let fraction = pos - lower_index as f64;
            Some(lower + (upper - lower) * fraction)
        }
    }
}

/// Sorted copy of a series
///
/// Uses the IEEE total order so the result is deterministic for any input.
pub fn sort_ascending(series: &[f64]) -> Vec<f64> {
    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Lower quartile, median and upper quartile of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileTriple {
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile (median)
    pub q2: f64,
    /// 75th percentile
    pub q3: f64,
}

impl QuantileTriple {
    /// Quartiles of an already sorted slice
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            q1: quantile(sorted, 0.25)?,
            q2: quantile(sorted, 0.5)?,
            q3: quantile(sorted, 0.75)?,
        })
    }

    /// Quartiles of an unsorted series (sorts a copy)
    pub fn from_series(series: &[f64]) -> Option<Self> {
        Self::from_sorted(&sort_ascending(series))
    }

    /// Interquartile range (Q3 - Q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(1.0)]
    fn test_quantile_single_element(#[case] p: f64) {
        assert_eq!(quantile(&[7.5], p), Some(7.5));
    }

    #[rstest]
    #[case(0.25, 2.0)]
    #[case(0.5, 3.0)]
    #[case(0.75, 4.0)]
    fn test_quantile_exact_index(#[case] p: f64, #[case] expected: f64) {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&sorted, p), Some(expected));
    }

    #[test]
    fn test_quantile_interpolates() {
        // pos = 3 * 0.5 = 1.5 -> halfway between 20 and 30
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile(&sorted, 0.5), Some(25.0));

        // pos = 3 * 0.25 = 0.75 -> 10 + 10 * 0.75
        assert_eq!(quantile(&sorted, 0.25), Some(17.5));
    }

    #[test]
    fn test_quantile_clamps_probability() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sorted, -1.0), Some(1.0));
        assert_eq!(quantile(&sorted, 2.0), Some(3.0));
    }

    #[test]
    fn test_sort_ascending_leaves_input_untouched() {
        let series = vec![3.0, 1.0, 2.0];
        let sorted = sort_ascending(&series);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(series, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_quantile_triple_from_series() {
        let triple = QuantileTriple::from_series(&[50.0, 10.0, 40.0, 20.0, 30.0]).unwrap();
        assert_eq!(triple.q1, 20.0);
        assert_eq!(triple.q2, 30.0);
        assert_eq!(triple.q3, 40.0);
        assert_eq!(triple.iqr(), 20.0);
        assert!(QuantileTriple::from_series(&[]).is_none());
    }

    // Integer-valued samples keep the interpolation arithmetic exact.
    fn finite_series() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1_000_000i32..1_000_000, 1..64)
            .prop_map(|v| v.into_iter().map(f64::from).collect())
    }

    proptest! {
        #[test]
        fn test_quantile_monotone_in_p(
            series in finite_series(),
            a in 0.0..=1.0f64,
            b in 0.0..=1.0f64,
        ) {
            let sorted = sort_ascending(&series);
            let (p1, p2) = if a <= b { (a, b) } else { (b, a) };
            let low = quantile(&sorted, p1).unwrap();
            let high = quantile(&sorted, p2).unwrap();
            prop_assert!(low <= high, "q({}) = {} > q({}) = {}", p1, low, p2, high);
        }

        #[test]
        fn test_quantile_boundaries(series in finite_series()) {
            let sorted = sort_ascending(&series);
            prop_assert_eq!(quantile(&sorted, 0.0), Some(sorted[0]));
            prop_assert_eq!(quantile(&sorted, 1.0), Some(sorted[sorted.len() - 1]));
        }

        #[test]
        fn test_quartiles_ordered(series in finite_series()) {
            let triple = QuantileTriple::from_series(&series).unwrap();
            prop_assert!(triple.q1 <= triple.q2);
            prop_assert!(triple.q2 <= triple.q3);
        }
    }
}
