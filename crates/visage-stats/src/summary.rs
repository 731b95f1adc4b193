//! Descriptive statistics for a numeric series
//!
//! Provides one fixed-shape record per series:
//! - Location: mean, median, mode
//! - Spread: sample standard deviation, quartiles, min, max, range
//! - Shape: bias-corrected skewness and excess kurtosis
//!
//! Statistics that are undefined for the sample size or shape are absent
//! (`None`) rather than NaN or infinite.

use serde::{Deserialize, Serialize};

use crate::mode::mode;
use crate::quantile::{quantile, sort_ascending, QuantileTriple};

/// Summary statistics for one attribute's series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (same value as `q2`)
    pub median: f64,
    /// Most frequent value after rounding to three decimals
    pub mode: f64,
    /// Sample standard deviation (Bessel-corrected, 0 for a single value)
    pub std_dev: f64,
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub q2: f64,
    /// 75th percentile
    pub q3: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// `max - min`
    pub range: f64,
    /// Adjusted Fisher-Pearson skewness, needs more than 2 values
    pub skewness: Option<f64>,
    /// Sample excess kurtosis, needs more than 3 values
    pub kurtosis: Option<f64>,
}

impl StatisticsSummary {
    /// Sample variance (square of `std_dev`)
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// The quartiles as a triple
    pub fn quartiles(&self) -> QuantileTriple {
        QuantileTriple {
            q1: self.q1,
            q2: self.q2,
            q3: self.q3,
        }
    }
}

/// Central moment sums of a series around its mean
struct MomentSums {
    m2: f64,
    m3: f64,
    m4: f64,
}

impl MomentSums {
    fn accumulate(series: &[f64], mean: f64) -> Self {
        let mut sums = Self {
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
        };
        for &x in series {
            let d = x - mean;
            let d2 = d * d;
            sums.m2 += d2;
            sums.m3 += d2 * d;
            sums.m4 += d2 * d2;
        }
        sums
    }
}

/// Compute summary statistics for a series
///
/// Returns `None` for an empty series. The series is used in its original
/// order for the moments and the mode; quantiles come from a sorted copy.
pub fn compute_stats(series: &[f64]) -> Option<StatisticsSummary> {
    let n = series.len();
    if n == 0 {
        return None;
    }

    let sorted = sort_ascending(series);
    let sum: f64 = series.iter().sum();
    let mean = sum / n as f64;

    let median = quantile(&sorted, 0.5)?;
    let q1 = quantile(&sorted, 0.25)?;
    let q3 = quantile(&sorted, 0.75)?;
    let min = sorted[0];
    let max = sorted[n - 1];

    let moments = MomentSums::accumulate(series, mean);
    let nf = n as f64;

    let variance = if n > 1 { moments.m2 / (nf - 1.0) } else { 0.0 };
    let std_dev = variance.sqrt();
    let usable_spread = std_dev != 0.0 && std_dev.is_finite();

    let skewness = if n > 2 && usable_spread {
        finite(nf * moments.m3 / ((nf - 1.0) * (nf - 2.0) * std_dev.powi(3)))
    } else {
        None
    };

    let kurtosis = if n > 3 && usable_spread {
        let scale = (nf * (nf + 1.0)) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
        let correction = 3.0 * (nf - 1.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0));
        finite(scale * (moments.m4 / std_dev.powi(4)) - correction)
    } else {
        None
    };

    Some(StatisticsSummary {
        count: n,
        mean,
        median,
        mode: mode(series)?,
        std_dev,
        q1,
        q2: median,
        q3,
        min,
        max,
        range: max - min,
        skewness,
        kurtosis,
    })
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
