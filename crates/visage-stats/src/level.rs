//! Quantile-based level classification
//!
//! The most recent observation of a series is placed against the series'
//! quartiles and assigned one of three coarse levels:
//!
//! - `Low`: last value at or below Q1
//! - `Mid`: above Q1, at or below Q3
//! - `High`: above Q3
//!
//! Q2 is reported alongside but is not a boundary, so roughly the middle
//! half of the historical spread reads as `Mid`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::quantile::QuantileTriple;

/// Discrete level of the latest observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Mid,
    High,
}

impl Level {
    /// Classify a value against a quartile triple
    pub fn classify(value: f64, quartiles: &QuantileTriple) -> Self {
        if value <= quartiles.q1 {
            Level::Low
        } else if value <= quartiles.q3 {
            Level::Mid
        } else {
            Level::High
        }
    }

    /// All levels, lowest first
    pub fn all() -> [Level; 3] {
        [Level::Low, Level::Mid, Level::High]
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Mid => "mid",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level of a series together with the values it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelReading {
    pub level: Level,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// Last element of the series in its original order
    pub last_value: f64,
}

impl LevelReading {
    pub fn quartiles(&self) -> QuantileTriple {
        QuantileTriple {
            q1: self.q1,
            q2: self.q2,
            q3: self.q3,
        }
    }
}

/// Classify the most recent observation of a series
///
/// Returns `None` for an empty series.
pub fn classify_level(series: &[f64]) -> Option<LevelReading> {
    let last_value = *series.last()?;
    let quartiles = QuantileTriple::from_series(series)?;

    Some(LevelReading {
        level: Level::classify(last_value, &quartiles),
        q1: quartiles.q1,
        q2: quartiles.q2,
        q3: quartiles.q3,
        last_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_classify_empty() {
        assert!(classify_level(&[]).is_none());
    }

    #[test]
    fn test_last_value_above_q3_is_high() {
        let reading = classify_level(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert_eq!(reading.q1, 20.0);
        assert_eq!(reading.q2, 30.0);
        assert_eq!(reading.q3, 40.0);
        assert_eq!(reading.last_value, 50.0);
        assert_eq!(reading.level, Level::High);
    }

    #[test]
    fn test_last_value_between_quartiles_is_mid() {
        // Sorted: 10, 20, 25, 30, 40 -> q1 = 20, q3 = 30
        let reading = classify_level(&[10.0, 20.0, 30.0, 40.0, 25.0]).unwrap();
        assert_eq!(reading.last_value, 25.0);
        assert_eq!(reading.level, Level::Mid);
    }

    #[test]
    fn test_last_value_equal_to_q1_is_low() {
        // Sorted: 10, 20, 20, 30, 40 -> q1 = 20
        let reading = classify_level(&[10.0, 20.0, 30.0, 40.0, 20.0]).unwrap();
        assert_eq!(reading.q1, 20.0);
        assert_eq!(reading.level, Level::Low);
    }

    #[rstest]
    #[case(20.0, Level::Low)]
    #[case(15.0, Level::Low)]
    #[case(25.0, Level::Mid)]
    #[case(30.0, Level::Mid)]
    #[case(40.0, Level::Mid)]
    #[case(40.5, Level::High)]
    fn test_classify_boundaries(#[case] value: f64, #[case] expected: Level) {
        let quartiles = QuantileTriple {
            q1: 20.0,
            q2: 30.0,
            q3: 40.0,
        };
        assert_eq!(Level::classify(value, &quartiles), expected);
    }

    #[test]
    fn test_single_value_is_low() {
        let reading = classify_level(&[7.0]).unwrap();
        assert_eq!(reading.level, Level::Low);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let reading = classify_level(&[1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(json["level"], "high");
        assert_eq!(json["lastValue"], 3.0);
        assert_eq!(Level::Mid.to_string(), "mid");
    }
}
