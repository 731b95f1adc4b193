//! Time-series chart data
//!
//! Points keep the key column text as the x value. Missing cells stay in the
//! series as gaps so every attribute has one point per row.

use serde::{Deserialize, Serialize};
use visage_io::Table;
use visage_stats::Record;

/// Fraction of the value range added above and below the data
const DOMAIN_PADDING: f64 = 0.1;

/// Y axis extent shared by every plotted attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDomain {
    pub min: f64,
    pub max: f64,
}

impl ChartDomain {
    /// Padded extent over every finite value of the given attributes
    ///
    /// Returns `None` when none of the attributes has a finite value. A flat
    /// range is padded as if it spanned 1.
    pub fn from_table<S: AsRef<str>>(table: &Table, attributes: &[S]) -> Option<Self> {
        let (min, max) = table
            .rows
            .iter()
            .flat_map(|row| attributes.iter().filter_map(|a| row.number(a.as_ref())))
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })?;

        let range = max - min;
        let range = if range == 0.0 { 1.0 } else { range };
        let pad = range * DOMAIN_PADDING;
        Some(Self {
            min: min - pad,
            max: max + pad,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One point of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub key: String,
    pub value: Option<f64>,
}

/// All points of one attribute, in row order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub attribute: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Number of points with a value
    pub fn value_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }

    /// Most recent point that has a value
    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.iter().rev().find(|p| p.value.is_some())
    }
}

/// Series of one attribute for plotting
pub fn chart_series(table: &Table, attribute: &str) -> ChartSeries {
    let points = table
        .rows
        .iter()
        .map(|row| ChartPoint {
            key: row.key().to_string(),
            value: row.number(attribute).filter(|v| v.is_finite()),
        })
        .collect();

    ChartSeries {
        attribute: attribute.to_string(),
        points,
    }
}
