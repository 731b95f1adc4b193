//! Per-attribute aggregation over tabular rows
//!
//! The driver takes an explicit list of attribute keys, extracts each
//! attribute's numeric series from the rows and computes its statistics
//! independently. Which columns count as attributes is decided by the
//! caller.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::level::{classify_level, LevelReading};
use crate::summary::{compute_stats, StatisticsSummary};

/// A row that can yield a possibly-missing number for a column key
pub trait Record {
    /// Numeric value of the cell under `key`, if there is one
    fn number(&self, key: &str) -> Option<f64>;
}

impl<R: Record + ?Sized> Record for &R {
    fn number(&self, key: &str) -> Option<f64> {
        (**self).number(key)
    }
}

impl Record for std::collections::HashMap<String, Option<f64>> {
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).copied().flatten()
    }
}

impl Record for std::collections::BTreeMap<String, Option<f64>> {
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).copied().flatten()
    }
}

/// Numeric series of one attribute
///
/// Keeps row order and silently drops cells that are missing or not finite.
pub fn extract_series<R: Record>(rows: &[R], key: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| row.number(key))
        .filter(|value| value.is_finite())
        .collect()
}

/// Insertion-ordered mapping from attribute key to a per-attribute result
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> AttributeMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, keeping the first position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for an attribute key
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether the map has an entry for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Attribute keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for AttributeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for AttributeMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for AttributeMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Apply `compute` to each attribute's series
///
/// Duplicate attribute keys are computed once, at their first position.
fn per_attribute<R, S, T>(
    rows: &[R],
    attributes: &[S],
    compute: impl Fn(&[f64]) -> T,
) -> AttributeMap<T>
where
    R: Record,
    S: AsRef<str>,
{
    let mut result = AttributeMap::new();
    for attribute in attributes {
        let key = attribute.as_ref();
        if result.contains_key(key) {
            continue;
        }
        let series = extract_series(rows, key);
        result.insert(key, compute(&series));
    }
    result
}

/// Summary statistics for each listed attribute
///
/// An attribute without any finite value maps to `None`.
pub fn aggregate<R, S>(rows: &[R], attributes: &[S]) -> AttributeMap<Option<StatisticsSummary>>
where
    R: Record,
    S: AsRef<str>,
{
    per_attribute(rows, attributes, compute_stats)
}

/// Level reading for each listed attribute
pub fn aggregate_levels<R, S>(rows: &[R], attributes: &[S]) -> AttributeMap<Option<LevelReading>>
where
    R: Record,
    S: AsRef<str>,
{
    per_attribute(rows, attributes, classify_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use std::collections::HashMap;

    type Row = HashMap<String, Option<f64>>;

    fn row(cells: &[(&str, Option<f64>)]) -> Row {
        cells.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            row(&[("A1", Some(1.0)), ("A2", Some(10.0))]),
            row(&[("A1", Some(2.0)), ("A2", None)]),
            row(&[("A1", Some(3.0)), ("A2", Some(f64::NAN))]),
            row(&[("A1", Some(4.0)), ("A2", Some(30.0))]),
            row(&[("A1", Some(5.0)), ("A2", Some(f64::INFINITY))]),
        ]
    }

    #[test]
    fn test_extract_series_drops_missing_and_non_finite() {
        let rows = sample_rows();
        assert_eq!(extract_series(&rows, "A1"), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(extract_series(&rows, "A2"), vec![10.0, 30.0]);
        assert!(extract_series(&rows, "A9").is_empty());
    }

    #[test]
    fn test_aggregate_per_attribute() {
        let rows = sample_rows();
        let stats = aggregate(&rows, &["A1", "A2", "A9"]);

        assert_eq!(stats.keys().collect::<Vec<_>>(), vec!["A1", "A2", "A9"]);

        let a1 = stats.get("A1").unwrap().as_ref().unwrap();
        assert_eq!(a1.count, 5);
        assert_eq!(a1.mean, 3.0);

        let a2 = stats.get("A2").unwrap().as_ref().unwrap();
        assert_eq!(a2.count, 2);
        assert_eq!(a2.mean, 20.0);

        assert!(stats.get("A9").unwrap().is_none());
    }

    #[test]
    fn test_aggregate_independence() {
        let rows = sample_rows();
        let before = aggregate(&rows, &["A1", "A2"]);

        let stripped: Vec<Row> = rows
            .iter()
            .map(|r| {
                let mut r = r.clone();
                r.remove("A2");
                r
            })
            .collect();
        let after = aggregate(&stripped, &["A1", "A2"]);

        assert_eq!(before.get("A1"), after.get("A1"));
        assert!(after.get("A2").unwrap().is_none());
    }

    #[test]
    fn test_aggregate_duplicate_attribute_once() {
        let rows = sample_rows();
        let stats = aggregate(&rows, &["A1", "A1"]);
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_aggregate_levels() {
        let rows = sample_rows();
        let levels = aggregate_levels(&rows, &["A1".to_string(), "A2".to_string()]);

        assert_eq!(levels.get("A1").unwrap().unwrap().level, Level::High);
        // A2 series is [10, 30]: q1 = 15, q3 = 25, last 30
        assert_eq!(levels.get("A2").unwrap().unwrap().level, Level::High);
    }

    #[test]
    fn test_attribute_map_serializes_in_order() {
        let map: AttributeMap<u32> = [("A2", 2), ("A1", 1), ("A10", 10)].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"A2":2,"A1":1,"A10":10}"#);
    }
}
