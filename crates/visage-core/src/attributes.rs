//! Attribute discovery, display labels and view selection
//!
//! Every column except the key column is an attribute. Labels combine the
//! generic key with the original header, e.g. `A1 (EUR)`.

use serde::{Deserialize, Serialize};
use visage_io::{HeaderMap, KEY_COLUMN};
use visage_stats::AttributeMap;

use crate::error::{VisageError, VisageResult};

/// Attribute keys of a table, in column order
pub fn attribute_keys(header: &HeaderMap) -> Vec<String> {
    header
        .generic_keys()
        .filter(|key| *key != KEY_COLUMN)
        .map(str::to_string)
        .collect()
}

/// Display labels keyed by generic column key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeLabels {
    labels: AttributeMap<String>,
}

impl AttributeLabels {
    pub fn from_header(header: &HeaderMap) -> Self {
        let labels = header
            .iter()
            .map(|entry| {
                let original = entry.original.trim();
                let label = if entry.generic == KEY_COLUMN {
                    if original.is_empty() {
                        KEY_COLUMN.to_string()
                    } else {
                        original.to_string()
                    }
                } else if original.is_empty() || original == entry.generic {
                    entry.generic.clone()
                } else {
                    format!("{} ({})", entry.generic, original)
                };
                (entry.generic.clone(), label)
            })
            .collect();
        Self { labels }
    }

    /// Label for a generic key; unknown keys label as themselves
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Label of the key column
    pub fn key_label(&self) -> &str {
        self.label(KEY_COLUMN)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &String)> {
        self.labels.iter()
    }
}

/// Which attributes a view shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    #[default]
    All,
    Attribute(String),
}

impl Selection {
    /// `None` selects every attribute
    pub fn from_option(key: Option<&str>) -> Self {
        match key {
            Some(key) => Selection::Attribute(key.to_string()),
            None => Selection::All,
        }
    }

    /// Attribute keys to show, given the table's attributes
    pub fn resolve(&self, attributes: &[String]) -> VisageResult<Vec<String>> {
        match self {
            Selection::All => Ok(attributes.to_vec()),
            Selection::Attribute(key) if attributes.iter().any(|a| a == key) => {
                Ok(vec![key.clone()])
            }
            Selection::Attribute(key) => Err(VisageError::UnknownAttribute(key.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderMap {
        HeaderMap::from_originals(["Date", "EUR", " ", "A3", "CHF"])
    }

    #[test]
    fn test_attribute_keys_skip_key_column() {
        assert_eq!(attribute_keys(&header()), vec!["A1", "A2", "A3", "A4"]);
        assert!(attribute_keys(&HeaderMap::default()).is_empty());
    }

    #[test]
    fn test_labels() {
        let labels = AttributeLabels::from_header(&header());
        assert_eq!(labels.key_label(), "Date");
        assert_eq!(labels.label("A1"), "A1 (EUR)");
        assert_eq!(labels.label("A2"), "A2");
        assert_eq!(labels.label("A3"), "A3");
        assert_eq!(labels.label("A4"), "A4 (CHF)");
        assert_eq!(labels.label("A9"), "A9");
    }

    #[test]
    fn test_key_label_fallback() {
        let labels = AttributeLabels::from_header(&HeaderMap::from_originals(["", "x"]));
        assert_eq!(labels.key_label(), "Data");
    }

    #[test]
    fn test_selection_resolve() {
        let attributes = attribute_keys(&header());
        assert_eq!(Selection::All.resolve(&attributes).unwrap().len(), 4);
        assert_eq!(
            Selection::from_option(Some("A2")).resolve(&attributes).unwrap(),
            vec!["A2"]
        );
        assert!(matches!(
            Selection::from_option(Some("A7")).resolve(&attributes),
            Err(VisageError::UnknownAttribute(key)) if key == "A7"
        ));
    }
}
