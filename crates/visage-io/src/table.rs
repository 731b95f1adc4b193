//! Generic table model produced by every reader
//!
//! The first source column becomes the key column [`KEY_COLUMN`] and keeps
//! its text; every following column becomes an attribute `A1`, `A2`, ...
//! holding a number or nothing. The original header names are kept in the
//! [`HeaderMap`] for display only.

use serde::{Deserialize, Serialize};
use visage_stats::Record;

use crate::number::parse_cell_number;

/// Generic key of the first (date-like) column
pub const KEY_COLUMN: &str = "Data";

/// Generic key for the column at `index` (0 is the key column)
pub fn generic_key(index: usize) -> String {
    if index == 0 {
        KEY_COLUMN.to_string()
    } else {
        format!("A{index}")
    }
}

/// A cell as it comes out of a source file, before mapping
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    /// Spreadsheet date: serial day number plus its display form
    Date { serial: f64, display: String },
}

impl RawCell {
    /// Display text of the cell (as used for headers and the key column)
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(s) => s.trim().to_string(),
            RawCell::Number(n) => n.to_string(),
            RawCell::Date { display, .. } => display.clone(),
        }
    }

    /// Numeric value of the cell, if it has a finite one
    pub fn to_number(&self) -> Option<f64> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(s) => parse_cell_number(s),
            RawCell::Number(n) => Some(*n).filter(|n| n.is_finite()),
            RawCell::Date { serial, .. } => Some(*serial).filter(|n| n.is_finite()),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// A mapped cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Key column text
    Text(String),
    /// Attribute value; `None` when the source was not a finite number
    Number(Option<f64>),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => *n,
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }
}

/// One row: generic column key to cell, in column order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing an existing one under the same key
    pub fn set(&mut self, key: impl Into<String>, cell: Cell) {
        let key = key.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = cell,
            None => self.cells.push((key, cell)),
        }
    }

    /// Builder form of [`Row::set`]
    pub fn with(mut self, key: impl Into<String>, cell: Cell) -> Self {
        self.set(key, cell);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    /// Text of the key column ("" when absent)
    pub fn key(&self) -> &str {
        self.get(KEY_COLUMN).and_then(Cell::as_text).unwrap_or("")
    }

    /// Remove a cell, returning it
    pub fn remove(&mut self, key: &str) -> Option<Cell> {
        let index = self.cells.iter().position(|(k, _)| k == key)?;
        Some(self.cells.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Record for Row {
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Cell::as_number)
    }
}

/// Generic key and the original header it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub generic: String,
    pub original: String,
}

/// Column headers in column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMap {
    entries: Vec<HeaderEntry>,
}

impl HeaderMap {
    /// Build from original header names (generic keys assigned by position)
    pub fn from_originals<I, S>(originals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = originals
            .into_iter()
            .enumerate()
            .map(|(index, original)| HeaderEntry {
                generic: generic_key(index),
                original: original.into().trim().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Original header for a generic key
    pub fn original(&self, generic: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.generic == generic)
            .map(|e| e.original.as_str())
    }

    /// Generic keys in column order
    pub fn generic_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.generic.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A loaded dataset: headers plus rows in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: HeaderMap,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: HeaderMap, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// A table with no header and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Map raw source rows onto generic keys
    ///
    /// `header` is the first source row and `data` the rows after it. With
    /// no data rows the result is empty. An empty header row is replaced by
    /// `Col1..ColN` sized after the first data row. Cells past the header
    /// width are ignored; missing cells map to empty text or `None`.
    pub fn from_raw(header: &[RawCell], data: &[Vec<RawCell>]) -> Self {
        let Some(first) = data.first() else {
            return Self::empty();
        };

        let header = if header.is_empty() {
            HeaderMap::from_originals((1..=first.len()).map(|i| format!("Col{i}")))
        } else {
            HeaderMap::from_originals(header.iter().map(RawCell::to_text))
        };

        let rows = data
            .iter()
            .map(|raw| {
                let mut row = Row::new();
                for (index, key) in header.generic_keys().enumerate() {
                    let source = raw.get(index).unwrap_or(&RawCell::Empty);
                    let cell = if index == 0 {
                        Cell::Text(source.to_text())
                    } else {
                        Cell::Number(source.to_number())
                    };
                    row.set(key, cell);
                }
                row
            })
            .collect();

        Self { header, rows }
    }

    /// Drop rows whose cells are all blank
    pub(crate) fn without_blank_rows(rows: Vec<Vec<RawCell>>) -> Vec<Vec<RawCell>> {
        rows.into_iter()
            .filter(|row| !row.iter().all(RawCell::is_blank))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Raw attribute column, one entry per row (`None` for missing cells)
    pub fn column(&self, key: &str) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.number(key)).collect()
    }

    /// Key column values, one per row
    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(Row::key).collect()
    }

    /// First and last key of the table
    pub fn span(&self) -> Option<(&str, &str)> {
        let first = self.rows.first()?.key();
        let last = self.rows.last()?.key();
        Some((first, last))
    }
}
