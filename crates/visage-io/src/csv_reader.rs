//! CSV file reader
//!
//! The first record is the header, the first column is the key column and
//! every other column is an attribute. Blank lines are skipped; invalid
//! UTF-8 is decoded lossily rather than rejected.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::reader::{IoError, IoResult, TableReader};
use crate::table::{RawCell, Table};

/// CSV file reader
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a CSV file with a custom delimiter
    pub fn open_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            delimiter,
        })
    }
}

impl TableReader for CsvReader {
    fn read_table(&self) -> IoResult<Table> {
        tracing::debug!(path = %self.path.display(), "Reading CSV");
        let file = File::open(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        read_csv_with_delimiter(BufReader::new(file), self.delimiter)
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Read comma-separated text into a table
pub fn read_csv_str(text: &str) -> IoResult<Table> {
    read_csv(text.as_bytes())
}

/// Read comma-separated data from any reader
pub fn read_csv<R: Read>(reader: R) -> IoResult<Table> {
    read_csv_with_delimiter(reader, b',')
}

fn read_csv_with_delimiter<R: Read>(reader: R, delimiter: u8) -> IoResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<Vec<RawCell>> = Vec::new();
    for (line, result) in reader.byte_records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(IoError::Io(e.to_string())),
            Err(e) => {
                tracing::warn!(line = line + 1, error = %e, "Skipping unreadable CSV record");
                continue;
            }
        };

        let cells: Vec<RawCell> = record
            .iter()
            .map(|field| {
                let text = String::from_utf8_lossy(field);
                if text.is_empty() {
                    RawCell::Empty
                } else {
                    RawCell::Text(text.into_owned())
                }
            })
            .collect();
        records.push(cells);
    }

    let mut records = Table::without_blank_rows(records);
    if records.len() < 2 {
        tracing::debug!(records = records.len(), "Not enough CSV records for a table");
        return Ok(Table::empty());
    }

    let data = records.split_off(1);
    Ok(Table::from_raw(&records[0], &data))
}
