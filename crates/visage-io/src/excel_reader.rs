//! Spreadsheet reader (xlsx, xls, xlsm, xlsb, ods)
//!
//! Only the first worksheet is read. Date cells keep their serial number
//! as the numeric value and get a formatted display string for the key column.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use crate::date_key::{excel_serial_to_datetime, format_date_key};
use crate::reader::{IoError, IoResult, TableReader};
use crate::table::{RawCell, Table};

/// Spreadsheet file reader
pub struct ExcelReader {
    path: PathBuf,
}

impl ExcelReader {
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl TableReader for ExcelReader {
    fn read_table(&self) -> IoResult<Table> {
        let mut workbook =
            open_workbook_auto(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IoError::NoSheets(self.path.display().to_string()))?;
        tracing::debug!(path = %self.path.display(), sheet = %sheet_name, "Reading worksheet");

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?;

        let rows: Vec<Vec<RawCell>> = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        let mut rows = Table::without_blank_rows(rows);
        if rows.len() < 2 {
            tracing::debug!(rows = rows.len(), "Not enough worksheet rows for a table");
            return Ok(Table::empty());
        }

        let data = rows.split_off(1);
        Ok(Table::from_raw(&rows[0], &data))
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "Spreadsheet"
    }
}

/// Convert a worksheet cell to a raw cell
fn convert_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            let display = excel_serial_to_datetime(serial)
                .map(|dt| format_date_key(&dt))
                .unwrap_or_else(|| serial.to_string());
            RawCell::Date { serial, display }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(e) => RawCell::Text(e.to_string()),
    }
}
