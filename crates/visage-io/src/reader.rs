//! Table reader trait and common types
//!
//! The `TableReader` trait provides a uniform interface for loading a
//! tabular file into a [`Table`], whatever its on-disk format.

use std::path::Path;
use thiserror::Error;

use crate::table::Table;

/// Errors that can occur while loading a table
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Workbook has no sheets: {0}")]
    NoSheets(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for table loading
pub type IoResult<T> = Result<T, IoError>;

/// Trait for loading a table from a file format
pub trait TableReader {
    /// Read the whole file into a table
    fn read_table(&self) -> IoResult<Table>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn TableReader>;

/// Open a file and return an appropriate reader
///
/// The format is detected from the file extension.
pub fn open_file(path: impl AsRef<Path>) -> IoResult<BoxedReader> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "csv")]
        "csv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open(path)?))
        }

        #[cfg(feature = "excel")]
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => {
            use crate::excel_reader::ExcelReader;
            Ok(Box::new(ExcelReader::open(path)?))
        }

        _ => Err(IoError::UnsupportedFormat(format!(
            "{} (expected one of: {})",
            path.display(),
            supported_extensions().join(", ")
        ))),
    }
}

/// Open and read a table in one step
pub fn read_table(path: impl AsRef<Path>) -> IoResult<Table> {
    let reader = open_file(path)?;
    let table = reader.read_table()?;
    tracing::info!(
        format = reader.format_name(),
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded table"
    );
    Ok(table)
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
    }

    #[cfg(feature = "excel")]
    {
        extensions.push("xlsx");
        extensions.push("xls");
        extensions.push("xlsm");
        extensions.push("xlsb");
        extensions.push("ods");
    }

    extensions
}
