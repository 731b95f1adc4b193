//! visage-io - Table loading for the face explorer
//!
//! This crate turns tabular files into a generic [`Table`]:
//!
//! - **CSV**: comma-separated text, lossy UTF-8
//! - **Spreadsheets**: xlsx, xls, xlsm, xlsb and ods (first sheet only)
//!
//! # Design
//!
//! All readers implement the `TableReader` trait. The first column is the
//! key column (`Data`); the rest are attributes `A1..An` whose cells are
//! parsed leniently into numbers.

pub mod date_key;
pub mod number;
pub mod reader;
pub mod table;

#[cfg(feature = "csv")]
pub mod csv_reader;

#[cfg(feature = "excel")]
pub mod excel_reader;

pub use date_key::*;
pub use number::*;
pub use reader::*;
pub use table::*;

#[cfg(feature = "csv")]
pub use csv_reader::{read_csv, read_csv_str, CsvReader};

#[cfg(feature = "excel")]
pub use excel_reader::ExcelReader;
