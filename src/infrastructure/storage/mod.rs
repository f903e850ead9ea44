pub(crate) mod csv_store;
pub(crate) mod workbook_store;

use crate::domain::storage::{SheetStore, StorageKeys};
use crate::error::{AppError, Result};
use csv_store::CsvStore;
use std::path::Path;
use workbook_store::WorkbookStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Workbook,
    Csv,
}

impl SheetFormat {
    pub fn from_input(path: &Path) -> Result<Self> {
        match extension(path).as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            other => Err(unsupported(path, other)),
        }
    }

    /// Output is either xlsx or csv.
    pub fn from_output(path: &Path) -> Result<Self> {
        match extension(path).as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "xlsx" => Ok(SheetFormat::Workbook),
            other => Err(unsupported(path, other)),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            SheetFormat::Workbook => StorageKeys::XLSX_MIME,
            SheetFormat::Csv => StorageKeys::CSV_MIME,
        }
    }

    pub fn store(&self) -> Box<dyn SheetStore> {
        match self {
            SheetFormat::Workbook => Box::new(WorkbookStore::new()),
            SheetFormat::Csv => Box::new(CsvStore::new()),
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn unsupported(path: &Path, extension: &str) -> AppError {
    AppError::Other(format!(
        "unsupported spreadsheet type '{}' for {}",
        extension,
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(SheetFormat::from_input(Path::new("a.XLSX")).unwrap(), SheetFormat::Workbook);
        assert_eq!(SheetFormat::from_input(Path::new("a.ods")).unwrap(), SheetFormat::Workbook);
        assert_eq!(SheetFormat::from_input(Path::new("a.csv")).unwrap(), SheetFormat::Csv);
        assert!(SheetFormat::from_input(Path::new("a.txt")).is_err());
        assert!(SheetFormat::from_input(Path::new("noext")).is_err());
    }

    #[test]
    fn only_xlsx_and_csv_are_written() {
        assert_eq!(SheetFormat::from_output(Path::new("o.xlsx")).unwrap(), SheetFormat::Workbook);
        assert_eq!(SheetFormat::from_output(Path::new("o.csv")).unwrap(), SheetFormat::Csv);
        assert!(SheetFormat::from_output(Path::new("o.ods")).is_err());
        assert_eq!(
            SheetFormat::Workbook.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }
}
