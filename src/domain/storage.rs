use super::Sheet;
use crate::error::Result;
use std::path::Path;

pub trait SheetStore {
    /// Read a sheet; `sheet` names the worksheet for formats that have several.
    fn load(&self, path: &Path, sheet: Option<&str>) -> Result<Sheet>;
    fn save(&self, sheet: &Sheet, path: &Path) -> Result<()>;
}

/// Output sheet name and MIME type of written workbooks.
pub struct StorageKeys;

impl StorageKeys {
    pub const SHEET_NAME: &'static str = "Games_and_Minutes";
    pub const XLSX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
    pub const CSV_MIME: &'static str = "text/csv";
}
