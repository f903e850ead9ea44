use crate::domain::storage::SheetStore;
use crate::domain::{Cell, Sheet};
use crate::error::Result;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvStore;

impl CsvStore {
    pub fn new() -> Self {
        Self
    }
}

impl SheetStore for CsvStore {
    fn load(&self, path: &Path, _sheet: Option<&str>) -> Result<Sheet> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(Cell::from).collect());
        }

        info!("Read {} rows from {}", rows.len(), path.display());
        Ok(Sheet::new(headers, rows))
    }

    fn save(&self, sheet: &Sheet, path: &Path) -> Result<()> {
        let width = sheet.headers.len();
        let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;

        writer.write_record(&sheet.headers)?;
        for cells in &sheet.rows {
            let mut record: Vec<String> = cells.iter().map(Cell::to_string).collect();
            if record.len() < width {
                record.resize(width, String::new());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
