use crate::domain::storage::{SheetStore, StorageKeys};
use crate::domain::{Cell, Sheet};
use crate::error::{AppError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads any workbook calamine understands, writes xlsx.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookStore;

impl WorkbookStore {
    pub fn new() -> Self {
        Self
    }

    /// The xlsx file as it would be downloaded, before it touches the disk.
    pub fn to_bytes(&self, sheet: &Sheet) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(StorageKeys::SHEET_NAME)?;

        let bold = Format::new().set_bold();
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col_num(col)?, header, &bold)?;
        }

        for (index, cells) in sheet.rows.iter().enumerate() {
            let row = row_num(index + 1)?;
            for (col, cell) in cells.iter().enumerate() {
                let col = col_num(col)?;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, text)?;
                    }
                    Cell::Int(value) => {
                        worksheet.write_number(row, col, *value as f64)?;
                    }
                    Cell::Float(value) => {
                        worksheet.write_number(row, col, *value)?;
                    }
                    Cell::Bool(value) => {
                        worksheet.write_boolean(row, col, *value)?;
                    }
                }
            }
        }
        worksheet.autofit();

        Ok(workbook.save_to_buffer()?)
    }
}

impl SheetStore for WorkbookStore {
    fn load(&self, path: &Path, sheet: Option<&str>) -> Result<Sheet> {
        let mut workbook = open_workbook_auto(path)?;

        let name = match sheet {
            Some(name) => name.to_string(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| AppError::Other(format!("{} has no sheets", path.display())))?,
        };
        let range = workbook.worksheet_range(&name)?;

        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|cells| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(i, data)| match data {
                        Data::Empty => format!("Unnamed: {i}"),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let rows: Vec<Vec<Cell>> = rows.map(|cells| cells.iter().map(to_cell).collect()).collect();

        info!("Read {} rows from sheet '{}' of {}", rows.len(), name, path.display());
        Ok(Sheet::new(headers, rows))
    }

    fn save(&self, sheet: &Sheet, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(sheet)?;
        debug!(
            "Writing {} bytes ({}) to {}",
            bytes.len(),
            StorageKeys::XLSX_MIME,
            path.display()
        );
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(text) => Cell::from(text.as_str()),
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) => Cell::Float(*value),
        Data::Bool(value) => Cell::Bool(*value),
        other => Cell::Text(other.to_string()),
    }
}

fn row_num(index: usize) -> Result<RowNum> {
    RowNum::try_from(index).map_err(|_| AppError::Other(format!("row {index} is out of range")))
}

fn col_num(index: usize) -> Result<ColNum> {
    ColNum::try_from(index).map_err(|_| AppError::Other(format!("column {index} is out of range")))
}
