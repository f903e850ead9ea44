use super::StatsResult;
use crate::error::{AppError, Result};
use std::fmt;

pub const GAMES_COLUMN: &str = "Games_Related";
pub const MINUTES_COLUMN: &str = "Total_Minutes";

/// One spreadsheet cell, kept close to what the workbook stored so it can be
/// written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Only text cells can hold a link.
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// A header row plus data rows. Rows may be shorter than the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| {
                AppError::Column(format!(
                    "no column named '{}' (available: {})",
                    name,
                    self.headers.join(", ")
                ))
            })
    }

    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(EMPTY)
    }

    /// The link cell of every row, in row order.
    pub fn links(&self, column: &str) -> Result<Vec<Option<String>>> {
        let index = self.column_index(column)?;
        Ok((0..self.rows.len())
            .map(|row| self.cell(row, index).as_link().map(str::to_string))
            .collect())
    }

    pub fn head(&self, n: usize) -> Sheet {
        Sheet {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// A sheet with only the named columns, in the given order.
    pub fn select(&self, columns: &[&str]) -> Result<Sheet> {
        let indices = columns
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Sheet {
            headers: columns.iter().map(|name| name.to_string()).collect(),
            rows: (0..self.rows.len())
                .map(|row| indices.iter().map(|&col| self.cell(row, col).clone()).collect())
                .collect(),
        })
    }

    /// Set a whole column, adding it at the end if it does not exist yet.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(AppError::Column(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        let index = match self.headers.iter().position(|header| header == name) {
            Some(index) => index,
            None => {
                self.headers.push(name.to_string());
                self.headers.len() - 1
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() <= index {
                row.resize(index + 1, Cell::Empty);
            }
            row[index] = value;
        }
        Ok(())
    }

    /// The sheet with the two stats columns, one result per row.
    pub fn with_stats(mut self, results: &[StatsResult]) -> Result<Sheet> {
        let games = results.iter().map(|r| Cell::from(r.games.as_str())).collect();
        let minutes = results.iter().map(|r| Cell::from(r.minutes.as_str())).collect();
        self.set_column(GAMES_COLUMN, games)?;
        self.set_column(MINUTES_COLUMN, minutes)?;
        Ok(self)
    }

    /// Plain-text table, column widths fitted to content.
    pub fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let header: Vec<String> = (0..width)
            .map(|i| self.headers.get(i).cloned().unwrap_or_default())
            .collect();
        let body: Vec<Vec<String>> = (0..self.rows.len())
            .map(|row| (0..width).map(|col| self.cell(row, col).to_string()).collect())
            .collect();

        let widths: Vec<usize> = (0..width)
            .map(|col| {
                body.iter()
                    .map(|cells| cells[col].chars().count())
                    .chain(std::iter::once(header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = line(&header);
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for cells in &body {
            out.push('\n');
            out.push_str(&line(cells));
        }
        out
    }
}
