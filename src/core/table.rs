use crate::utils::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::Read;

const COLUMN_GAP: &str = "  ";

/// Comma-delimited data held in memory: a header record plus every data row
/// in file order. Columns are addressed by header name.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Parses delimited text with a mandatory header row. A row whose field
    /// count differs from the header is an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let rows = rdr
            .records()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        Ok(Self { headers, rows })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(data)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> Vec<String> {
        self.headers.iter().map(str::to_string).collect()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ReportError::missing_column(name, &self.headers()))
    }

    /// Returns a table holding only `names`, in that order.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;

        let headers = names.iter().copied().collect::<StringRecord>();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).unwrap_or(""))
                    .collect::<StringRecord>()
            })
            .collect();

        Ok(Table { headers, rows })
    }

    /// Maps each row onto `T` by header name. Columns `T` does not name are ignored.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.rows
            .iter()
            .map(|row| row.deserialize(Some(&self.headers)).map_err(ReportError::from))
            .collect()
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('\r', "\\r").replace('\n', "\\n")
}

/// Aligned text: a generated zero-based row index on the left, every column
/// right-justified to its widest value.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<String> = self.headers.iter().map(escape_cell).collect();
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(escape_cell).collect())
            .collect();

        let index_width = match rows.len() {
            0 => 0,
            n => (n - 1).to_string().len(),
        };

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render_line = |label: &str, cells: &[String]| {
            let mut line = format!("{:<width$}", label, width = index_width);
            for (cell, width) in cells.iter().zip(&widths) {
                line.push_str(COLUMN_GAP);
                line.push_str(&format!("{:>width$}", cell, width = *width));
            }
            line.trim_end().to_string()
        };

        write!(f, "{}", render_line("", &headers))?;
        for (i, row) in rows.iter().enumerate() {
            write!(f, "\n{}", render_line(&i.to_string(), row))?;
        }
        Ok(())
    }
}
