use crate::error::{ModelError, Result};

/// Literal a spreadsheet export leaves in empty cells.
pub const NULL_MARKER: &str = "nan";

/// True for empty, whitespace-only, or null-marker values.
pub fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_MARKER)
}

/// A loaded sample sheet: ordered headers and ordered rows of raw cells.
///
/// Every row has exactly one cell per header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularDataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularDataset {
    /// Build a dataset, padding short rows with empty cells and dropping surplus cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Replace all headers at once, keeping the cells in place.
    pub fn replace_headers(&mut self, headers: Vec<String>) -> Result<()> {
        if headers.len() != self.headers.len() {
            return Err(ModelError::HeaderCountMismatch {
                expected: self.headers.len(),
                actual: headers.len(),
            });
        }
        self.headers = headers;
        Ok(())
    }

    /// Iterate rows as header-aware records.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|cells| Record {
            headers: &self.headers,
            cells,
        })
    }
}

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Record<'a> {
    /// Raw cell for a column, `None` when the column does not exist.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|header| header == column)
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
    }

    /// Cell for a column, `None` when the column is absent or the cell is blank.
    pub fn value(&self, column: &str) -> Option<&'a str> {
        self.get(column).filter(|value| !is_blank(value))
    }

    /// `(header, cell)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        let headers = self.headers;
        let cells = self.cells;
        headers
            .iter()
            .map(String::as_str)
            .zip(cells.iter().map(String::as_str))
    }
}
