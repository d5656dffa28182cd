//! Raw table representation produced by the parser.

/// Parsed tabular data, before any type inference.
///
/// Rows keep whatever cell count the source line had; width mismatches are
/// reported by the validator, not rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Named column headers (blank headers removed).
    pub headers: Vec<String>,
    /// Original position of each entry in `headers`.
    pub header_positions: Vec<usize>,
    /// Header cell count before blank headers were removed.
    pub header_width: usize,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table where every header is named.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let header_width = headers.len();
        Self {
            header_positions: (0..header_width).collect(),
            headers,
            header_width,
            rows,
        }
    }

    /// Get the number of named columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over `(name, position)` pairs of named columns.
    pub fn columns(&self) -> impl Iterator<Item = (&str, usize)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.header_positions.iter().copied())
    }

    /// Get all values at an original column position.
    ///
    /// Rows that are too short yield an empty string.
    pub fn column_values(&self, position: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(position).map(String::as_str).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, position: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(position).map(String::as_str))
    }

    /// Check if a value counts as missing.
    pub fn is_missing(value: &str) -> bool {
        value.trim().is_empty()
    }
}
