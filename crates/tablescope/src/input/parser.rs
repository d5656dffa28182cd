//! Comma-separated text parser.
//!
//! Splitting is deliberately naive: a comma inside a quoted cell still
//! separates fields, and quotes are never unescaped. Fixing this would change
//! which malformed inputs are rejected and which are misparsed.

use crate::error::{Result, TableScopeError};

use super::table::RawTable;

/// Field separator.
const DELIMITER: char = ',';

/// Quote character stripped from cell edges.
const QUOTE: char = '"';

/// Parse raw text into a header row and data rows.
///
/// Blank lines are ignored. At least one header line and one data line are
/// required, and at least one header must be non-blank.
pub fn parse_raw(text: &str) -> Result<RawTable> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Err(TableScopeError::EmptyInput("No header row found".to_string()));
    };

    let rows: Vec<Vec<String>> = lines.map(split_line).collect();
    if rows.is_empty() {
        return Err(TableScopeError::EmptyInput("No data rows found".to_string()));
    }

    let raw_headers = split_line(header_line);
    let header_width = raw_headers.len();

    let (header_positions, headers): (Vec<usize>, Vec<String>) = raw_headers
        .into_iter()
        .enumerate()
        .filter(|(_, name)| !name.trim().is_empty())
        .unzip();

    if headers.is_empty() {
        return Err(TableScopeError::NoColumns);
    }

    Ok(RawTable {
        headers,
        header_positions,
        header_width,
        rows,
    })
}

/// Trim a cell and strip one layer of surrounding double quotes.
pub fn clean_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    let unquoted = trimmed
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .unwrap_or(trimmed);
    unquoted.to_string()
}

fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(clean_cell).collect()
}
