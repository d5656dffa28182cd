//! Input parsing and raw table representation.

mod parser;
mod table;

pub use parser::{clean_cell, parse_raw};
pub use table::RawTable;
