//! Ingestion of delimited text files

mod csv;

use std::path::Path;

use crate::error::Result;
use crate::model::Table;

pub use self::csv::CsvParser;

/// Load a comma-separated file into a Table
pub fn load(path: impl AsRef<Path>) -> Result<Table> {
    CsvParser::new().parse(path.as_ref())
}
