//! Delimited text parser

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::model::{Table, MISSING};

/// Parser for comma-separated (or otherwise delimited) text.
///
/// Input is read one line at a time. Only the line terminator (`\n`, or
/// `\r\n`) is stripped, and fields are split on the delimiter only. Quotes are
/// ordinary characters, so a delimiter can never appear inside a field. A
/// blank data line is a row whose cells are all missing.
#[derive(Debug, Clone)]
pub struct CsvParser {
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parser from the loader settings in `config`
    pub fn from_config(config: &Config) -> Self {
        Self {
            delimiter: config.delimiter,
        }
    }

    /// Set the field delimiter. Expected to be an ASCII byte.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a file into a Table
    pub fn parse(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        let table = self.parse_reader(file)?;
        tracing::debug!(
            path = %path.display(),
            rows = table.num_rows(),
            cols = table.num_cols(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse delimited text from any reader into a Table
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = BufReader::new(reader);
        let mut line = String::new();

        if !read_line(&mut reader, &mut line)? {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "missing header line").into());
        }
        let mut table = Table::with_headers(self.split(&line));
        let num_cols = table.num_cols();

        let mut line_no = 1;
        while read_line(&mut reader, &mut line)? {
            line_no += 1;

            let mut fields = self.split(&line);
            let mut cells: Vec<String> = Vec::new();
            cells.try_reserve_exact(num_cols)?;
            cells.extend(fields.by_ref().take(num_cols).map(str::to_owned));

            let extra = fields.count();
            if extra > 0 {
                tracing::warn!(
                    line = line_no,
                    expected = num_cols,
                    found = num_cols + extra,
                    "dropping extra fields"
                );
            }

            // Short rows are padded with missing cells
            cells.resize(num_cols, MISSING.to_owned());

            table.push_row_unchecked(cells)?;
        }

        Ok(table)
    }

    fn split<'a>(&self, line: &'a str) -> std::str::Split<'a, char> {
        line.split(char::from(self.delimiter))
    }
}

/// Read the next line into `buf` without its terminator. Returns `false` at
/// end of input. Invalid UTF-8 surfaces as `InvalidData`.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(true)
}
