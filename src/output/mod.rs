//! Output formatting for operation results

mod csv;
mod json;
mod terminal;

use std::io::IsTerminal;

use anyhow::Result;
use serde::Serialize;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::{Config, OutputFormat};
use crate::model::DType;
use crate::ops::{ColumnStats, Info, TableView, ValueCounts};

pub use self::csv::CsvOutput;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// The result of one operation, ready to be rendered
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Headers plus rows, from `show`, `head`, `tail` or `sample`
    Table(TableView),
    Info(Info),
    Describe(Vec<ColumnStats>),
    Columns(Vec<String>),
    DTypes {
        columns: Vec<String>,
        dtypes: Vec<DType>,
    },
    /// A list of cell values taken from one column
    Values { label: String, values: Vec<String> },
    Counts { column: String, counts: ValueCounts },
    Mask {
        headers: Vec<String>,
        mask: Vec<Vec<bool>>,
    },
    Shape { rows: usize, cols: usize },
    Count(usize),
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a report to a writer
    fn render(&self, report: &Report, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter for the configured format
    pub fn create(config: &Config) -> Box<dyn OutputFormatter> {
        match config.output_format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput::new(config.delimiter)),
        }
    }
}

/// Render a report to stdout
pub fn render_to_stdout(report: &Report, config: &Config) -> Result<()> {
    let choice = match config.output_format {
        OutputFormat::Terminal if std::io::stdout().is_terminal() => ColorChoice::Auto,
        _ => ColorChoice::Never,
    };
    let formatter = OutputFactory::create(config);
    let mut stdout = StandardStream::stdout(choice);
    formatter.render(report, &mut stdout)
}
