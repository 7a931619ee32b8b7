//! textframe - inspect and transform delimited text tables

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use textframe::config::{Config, OutputFormat};
use textframe::ops::{self, TableView, DEFAULT_VIEW_ROWS};
use textframe::output::{render_to_stdout, Report};
use textframe::parser::CsvParser;
use textframe::Table;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Inspect and transform delimited text tables
#[derive(Parser, Debug)]
#[command(name = "textframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Delimited text file with a header line
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    format: CliOutputFormat,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Seed for `sample`
    #[arg(long)]
    seed: Option<u64>,

    /// Replace missing cells with this value before running the command
    #[arg(long, value_name = "VALUE")]
    fillna: Option<String>,

    /// Clamp every cell into [LOWER, UPPER] (text order) before running the command
    #[arg(long, num_args = 2, value_names = ["LOWER", "UPPER"])]
    clip: Option<Vec<String>>,

    /// Sort rows by this column (index or name) before running the command
    #[arg(long, value_name = "COL")]
    sort_by: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the whole table
    Show,
    /// First n rows
    Head {
        #[arg(short, default_value_t = DEFAULT_VIEW_ROWS)]
        n: usize,
    },
    /// Last n rows
    Tail {
        #[arg(short, default_value_t = DEFAULT_VIEW_ROWS)]
        n: usize,
    },
    /// One random row
    Sample,
    /// Concise summary of the table
    Info,
    /// Type of every column
    Dtypes,
    /// (rows, columns)
    Shape,
    /// Number of cells
    Size,
    /// Number of axes
    Ndim,
    /// Per-column statistics
    Describe,
    /// Column names
    Columns,
    /// Distinct values of a column
    Unique { col: String },
    /// Occurrences of each value in a column
    ValueCounts { col: String },
    /// Missing-cell mask
    Isnull,
    /// Alias for isnull
    Isna,
    /// Largest values of a column by text order
    Nlargest {
        col: String,
        #[arg(short, default_value_t = DEFAULT_VIEW_ROWS)]
        n: usize,
    },
    /// Smallest values of a column by text order
    Nsmallest {
        col: String,
        #[arg(short, default_value_t = DEFAULT_VIEW_ROWS)]
        n: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let delimiter = u8::try_from(cli.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("Delimiter must be a single ASCII character: {:?}", cli.delimiter))?;

    let mut config = Config::new(cli.file.clone())
        .with_delimiter(delimiter)
        .with_output_format(cli.format.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut table = CsvParser::from_config(&config)
        .parse(&config.input)
        .with_context(|| format!("Failed to load file: {}", config.input.display()))?;

    if let Some(ref value) = cli.fillna {
        ops::fillna(&mut table, value);
    }
    if let Some([lower, upper]) = cli.clip.as_deref() {
        ops::clip(&mut table, lower, upper);
    }
    if let Some(ref col) = cli.sort_by {
        let col = resolve_column(&table, col)?;
        ops::sort_values(&mut table, col).context("Failed to sort")?;
    }

    let report = build_report(&table, cli.command, &config)?;
    render_to_stdout(&report, &config)
}

fn build_report(table: &Table, command: Command, config: &Config) -> Result<Report> {
    let report = match command {
        Command::Show => Report::Table(TableView::all(table)),
        Command::Head { n } => Report::Table(ops::head(table, n)),
        Command::Tail { n } => Report::Table(ops::tail(table, n)),
        Command::Sample => {
            let view = match config.seed {
                Some(seed) => ops::sample_with(table, &mut StdRng::seed_from_u64(seed)),
                None => ops::sample(table),
            };
            Report::Table(view.context("Failed to sample")?)
        }
        Command::Info => Report::Info(ops::info(table)),
        Command::Dtypes => Report::DTypes {
            columns: ops::columns(table),
            dtypes: ops::dtypes(table),
        },
        Command::Shape => {
            let (rows, cols) = ops::shape(table);
            Report::Shape { rows, cols }
        }
        Command::Size => Report::Count(ops::size(table)),
        Command::Ndim => Report::Count(ops::ndim(table)),
        Command::Describe => Report::Describe(ops::describe(table)),
        Command::Columns => Report::Columns(ops::columns(table)),
        Command::Unique { col } => {
            let idx = resolve_column(table, &col)?;
            Report::Values {
                label: format!("Unique values of column {}", col),
                values: ops::unique(table, idx)?,
            }
        }
        Command::ValueCounts { col } => {
            let idx = resolve_column(table, &col)?;
            let counts = ops::value_counts(table, idx)?;
            Report::Counts {
                column: table.headers()[idx].clone(),
                counts,
            }
        }
        Command::Isnull => Report::Mask {
            headers: ops::columns(table),
            mask: ops::isnull(table),
        },
        Command::Isna => Report::Mask {
            headers: ops::columns(table),
            mask: ops::isna(table),
        },
        Command::Nlargest { col, n } => {
            let idx = resolve_column(table, &col)?;
            Report::Values {
                label: format!("{} largest values of column {}", n, col),
                values: ops::nlargest(table, idx, n)?,
            }
        }
        Command::Nsmallest { col, n } => {
            let idx = resolve_column(table, &col)?;
            Report::Values {
                label: format!("{} smallest values of column {}", n, col),
                values: ops::nsmallest(table, idx, n)?,
            }
        }
    };
    Ok(report)
}

/// Resolve a column given by name or index. Names win, so a column literally
/// named "0" is still reachable.
fn resolve_column(table: &Table, col: &str) -> Result<usize> {
    table
        .column_index(col)
        .or_else(|| col.parse().ok())
        .with_context(|| format!("Unknown column: {}", col))
}
