//! Box-drawn terminal output

use std::io::Write;

use anyhow::Result;
use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::model::is_missing;
use crate::ops::{ColumnStats, Info, TableView};

use super::{OutputFormatter, Report};

/// How a missing cell is shown on screen
const MISSING_MARKER: &str = "<NA>";

/// Terminal output with aligned, box-drawn tables
pub struct TerminalOutput {
    header_spec: ColorSpec,
    missing_spec: ColorSpec,
}

impl TerminalOutput {
    pub fn new() -> Self {
        let mut header_spec = ColorSpec::new();
        header_spec.set_bold(true);
        let mut missing_spec = ColorSpec::new();
        missing_spec.set_dimmed(true);
        Self {
            header_spec,
            missing_spec,
        }
    }

    fn write_view(&self, view: &TableView, writer: &mut dyn WriteColor) -> Result<()> {
        self.write_grid(&view.headers, &view.rows, true, writer)?;
        writeln!(
            writer,
            "[{} rows x {} columns]",
            view.rows.len(),
            view.headers.len()
        )?;
        Ok(())
    }

    fn write_info(&self, info: &Info, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "Data columns (total {} columns):", info.num_cols)?;
        let rows: Vec<Vec<String>> = info
            .columns
            .iter()
            .zip(&info.dtypes)
            .enumerate()
            .map(|(i, (name, dtype))| vec![i.to_string(), name.clone(), dtype.to_string()])
            .collect();
        self.write_grid(&header_row(["#", "Column", "Dtype"]), &rows, true, writer)?;
        writeln!(writer, "Memory usage: {} bytes", info.memory_usage)?;
        writeln!(writer, "Total rows: {}", info.num_rows)?;
        writeln!(writer, "Missing values: {}", info.missing)?;
        Ok(())
    }

    fn write_describe(&self, stats: &[ColumnStats], writer: &mut dyn WriteColor) -> Result<()> {
        let mut headers = vec![String::new()];
        headers.extend(stats.iter().map(|s| s.column.clone()));

        let stat_row = |label: &str, value: fn(&ColumnStats) -> String| {
            let mut row = vec![label.to_string()];
            row.extend(stats.iter().map(value));
            row
        };
        let rows = vec![
            stat_row("count", |s| s.count.to_string()),
            stat_row("unique", |s| s.unique.to_string()),
            stat_row("top", |s| s.top.clone().unwrap_or_default()),
            stat_row("freq", |s| s.freq.to_string()),
        ];
        self.write_grid(&headers, &rows, true, writer)
    }

    fn write_values(&self, label: &str, values: &[String], writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "{}:", label)?;
        for value in values {
            self.write_cell(value, true, writer)?;
            writeln!(writer)?;
        }
        Ok(())
    }

    fn write_cell(&self, cell: &str, mark_missing: bool, writer: &mut dyn WriteColor) -> Result<()> {
        if mark_missing && is_missing(cell) {
            writer.set_color(&self.missing_spec)?;
            write!(writer, "{}", MISSING_MARKER)?;
            writer.reset()?;
        } else {
            write!(writer, "{}", cell)?;
        }
        Ok(())
    }

    /// Write headers and rows as an aligned grid. With `mark_missing`, empty
    /// cells are shown as a dimmed marker.
    fn write_grid(
        &self,
        headers: &[String],
        rows: &[Vec<String>],
        mark_missing: bool,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        if headers.is_empty() {
            return Ok(());
        }

        // Widths are terminal columns, so wide characters count double
        let shown = |cell: &str| {
            if mark_missing && is_missing(cell) {
                MISSING_MARKER.width()
            } else {
                cell.width()
            }
        };
        let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (width, cell) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(shown(cell));
            }
        }

        write_border(writer, &col_widths, ['┌', '┬', '┐'])?;

        write!(writer, "│")?;
        for (cell, width) in headers.iter().zip(&col_widths) {
            write!(writer, " ")?;
            writer.set_color(&self.header_spec)?;
            write!(writer, "{}", cell)?;
            writer.reset()?;
            write!(writer, "{:pad$} │", "", pad = width - cell.width())?;
        }
        writeln!(writer)?;

        write_border(writer, &col_widths, ['├', '┼', '┤'])?;

        for row in rows {
            write!(writer, "│")?;
            for (cell, width) in row.iter().zip(&col_widths) {
                write!(writer, " ")?;
                self.write_cell(cell, mark_missing, writer)?;
                let pad = width - shown(cell);
                write!(writer, "{:pad$} │", "", pad = pad)?;
            }
            writeln!(writer)?;
        }

        write_border(writer, &col_widths, ['└', '┴', '┘'])?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, report: &Report, writer: &mut dyn WriteColor) -> Result<()> {
        match report {
            Report::Table(view) => self.write_view(view, writer),
            Report::Info(info) => self.write_info(info, writer),
            Report::Describe(stats) => self.write_describe(stats, writer),
            Report::Columns(columns) => {
                for name in columns {
                    writeln!(writer, "{}", name)?;
                }
                Ok(())
            }
            Report::DTypes { columns, dtypes } => {
                let rows: Vec<Vec<String>> = columns
                    .iter()
                    .zip(dtypes)
                    .map(|(name, dtype)| vec![name.clone(), dtype.to_string()])
                    .collect();
                self.write_grid(&header_row(["Column", "Dtype"]), &rows, true, writer)
            }
            Report::Values { label, values } => self.write_values(label, values, writer),
            Report::Counts { column, counts } => {
                let rows: Vec<Vec<String>> = counts
                    .iter()
                    .map(|(value, n)| vec![value.clone(), n.to_string()])
                    .collect();
                let headers = vec![column.clone(), "count".to_string()];
                self.write_grid(&headers, &rows, true, writer)
            }
            Report::Mask { headers, mask } => {
                let rows: Vec<Vec<String>> = mask
                    .iter()
                    .map(|r| r.iter().map(|&b| bool_label(b).to_string()).collect())
                    .collect();
                self.write_grid(headers, &rows, false, writer)
            }
            Report::Shape { rows, cols } => {
                writeln!(writer, "({}, {})", rows, cols)?;
                Ok(())
            }
            Report::Count(n) => {
                writeln!(writer, "{}", n)?;
                Ok(())
            }
        }
    }
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn header_row<const N: usize>(names: [&str; N]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn write_border(writer: &mut dyn WriteColor, col_widths: &[usize], [left, mid, right]: [char; 3]) -> Result<()> {
    let mut line = String::new();
    line.push(left);
    for (i, width) in col_widths.iter().enumerate() {
        line.push_str(&"─".repeat(*width + 2));
        if i < col_widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);
    writeln!(writer, "{}", line)?;
    Ok(())
}
