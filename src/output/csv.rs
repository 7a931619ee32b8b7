//! Delimited text output format

use anyhow::Result;
use termcolor::WriteColor;

use super::{OutputFormatter, Report};

/// Writes reports back out as delimited text.
///
/// Fields are never quoted, matching the loader, so a table written with the
/// same delimiter loads back unchanged as long as no cell contains the
/// delimiter or a newline.
pub struct CsvOutput {
    delimiter: u8,
}

impl CsvOutput {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    fn write_records(&self, headers: &[String], rows: &[Vec<String>], writer: &mut dyn WriteColor) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(csv::QuoteStyle::Never)
            .flexible(true)
            .from_writer(writer);
        csv_writer.write_record(headers)?;
        for row in rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl OutputFormatter for CsvOutput {
    fn render(&self, report: &Report, writer: &mut dyn WriteColor) -> Result<()> {
        let one = |s: String| vec![s];
        match report {
            Report::Table(view) => self.write_records(&view.headers, &view.rows, writer),
            Report::Info(info) => {
                let rows: Vec<Vec<String>> = info
                    .columns
                    .iter()
                    .zip(&info.dtypes)
                    .map(|(name, dtype)| vec![name.clone(), dtype.to_string()])
                    .collect();
                self.write_records(&labels(["column", "dtype"]), &rows, writer)
            }
            Report::Describe(stats) => {
                let headers = labels(["column", "count", "unique", "top", "freq"]);
                let rows: Vec<Vec<String>> = stats
                    .iter()
                    .map(|s| {
                        vec![
                            s.column.clone(),
                            s.count.to_string(),
                            s.unique.to_string(),
                            s.top.clone().unwrap_or_default(),
                            s.freq.to_string(),
                        ]
                    })
                    .collect();
                self.write_records(&headers, &rows, writer)
            }
            Report::Columns(columns) => {
                let rows: Vec<Vec<String>> = columns.iter().cloned().map(one).collect();
                self.write_records(&labels(["column"]), &rows, writer)
            }
            Report::DTypes { columns, dtypes } => {
                let rows: Vec<Vec<String>> = columns
                    .iter()
                    .zip(dtypes)
                    .map(|(name, dtype)| vec![name.clone(), dtype.to_string()])
                    .collect();
                self.write_records(&labels(["column", "dtype"]), &rows, writer)
            }
            Report::Values { values, .. } => {
                let rows: Vec<Vec<String>> = values.iter().cloned().map(one).collect();
                self.write_records(&labels(["value"]), &rows, writer)
            }
            Report::Counts { column, counts } => {
                let rows: Vec<Vec<String>> = counts
                    .iter()
                    .map(|(value, n)| vec![value.clone(), n.to_string()])
                    .collect();
                self.write_records(&[column.clone(), "count".into()], &rows, writer)
            }
            Report::Mask { headers, mask } => {
                let rows: Vec<Vec<String>> = mask
                    .iter()
                    .map(|r| r.iter().map(bool::to_string).collect())
                    .collect();
                self.write_records(headers, &rows, writer)
            }
            Report::Shape { rows, cols } => {
                let values = vec![rows.to_string(), cols.to_string()];
                self.write_records(&labels(["rows", "cols"]), &[values], writer)
            }
            Report::Count(n) => self.write_records(&labels(["count"]), &[one(n.to_string())], writer),
        }
    }
}

fn labels<const N: usize>(names: [&str; N]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;
    use crate::ops;
    use crate::parser::CsvParser;
    use termcolor::NoColor;

    fn render(output: &CsvOutput, report: &Report) -> String {
        let mut out = NoColor::new(Vec::new());
        output.render(report, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_table_reloads_unchanged() {
        let mut table = Table::with_headers(["name", "note"]);
        table.append_row(&["\"Jo\"", ""]).unwrap();
        table.append_row(&["", " spaced "]).unwrap();

        let text = render(&CsvOutput::default(), &Report::Table(ops::TableView::all(&table)));
        assert_eq!(text, "name,note\n\"Jo\",\n, spaced \n");

        let reloaded = CsvParser::new().parse_reader(text.as_bytes()).unwrap();
        assert_eq!(reloaded.headers(), table.headers());
        assert_eq!(reloaded.rows(), table.rows());
    }

    #[test]
    fn test_delimiter_and_scalars() {
        let output = CsvOutput::new(b'\t');
        assert_eq!(render(&output, &Report::Shape { rows: 3, cols: 2 }), "rows\tcols\n3\t2\n");
        assert_eq!(render(&output, &Report::Count(6)), "count\n6\n");
    }
}
