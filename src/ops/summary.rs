//! Column introspection and per-column summaries

use std::mem::size_of;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use serde::Serialize;

use crate::error::Result;
use crate::model::{is_missing, DType, Row, Table};

/// Occurrence count per distinct cell text, in first-appearance order
pub type ValueCounts = IndexMap<String, usize, FxBuildHasher>;

/// `(num_rows, num_cols)`
pub fn shape(table: &Table) -> (usize, usize) {
    (table.num_rows(), table.num_cols())
}

/// Total number of cells
pub fn size(table: &Table) -> usize {
    table.num_rows() * table.num_cols()
}

/// Number of axes. A table always has rows and columns.
pub fn ndim(_table: &Table) -> usize {
    2
}

/// Type of every column; no inference is performed
pub fn dtypes(table: &Table) -> Vec<DType> {
    vec![DType::String; table.num_cols()]
}

/// Column names in column order
pub fn columns(table: &Table) -> Vec<String> {
    table.headers().to_vec()
}

/// Concise summary of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub num_cols: usize,
    pub columns: Vec<String>,
    pub dtypes: Vec<DType>,
    /// Approximate bytes held by the table
    pub memory_usage: usize,
    pub num_rows: usize,
    /// Number of missing (empty) cells
    pub missing: usize,
}

pub fn info(table: &Table) -> Info {
    Info {
        num_cols: table.num_cols(),
        columns: columns(table),
        dtypes: dtypes(table),
        memory_usage: memory_usage(table),
        num_rows: table.num_rows(),
        missing: count_missing(table),
    }
}

fn memory_usage(table: &Table) -> usize {
    let text = |s: &String| size_of::<String>() + s.len();
    let headers: usize = table.headers().iter().map(text).sum();
    let rows: usize = table
        .rows()
        .iter()
        .map(|r| size_of::<Row>() + r.cells().iter().map(text).sum::<usize>())
        .sum();
    size_of::<Table>() + headers + rows
}

fn count_missing(table: &Table) -> usize {
    table
        .rows()
        .iter()
        .flat_map(|r| r.cells())
        .filter(|c| is_missing(c))
        .count()
}

/// Descriptive statistics for one column. Missing cells are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    /// Non-missing cells
    pub count: usize,
    /// Distinct non-missing values
    pub unique: usize,
    /// Most frequent value; the earliest one wins a tie
    pub top: Option<String>,
    pub freq: usize,
}

/// Statistics for every column
pub fn describe(table: &Table) -> Vec<ColumnStats> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let mut counts: IndexMap<&str, usize, FxBuildHasher> = IndexMap::default();
            for row in table.rows() {
                let cell = &row.cells()[col];
                if !is_missing(cell) {
                    *counts.entry(cell.as_str()).or_default() += 1;
                }
            }

            let mut top: Option<(&str, usize)> = None;
            for (&value, &n) in &counts {
                if top.map_or(true, |(_, best)| n > best) {
                    top = Some((value, n));
                }
            }

            ColumnStats {
                column: name.clone(),
                count: counts.values().sum(),
                unique: counts.len(),
                top: top.map(|(v, _)| v.to_owned()),
                freq: top.map_or(0, |(_, n)| n),
            }
        })
        .collect()
}

/// Distinct values of a column in first-appearance order
pub fn unique(table: &Table, col: usize) -> Result<Vec<String>> {
    let values: IndexSet<&str, FxBuildHasher> = table.column_values(col)?.into_iter().collect();
    Ok(values.into_iter().map(str::to_owned).collect())
}

/// Count occurrences of each distinct value in a column
pub fn value_counts(table: &Table, col: usize) -> Result<ValueCounts> {
    let mut counts = ValueCounts::default();
    for value in table.column_values(col)? {
        if let Some(n) = counts.get_mut(value) {
            *n += 1;
        } else {
            counts.insert(value.to_owned(), 1);
        }
    }
    Ok(counts)
}

/// Table-shaped mask, true where a cell is missing
pub fn isnull(table: &Table) -> Vec<Vec<bool>> {
    table
        .rows()
        .iter()
        .map(|r| r.cells().iter().map(|c| is_missing(c)).collect())
        .collect()
}

/// Alias for [`isnull`]
pub fn isna(table: &Table) -> Vec<Vec<bool>> {
    isnull(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn fruit() -> Table {
        let mut table = Table::with_headers(["fruit", "color"]);
        for row in [
            ["apple", "red"],
            ["pear", ""],
            ["apple", "green"],
            ["fig", "red"],
            ["pear", ""],
        ] {
            table.append_row(&row).unwrap();
        }
        table
    }

    #[test]
    fn test_shape_size_ndim() {
        let table = fruit();
        assert_eq!(shape(&table), (5, 2));
        assert_eq!(size(&table), 10);
        assert_eq!(ndim(&table), 2);

        let empty = Table::new(0, 0).unwrap();
        assert_eq!(shape(&empty), (0, 0));
        assert_eq!(size(&empty), 0);
        assert_eq!(ndim(&empty), 2);
    }

    #[test]
    fn test_dtypes_and_columns() {
        let table = fruit();
        assert_eq!(dtypes(&table), vec![DType::String, DType::String]);
        assert_eq!(dtypes(&table)[0].to_string(), "string");
        assert_eq!(columns(&table), vec!["fruit", "color"]);
    }

    #[test]
    fn test_info() {
        let table = fruit();
        let info = info(&table);
        assert_eq!(info.num_cols, 2);
        assert_eq!(info.num_rows, 5);
        assert_eq!(info.columns, vec!["fruit", "color"]);
        assert_eq!(info.missing, 2);
        assert!(info.memory_usage >= size_of::<Table>());
    }

    #[test]
    fn test_describe() {
        let stats = describe(&fruit());
        assert_eq!(
            stats[0],
            ColumnStats {
                column: "fruit".into(),
                count: 5,
                unique: 3,
                top: Some("apple".into()),
                freq: 2,
            }
        );
        assert_eq!(stats[1].count, 3);
        assert_eq!(stats[1].unique, 2);
        assert_eq!(stats[1].top.as_deref(), Some("red"));
        assert_eq!(stats[1].freq, 2);
    }

    #[test]
    fn test_describe_all_missing() {
        let table = Table::new(2, 1).unwrap();
        let stats = describe(&table);
        assert_eq!(stats[0].count, 0);
        assert_eq!(stats[0].top, None);
        assert_eq!(stats[0].freq, 0);
    }

    #[test]
    fn test_unique_deduplicates_in_order() {
        assert_eq!(unique(&fruit(), 0).unwrap(), vec!["apple", "pear", "fig"]);
        assert_eq!(unique(&fruit(), 1).unwrap(), vec!["red", "", "green"]);
    }

    #[test]
    fn test_value_counts() {
        let table = fruit();
        let counts = value_counts(&table, 0).unwrap();
        assert_eq!(counts.get("apple"), Some(&2));
        assert_eq!(counts.get("pear"), Some(&2));
        assert_eq!(counts.get("fig"), Some(&1));
        assert_eq!(counts.keys().collect::<Vec<_>>(), ["apple", "pear", "fig"]);

        for col in 0..table.num_cols() {
            let total: usize = value_counts(&table, col).unwrap().values().sum();
            assert_eq!(total, table.num_rows());
        }
    }

    #[test]
    fn test_isnull() {
        let mask = isnull(&fruit());
        assert_eq!(mask.len(), 5);
        assert_eq!(mask[1], vec![false, true]);
        assert_eq!(mask[0], vec![false, false]);
        assert_eq!(isna(&fruit()), mask);
    }

    #[test]
    fn test_bad_column() {
        let table = fruit();
        assert!(matches!(
            unique(&table, 2),
            Err(Error::IndexOutOfRange { index: 2, num_cols: 2 })
        ));
        assert!(value_counts(&table, 7).is_err());
    }
}
