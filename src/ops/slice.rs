//! Row slicing: head, tail and random sampling

use rand::Rng;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Row, Table};

/// Number of rows `head` and `tail` show when the caller has no preference
pub const DEFAULT_VIEW_ROWS: usize = 5;

/// An owned copy of the headers and a subset of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    fn from_rows(table: &Table, rows: &[Row]) -> Self {
        Self {
            headers: table.headers().to_vec(),
            rows: rows.iter().map(Row::to_vec).collect(),
        }
    }

    /// Full copy of the table
    pub fn all(table: &Table) -> Self {
        Self::from_rows(table, table.rows())
    }
}

/// First `min(n, num_rows)` rows
pub fn head(table: &Table, n: usize) -> TableView {
    let end = n.min(table.num_rows());
    TableView::from_rows(table, &table.rows()[..end])
}

/// Last `min(n, num_rows)` rows, in original order
pub fn tail(table: &Table, n: usize) -> TableView {
    let start = table.num_rows().saturating_sub(n);
    TableView::from_rows(table, &table.rows()[start..])
}

/// One row chosen uniformly at random
pub fn sample(table: &Table) -> Result<TableView> {
    sample_with(table, &mut rand::rng())
}

/// One row chosen uniformly at random using the caller's generator
pub fn sample_with<R: Rng>(table: &Table, rng: &mut R) -> Result<TableView> {
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }
    let index = rng.random_range(0..table.num_rows());
    tracing::trace!(index, "sampled row");
    Ok(TableView::from_rows(table, &table.rows()[index..=index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn people() -> Table {
        let mut table = Table::with_headers(["first", "last", "age", "job"]);
        table.append_row(&["John", "Doe", "30", "Engineer"]).unwrap();
        table.append_row(&["Jane", "Smith", "25", "Doctor"]).unwrap();
        table.append_row(&["Tom", "Brown", "40", "Lawyer"]).unwrap();
        table
    }

    #[test]
    fn test_head() {
        let view = head(&people(), 2);
        assert_eq!(view.headers, ["first", "last", "age", "job"]);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[1][0], "Jane");
    }

    #[test]
    fn test_head_larger_than_table() {
        assert_eq!(head(&people(), 50).rows.len(), 3);
    }

    #[test]
    fn test_tail() {
        let view = tail(&people(), 2);
        assert_eq!(view.rows[0][0], "Jane");
        assert_eq!(view.rows[1][0], "Tom");
        assert!(tail(&people(), 0).rows.is_empty());
        assert_eq!(tail(&people(), 10).rows.len(), 3);
    }

    #[test]
    fn test_sample_returns_one_existing_row() {
        let table = people();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let view = sample_with(&table, &mut rng).unwrap();
            assert_eq!(view.rows.len(), 1);
            assert!(table.rows().iter().any(|r| r.cells() == view.rows[0].as_slice()));
        }
    }

    #[test]
    fn test_sample_is_deterministic_with_seed() {
        let table = people();
        let a = sample_with(&table, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = sample_with(&table, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_empty_table() {
        let table = Table::with_headers(["a"]);
        assert!(matches!(sample(&table), Err(Error::EmptyTable)));
    }
}
