//! Ranking of column values by text order

use std::cmp::Reverse;

use crate::error::Result;
use crate::model::Table;

/// The `n` largest values of a column, largest first.
///
/// Values are ordered as text, so `"9"` ranks above `"10"`.
pub fn nlargest(table: &Table, col: usize, n: usize) -> Result<Vec<String>> {
    let mut values = table.column_values(col)?;
    values.sort_unstable_by_key(|v| Reverse(*v));
    Ok(take(values, n))
}

/// The `n` smallest values of a column, smallest first
pub fn nsmallest(table: &Table, col: usize, n: usize) -> Result<Vec<String>> {
    let mut values = table.column_values(col)?;
    values.sort_unstable();
    Ok(take(values, n))
}

fn take(values: Vec<&str>, n: usize) -> Vec<String> {
    values.into_iter().take(n).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn scores() -> Table {
        let mut table = Table::with_headers(["name", "score"]);
        for row in [["a", "30"], ["b", "9"], ["c", "100"], ["d", "25"]] {
            table.append_row(&row).unwrap();
        }
        table
    }

    #[test]
    fn test_nsmallest_is_lexicographic() {
        assert_eq!(nsmallest(&scores(), 1, 2).unwrap(), vec!["100", "25"]);
    }

    #[test]
    fn test_nlargest_is_descending() {
        assert_eq!(nlargest(&scores(), 1, 2).unwrap(), vec!["9", "30"]);
    }

    #[test]
    fn test_n_larger_than_table() {
        assert_eq!(nlargest(&scores(), 0, 10).unwrap(), vec!["d", "c", "b", "a"]);
        assert_eq!(nsmallest(&scores(), 0, 10).unwrap().len(), 4);
        assert!(nsmallest(&scores(), 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_bad_column() {
        assert!(matches!(
            nlargest(&scores(), 5, 1),
            Err(Error::IndexOutOfRange { index: 5, .. })
        ));
    }
}
