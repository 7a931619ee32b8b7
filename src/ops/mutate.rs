//! In-place transforms: fillna, clip and sort_values

use crate::error::Result;
use crate::model::{is_missing, Table};

/// Replace every missing cell with `value`. Returns the number of cells filled.
pub fn fillna(table: &mut Table, value: &str) -> usize {
    let mut filled = 0;
    for row in table.rows_mut() {
        for cell in row.cells_mut() {
            if is_missing(cell) {
                value.clone_into(cell);
                filled += 1;
            }
        }
    }
    tracing::debug!(filled, "fillna");
    filled
}

/// Clamp every cell into `[lower, upper]` by text order.
/// Returns the number of cells changed.
pub fn clip(table: &mut Table, lower: &str, upper: &str) -> usize {
    let mut changed = 0;
    for row in table.rows_mut() {
        for cell in row.cells_mut() {
            let bound = if cell.as_str() < lower {
                lower
            } else if cell.as_str() > upper {
                upper
            } else {
                continue;
            };
            bound.clone_into(cell);
            changed += 1;
        }
    }
    tracing::debug!(lower, upper, changed, "clip");
    changed
}

/// Sort rows by one column in ascending text order. Equal keys keep their
/// relative order.
pub fn sort_values(table: &mut Table, col: usize) -> Result<()> {
    table.check_column(col)?;
    table
        .rows_mut()
        .sort_by(|a, b| a.cells()[col].cmp(&b.cells()[col]));
    tracing::debug!(col, "sort_values");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn table(rows: &[[&str; 2]]) -> Table {
        let mut table = Table::with_headers(["key", "tag"]);
        for row in rows {
            table.append_row(row).unwrap();
        }
        table
    }

    fn column(table: &Table, col: usize) -> Vec<&str> {
        table.column_values(col).unwrap()
    }

    #[test]
    fn test_fillna() {
        let mut t = table(&[["a", ""], ["", "x"], ["c", "y"]]);
        assert_eq!(fillna(&mut t, "NA"), 2);
        assert_eq!(column(&t, 0), ["a", "NA", "c"]);
        assert_eq!(column(&t, 1), ["NA", "x", "y"]);
    }

    #[test]
    fn test_fillna_is_idempotent() {
        let mut once = table(&[["", "1"], ["2", ""]]);
        fillna(&mut once, "0");
        let mut twice = once.clone();
        assert_eq!(fillna(&mut twice, "0"), 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clip() {
        let mut t = table(&[["a", "m"], ["m", "m"], ["z", "m"]]);
        assert_eq!(clip(&mut t, "b", "y"), 2);
        assert_eq!(column(&t, 0), ["b", "m", "y"]);
        assert_eq!(column(&t, 1), ["m", "m", "m"]);
    }

    #[test]
    fn test_clip_missing_cells_fall_below_lower() {
        let mut t = table(&[["", "q"]]);
        clip(&mut t, "a", "z");
        assert_eq!(column(&t, 0), ["a"]);
    }

    #[test]
    fn test_sort_values() {
        let mut t = table(&[["30", "x"], ["100", "y"], ["9", "z"]]);
        sort_values(&mut t, 0).unwrap();
        assert_eq!(column(&t, 0), ["100", "30", "9"]);
        assert_eq!(column(&t, 1), ["y", "x", "z"]);
    }

    #[test]
    fn test_sort_values_is_stable() {
        let mut t = table(&[["b", "1"], ["a", "2"], ["b", "3"], ["a", "4"], ["b", "5"]]);
        sort_values(&mut t, 0).unwrap();
        assert_eq!(column(&t, 0), ["a", "a", "b", "b", "b"]);
        assert_eq!(column(&t, 1), ["2", "4", "1", "3", "5"]);
    }

    #[test]
    fn test_sort_values_bad_column() {
        let mut t = table(&[["b", "1"], ["a", "2"]]);
        let before = t.clone();
        assert!(matches!(
            sort_values(&mut t, 2),
            Err(Error::IndexOutOfRange { index: 2, num_cols: 2 })
        ));
        assert_eq!(t, before);
    }
}
