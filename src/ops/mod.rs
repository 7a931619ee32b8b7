//! Query and transformation operations on a [`Table`](crate::model::Table)
//!
//! Query operations take `&Table` and return owned results. Mutating
//! operations take `&mut Table` and change it in place.

mod mutate;
mod rank;
mod slice;
mod summary;

pub use mutate::{clip, fillna, sort_values};
pub use rank::{nlargest, nsmallest};
pub use slice::{head, sample, sample_with, tail, TableView, DEFAULT_VIEW_ROWS};
pub use summary::{
    columns, describe, dtypes, info, isna, isnull, ndim, shape, size, unique, value_counts,
    ColumnStats, Info, ValueCounts,
};
