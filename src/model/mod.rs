//! Data model for text-typed tables

mod schema;
mod table;

pub use schema::DType;
pub use table::{is_missing, Row, Table, MISSING};
