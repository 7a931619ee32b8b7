//! textframe - in-memory tables of text cells
//!
//! Loads delimited text into a [`Table`] and runs a fixed set of query and
//! transformation operations over it. Every cell is text and the empty string
//! marks a missing value.

pub mod config;
pub mod error;
pub mod model;
pub mod ops;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::{Error, Result};
pub use model::Table;
pub use parser::load;
