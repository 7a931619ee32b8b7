//! Column type information

use serde::{Deserialize, Serialize};

/// Reported type of a column. Every cell is text, so there is one variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    #[default]
    String,
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::String => write!(f, "string"),
        }
    }
}
