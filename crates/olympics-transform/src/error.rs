//! Errors raised while enforcing the dataset schema.

use thiserror::Error;

/// The raw inputs do not satisfy the fixed schema.
///
/// Fatal at normalization time: no query can run until the inputs are fixed.
#[derive(Debug, Error)]
pub enum DataIntegrityError {
    /// A required column is absent from an input table.
    #[error("required column '{column}' not found in {table}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A required cell is empty or `NA`.
    #[error("row {row}: required value missing in column '{column}'")]
    MissingValue { column: &'static str, row: usize },

    /// A cell could not be parsed into its column type.
    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        column: &'static str,
        row: usize,
        value: String,
    },

    /// The region lookup maps the same NOC code twice.
    #[error("duplicate NOC code '{noc}' in region lookup")]
    DuplicateRegion { noc: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for DataIntegrityError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataIntegrityError>;
