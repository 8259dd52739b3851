use arrow::datatypes::DataType;
use edupredict_core::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing '{0}' column")]
    MissingColumn(String),

    #[error("column '{column}' has type {data_type}, expected a numeric type")]
    WrongType { column: String, data_type: DataType },

    #[error("null or unparseable value in '{column}' at row {row}")]
    NullValue { column: String, row: usize },
}
