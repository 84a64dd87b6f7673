//! Errors raised at the JSON boundary. The probability math itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OddsError {
    /// Payload was not valid JSON, or did not match the expected shape
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card must have 3 rows, got {0}")]
    RowCount(usize),

    #[error("row {0} is not an array of cells")]
    RowNotArray(usize),

    #[error("row {row} must have 9 cells, got {len}")]
    RowLength { row: usize, len: usize },

    /// Cell held something other than a number or null
    #[error("row {row}, column {column}: expected a number or null")]
    NotANumber { row: usize, column: usize },

    #[error("row {row}: {value} is outside 1..=90")]
    NumberOutOfRange { row: usize, value: i64 },

    #[error("row {row}: two numbers compete for column {column}")]
    ColumnClash { row: usize, column: usize },

    #[error("number {0} appears more than once on the card")]
    DuplicateNumber(u8),
}

pub type OddsResult<T> = Result<T, OddsError>;
