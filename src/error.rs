use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
/// Conversion error
pub enum ConversionError {
    #[error("Input array is empty")]
    EmptyInput,

    #[error("Invalid delimiter: delimiter must not be empty")]
    InvalidDelimiter,

    /// `column` is 1-based.
    #[error("Invalid headers: column {column} is blank")]
    InvalidHeader { column: usize },

    /// `line` is the 1-based position of the offending line in the input, header included.
    #[error("Line {line}: Column count mismatch. Expected {expected}, got {actual}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Input file is empty")]
    EmptyFile,

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to process CSV file: {0}")]
    Processing(String),
}
