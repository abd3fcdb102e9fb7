// error.rs

use std::io;
use std::path::PathBuf;

/// Problems with user input, reported back to the prompt as `Error: ...`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("All arguments must be numbers")]
    NotANumber(String),

    #[error("{operation} requires at least two numbers")]
    TooFewArguments { operation: &'static str },

    #[error("No numbers provided for multiplication")]
    NoNumbers,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("The delete command requires exactly one argument (index)")]
    DeleteArity,

    #[error("Index must be a valid integer")]
    InvalidIndex(String),

    #[error("No record found at index {0}")]
    NoSuchRecord(i64),
}

/// Failures reading or writing the history file. These are logged by the
/// store and never reach the user.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header {found:?}, expected Operation,Input,Result")]
    Schema { found: Vec<String> },
}
