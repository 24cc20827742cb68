//! Error type for dataset loading and validation.
//!
//! Every failure in the input layer is fatal to the dataset being loaded
//! (and only to it): missing files, malformed rows, and broken container
//! invariants all surface here. Advisory range findings are *not* errors;
//! see [`sanity`](crate::dataset::sanity).
use std::fmt;

/// Result alias for dataset-layer operations.
pub type DataResult<T> = Result<T, DataError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    // ---- File access ----
    /// Input path does not exist.
    FileNotFound {
        path: String,
    },
    /// Any other I/O failure while reading the file.
    Read {
        path: String,
        detail: String,
    },
    /// File contained no data rows.
    EmptyFile {
        path: String,
    },

    // ---- Row parsing ----
    /// A row did not decompose into exactly two whitespace-separated tokens.
    ColumnCountMismatch {
        line: usize,
        found: usize,
    },
    /// A token on a row failed to parse as a float.
    NonNumericToken {
        line: usize,
        token: String,
    },

    // ---- Container invariants ----
    /// Time and position sequences have different lengths.
    LengthMismatch {
        times: usize,
        positions: usize,
    },
    /// Series must be non-empty.
    EmptySeries,
    /// All values must be finite.
    NonFiniteValue {
        column: &'static str,
        index: usize,
        value: f64,
    },
    /// Time values must be non-decreasing.
    NonMonotonicTime {
        index: usize,
        value: f64,
    },
    /// Normalized series must start at t = 0.
    TimeOriginNotZero {
        first: f64,
    },
    /// Measurement uncertainty must be finite and > 0.
    InvalidSigma {
        value: f64,
    },
    /// Fit-range cutoff must be finite and > 0.
    InvalidTmax {
        value: f64,
    },
}

impl std::error::Error for DataError {}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::FileNotFound { path } => {
                write!(f, "Input file not found: {path}")
            }
            DataError::Read { path, detail } => {
                write!(f, "Failed to read {path}: {detail}")
            }
            DataError::EmptyFile { path } => {
                write!(f, "No data rows in {path}")
            }
            DataError::ColumnCountMismatch { line, found } => {
                write!(f, "Line {line}: expected 2 columns, found {found}")
            }
            DataError::NonNumericToken { line, token } => {
                write!(f, "Line {line}: token '{token}' is not a number")
            }
            DataError::LengthMismatch { times, positions } => {
                write!(f, "Length mismatch: {times} times vs {positions} positions")
            }
            DataError::EmptySeries => {
                write!(f, "Series must be non-empty")
            }
            DataError::NonFiniteValue { column, index, value } => {
                write!(f, "Non-finite {column} value at index {index}: {value}")
            }
            DataError::NonMonotonicTime { index, value } => {
                write!(f, "Time values must be non-decreasing: index {index} has {value}")
            }
            DataError::TimeOriginNotZero { first } => {
                write!(f, "Normalized time series must start at 0.0, found {first}")
            }
            DataError::InvalidSigma { value } => {
                write!(f, "Invalid measurement uncertainty: {value}, must be finite and > 0")
            }
            DataError::InvalidTmax { value } => {
                write!(f, "Invalid fit-range cutoff: {value}, must be finite and > 0")
            }
        }
    }
}
