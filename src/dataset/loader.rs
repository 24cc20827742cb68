//! Two-column text-file loader for oscillator datasets.
//!
//! Input files are plain text with two whitespace-separated floating-point
//! columns per line (time, position) and no header. Blank lines and lines
//! starting with `#` are skipped; any other line that does not decompose
//! into exactly two numeric tokens is a hard error naming its 1-based line
//! number. After parsing, the time axis is shifted so the first sample is
//! at `t = 0` and the per-dataset uncertainty from [`DatasetMeta`] is
//! attached to every position value.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::dataset::{
    data::{DatasetMeta, OscillationData},
    errors::{DataError, DataResult},
};
use ndarray::Array1;

/// Parse a two-column whitespace-delimited file into raw (time, position)
/// vectors, in file order, without any normalization.
///
/// # Errors
/// - [`DataError::FileNotFound`] when the path does not exist.
/// - [`DataError::Read`] for any other I/O failure.
/// - [`DataError::ColumnCountMismatch`] when a non-comment line does not
///   have exactly two tokens, naming the 1-based line number.
/// - [`DataError::NonNumericToken`] when a token fails to parse as `f64`,
///   naming the line and the offending token.
/// - [`DataError::EmptyFile`] when no data rows were found.
pub fn load_two_column(path: impl AsRef<Path>) -> DataResult<(Vec<f64>, Vec<f64>)> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataError::FileNotFound { path: display.clone() },
        _ => DataError::Read { path: display.clone(), detail: err.to_string() },
    })?;

    let mut times = Vec::new();
    let mut positions = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .map_err(|err| DataError::Read { path: display.clone(), detail: err.to_string() })?;
        let line_no = number + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(DataError::ColumnCountMismatch { line: line_no, found: tokens.len() });
        }
        let time = parse_token(tokens[0], line_no)?;
        let position = parse_token(tokens[1], line_no)?;
        times.push(time);
        positions.push(position);
    }

    if times.is_empty() {
        return Err(DataError::EmptyFile { path: display });
    }
    Ok((times, positions))
}

/// Load, normalize, and validate a dataset.
///
/// Reads the file via [`load_two_column`], subtracts the first time value
/// from all times so the series starts at zero, and attaches the uniform
/// uncertainty and fit cutoff from `meta` through
/// [`OscillationData::new`].
///
/// # Errors
/// Propagates parse errors from [`load_two_column`] and container
/// validation errors from [`OscillationData::new`].
pub fn load_dataset(path: impl AsRef<Path>, meta: DatasetMeta) -> DataResult<OscillationData> {
    let (times, positions) = load_two_column(path)?;
    let t0 = times[0];
    let time = Array1::from_iter(times.into_iter().map(|t| t - t0));
    let position = Array1::from(positions);
    OscillationData::new(time, position, meta)
}

fn parse_token(token: &str, line: usize) -> DataResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| DataError::NonNumericToken { line, token: token.to_string() })
}
