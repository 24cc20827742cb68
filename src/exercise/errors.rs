//! Error surface for the exercise pipeline.
//!
//! Each dataset pipeline is independent: an `ExerciseError` is fatal to the
//! regime that produced it and to nothing else. The enum simply routes the
//! layer-specific errors upward.
use std::fmt;

use crate::{
    dataset::errors::DataError, diagnostics::errors::DiagnosticsError, fitting::errors::FitError,
    viz::errors::PlotError,
};

/// Result alias for pipeline operations.
pub type ExerciseResult<T> = Result<T, ExerciseError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseError {
    /// Input failure: missing file or malformed row.
    Data(DataError),
    /// Fit-engine failure (configuration or solver).
    Fit(FitError),
    /// Goodness-of-fit computation failure.
    Diagnostics(DiagnosticsError),
    /// Figure rendering failure.
    Plot(PlotError),
}

impl std::error::Error for ExerciseError {}

impl fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseError::Data(err) => write!(f, "{err}"),
            ExerciseError::Fit(err) => write!(f, "{err}"),
            ExerciseError::Diagnostics(err) => write!(f, "{err}"),
            ExerciseError::Plot(err) => write!(f, "{err}"),
        }
    }
}

impl From<DataError> for ExerciseError {
    fn from(err: DataError) -> Self {
        ExerciseError::Data(err)
    }
}

impl From<FitError> for ExerciseError {
    fn from(err: FitError) -> Self {
        ExerciseError::Fit(err)
    }
}

impl From<DiagnosticsError> for ExerciseError {
    fn from(err: DiagnosticsError) -> Self {
        ExerciseError::Diagnostics(err)
    }
}

impl From<PlotError> for ExerciseError {
    fn from(err: PlotError) -> Self {
        ExerciseError::Plot(err)
    }
}
