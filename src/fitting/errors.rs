//! Unified error surface for the chi-square fit engine.
//!
//! Every fallible operation in the fitting stack returns [`FitResult<T>`].
//! Configuration mistakes, numerical failures, model-level problems, and
//! backend solver errors are all normalized into [`FitError`], so callers
//! never see raw Argmin errors or model-specific error enums.
use argmin::core::{ArgminError, Error};

use crate::models::errors::ModelError;

/// Crate-wide result alias for fit-engine operations.
pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- FitOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Objective ----
    /// Objective returned a non-finite chi-square value.
    NonFiniteCost {
        value: f64,
    },

    /// No observations fall inside the requested fit window.
    EmptyFitWindow {
        tmax: f64,
    },

    // ---- Fit outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Finite Diffs ----
    /// Hessian matrix dimensions do not match parameter dimensions.
    HessianDimMismatch {
        expected: usize,
        found: (usize, usize),
    },

    /// Hessian values need to be finite.
    InvalidHessian {
        row: usize,
        col: usize,
        value: f64,
    },

    // ---- Model Errors ----
    /// Parameter vector length does not match the model arity.
    ArityMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },

    /// Model name not present in the registry.
    UnknownModel {
        name: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            FitError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            FitError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            FitError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- FitOptions ----
            FitError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            FitError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost change tolerance {tol}: {reason}")
            }
            FitError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            FitError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            FitError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            FitError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }

            // ---- Objective ----
            FitError::NonFiniteCost { value } => {
                write!(f, "Non-finite chi-square value: {value}")
            }
            FitError::EmptyFitWindow { tmax } => {
                write!(f, "No observations with time <= {tmax} in the fit window")
            }

            // ---- Fit outcome ----
            FitError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            FitError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            FitError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            FitError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            FitError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            FitError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            FitError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            FitError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            FitError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            FitError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Finite Diffs ----
            FitError::HessianDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian dimension mismatch: expected {expected}x{expected}, found {}x{}",
                    found.0, found.1
                )
            }
            FitError::InvalidHessian { row, col, value } => {
                write!(f, "Invalid Hessian entry at ({row}, {col}): {value}")
            }

            // ---- Model Errors ----
            FitError::ArityMismatch { model, expected, actual } => {
                write!(
                    f,
                    "Parameter vector for model '{model}' has length {actual}, expected {expected}"
                )
            }
            FitError::UnknownModel { name } => {
                write!(f, "Unknown model '{name}'")
            }

            // ---- Fallback ----
            FitError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for FitError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(fit_err) => match fit_err {
                ArgminError::InvalidParameter { text } => FitError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => FitError::NotImplemented { text },
                ArgminError::NotInitialized { text } => FitError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => FitError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => FitError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => FitError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => FitError::ImpossibleError { text },
                _ => FitError::UnknownError,
            },
            Err(err) => FitError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ModelError> for FitError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::ArityMismatch { model, expected, actual } => {
                FitError::ArityMismatch { model, expected, actual }
            }
            ModelError::UnknownModel { name } => FitError::UnknownModel { name },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmin::core::ArgminError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Conversion of Argmin errors into `FitError` wrappers.
    // - Conversion of model errors into the unified surface.
    //
    // They intentionally DO NOT cover:
    // - Display formatting of every variant (spot-checked only).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a typed Argmin error is downcast into the matching
    // `FitError` wrapper rather than the generic backend fallback.
    //
    // Given
    // -----
    // - An `argmin::core::Error` built from `ArgminError::InvalidParameter`.
    //
    // Expect
    // ------
    // - `FitError::InvalidParameter` with the original message text.
    fn from_argmin_error_maps_invalid_parameter() {
        // Arrange
        let argmin_err: Error =
            ArgminError::InvalidParameter { text: "bad theta".to_string() }.into();

        // Act
        let fit_err: FitError = argmin_err.into();

        // Assert
        assert_eq!(fit_err, FitError::InvalidParameter { text: "bad theta".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Verify that model arity violations surface through the unified error
    // enum with their context intact.
    //
    // Given
    // -----
    // - A `ModelError::ArityMismatch` for a three-parameter model fed five
    //   values.
    //
    // Expect
    // ------
    // - The equivalent `FitError::ArityMismatch` with identical fields.
    fn from_model_error_preserves_arity_context() {
        // Arrange
        let model_err = ModelError::ArityMismatch {
            model: "simple".to_string(),
            expected: 3,
            actual: 5,
        };

        // Act
        let fit_err: FitError = model_err.into();

        // Assert
        assert_eq!(
            fit_err,
            FitError::ArityMismatch { model: "simple".to_string(), expected: 3, actual: 5 }
        );
    }
}
