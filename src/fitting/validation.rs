//! Validation helpers for chi-square minimization.
//!
//! This module centralizes common consistency checks used across the
//! fit-engine interface:
//!
//! - **Tolerance checks**: [`verify_tol_grad`], [`verify_tol_cost`] ensure
//!   numeric tolerances are finite and strictly positive when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks chi-square outputs
//!   for finiteness.
//! - **Hessians**: [`validate_hessian`] enforces shape and finiteness of
//!   second-order information.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`FitError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::fitting::{
    errors::{FitError, FitResult},
    types::{Grad, Hessian, Theta},
};

/// Validate the optional gradient-norm tolerance.
///
/// - Accepts `None` (no stopping rule on gradient).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`FitError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: Option<f64>) -> FitResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(FitError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(FitError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the optional cost-change tolerance (for convergence).
///
/// - Accepts `None` (no stopping rule on cost change).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`FitError::InvalidTolCost`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_cost(tol: Option<f64>) -> FitResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(FitError::InvalidTolCost { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(FitError::InvalidTolCost { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`FitError::GradientDimMismatch`] if length does not match `dim`.
/// - [`FitError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> FitResult<()> {
    if grad.len() != dim {
        return Err(FitError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(FitError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Returns
/// The owned `Theta` if valid.
///
/// # Errors
/// - [`FitError::MissingThetaHat`] if no vector was provided.
/// - [`FitError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> FitResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(FitError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(FitError::MissingThetaHat),
    }
}

/// Validate that a scalar chi-square value is finite.
///
/// # Errors
/// Returns [`FitError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> FitResult<()> {
    if !value.is_finite() {
        return Err(FitError::NonFiniteCost { value });
    }
    Ok(())
}

/// Validate the shape and entries of a Hessian matrix.
///
/// # Checks
/// 1. Matrix dimensions must equal `dim × dim`.
/// 2. All entries must be finite (no NaN or ±∞).
///
/// # Arguments
/// - `hessian`: Hessian matrix to validate.
/// - `dim`: expected dimension (both rows and columns).
///
/// # Returns
/// - `Ok(())` if the Hessian passes all checks.
///
/// # Errors
/// - [`FitError::HessianDimMismatch`] if dimensions do not match `dim`.
/// - [`FitError::InvalidHessian`] if any entry is non-finite, with offending
///   row/col indices and value.
pub fn validate_hessian(hessian: &Hessian, dim: usize) -> FitResult<()> {
    if hessian.nrows() != dim || hessian.ncols() != dim {
        return Err(FitError::HessianDimMismatch {
            expected: dim,
            found: (hessian.nrows(), hessian.ncols()),
        });
    }
    for ((i, j), &value) in hessian.indexed_iter() {
        if !value.is_finite() {
            return Err(FitError::InvalidHessian { row: i, col: j, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of valid tolerances, gradients, parameter vectors, and
    //   Hessians.
    // - Rejection with the expected `FitError` variant for non-finite or
    //   mis-shaped inputs.
    //
    // They intentionally DO NOT cover:
    // - How these validators are wired into the adapter and runner; that is
    //   exercised by the fit-engine tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Confirm that `None` tolerances pass while non-positive ones fail.
    //
    // Given
    // -----
    // - `None`, a positive tolerance, and a zero tolerance.
    //
    // Expect
    // ------
    // - `Ok` for the first two, `InvalidTolGrad` for the zero.
    fn verify_tol_grad_accepts_none_and_positive_rejects_zero() {
        assert!(verify_tol_grad(None).is_ok());
        assert!(verify_tol_grad(Some(1e-8)).is_ok());
        assert!(matches!(verify_tol_grad(Some(0.0)), Err(FitError::InvalidTolGrad { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Confirm that gradient validation reports the first non-finite entry.
    //
    // Given
    // -----
    // - A length-3 gradient whose middle element is NaN.
    //
    // Expect
    // ------
    // - `InvalidGradient` naming index 1.
    fn validate_grad_reports_first_non_finite_entry() {
        // Arrange
        let grad = array![1.0, f64::NAN, 2.0];

        // Act
        let res = validate_grad(&grad, 3);

        // Assert
        match res {
            Err(FitError::InvalidGradient { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidGradient, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm that a missing parameter vector is distinguished from a
    // present-but-invalid one.
    //
    // Given
    // -----
    // - `None` and a vector containing infinity.
    //
    // Expect
    // ------
    // - `MissingThetaHat` and `InvalidThetaHat` respectively.
    fn validate_theta_hat_distinguishes_missing_from_invalid() {
        assert!(matches!(validate_theta_hat(None), Err(FitError::MissingThetaHat)));
        assert!(matches!(
            validate_theta_hat(Some(array![1.0, f64::INFINITY])),
            Err(FitError::InvalidThetaHat { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Confirm Hessian validation checks shape before entries.
    //
    // Given
    // -----
    // - A 2×3 matrix validated against dim 2.
    //
    // Expect
    // ------
    // - `HessianDimMismatch` with the observed shape.
    fn validate_hessian_rejects_non_square_shape() {
        // Arrange
        let hess = Array2::<f64>::zeros((2, 3));

        // Act
        let res = validate_hessian(&hess, 2);

        // Assert
        assert!(matches!(res, Err(FitError::HessianDimMismatch { expected: 2, found: (2, 3) })));
    }
}
