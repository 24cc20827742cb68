//! fitting::finite_diff — finite-difference gradient and Hessian helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference gradient and Hessian approximations around a
//! parameter vector, together with validation and symmetry cleanup, so that
//! the rest of the fit engine can request derivatives without depending
//! directly on the `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Compute forward-difference gradients with error capture and
//!   post-hoc validation via [`run_fd_diff`].
//! - Construct central-difference Hessians, falling back to forward
//!   differences when validation fails, via [`compute_hessian`].
//! - Enforce symmetry of Hessian matrices in-place to prepare them for
//!   curvature-based uncertainty estimates.
//!
//! Conventions
//! -----------
//! - Parameter vectors, gradients, and Hessians are all represented as
//!   `ndarray` containers over `f64` (`Theta`, `Grad`, `Hessian`).
//! - Central-difference Hessians are preferred; forward-difference is
//!   used only as a fallback when the central approximation fails
//!   validation.
//! - Domain errors are surfaced as [`FitError`] via `FitResult<T>`;
//!   Argmin's [`Error`] is confined to the thin boundary where
//!   finite-difference closures are invoked.
//!
//! Testing notes
//! -------------
//! - Unit tests cover both successful and failing paths for gradient and
//!   Hessian validation, including the central→forward Hessian fallback.
//! - Integration tests for the full fit engine exercise these helpers
//!   implicitly when derivatives are requested via finite differences.
use crate::fitting::{
    errors::FitResult,
    types::{Grad, Hessian, Theta},
    validation::{validate_grad, validate_hessian},
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// Compute a forward-difference gradient of `func` at `theta`, with error capture.
///
/// The FD closure can't return `Result`, so any error raised by `func` is
/// stored into `closure_err` and the closure returns `NaN`. This helper:
/// - clears `closure_err`,
/// - performs `forward_diff`,
/// - if an error was captured, returns it as `Err`,
/// - validates the resulting gradient,
/// - if validation succeeds, returns the gradient as `Ok(grad)`.
///
/// # Errors
/// Returns any error captured during evaluation of `func` inside the FD routine
/// or by validation of the resulting gradient.
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> FitResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

/// Approximate the Hessian of a gradient map at `theta`.
///
/// Prefers a central-difference scheme; any validation failure (shape or
/// finiteness) on the central approximation causes an automatic fallback to
/// a forward-difference Hessian. The matrix is symmetrized in-place after
/// validation so callers can feed it directly into symmetric
/// eigendecompositions.
///
/// # Errors
/// - [`FitError::HessianDimMismatch`](crate::fitting::errors::FitError) when
///   the fallback Hessian dimensions do not match `theta.len()`.
/// - [`FitError::InvalidHessian`](crate::fitting::errors::FitError) when the
///   fallback Hessian contains NaN or infinite entries.
pub fn compute_hessian<F: Fn(&Theta) -> Grad>(f: &F, theta: &Theta) -> FitResult<Hessian> {
    let dim = theta.len();
    let mut cent_hess = theta.central_hessian(f);
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = theta.forward_hessian(f);
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

// ---- Helper methods ----

/// Replace each off-diagonal pair `(i, j)` / `(j, i)` with their average so
/// the matrix is numerically symmetric; the diagonal is left untouched.
fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
