//! inference::hessian — curvature-based standard error utilities.
//!
//! Purpose
//! -------
//! Convert the local curvature of a chi-square objective at its minimum
//! into per-parameter standard error estimates. This module handles
//! conversion between `ndarray` and `nalgebra` types and derives classical
//! standard errors from the observed information matrix via an eigen-based
//! pseudoinverse.
//!
//! Key behaviors
//! -------------
//! - Call [`compute_hessian`] on a gradient map to obtain the observed
//!   information matrix `J(θ̂)`.
//! - Copy the resulting `ndarray` Hessian into a `nalgebra::DMatrix`
//!   (`fill_dmatrix`) for eigen-based linear algebra.
//! - Compute classical standard errors from the Moore–Penrose
//!   pseudoinverse of `J(θ̂)`.
//! - Provide [`chi_square_standard_errors`] as the fit-facing wrapper that
//!   builds the half-chi-square gradient map internally.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`compute_hessian`] returns a finite, square `n×n` matrix with
//!   `n = θ̂.len()`, already symmetrized; this module does **not**
//!   re-symmetrize.
//! - Eigenvalues with magnitude at most [`EIGEN_EPS`] are treated as
//!   numerically nonpositive and ignored when constructing pseudoinverse
//!   directions.
//!
//! Conventions
//! -----------
//! - The observed information is `J = ½∇²χ²(θ̂)`, so for a correctly
//!   weighted chi-square the resulting standard errors follow the usual
//!   covariance convention (χ² = −2 ln L up to a constant).
//! - Standard errors are returned as the square roots of diagonal
//!   variances; no full covariance matrix is currently exposed.
//! - No explicit matrix inverse is formed; all computations use symmetric
//!   eigendecomposition with eigenvalue truncation.
//! - Errors are reported via [`FitResult<T>`].
//!
//! Downstream usage
//! ----------------
//! - The exercise pipeline calls [`chi_square_standard_errors`] after a fit
//!   to obtain per-parameter uncertainties; non-finite results there are
//!   downgraded to a warning, not an error.
//! - The helper routines [`fill_dmatrix`] and [`solve_for_se`] are internal
//!   utilities.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the `ndarray` → `DMatrix` copy, agreement of
//!   classical SEs with the analytic pseudoinverse for diagonal quadratic
//!   objectives, and the chi-square wrapper on an exactly solvable
//!   constant-offset model.
use crate::{
    dataset::data::FitWindow,
    fitting::{
        errors::FitResult,
        finite_diff::compute_hessian,
        objective::ChiSquareObjective,
        traits::Objective,
        types::{Grad, Theta},
    },
};
use finitediff::FiniteDiff;
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Eigenvalues at or below this magnitude are treated as numerically zero
/// when forming pseudoinverse directions, inflating standard errors along
/// weakly identified parameter directions.
pub const EIGEN_EPS: f64 = 1e-10;

/// Compute classical standard errors from an observed-information gradient
/// map.
///
/// `f` must map `θ` to the gradient of the observed information's
/// generating function (here `½∇χ²`); [`compute_hessian`] differentiates it
/// numerically to obtain `J(θ̂)`, which is then decomposed to produce
/// per-parameter standard errors `SE(θ̂ᵢ) = sqrt(diag J⁺)ᵢ`.
///
/// # Errors
/// Propagates any error from [`compute_hessian`] (Hessian dimension
/// mismatches or non-finite entries detected by validation).
pub fn calc_standard_errors<F: Fn(&Theta) -> Grad>(
    f: &F, theta_hat: &Theta,
) -> FitResult<Array1<f64>> {
    let n = theta_hat.len();
    let obs_info = compute_hessian(f, theta_hat)?;
    let mut obs_info_nalg = DMatrix::<f64>::zeros(obs_info.nrows(), obs_info.ncols());
    fill_dmatrix(&obs_info, &mut obs_info_nalg);
    Ok(solve_for_se(obs_info_nalg, n))
}

/// Standard errors for a chi-square fit at its minimum.
///
/// Builds the half-chi-square gradient map `θ ↦ ½∇χ²(θ)` by central
/// finite differences of the objective and delegates to
/// [`calc_standard_errors`]. The returned vector may contain large values
/// along weakly identified directions; callers should treat non-finite
/// entries as a convergence-quality warning.
///
/// # Errors
/// Propagates curvature-validation errors from [`compute_hessian`].
pub fn chi_square_standard_errors(
    objective: &ChiSquareObjective<'_>, window: &FitWindow, theta_hat: &Theta,
) -> FitResult<Array1<f64>> {
    let half_chi2 = |theta: &Theta| -> f64 {
        match objective.value(theta, window) {
            Ok(v) => 0.5 * v,
            Err(_) => f64::NAN,
        }
    };
    let grad_map = |theta: &Theta| -> Grad { theta.central_diff(&half_chi2) };
    calc_standard_errors(&grad_map, theta_hat)
}

// ---- Helper methods ----

/// Copy a square `ndarray` observed-information matrix into a preallocated
/// `nalgebra::DMatrix` using column-major writes. Symmetry is preserved,
/// not enforced; the input is assumed already symmetrized upstream.
fn fill_dmatrix(obs_info: &Array2<f64>, obs_info_nalg: &mut DMatrix<f64>) {
    let n = obs_info.ncols();
    for j in 0..n {
        for i in j..n {
            if j == i {
                obs_info_nalg[(i, i)] = obs_info[[i, i]];
            } else {
                obs_info_nalg[(i, j)] = obs_info[[i, j]];
                obs_info_nalg[(j, i)] = obs_info[[j, i]];
            }
        }
    }
}

/// Classical standard errors from a symmetric observed information matrix.
///
/// Uses the symmetric eigendecomposition `J = Q Λ Qᵀ` and the truncation
/// rule `λ ≤ EIGEN_EPS ⇒ dropped`, implementing
/// `Var(θ̂ᵢ) = Σ_{k: λₖ > EIGEN_EPS} Q[i,k]² / λₖ` and returning
/// `sqrt(Var(θ̂ᵢ))` per parameter.
fn solve_for_se(obs_info_nalg: DMatrix<f64>, n: usize) -> Array1<f64> {
    let eigen_decomp = obs_info_nalg.symmetric_eigen();
    let mut se = Array1::<f64>::zeros(n);
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;
    for i in 0..n {
        se[i] = eigenvals
            .iter()
            .enumerate()
            .filter(|(_, lambda)| **lambda > EIGEN_EPS)
            .map(|(k, &lambda)| q[(i, k)] * q[(i, k)] / lambda)
            .sum();
        se[i] = se[i].sqrt();
    }
    se
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registry::{ModelKind, ModelSpec};
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Correct copying of Hessians from `ndarray` into `DMatrix`.
    // - Classical SEs for simple quadratic objectives with known analytic
    //   information matrices.
    // - The chi-square wrapper against the closed-form single-parameter
    //   result SE = σ / sqrt(n).
    //
    // They intentionally DO NOT cover:
    // - End-to-end pipeline inference; see the integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `fill_dmatrix` copies entries without altering values or
    // symmetry.
    //
    // Given
    // -----
    // - A small 2×2 symmetric `Array2<f64>` with distinct entries.
    //
    // Expect
    // ------
    // - The corresponding `DMatrix` has identical entries at all positions.
    fn fill_dmatrix_copies_ndarray_into_dmatrix_without_modification() {
        // Arrange
        let obs_info: Array2<f64> = array![[2.0, 0.5], [0.5, 1.0]];
        let mut obs_info_nalg = DMatrix::<f64>::zeros(2, 2);

        // Act
        fill_dmatrix(&obs_info, &mut obs_info_nalg);

        // Assert
        assert_eq!(obs_info_nalg[(0, 0)], 2.0);
        assert_eq!(obs_info_nalg[(0, 1)], 0.5);
        assert_eq!(obs_info_nalg[(1, 0)], 0.5);
        assert_eq!(obs_info_nalg[(1, 1)], 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Check that `calc_standard_errors` produces classical SEs equal to the
    // diagonal of the analytic pseudoinverse for a diagonal quadratic.
    //
    // Given
    // -----
    // - A diagonal information matrix A = diag(4, 1) encoded via a linear
    //   gradient map g(θ) = A θ.
    // - A generic θ̂ (its value is irrelevant for a constant Hessian).
    //
    // Expect
    // ------
    // - Classical SEs approximately [1/sqrt(4), 1/sqrt(1)] = [0.5, 1.0].
    fn calc_standard_errors_diagonal_quadratic_matches_analytic_se() {
        // Arrange
        let a = array![[4.0, 0.0], [0.0, 1.0]];
        let f = |theta: &Array1<f64>| -> Array1<f64> { a.dot(theta) };
        let theta_hat = array![1.0, -1.0];

        // Act
        let se = calc_standard_errors(&f, &theta_hat).unwrap();

        // Assert
        assert_eq!(se.len(), 2);
        assert!((se[0] - 0.5).abs() < 1e-6);
        assert!((se[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Verify the chi-square wrapper against the closed-form uncertainty of
    // a constant-offset fit: SE(c) = σ / sqrt(n).
    //
    // Given
    // -----
    // - The `damped` model with zero amplitude and zero residuals (all
    //   positions zero at offset 0), over a 4-point window with σ = 0.2.
    //
    // Expect
    // ------
    // - The offset's SE close to σ / sqrt(n) = 0.1, up to the small
    //   amplitude–offset correlation of this window.
    fn chi_square_standard_errors_match_constant_offset_formula() {
        // Arrange
        let spec = ModelSpec::lookup(ModelKind::Damped);
        let objective = ChiSquareObjective::new(&spec);
        let window = FitWindow {
            time: array![0.0, 1.0, 2.0, 3.0],
            position: array![0.0, 0.0, 0.0, 0.0],
            sigma: 0.2,
            tmax: 100.0,
        };
        // Zero amplitude: the model reduces to the constant offset c.
        let theta_hat = array![0.0, 4.4, 0.3, 0.1, 0.0];

        // Act
        let se = chi_square_standard_errors(&objective, &window, &theta_hat).unwrap();

        // Assert
        assert_eq!(se.len(), 5);
        assert!((se[4] - 0.1).abs() < 5e-3);
    }
}
