//! diagnostics::goodness — degrees of freedom and fit probability.
//!
//! Purpose
//! -------
//! Judge a minimized chi-square against the chi-square distribution: compute
//! the degrees of freedom of a fit and the upper-tail survival probability
//! `P(χ² ≥ observed | ndof)`. The distribution backend sits behind the
//! [`ChiSquareTable`] capability trait so any numerical library can be
//! substituted without touching pipeline logic; [`StatrsChiSquare`] is the
//! default backend.
//!
//! Key behaviors
//! -------------
//! - [`degrees_of_freedom`]: observations in the fit range minus free
//!   parameters, rejecting non-positive results.
//! - [`fit_probability`]: upper-tail probability, monotonically decreasing
//!   in the statistic for fixed ndof and numerically stable from
//!   single-digit to several-hundred degrees of freedom.
//!
//! Conventions
//! -----------
//! - Probabilities are clamped to `[0, 1]` by the underlying survival
//!   function; a chi-square of zero yields probability 1.
//! - For `ndof → ∞` and `χ² ≈ ndof`, the probability approaches 0.5.
use crate::diagnostics::errors::{DiagnosticsError, DiagnosticsResult};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Capability trait for the chi-square survival function.
///
/// Implementors map `(x, dof)` to `P(χ² ≥ x)` for a chi-square distribution
/// with `dof` degrees of freedom. The default backend is
/// [`StatrsChiSquare`]; substituting another numerical library only
/// requires implementing this trait.
pub trait ChiSquareTable {
    fn survival(&self, x: f64, dof: usize) -> DiagnosticsResult<f64>;
}

/// `statrs`-backed chi-square survival function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsChiSquare;

impl ChiSquareTable for StatrsChiSquare {
    /// Upper-tail probability via `statrs`' [`ChiSquared`] survival
    /// function.
    ///
    /// # Errors
    /// - [`DiagnosticsError::InsufficientData`] when `dof == 0`.
    /// - [`DiagnosticsError::InvalidChiSquare`] for non-finite or negative
    ///   statistics.
    fn survival(&self, x: f64, dof: usize) -> DiagnosticsResult<f64> {
        if dof == 0 {
            return Err(DiagnosticsError::InsufficientData { n_obs: 0, n_params: 0 });
        }
        if !x.is_finite() || x < 0.0 {
            return Err(DiagnosticsError::InvalidChiSquare { value: x });
        }
        let dist = ChiSquared::new(dof as f64)
            .map_err(|_| DiagnosticsError::InvalidChiSquare { value: dof as f64 })?;
        Ok(dist.sf(x))
    }
}

/// Degrees of freedom of a fit: observations in the fit range minus free
/// parameters.
///
/// # Errors
/// Returns [`DiagnosticsError::InsufficientData`] when `n_obs <= n_params`,
/// since a fit with no residual degrees of freedom has no meaningful
/// goodness-of-fit statistic.
pub fn degrees_of_freedom(n_obs: usize, n_params: usize) -> DiagnosticsResult<usize> {
    if n_obs <= n_params {
        return Err(DiagnosticsError::InsufficientData { n_obs, n_params });
    }
    Ok(n_obs - n_params)
}

/// Fit probability: the upper-tail chi-square probability of the minimized
/// statistic.
///
/// A value near 1 means the model over-fits or the uncertainties are
/// over-estimated; a value near 0 means the model is inconsistent with the
/// data at the stated uncertainties. For a good fit with correct
/// uncertainties the probability is roughly uniform on (0, 1).
///
/// # Errors
/// Propagates backend errors from the [`ChiSquareTable`].
pub fn fit_probability(
    chi_square: f64, ndof: usize, table: &impl ChiSquareTable,
) -> DiagnosticsResult<f64> {
    table.survival(chi_square, ndof)
}
