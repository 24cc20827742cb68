//! inference — parameter uncertainties from local curvature.
//!
//! Purpose
//! -------
//! Turn the curvature of a minimized chi-square objective into per-parameter
//! standard error estimates. The observed information `J = ½∇²χ²(θ̂)` is
//! approximated by finite differences and decomposed with a symmetric
//! eigendecomposition; standard errors are the square roots of the diagonal
//! of the resulting pseudoinverse.
//!
//! Conventions
//! -----------
//! - Eigenvalue truncation (see [`hessian::EIGEN_EPS`]) protects against
//!   division by near-zero eigenvalues along weakly identified directions.
//! - Failures and non-finite results are reported, not fixed: a fit whose
//!   curvature cannot produce finite uncertainties is surfaced to the
//!   operator as a warning by the pipeline layer.

pub mod hessian;

pub use self::hessian::{calc_standard_errors, chi_square_standard_errors, EIGEN_EPS};
