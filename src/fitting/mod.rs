//! fitting — argmin-powered chi-square minimization engine.
//!
//! Purpose
//! -------
//! Provide a high-level optimization layer for **minimizing chi-square
//! objectives**. Callers implement (or reuse) a single trait, [`Objective`],
//! and invoke [`minimize`] — or hold an [`LbfgsMinimizer`] behind the
//! [`Minimizer`] capability trait — to run L-BFGS with a configurable line
//! search, tolerances, and finite-difference fallbacks.
//!
//! Key behaviors
//! -------------
//! - Expose user-supplied objectives to Argmin via [`adapter::ArgMinAdapter`].
//! - Expose a single entrypoint [`minimize`] that:
//!   - validates the initial guess with [`Objective::check`],
//!   - selects an L-BFGS solver via [`builders`] based on [`traits::LineSearcher`],
//!   - executes the solver via [`run::run_lbfgs`], and
//!   - normalizes results into a [`FitOutcome`].
//! - Provide robust finite-difference helpers in [`finite_diff`] for
//!   gradients and Hessians when analytic derivatives are missing, with
//!   post-hoc validation and error capture.
//! - Centralize configuration ([`Tolerances`], [`FitOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//! - Ship the weighted least-squares objective used by the exercises in
//!   [`objective`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The engine minimizes the objective **directly**; chi-square is already
//!   a cost, so no sign conventions exist anywhere in this stack.
//! - [`Objective::value`] and [`Objective::grad`] must treat invalid inputs
//!   as recoverable [`FitError`] values, not panics.
//! - Vectors and matrices use the canonical aliases [`Theta`], [`Grad`],
//!   [`types::Hessian`]; all are assumed finite whenever optimization proceeds.
//! - Convergence is **not guaranteed**: poor initial guesses may stop at a
//!   local minimum or exhaust the iteration budget. That sensitivity is a
//!   documented property of the exercise; outcomes report it via
//!   `converged`/`status` and there is no automatic multi-start or retry.
//!
//! Downstream usage
//! ----------------
//! - The exercise pipeline builds a [`objective::ChiSquareObjective`] per
//!   (model, dataset) pair, obtains a fit window from the dataset layer, and
//!   calls [`Minimizer::minimize`] with a caller-supplied initial guess.
//! - The inference layer reuses [`finite_diff::compute_hessian`] to turn the
//!   curvature at the minimum into parameter standard errors.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover adapter pass-through and FD fallback,
//!   solver construction and tolerance wiring, validation behavior, and
//!   convergence on convex objectives including the restart-at-minimum
//!   property.
//! - Integration tests exercise [`minimize`] on the shipped datasets.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod errors;
pub mod finite_diff;
pub mod objective;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{minimize, LbfgsMinimizer};
pub use self::errors::{FitError, FitResult};
pub use self::objective::ChiSquareObjective;
pub use self::traits::{FitOptions, FitOutcome, LineSearcher, Minimizer, Objective, Tolerances};
pub use self::types::{Cost, FnEvalMap, Grad, Theta, DEFAULT_LBFGS_MEM};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use oscillator_fit::fitting::prelude::*;
//
// to import the main fit-engine surface in a single line.

pub mod prelude {
    pub use super::api::{minimize, LbfgsMinimizer};
    pub use super::objective::ChiSquareObjective;
    pub use super::traits::{FitOptions, FitOutcome, LineSearcher, Minimizer, Objective, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
