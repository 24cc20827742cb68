//! High-level entry point for minimizing a chi-square [`Objective`].
//!
//! This selects an L-BFGS solver with either Hager–Zhang or More–Thuente line
//! search, wraps the objective in an `ArgMinAdapter`, and delegates the run to
//! `run_lbfgs`. The [`LbfgsMinimizer`] type packages the same entry point
//! behind the [`Minimizer`] capability trait so pipeline code can stay
//! backend-agnostic.
use crate::fitting::{
    adapter::ArgMinAdapter,
    builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
    errors::FitResult,
    run::run_lbfgs,
    traits::{FitOptions, FitOutcome, LineSearcher, Minimizer, Objective},
    types::Theta,
};

/// Minimize an objective using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` exposing the objective to
///   `argmin`.
/// - Builds an L-BFGS solver with either **Hager–Zhang** or **More–Thuente**
///   line search based on `opts.line_searcher`.
/// - Calls `run_lbfgs`, which configures the executor (initial params,
///   max iters, optional observers) and returns a `FitOutcome`.
///
/// Initial guesses are supplied by the caller per fit; there is no
/// multi-start or retry logic. Poor guesses may converge to a local minimum
/// or a degenerate parameter set — the returned outcome reports whatever the
/// solver found.
///
/// # Parameters
/// - `f`: The objective implementing [`Objective`].
/// - `theta0`: Initial parameter vector.
/// - `data`: Objective data passed through to `value`/`grad`.
/// - `opts`: Optimizer options (tolerances, line search choice, verbosity, etc.).
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from `run_lbfgs` (e.g., line search failures).
///
/// # Returns
/// A [`FitOutcome`] containing `theta_hat`, the minimized objective value,
/// termination status, iteration counts, function evaluation counts, and
/// optionally the gradient norm.
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, opts: &FitOptions,
) -> FitResult<FitOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}

/// Argmin-backed implementation of the [`Minimizer`] capability trait.
///
/// Bundles a validated [`FitOptions`] with the [`minimize`] entry point so
/// callers can hold a single value representing "how fits are run" and swap
/// in a different backend without touching pipeline logic.
#[derive(Debug, Clone, PartialEq)]
pub struct LbfgsMinimizer {
    pub opts: FitOptions,
}

impl LbfgsMinimizer {
    /// Construct a minimizer around pre-validated options.
    pub fn new(opts: FitOptions) -> Self {
        Self { opts }
    }
}

impl Default for LbfgsMinimizer {
    fn default() -> Self {
        Self { opts: FitOptions::default() }
    }
}

impl Minimizer for LbfgsMinimizer {
    fn minimize<F: Objective>(
        &self, f: &F, theta0: Theta, data: &F::Data,
    ) -> FitResult<FitOutcome> {
        minimize(f, theta0, data, &self.opts)
    }
}
