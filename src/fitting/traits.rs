//! Public API surface for chi-square minimization.
//!
//! - [`Objective`]: trait implemented by anything the engine can minimize.
//! - [`Minimizer`]: capability trait for pluggable minimization backends.
//! - [`FitOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`FitOutcome`]: normalized result returned by the high-level `minimize` API.
//!
//! Convention: the engine *minimizes* the objective directly. For curve
//! fitting the objective is the chi-square statistic
//! `χ²(θ) = Σᵢ ((yᵢ − f(tᵢ, θ)) / σᵢ)²`; if an analytic gradient is provided,
//! it should be the gradient of that same objective.
use crate::fitting::{
    errors::{FitError, FitResult},
    types::{Cost, FnEvalMap, Grad, Theta},
    validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented objective interface.
///
/// The engine minimizes `value(θ, data)` directly; no sign conventions apply.
///
/// - `type Data`: per-objective data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> FitResult<Cost>`: evaluate the objective.
///   - Errors: return a descriptive `FitError` for invalid inputs.
/// - `check(&Theta, &Data) -> FitResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `grad(&Theta, &Data) -> FitResult<Grad>`: analytic gradient of the
///   objective. If not implemented, robust finite differences are used
///   automatically.
/// - `scale(&Data) -> f64`: typical magnitude of the objective, used to
///   condition the solver. The engine minimizes `value / scale` and
///   rescales every reported number, so results are unaffected; without a
///   hint, chi-square objectives with tight uncertainties produce first
///   search directions too steep for any line search to bracket.
pub trait Objective {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> FitResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> FitResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> FitResult<Grad> {
        Err(FitError::GradientNotImplemented)
    }

    fn scale(&self, _data: &Self::Data) -> f64 {
        1.0
    }
}

/// Capability trait for iterative minimization backends.
///
/// Any numerical backend that can drive an [`Objective`] from an initial
/// guess to a (local) minimum can stand behind this trait; the rest of the
/// crate never touches solver-specific types. The crate ships one
/// implementation, [`LbfgsMinimizer`](crate::fitting::api::LbfgsMinimizer).
///
/// Convergence is not guaranteed: a backend may stop at a local minimum or
/// exhaust its iteration budget, in which case the returned outcome carries
/// `converged == false` together with the last parameter state. Callers are
/// expected to inspect the flag rather than rely on an error.
pub trait Minimizer {
    fn minimize<F: Objective>(
        &self, f: &F, theta0: Theta, data: &F::Data,
    ) -> FitResult<FitOutcome>;
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `FitError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = FitError;

    /// Parse a line-search choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"MoreThuente"`
    /// - `"HagerZhang"`
    /// - Any case variant (e.g., `"morethuente"`, `"HAGERZHANG"`).
    ///
    /// Any other value returns `FitError::InvalidLineSearch` with a helpful message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(FitError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `line_searcher: LineSearcher` — line-search algorithm used by L-BFGS.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size override.
///
/// Constructor:
/// - `new(tols, line_searcher, verbose, lbfgs_mem) -> FitResult<Self>`.
///
/// Default:
/// - `tols`: `tol_grad = 1e-6`, `tol_cost = 1e-9`, `max_iter = 300`.
///   The cost-change rule matters in practice: chi-square gradients scale
///   with 1/σ², so a pure gradient-norm stop is unreachable for tightly
///   calibrated uncertainties.
/// - `line_searcher`: `MoreThuente`
/// - `verbose`: `false`
/// - `lbfgs_mem`: `None` (uses default of 7)
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl FitOptions {
    /// Create a new set of optimizer options.
    ///
    /// This constructor does not mutate values; validation of numeric fields is
    /// performed inside [`Tolerances::new`].
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> FitResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(FitError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(1e-6), Some(1e-9), Some(300)).unwrap(),
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold.
/// - `tol_cost`: terminate when the change in cost falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Both tolerances apply on the conditioned scale (`value / scale`, see
/// [`Objective::scale`]), not on the raw objective.
///
/// Any field can be `None` but **at least one** of the three must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`FitError::NoTolerancesProvided`] if all three are `None`.
    /// - [`FitError::InvalidTolGrad`] / [`FitError::InvalidTolCost`] for non-finite or non-positive tolerances.
    /// - `FitError::InvalidMaxIter` if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> FitResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(FitError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(FitError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Canonical result returned by `minimize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: minimized objective value (the chi-square statistic for
///   curve-fitting objectives).
/// - `converged`: `true` only if the solver stopped because a convergence
///   criterion was met; exhausting the iteration budget reports `false`
///   together with the last parameter state.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
///   Keys follow argmin's counters, e.g., cost_count, gradient_count, etc.
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl FitOutcome {
    /// Build a validated [`FitOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`: only
    ///   solver-side convergence or reaching the target cost count as
    ///   converged; iteration-budget exhaustion and solver exits do not.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> FitResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{reason:?}"))
            }
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::collections::HashMap;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Tolerance and options construction rules.
    // - Line-search parsing.
    // - Termination-status mapping in `FitOutcome::new`.
    //
    // They intentionally DO NOT cover:
    // - Actual solver runs; see the api/run tests and integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that at least one tolerance must be provided.
    //
    // Given
    // -----
    // - All three tolerance slots set to `None`.
    //
    // Expect
    // ------
    // - `FitError::NoTolerancesProvided`.
    fn tolerances_require_at_least_one_stopping_rule() {
        assert!(matches!(
            Tolerances::new(None, None, None),
            Err(FitError::NoTolerancesProvided)
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify case-insensitive parsing of line-search names and rejection of
    // unknown names.
    //
    // Given
    // -----
    // - The strings "hagerzhang", "MORETHUENTE", and "newton".
    //
    // Expect
    // ------
    // - The first two parse; the third yields `InvalidLineSearch`.
    fn line_searcher_from_str_is_case_insensitive() {
        assert_eq!("hagerzhang".parse::<LineSearcher>().unwrap(), LineSearcher::HagerZhang);
        assert_eq!("MORETHUENTE".parse::<LineSearcher>().unwrap(), LineSearcher::MoreThuente);
        assert!(matches!(
            "newton".parse::<LineSearcher>(),
            Err(FitError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that exhausting the iteration budget is not reported as
    // convergence, while solver convergence is.
    //
    // Given
    // -----
    // - Two `FitOutcome`s built from `MaxItersReached` and `SolverConverged`
    //   terminations with identical parameter state.
    //
    // Expect
    // ------
    // - `converged == false` for the first, `true` for the second.
    fn fit_outcome_maps_termination_reasons_to_convergence_flag() {
        // Arrange
        let theta = array![1.0, 2.0];
        let evals: FnEvalMap = HashMap::new();

        // Act
        let capped = FitOutcome::new(
            Some(theta.clone()),
            3.5,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            300,
            evals.clone(),
            None,
        )
        .unwrap();
        let converged = FitOutcome::new(
            Some(theta),
            3.5,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            42,
            evals,
            None,
        )
        .unwrap();

        // Assert
        assert!(!capped.converged);
        assert!(converged.converged);
        assert_eq!(converged.iterations, 42);
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-finite solver state is rejected when building an
    // outcome.
    //
    // Given
    // -----
    // - A parameter vector containing NaN.
    //
    // Expect
    // ------
    // - `FitError::InvalidThetaHat` naming the offending index.
    fn fit_outcome_rejects_non_finite_theta_hat() {
        let res = FitOutcome::new(
            Some(array![0.0, f64::NAN]),
            1.0,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            1,
            HashMap::new(),
            None,
        );
        assert!(matches!(res, Err(FitError::InvalidThetaHat { index: 1, .. })));
    }
}
