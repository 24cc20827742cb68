//! Execution helper that runs an `argmin` solver on a chi-square problem and
//! returns a crate-friendly [`FitOutcome`].
use crate::fitting::{
    adapter::ArgMinAdapter,
    errors::FitResult,
    traits::{FitOptions, FitOutcome, Objective},
    types::{Grad, Theta},
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run an `argmin` optimization for a chi-square problem.
///
/// This is the shared runner used by both line-search variants. It wires up:
/// - the user objective via [`ArgMinAdapter`],
/// - the chosen `Solver` (L-BFGS with Hager–Zhang or More–Thuente),
/// - initial parameter `theta0`,
/// - optional observers (behind the `obs_slog` feature),
/// - optional `max_iters`,
///   then executes the solver and converts the result into [`FitOutcome`].
///
/// # Arguments
/// - `theta0`: Initial parameter vector. It is **consumed** and set on the
///   optimizer state via `state.param(theta0)`.
/// - `opts`: Optimizer options (tolerances, verbosity, max iters, etc.).
/// - `problem`: An [`ArgMinAdapter`] wrapping the user's objective and data.
/// - `solver`: A fully constructed solver from the builders module.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs χ²(θ₀) and, if available, ||grad|| before the
/// first iteration.
///
/// # Returns
/// A [`FitOutcome`] containing the best parameter found, the minimized
/// chi-square, termination status, iteration count, function-evaluation
/// counts, and the last available gradient's norm if it can be calculated.
///
/// # Errors
/// - Propagates any `argmin` runtime error (observer failures, solver errors,
///   line-search failures, etc.) via the crate's `From<argmin::core::Error>`
///   conversion.
/// - Propagates any validation errors encountered when constructing
///   [`FitOutcome`].
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &FitOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> FitResult<FitOutcome>
where
    F: Objective,
    S: argmin::core::Solver<
            ArgMinAdapter<'a, F>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let scale = problem.scale;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    // Undo the line-search conditioning so callers see raw objective units.
    let grad = result.take_gradient().map(|g| g * scale);
    FitOutcome::new(
        result.take_best_param(),
        result.get_best_cost() * scale,
        termination,
        iterations,
        function_counts,
        grad,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> FitResult<()>
where
    F: Objective,
{
    let chi2_0 = problem.cost(theta0)? * problem.scale;
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm() * problem.scale);

    eprintln!(
        "init: chi2(theta0) = {:.6}{}",
        chi2_0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
