//! L-BFGS solver construction helpers.
//!
//! These builders hide Argmin's generic wiring and apply crate-level options
//! (tolerances, memory size) so that higher-level code can request a
//! configured solver without touching Argmin-specific types. The initial
//! parameter vector and maximum iterations are runtime concerns and are
//! applied by the runner, not here.
use argmin::solver::quasinewton::LBFGS;

use crate::fitting::{
    errors::FitResult,
    traits::FitOptions,
    types::{
        Cost, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente, MoreThuenteLS, Theta,
        DEFAULT_LBFGS_MEM,
    },
};

/// Construct an L-BFGS solver with Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// wires any present tolerances via [`configure_lbfgs`].
///
/// # Errors
/// Propagates Argmin configuration errors (e.g., rejected tolerances) as
/// `FitError`.
pub fn build_optimizer_hager_zhang(opts: &FitOptions) -> FitResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct an L-BFGS solver with More–Thuente line search.
///
/// Identical wiring to [`build_optimizer_hager_zhang`] apart from the
/// line-search strategy.
///
/// # Errors
/// Propagates Argmin configuration errors (e.g., rejected tolerances) as
/// `FitError`.
pub fn build_optimizer_more_thuente(opts: &FitOptions) -> FitResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances from [`FitOptions`] to an L-BFGS solver.
///
/// Generic over the line-search type so both builders share one wiring
/// path. When a tolerance is `None`, the corresponding `with_tolerance_*`
/// method is not called and Argmin's defaults remain in effect.
///
/// # Errors
/// Propagates Argmin errors from `with_tolerance_grad` /
/// `with_tolerance_cost` as `FitError`.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &FitOptions,
) -> FitResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
