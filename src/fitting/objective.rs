//! Weighted least-squares objective over a fit window.
//!
//! [`ChiSquareObjective`] implements [`Objective`] for a model and a
//! [`FitWindow`]: the value is the chi-square statistic
//! `χ²(θ) = Σᵢ ((yᵢ − f(tᵢ, θ)) / σ)²` with the dataset's uniform
//! uncertainty σ. No analytic gradient is provided; the adapter's
//! finite-difference fallback handles derivatives. The scale hint is
//! `n / σ²`, so the solver works on the mean squared raw residual.
use crate::{
    dataset::data::FitWindow,
    fitting::{
        errors::{FitError, FitResult},
        traits::Objective,
        types::{Cost, Theta},
    },
    models::registry::ModelSpec,
};

/// Chi-square objective for one (model, fit window) pair.
///
/// The model descriptor is borrowed; the window is the owned data payload
/// threaded through the [`Objective`] interface. Evaluation is
/// deterministic and side-effect-free.
#[derive(Debug, Clone)]
pub struct ChiSquareObjective<'a> {
    pub model: &'a ModelSpec,
}

impl<'a> ChiSquareObjective<'a> {
    /// Construct the objective for a model.
    pub fn new(model: &'a ModelSpec) -> Self {
        Self { model }
    }
}

impl<'a> Objective for ChiSquareObjective<'a> {
    type Data = FitWindow;

    /// Evaluate `χ²(θ)` over the window.
    ///
    /// Non-finite model outputs propagate into the sum and are rejected by
    /// the adapter's finiteness check, so no per-point guard is needed here.
    fn value(&self, theta: &Theta, data: &FitWindow) -> FitResult<Cost> {
        let mut chi2 = 0.0;
        for (&t, &y) in data.time.iter().zip(data.position.iter()) {
            let r = (y - self.model.eval(t, theta)) / data.sigma;
            chi2 += r * r;
        }
        Ok(chi2)
    }

    /// Condition the solver on the mean squared raw residual scale:
    /// dividing `χ²` by `n / σ²` keeps first-step line searches bracketable
    /// regardless of how tight the calibrated uncertainty is.
    fn scale(&self, data: &FitWindow) -> f64 {
        if data.time.is_empty() {
            return 1.0;
        }
        data.time.len() as f64 / (data.sigma * data.sigma)
    }

    /// Reject arity mismatches, non-finite guesses, and empty windows
    /// before the solver starts.
    fn check(&self, theta: &Theta, data: &FitWindow) -> FitResult<()> {
        self.model.check_theta(theta)?;
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(FitError::InvalidThetaHat {
                    index,
                    value,
                    reason: "Initial guesses must be finite.",
                });
            }
        }
        if data.time.is_empty() {
            return Err(FitError::EmptyFitWindow { tmax: data.tmax });
        }
        Ok(())
    }
}
