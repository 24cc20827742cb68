//! The three damping regimes and their fixed exercise constants.
//!
//! Every number here is an exercise parameter, not a user setting: the file
//! names, per-dataset uncertainties, fit cutoffs, and starting guesses were
//! fixed when the datasets were recorded and calibrated. Changing them
//! changes the exercise.
use crate::models::registry::ModelKind;

/// One damping regime of the spring–mass recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingRegime {
    /// Free oscillation, no added damping.
    Undamped,
    /// Cardboard disk mounted on the mass: velocity-proportional air drag.
    AirDrag,
    /// Mass dragging on a felt pad: sliding friction.
    SlidingFriction,
}

impl DampingRegime {
    /// All regimes in exercise order (increasing model complexity).
    pub const ALL: [DampingRegime; 3] =
        [DampingRegime::Undamped, DampingRegime::AirDrag, DampingRegime::SlidingFriction];

    /// The fixed constants for this regime.
    pub fn spec(self) -> RegimeSpec {
        match self {
            DampingRegime::Undamped => RegimeSpec {
                regime: self,
                label: "undamped",
                file: "data/undamped.dat",
                sigma: 0.002,
                tmax: 25.0,
                model: ModelKind::Simple,
                initial_guess: &[1.0, 4.4, 0.3],
            },
            DampingRegime::AirDrag => RegimeSpec {
                regime: self,
                label: "airdrag",
                file: "data/airdrag.dat",
                sigma: 0.004,
                tmax: 22.0,
                model: ModelKind::Damped,
                initial_guess: &[1.0, 4.4, 1.6, 0.10, 0.0],
            },
            DampingRegime::SlidingFriction => RegimeSpec {
                regime: self,
                label: "friction",
                file: "data/friction.dat",
                sigma: 0.01,
                tmax: 18.0,
                model: ModelKind::DampedModulated,
                initial_guess: &[0.0, 0.95, 0.11, 0.3, 4.4, 0.0, 0.06, 0.35, 0.1],
            },
        }
    }
}

/// Fixed constants for one regime.
///
/// Fields
/// ------
/// - `label`: short name used in reports and figure file names.
/// - `file`: input file path relative to the repository root.
/// - `sigma`: uniform measurement uncertainty for every position sample.
/// - `tmax`: fit-range cutoff in (normalized) seconds.
/// - `model`: registry identifier of the model fitted to this regime.
/// - `initial_guess`: starting parameter vector handed to the minimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeSpec {
    pub regime: DampingRegime,
    pub label: &'static str,
    pub file: &'static str,
    pub sigma: f64,
    pub tmax: f64,
    pub model: ModelKind,
    pub initial_guess: &'static [f64],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registry::ModelSpec;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Consistency between each regime's initial guess and its model arity.
    // - Validity of the fixed sigma/tmax constants.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify each regime's starting guess has exactly the arity of the
    // model it is fitted with, and its constants are positive.
    //
    // Given
    // -----
    // - The three built-in regime specs.
    //
    // Expect
    // ------
    // - guess length == model arity, sigma > 0, tmax > 0 for all three.
    fn regime_constants_are_consistent_with_models() {
        for regime in DampingRegime::ALL {
            let spec = regime.spec();
            let model = ModelSpec::lookup(spec.model);
            assert_eq!(
                spec.initial_guess.len(),
                model.arity(),
                "guess arity mismatch for {:?}",
                regime
            );
            assert!(spec.sigma > 0.0);
            assert!(spec.tmax > 0.0);
        }
    }
}
