//! models::registry — named model descriptors for the fit pipeline.
//!
//! Purpose
//! -------
//! Represent each candidate model as an explicit, self-describing value: an
//! identifier, a human-readable name, ordered parameter names, and a pure
//! evaluation function. The registry closes the built-in set by convention
//! only; adding a model means constructing another [`ModelSpec`] value and
//! requires no changes to the data loader or the fit engine.
//!
//! Key behaviors
//! -------------
//! - [`ModelKind`] enumerates the four built-in models and parses from
//!   case-insensitive names.
//! - [`ModelSpec::lookup`] maps a kind to its full descriptor;
//!   [`ModelSpec::by_name`] does the same from a string.
//! - [`ModelSpec::predict`] evaluates a model over a whole time series after
//!   an arity check.
//!
//! Invariants & assumptions
//! ------------------------
//! - `arity() == param_names.len()` for every descriptor.
//! - Evaluation functions are deterministic and side-effect-free; they index
//!   the parameter vector directly and rely on [`ModelSpec::check_theta`]
//!   having been called at the fit boundary.
//!
//! Downstream usage
//! ----------------
//! - The chi-square objective holds a `ModelSpec` and calls `eval` per
//!   observation.
//! - Diagnostics and visualization use `param_names` to label fitted values.
use std::str::FromStr;

use crate::{
    fitting::types::Theta,
    models::{
        errors::{ModelError, ModelResult},
        functions,
    },
};
use ndarray::Array1;

/// Signature shared by all model evaluation functions.
pub type ModelFn = fn(f64, &Theta) -> f64;

/// Identifier for the built-in model family, ordered by complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Simple,
    Damped,
    DampedModulated,
    DoubleExponentialModulated,
}

impl FromStr for ModelKind {
    type Err = ModelError;

    /// Parse a model identifier from its registry name (case-insensitive).
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownModel`] for names outside the built-in
    /// set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(ModelKind::Simple),
            "damped" => Ok(ModelKind::Damped),
            "damped_modulated" => Ok(ModelKind::DampedModulated),
            "double_exponential_modulated" => Ok(ModelKind::DoubleExponentialModulated),
            _ => Err(ModelError::UnknownModel { name: s.to_string() }),
        }
    }
}

/// Full descriptor of a fit model.
///
/// Fields
/// ------
/// - `name`: registry identifier, also used in reports and figure captions.
/// - `param_names`: ordered names matching the layout of the parameter
///   vector; the arity of the model is `param_names.len()`.
/// - `func`: pure evaluation function `(t, θ) → predicted position`.
///
/// User-defined models are plain `ModelSpec` values; nothing in the crate
/// assumes the built-in set is exhaustive.
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    pub name: &'static str,
    pub param_names: &'static [&'static str],
    pub func: ModelFn,
}

/// The four built-in models, ordered by increasing complexity.
pub const BUILTIN_MODELS: [ModelSpec; 4] = [
    ModelSpec {
        name: "simple",
        param_names: &["A", "omega", "phi"],
        func: functions::simple,
    },
    ModelSpec {
        name: "damped",
        param_names: &["A", "omega", "phi", "gamma", "c"],
        func: functions::damped,
    },
    ModelSpec {
        name: "damped_modulated",
        param_names: &["c", "A", "gamma", "phi", "omega", "quad", "B", "omega2", "phi2"],
        func: functions::damped_modulated,
    },
    ModelSpec {
        name: "double_exponential_modulated",
        param_names: &[
            "c", "A1", "gamma1", "A2", "gamma2", "phi", "omega", "quad", "B", "omega2", "phi2",
        ],
        func: functions::double_exponential_modulated,
    },
];

impl ModelSpec {
    /// Number of free parameters.
    pub fn arity(&self) -> usize {
        self.param_names.len()
    }

    /// Retrieve the descriptor for a built-in model.
    pub fn lookup(kind: ModelKind) -> ModelSpec {
        match kind {
            ModelKind::Simple => BUILTIN_MODELS[0],
            ModelKind::Damped => BUILTIN_MODELS[1],
            ModelKind::DampedModulated => BUILTIN_MODELS[2],
            ModelKind::DoubleExponentialModulated => BUILTIN_MODELS[3],
        }
    }

    /// Retrieve a built-in descriptor by registry name.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownModel`] for names outside the built-in
    /// set.
    pub fn by_name(name: &str) -> ModelResult<ModelSpec> {
        let kind = name.parse::<ModelKind>()?;
        Ok(ModelSpec::lookup(kind))
    }

    /// Validate that a parameter vector matches this model's arity.
    ///
    /// # Errors
    /// Returns [`ModelError::ArityMismatch`] naming the model and both
    /// lengths.
    pub fn check_theta(&self, theta: &Theta) -> ModelResult<()> {
        if theta.len() != self.arity() {
            return Err(ModelError::ArityMismatch {
                model: self.name.to_string(),
                expected: self.arity(),
                actual: theta.len(),
            });
        }
        Ok(())
    }

    /// Evaluate the model at a single time.
    pub fn eval(&self, t: f64, theta: &Theta) -> f64 {
        (self.func)(t, theta)
    }

    /// Evaluate the model over a whole time series.
    ///
    /// # Errors
    /// Returns [`ModelError::ArityMismatch`] when `theta` does not match the
    /// model arity.
    pub fn predict(&self, time: &Array1<f64>, theta: &Theta) -> ModelResult<Array1<f64>> {
        self.check_theta(theta)?;
        Ok(time.mapv(|t| self.eval(t, theta)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Name parsing and lookup consistency.
    // - Arity bookkeeping between descriptors and parameter-name lists.
    // - Arity enforcement in `predict`.
    //
    // They intentionally DO NOT cover:
    // - Numerical correctness of the evaluators (functions tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that every built-in descriptor is reachable by name and agrees
    // with its `ModelKind` lookup.
    //
    // Given
    // -----
    // - The four registry names.
    //
    // Expect
    // ------
    // - `by_name` succeeds and returns a descriptor with the same name and
    //   the documented arity.
    fn registry_names_round_trip_through_lookup() {
        let expected = [
            ("simple", 3),
            ("damped", 5),
            ("damped_modulated", 9),
            ("double_exponential_modulated", 11),
        ];
        for (name, arity) in expected {
            let spec = ModelSpec::by_name(name).unwrap();
            assert_eq!(spec.name, name);
            assert_eq!(spec.arity(), arity);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify unknown names produce `UnknownModel` with the offending name.
    //
    // Given
    // -----
    // - The name "lorentzian".
    //
    // Expect
    // ------
    // - `ModelError::UnknownModel` carrying that name.
    fn by_name_rejects_unknown_models() {
        match ModelSpec::by_name("lorentzian") {
            Err(ModelError::UnknownModel { name }) => assert_eq!(name, "lorentzian"),
            other => panic!("expected UnknownModel, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify `predict` rejects parameter vectors of the wrong length before
    // evaluating anything.
    //
    // Given
    // -----
    // - The `simple` model with a length-2 parameter vector.
    //
    // Expect
    // ------
    // - `ArityMismatch` with expected 3, actual 2.
    fn predict_enforces_arity() {
        // Arrange
        let spec = ModelSpec::lookup(ModelKind::Simple);
        let time = array![0.0, 1.0];

        // Act
        let res = spec.predict(&time, &array![1.0, 2.0]);

        // Assert
        assert!(matches!(
            res,
            Err(ModelError::ArityMismatch { expected: 3, actual: 2, .. })
        ));
    }
}
