//! oscillator_fit — chi-square curve fitting for damped oscillator lab data.
//!
//! Purpose
//! -------
//! Companion library for an exercise in iterative non-linear curve fitting:
//! load recorded displacement series of a spring–mass oscillator under
//! three damping regimes (none, air drag, sliding friction), fit
//! progressively more complex parametric models by minimizing the
//! chi-square statistic, and judge each fit through its fit probability and
//! residual distribution.
//!
//! Key behaviors
//! -------------
//! - [`dataset`]: two-column file loading, time normalization, validated
//!   containers, and an advisory calibration-range scan.
//! - [`models`]: the candidate model family (plain cosine through
//!   doubly-damped modulated oscillation) behind a small registry.
//! - [`fitting`]: an Argmin-backed L-BFGS engine minimizing
//!   `χ²(θ) = Σᵢ ((yᵢ − f(tᵢ, θ)) / σᵢ)²`, hidden behind the
//!   [`Minimizer`](fitting::Minimizer) capability trait.
//! - [`inference`]: per-parameter standard errors from the curvature at
//!   the minimum.
//! - [`diagnostics`]: degrees of freedom, upper-tail chi-square fit
//!   probability (via the [`ChiSquareTable`](diagnostics::ChiSquareTable)
//!   capability trait), and full-range residual summaries.
//! - [`exercise`]: the three-regime pipeline with explicit configuration.
//! - [`viz`]: optional SVG figures (data + fit, residuals, histogram).
//!
//! Invariants & assumptions
//! ------------------------
//! - The workflow is fully sequential and single-threaded; each dataset is
//!   loaded once, processed independently, and never mutated.
//! - Convergence of a fit is not guaranteed and depends on the supplied
//!   initial guess; that sensitivity is part of the exercise, and outcomes
//!   carry an explicit `converged` flag instead of pretending otherwise.
//!
//! Downstream usage
//! ----------------
//! - Work through the exercise with [`exercise::run_all`] or
//!   [`exercise::run_regime`], adjusting the starting guesses in your own
//!   calls to [`exercise::fit_dataset`] when a fit stalls.
//! - Use [`fitting::minimize`] directly for ad-hoc objectives, or
//!   implement [`fitting::Minimizer`] / [`diagnostics::ChiSquareTable`] to
//!   swap numerical backends.
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests for its local concerns; the
//!   `tests/` directory exercises the full pipeline on the shipped
//!   datasets.

pub mod dataset;
pub mod diagnostics;
pub mod exercise;
pub mod fitting;
pub mod inference;
pub mod models;
pub mod viz;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use oscillator_fit::prelude::*;
//
// to import the main crate surface in a single line.

pub mod prelude {
    pub use crate::dataset::{load_dataset, DatasetMeta, OscillationData};
    pub use crate::diagnostics::{
        degrees_of_freedom, fit_probability, ChiSquareTable, ResidualSet, StatrsChiSquare,
    };
    pub use crate::exercise::{run_all, run_regime, DampingRegime, RunConfig};
    pub use crate::fitting::prelude::*;
    pub use crate::inference::chi_square_standard_errors;
    pub use crate::models::{ModelKind, ModelSpec};
}
