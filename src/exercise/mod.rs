//! exercise — the three-regime curve-fitting workflow.
//!
//! Purpose
//! -------
//! Tie the crate's layers together into the teaching workflow: for each of
//! the three damping regimes (none, air drag, sliding friction), load the
//! recorded dataset, fit the regime's model by chi-square minimization from
//! its fixed starting guess, judge the fit, and optionally render a figure.
//!
//! Conventions
//! -----------
//! - All toggles live in the explicit [`RunConfig`]; there is no global
//!   state.
//! - Per-dataset constants (file names, uncertainties, fit cutoffs,
//!   starting guesses) are fixed exercise parameters in [`regimes`].
//! - The three pipelines are fully independent: sequential execution, no
//!   shared mutable state, and per-regime failure isolation in
//!   [`pipeline::run_all`].

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod regimes;

pub use self::config::{RunConfig, ECHO_ROWS};
pub use self::errors::{ExerciseError, ExerciseResult};
pub use self::pipeline::{fit_dataset, run_all, run_regime, ModelFit, RegimeReport};
pub use self::regimes::{DampingRegime, RegimeSpec};
