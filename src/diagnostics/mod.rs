//! diagnostics — goodness of fit and residual analysis.
//!
//! Purpose
//! -------
//! Judge fitted models: degrees of freedom, the upper-tail chi-square fit
//! probability (behind the [`ChiSquareTable`] capability trait), and
//! full-range residual sequences with their distribution summaries.
//!
//! Conventions
//! -----------
//! - Diagnostics are read-only consumers of fit results; nothing here feeds
//!   back into model selection automatically — that judgement is left to
//!   the operator.
//! - The fit probability uses the observations inside the fit window;
//!   residual sequences cover the entire dataset for visual inspection.

pub mod errors;
pub mod goodness;
pub mod residuals;

pub use self::errors::{DiagnosticsError, DiagnosticsResult};
pub use self::goodness::{degrees_of_freedom, fit_probability, ChiSquareTable, StatrsChiSquare};
pub use self::residuals::{weighted_residual_sum, ResidualSet};
