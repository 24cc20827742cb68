//! viz — figure rendering for fitted datasets.
//!
//! Renders one SVG per fit: data with error bars plus the fitted curve, a
//! residual panel, and a residual histogram annotated with the fitted
//! parameters. All rendering is optional and driven by the exercise
//! configuration; no other module depends on this one.

pub mod errors;
pub mod figure;

pub use self::errors::{PlotError, PlotResult};
pub use self::figure::{param_summary, sample_curve, FitFigure};
