//! Run configuration for the exercise pipeline.
//!
//! Explicit configuration passed into the pipeline entry points; there is
//! no ambient state. The two toggles mirror the knobs a student actually
//! turns while working through the exercise: whether figures are written
//! to disk and how chatty the run is.
use std::path::PathBuf;

/// Number of loaded rows echoed per dataset when `verbose` is set.
pub const ECHO_ROWS: usize = 10;

/// Configuration for a pipeline run.
///
/// Fields
/// ------
/// - `save_plots`: write one SVG figure per fitted dataset into
///   `output_dir`.
/// - `verbose`: echo the first [`ECHO_ROWS`] loaded rows of each dataset
///   and print fit summaries.
/// - `output_dir`: destination for saved figures; created on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub save_plots: bool,
    pub verbose: bool,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { save_plots: false, verbose: false, output_dir: PathBuf::from("plots") }
    }
}
