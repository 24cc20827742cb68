//! dataset — loading and validated containers for oscillator time series.
//!
//! Purpose
//! -------
//! Read two-column (time, position) lab recordings from plain-text files,
//! normalize the time axis so each series starts at `t = 0`, attach the
//! per-dataset measurement uncertainty and fit cutoff, and hand the rest of
//! the crate a container whose invariants have already been checked.
//!
//! Key behaviors
//! -------------
//! - [`loader`]: whitespace-delimited parsing with per-line error reporting
//!   and time normalization.
//! - [`data`]: the [`OscillationData`] container and [`DatasetMeta`]
//!   constants, plus fit-window extraction.
//! - [`sanity`]: advisory calibration-bound scan; findings are reported,
//!   never fatal.
//!
//! Conventions
//! -----------
//! - Each of the three exercise datasets is loaded independently; nothing in
//!   this module shares state across datasets.
//! - Errors are fatal to the dataset being loaded only, via
//!   [`DataError`]/[`DataResult`].

pub mod data;
pub mod errors;
pub mod loader;
pub mod sanity;

pub use self::data::{DatasetMeta, FitWindow, OscillationData};
pub use self::errors::{DataError, DataResult};
pub use self::loader::{load_dataset, load_two_column};
pub use self::sanity::{scan_ranges, RangeFlag, POSITION_BOUNDS, TIME_BOUNDS};
