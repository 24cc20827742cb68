//! Validated containers for oscillator time series.
//!
//! Purpose
//! -------
//! Provide small, validated containers for displacement series and their
//! metadata. This module centralizes input validation for loaded data and
//! standardizes how per-dataset constants (measurement uncertainty,
//! fit-range cutoff) are represented.
//!
//! Key behaviors
//! -------------
//! - [`OscillationData`] enforces basic data invariants: equal-length,
//!   non-empty, finite series, non-decreasing times starting at exactly 0.
//! - [`DatasetMeta`] carries the per-dataset constants (uniform measurement
//!   uncertainty and fit-range cutoff) without mutating raw values.
//! - [`OscillationData::fit_window`] extracts the observations with
//!   `time <= tmax` for the fit engine.
//!
//! Invariants & assumptions
//! ------------------------
//! - `time.len() == position.len() > 0`.
//! - All values are finite; times are non-decreasing and `time[0] == 0.0`
//!   (the loader subtracts the first raw time before construction).
//! - `sigma` and `tmax` are finite and strictly positive.
//!
//! Conventions
//! -----------
//! - The uncertainty is a per-dataset constant attached to every position
//!   sample; it is an exercise parameter, not derived from the data.
//! - Containers are immutable after construction; downstream modules may
//!   rely on these invariants and avoid re-validating basic properties.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior (happy path, length mismatch,
//!   non-finite values, decreasing times, non-zero origin, bad metadata)
//!   and the fit-window restriction.
use crate::dataset::errors::{DataError, DataResult};
use ndarray::Array1;

/// Per-dataset constants describing how a series is interpreted.
///
/// Fields
/// ------
/// - `label`: human-readable dataset name used in reports and figures.
/// - `sigma`: uniform measurement uncertainty attached to every position
///   sample; must be finite and > 0.
/// - `tmax`: fit-range cutoff; observations with `time <= tmax` enter the
///   fit, while diagnostics run over the full series. Must be finite and > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetMeta {
    pub label: String,
    pub sigma: f64,
    pub tmax: f64,
}

impl DatasetMeta {
    /// Construct validated metadata.
    ///
    /// # Errors
    /// - [`DataError::InvalidSigma`] when `sigma` is non-finite or ≤ 0.
    /// - [`DataError::InvalidTmax`] when `tmax` is non-finite or ≤ 0.
    pub fn new(label: impl Into<String>, sigma: f64, tmax: f64) -> DataResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(DataError::InvalidSigma { value: sigma });
        }
        if !tmax.is_finite() || tmax <= 0.0 {
            return Err(DataError::InvalidTmax { value: tmax });
        }
        Ok(Self { label: label.into(), sigma, tmax })
    }
}

/// Observations restricted to the fit range `time <= tmax`.
///
/// Owned copy handed to the fit engine; `sigma` and `tmax` are carried along
/// so the chi-square objective and its error reporting need no back-pointer
/// to the full dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FitWindow {
    pub time: Array1<f64>,
    pub position: Array1<f64>,
    pub sigma: f64,
    pub tmax: f64,
}

/// `OscillationData` — validated displacement series plus metadata.
///
/// Purpose
/// -------
/// Represent a single, validated time series of oscillator displacements
/// together with its per-dataset constants. This type centralizes basic
/// input checks so downstream code can assume clean, normalized data.
///
/// Fields
/// ------
/// - `time`: `Array1<f64>` — non-decreasing, starting at exactly 0.
/// - `position`: `Array1<f64>` — same length as `time`, all finite.
/// - `meta`: [`DatasetMeta`] — label, uniform uncertainty, fit cutoff.
///
/// Invariants
/// ----------
/// - `time.len() == position.len() > 0`.
/// - All entries finite; `time` non-decreasing with `time[0] == 0.0`.
///
/// Notes
/// -----
/// - This type does not rescale or transform the input; it only validates.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillationData {
    /// Normalized sample times (first entry exactly 0).
    pub time: Array1<f64>,
    /// Measured displacements.
    pub position: Array1<f64>,
    /// Per-dataset constants (label, sigma, tmax).
    pub meta: DatasetMeta,
}

impl OscillationData {
    /// Construct a validated [`OscillationData`] instance.
    ///
    /// Validation is performed in a single pass over each series, stopping
    /// at the first invalid element.
    ///
    /// # Errors
    /// - [`DataError::LengthMismatch`] when the series lengths differ.
    /// - [`DataError::EmptySeries`] when the series are empty.
    /// - [`DataError::NonFiniteValue`] for the first NaN or ±∞ entry.
    /// - [`DataError::TimeOriginNotZero`] when `time[0] != 0.0`.
    /// - [`DataError::NonMonotonicTime`] for the first decreasing time.
    pub fn new(time: Array1<f64>, position: Array1<f64>, meta: DatasetMeta) -> DataResult<Self> {
        if time.len() != position.len() {
            return Err(DataError::LengthMismatch {
                times: time.len(),
                positions: position.len(),
            });
        }
        if time.is_empty() {
            return Err(DataError::EmptySeries);
        }

        for (index, &value) in time.iter().enumerate() {
            if !value.is_finite() {
                return Err(DataError::NonFiniteValue { column: "time", index, value });
            }
        }
        for (index, &value) in position.iter().enumerate() {
            if !value.is_finite() {
                return Err(DataError::NonFiniteValue { column: "position", index, value });
            }
        }

        if time[0] != 0.0 {
            return Err(DataError::TimeOriginNotZero { first: time[0] });
        }
        for index in 1..time.len() {
            if time[index] < time[index - 1] {
                return Err(DataError::NonMonotonicTime { index, value: time[index] });
            }
        }

        Ok(Self { time, position, meta })
    }

    /// Number of observations in the full series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series is empty (never true for a validated instance).
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Extract the observations with `time <= tmax` for the fit engine.
    ///
    /// Times are non-decreasing, so the window is the leading prefix of the
    /// series. The window may be empty if `tmax` lies below the first
    /// sample spacing; the fit engine reports that case as an error.
    pub fn fit_window(&self) -> FitWindow {
        let cut = self.time.iter().take_while(|&&t| t <= self.meta.tmax).count();
        FitWindow {
            time: self.time.slice(ndarray::s![..cut]).to_owned(),
            position: self.position.slice(ndarray::s![..cut]).to_owned(),
            sigma: self.meta.sigma,
            tmax: self.meta.tmax,
        }
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
    // - Happy-path construction and accessors.
    // - Each container invariant violation and its error variant.
    // - Fit-window restriction at the tmax boundary.
    //
    // They intentionally DO NOT cover:
    // - File parsing and normalization; see the loader tests.
    // -------------------------------------------------------------------------

    fn meta() -> DatasetMeta {
        DatasetMeta::new("test", 0.1, 2.0).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify that a clean series constructs and reports its length.
    //
    // Given
    // -----
    // - Three equally spaced samples starting at t = 0.
    //
    // Expect
    // ------
    // - Construction succeeds with len() == 3.
    fn new_accepts_normalized_series() {
        let data =
            OscillationData::new(array![0.0, 1.0, 2.0], array![1.0, 0.0, -1.0], meta()).unwrap();
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify each invariant violation maps to its dedicated error variant.
    //
    // Given
    // -----
    // - Series with mismatched lengths, a NaN position, a non-zero origin,
    //   and a decreasing time value.
    //
    // Expect
    // ------
    // - The matching `DataError` variant for each case.
    fn new_rejects_invariant_violations() {
        assert!(matches!(
            OscillationData::new(array![0.0, 1.0], array![1.0], meta()),
            Err(DataError::LengthMismatch { times: 2, positions: 1 })
        ));
        assert!(matches!(
            OscillationData::new(array![0.0, 1.0], array![1.0, f64::NAN], meta()),
            Err(DataError::NonFiniteValue { column: "position", index: 1, .. })
        ));
        assert!(matches!(
            OscillationData::new(array![0.5, 1.0], array![1.0, 0.0], meta()),
            Err(DataError::TimeOriginNotZero { .. })
        ));
        assert!(matches!(
            OscillationData::new(array![0.0, 2.0, 1.0], array![1.0, 0.0, -1.0], meta()),
            Err(DataError::NonMonotonicTime { index: 2, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify metadata validation for sigma and tmax.
    //
    // Given
    // -----
    // - A zero sigma and a negative tmax.
    //
    // Expect
    // ------
    // - `InvalidSigma` and `InvalidTmax` respectively.
    fn dataset_meta_validates_constants() {
        assert!(matches!(
            DatasetMeta::new("x", 0.0, 1.0),
            Err(DataError::InvalidSigma { value }) if value == 0.0
        ));
        assert!(matches!(
            DatasetMeta::new("x", 0.1, -1.0),
            Err(DataError::InvalidTmax { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the fit window keeps exactly the samples with time <= tmax,
    // including the boundary sample.
    //
    // Given
    // -----
    // - Times 0..4 with tmax = 2.0.
    //
    // Expect
    // ------
    // - Window of length 3 ending at t = 2.0, carrying sigma and tmax.
    fn fit_window_respects_tmax_boundary() {
        // Arrange
        let data = OscillationData::new(
            array![0.0, 1.0, 2.0, 3.0, 4.0],
            array![1.0, 0.0, -1.0, 0.0, 1.0],
            meta(),
        )
        .unwrap();

        // Act
        let window = data.fit_window();

        // Assert
        assert_eq!(window.time.len(), 3);
        assert_eq!(window.time[2], 2.0);
        assert_eq!(window.sigma, 0.1);
        assert_eq!(window.tmax, 2.0);
    }
}
