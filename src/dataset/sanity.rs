//! Advisory range scan for loaded datasets.
//!
//! The instrument calibration bounds below were fixed when the exercise was
//! set up; values outside them usually indicate a mis-recorded row or a
//! unit mix-up. Findings are advisory only: they are reported to the
//! operator and never reject data.
use crate::dataset::data::OscillationData;

/// Calibration bounds for normalized sample times, inclusive.
pub const TIME_BOUNDS: (f64, f64) = (-0.001, 100.0);

/// Calibration bounds for displacement values, inclusive.
pub const POSITION_BOUNDS: (f64, f64) = (-5.0, 5.0);

/// One out-of-range observation flagged by [`scan_ranges`].
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFlag {
    /// Which column the value came from (`"time"` or `"position"`).
    pub column: &'static str,
    /// Index of the observation in the series.
    pub index: usize,
    /// The offending value.
    pub value: f64,
    /// The (low, high) bounds it violated.
    pub bounds: (f64, f64),
}

impl std::fmt::Display for RangeFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} value {} at index {} outside [{}, {}]",
            self.column, self.value, self.index, self.bounds.0, self.bounds.1
        )
    }
}

/// Scan a dataset for values outside the calibration bounds.
///
/// Returns every finding; an empty vector means the dataset looks sane.
/// Callers decide how to report the flags (the exercise pipeline prints
/// them as warnings).
pub fn scan_ranges(data: &OscillationData) -> Vec<RangeFlag> {
    let mut flags = Vec::new();
    for (index, &value) in data.time.iter().enumerate() {
        if value < TIME_BOUNDS.0 || value > TIME_BOUNDS.1 {
            flags.push(RangeFlag { column: "time", index, value, bounds: TIME_BOUNDS });
        }
    }
    for (index, &value) in data.position.iter().enumerate() {
        if value < POSITION_BOUNDS.0 || value > POSITION_BOUNDS.1 {
            flags.push(RangeFlag { column: "position", index, value, bounds: POSITION_BOUNDS });
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::data::DatasetMeta;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Clean data producing no flags.
    // - Out-of-range positions being flagged without rejecting the dataset.
    // -------------------------------------------------------------------------

    fn data_with_positions(position: ndarray::Array1<f64>) -> OscillationData {
        let n = position.len();
        let time = ndarray::Array1::from_iter((0..n).map(|i| i as f64));
        let meta = DatasetMeta::new("scan", 0.1, 100.0).unwrap();
        OscillationData::new(time, position, meta).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify in-bounds data yields no findings.
    //
    // Given
    // -----
    // - Positions well inside the calibration bounds.
    //
    // Expect
    // ------
    // - An empty flag list.
    fn scan_ranges_passes_clean_data() {
        let data = data_with_positions(array![1.0, -1.0, 0.5]);
        assert!(scan_ranges(&data).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify an out-of-range position is flagged with its index and value,
    // while the dataset itself remains usable.
    //
    // Given
    // -----
    // - One position of 7.5, above the +5.0 bound.
    //
    // Expect
    // ------
    // - Exactly one flag naming the position column and index 1.
    fn scan_ranges_flags_out_of_range_position() {
        // Arrange
        let data = data_with_positions(array![1.0, 7.5, 0.5]);

        // Act
        let flags = scan_ranges(&data);

        // Assert
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].column, "position");
        assert_eq!(flags[0].index, 1);
        assert_eq!(flags[0].value, 7.5);
    }
}
