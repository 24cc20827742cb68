//! diagnostics::residuals — residual sequences and their summaries.
//!
//! Purpose
//! -------
//! Compute the per-observation differences (observed − predicted) for a
//! fitted model and summarize their distribution. Residuals are computed
//! over the **entire** dataset, not just the restricted fit range, so the
//! operator can see how the model extrapolates past `tmax`; the summary
//! statistics (mean, Bessel-corrected standard deviation) feed the residual
//! histogram panel.
//!
//! Conventions
//! -----------
//! - Residuals are raw, in position units; the weighted first-order
//!   optimality check divides by σ² separately via
//!   [`weighted_residual_sum`].
//! - Residual sets are derived values: they are computed once from a fit
//!   and never fed back into model selection automatically.
use crate::{
    dataset::data::{FitWindow, OscillationData},
    diagnostics::errors::{DiagnosticsError, DiagnosticsResult},
    fitting::types::Theta,
    models::registry::ModelSpec,
};
use ndarray::Array1;

/// Residual sequence for one fitted model over a full dataset, with
/// distribution summaries.
///
/// Fields
/// ------
/// - `values`: observed − predicted, in dataset order.
/// - `mean`: arithmetic mean of the residuals.
/// - `std_dev`: sample standard deviation (Bessel-corrected, divisor n−1).
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualSet {
    pub values: Array1<f64>,
    pub mean: f64,
    pub std_dev: f64,
}

impl ResidualSet {
    /// Compute residuals of a fitted model over the entire dataset.
    ///
    /// The parameter vector is expected to have passed the model's arity
    /// check at the fit boundary; diagnostics never run on unchecked input.
    ///
    /// # Errors
    /// - [`DiagnosticsError::TooFewResiduals`] when the dataset has fewer
    ///   than two observations (the sample standard deviation is undefined).
    pub fn from_model(
        model: &ModelSpec, theta: &Theta, data: &OscillationData,
    ) -> DiagnosticsResult<ResidualSet> {
        let n = data.len();
        if n < 2 {
            return Err(DiagnosticsError::TooFewResiduals { n_obs: n });
        }
        let values = Array1::from_iter(
            data.time
                .iter()
                .zip(data.position.iter())
                .map(|(&t, &y)| y - model.eval(t, theta)),
        );
        let mean = values.sum() / n as f64;
        let variance =
            values.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / (n as f64 - 1.0);
        Ok(ResidualSet { values, mean, std_dev: variance.sqrt() })
    }
}

/// Weighted residual sum `Σᵢ (yᵢ − f(tᵢ, θ)) / σ²` over a fit window.
///
/// At a true least-squares minimum of a model containing a free constant
/// offset, this sum vanishes to first order; it is exposed as a cheap
/// optimality diagnostic.
pub fn weighted_residual_sum(model: &ModelSpec, theta: &Theta, window: &FitWindow) -> f64 {
    let w = 1.0 / (window.sigma * window.sigma);
    window
        .time
        .iter()
        .zip(window.position.iter())
        .map(|(&t, &y)| (y - model.eval(t, theta)) * w)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::data::DatasetMeta;
    use crate::models::registry::{ModelKind, ModelSpec};
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Residual values, mean, and Bessel-corrected standard deviation on a
    //   hand-checked series.
    // - Full-range computation (residuals beyond tmax are included).
    // - The guard for series too short to summarize.
    //
    // They intentionally DO NOT cover:
    // - The first-order optimality property at real minima; that lives in
    //   the integration tests where an actual fit is available.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify residuals, mean, and sample standard deviation on a series
    // with known deviations from a zero-amplitude model.
    //
    // Given
    // -----
    // - The `simple` model with A = 0 (predicting 0 everywhere) and
    //   positions (1, -1, 1, -1).
    //
    // Expect
    // ------
    // - Residuals equal to the positions, mean 0, std sqrt(4/3).
    fn from_model_matches_hand_checked_summary() {
        // Arrange
        let spec = ModelSpec::lookup(ModelKind::Simple);
        let meta = DatasetMeta::new("residuals", 0.1, 100.0).unwrap();
        let data = OscillationData::new(
            array![0.0, 1.0, 2.0, 3.0],
            array![1.0, -1.0, 1.0, -1.0],
            meta,
        )
        .unwrap();
        let theta = array![0.0, 1.0, 0.0];

        // Act
        let set = ResidualSet::from_model(&spec, &theta, &data).unwrap();

        // Assert
        assert_eq!(set.values, array![1.0, -1.0, 1.0, -1.0]);
        assert_eq!(set.mean, 0.0);
        assert!((set.std_dev - (4.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify residuals are computed over the whole series even when tmax
    // restricts the fit window to a prefix.
    //
    // Given
    // -----
    // - A 4-point series with tmax = 1.0 (fit window of 2 points).
    //
    // Expect
    // ------
    // - A residual for every observation, not just the window.
    fn from_model_covers_observations_beyond_tmax() {
        // Arrange
        let spec = ModelSpec::lookup(ModelKind::Simple);
        let meta = DatasetMeta::new("residuals", 0.1, 1.0).unwrap();
        let data = OscillationData::new(
            array![0.0, 1.0, 2.0, 3.0],
            array![1.0, 0.0, -1.0, 0.0],
            meta,
        )
        .unwrap();
        let theta = array![1.0, std::f64::consts::FRAC_PI_2, 0.0];

        // Act
        let set = ResidualSet::from_model(&spec, &theta, &data).unwrap();

        // Assert
        assert_eq!(set.values.len(), 4);
        assert_eq!(data.fit_window().time.len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify the weighted residual sum on a hand-checked window.
    //
    // Given
    // -----
    // - Residuals (0.1, -0.1) against a zero prediction with σ = 0.1.
    //
    // Expect
    // ------
    // - Exact cancellation to 0 (weights are uniform).
    fn weighted_residual_sum_cancels_symmetric_residuals() {
        // Arrange
        let spec = ModelSpec::lookup(ModelKind::Simple);
        let window = FitWindow {
            time: array![0.0, 1.0],
            position: array![0.1, -0.1],
            sigma: 0.1,
            tmax: 1.0,
        };
        let theta = array![0.0, 1.0, 0.0];

        // Act
        let sum = weighted_residual_sum(&spec, &theta, &window);

        // Assert
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a single-observation series cannot be summarized.
    //
    // Given
    // -----
    // - A one-point dataset.
    //
    // Expect
    // ------
    // - `TooFewResiduals { n_obs: 1 }`.
    fn from_model_rejects_single_observation() {
        let spec = ModelSpec::lookup(ModelKind::Simple);
        let meta = DatasetMeta::new("residuals", 0.1, 1.0).unwrap();
        let data = OscillationData::new(array![0.0], array![1.0], meta).unwrap();
        let theta = array![0.0, 1.0, 0.0];
        assert!(matches!(
            ResidualSet::from_model(&spec, &theta, &data),
            Err(DiagnosticsError::TooFewResiduals { n_obs: 1 })
        ));
    }
}
