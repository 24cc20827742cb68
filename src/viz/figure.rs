//! Fit figure rendering.
//!
//! One SVG figure per fit, with three panels:
//! - top: the data with vertical error bars and the fitted curve sampled
//!   densely over the full time range,
//! - bottom left: residuals (observed − predicted) against time,
//! - bottom right: a histogram of the residuals, annotated with the fitted
//!   parameter values and their uncertainties.
//!
//! Rendering happens only when the exercise configuration asks for saved
//! output; the rest of the crate never depends on this module.
use std::path::Path;

use crate::{
    dataset::data::OscillationData,
    diagnostics::residuals::ResidualSet,
    fitting::types::Theta,
    models::registry::ModelSpec,
    viz::errors::{PlotError, PlotResult},
};
use plotters::prelude::*;

/// Number of sample points for the fitted-curve overlay.
const CURVE_SAMPLES: usize = 500;

/// Number of bins in the residual histogram.
const HISTOGRAM_BINS: usize = 25;

/// Everything needed to render one fit figure.
pub struct FitFigure<'a> {
    pub title: String,
    pub data: &'a OscillationData,
    pub model: &'a ModelSpec,
    pub theta: &'a Theta,
    pub residuals: &'a ResidualSet,
    /// One line per parameter, e.g. `"omega = 4.3312 +/- 0.0021"`.
    pub annotations: Vec<String>,
}

/// Sample a fitted model on a uniform grid for curve drawing.
pub fn sample_curve(model: &ModelSpec, theta: &Theta, t_min: f64, t_max: f64) -> Vec<(f64, f64)> {
    let step = (t_max - t_min) / (CURVE_SAMPLES as f64 - 1.0);
    (0..CURVE_SAMPLES)
        .map(|i| {
            let t = t_min + step * i as f64;
            (t, model.eval(t, theta))
        })
        .collect()
}

/// Format one annotation line per parameter, `name = value +/- error`.
///
/// When no standard errors are available (curvature failure), the error
/// part is replaced by `"n/a"` so the figure still identifies the point
/// estimate.
pub fn param_summary(model: &ModelSpec, theta: &Theta, errors: Option<&Theta>) -> Vec<String> {
    model
        .param_names
        .iter()
        .enumerate()
        .map(|(i, name)| match errors {
            Some(se) => format!("{name} = {:.4} +/- {:.4}", theta[i], se[i]),
            None => format!("{name} = {:.4} +/- n/a", theta[i]),
        })
        .collect()
}

impl<'a> FitFigure<'a> {
    /// Render the figure to an SVG file.
    ///
    /// # Errors
    /// - [`PlotError::InvalidLayout`] when the dataset is empty (cannot
    ///   happen for validated data) or the residual set is empty.
    /// - [`PlotError::Backend`] for any drawing or I/O failure.
    pub fn render_svg(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        if self.data.is_empty() {
            return Err(PlotError::InvalidLayout { reason: "dataset is empty" });
        }
        if self.residuals.values.is_empty() {
            return Err(PlotError::InvalidLayout { reason: "residual set is empty" });
        }

        let path = path.as_ref();
        let root = SVGBackend::new(path, (960, 720)).into_drawing_area();
        root.fill(&WHITE).map_err(to_backend_err)?;

        let (upper, lower) = root.split_vertically(430);
        let (residual_area, histogram_area) = lower.split_horizontally(480);

        self.draw_data_panel(&upper)?;
        self.draw_residual_panel(&residual_area)?;
        self.draw_histogram_panel(&histogram_area)?;

        root.present().map_err(to_backend_err)
    }

    fn draw_data_panel<DB: DrawingBackend>(
        &self, area: &DrawingArea<DB, plotters::coord::Shift>,
    ) -> PlotResult<()> {
        let sigma = self.data.meta.sigma;
        let (t_min, t_max) = padded_range(&self.data.time, 0.02);
        let (x_min, x_max) = padded_range(&self.data.position, 0.10);

        let mut chart = ChartBuilder::on(area)
            .caption(self.title.as_str(), ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(t_min..t_max, (x_min - sigma)..(x_max + sigma))
            .map_err(to_backend_err)?;
        chart
            .configure_mesh()
            .x_desc("time [s]")
            .y_desc("position")
            .draw()
            .map_err(to_backend_err)?;

        chart
            .draw_series(self.data.time.iter().zip(self.data.position.iter()).map(
                |(&t, &x)| {
                    ErrorBar::new_vertical(t, x - sigma, x, x + sigma, BLUE.filled(), 3)
                },
            ))
            .map_err(to_backend_err)?
            .label("data")
            .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

        let curve = sample_curve(self.model, self.theta, t_min, t_max);
        chart
            .draw_series(LineSeries::new(curve, &RED))
            .map_err(to_backend_err)?
            .label(self.model.name)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(to_backend_err)
    }

    fn draw_residual_panel<DB: DrawingBackend>(
        &self, area: &DrawingArea<DB, plotters::coord::Shift>,
    ) -> PlotResult<()> {
        let (t_min, t_max) = padded_range(&self.data.time, 0.02);
        let (r_min, r_max) = padded_range(&self.residuals.values, 0.10);

        let mut chart = ChartBuilder::on(area)
            .caption("residuals", ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(t_min..t_max, r_min..r_max)
            .map_err(to_backend_err)?;
        chart
            .configure_mesh()
            .x_desc("time [s]")
            .y_desc("observed - model")
            .draw()
            .map_err(to_backend_err)?;

        chart
            .draw_series(
                self.data
                    .time
                    .iter()
                    .zip(self.residuals.values.iter())
                    .map(|(&t, &r)| Circle::new((t, r), 2, BLUE.filled())),
            )
            .map_err(to_backend_err)?;

        chart
            .draw_series(LineSeries::new(vec![(t_min, 0.0), (t_max, 0.0)], &BLACK))
            .map_err(to_backend_err)?;
        Ok(())
    }

    fn draw_histogram_panel<DB: DrawingBackend>(
        &self, area: &DrawingArea<DB, plotters::coord::Shift>,
    ) -> PlotResult<()> {
        let (r_min, r_max) = padded_range(&self.residuals.values, 0.05);
        let bin_width = (r_max - r_min) / HISTOGRAM_BINS as f64;
        let mut counts = vec![0usize; HISTOGRAM_BINS];
        for &r in self.residuals.values.iter() {
            let mut bin = ((r - r_min) / bin_width) as usize;
            if bin >= HISTOGRAM_BINS {
                bin = HISTOGRAM_BINS - 1;
            }
            counts[bin] += 1;
        }
        let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

        let mut chart = ChartBuilder::on(area)
            .caption("residual distribution", ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(r_min..r_max, 0f64..(max_count as f64 * 1.25))
            .map_err(to_backend_err)?;
        chart
            .configure_mesh()
            .x_desc("observed - model")
            .y_desc("count")
            .draw()
            .map_err(to_backend_err)?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x0 = r_min + bin_width * i as f64;
                let x1 = x0 + bin_width;
                Rectangle::new([(x0, 0.0), (x1, count as f64)], BLUE.mix(0.4).filled())
            }))
            .map_err(to_backend_err)?;

        // Summary and per-parameter annotations in the top-left corner.
        let style = TextStyle::from(("sans-serif", 13)).color(&BLACK);
        let header = format!(
            "mean = {:.4}  std = {:.4}",
            self.residuals.mean, self.residuals.std_dev
        );
        let mut lines = vec![header];
        lines.extend(self.annotations.iter().cloned());
        for (i, line) in lines.iter().enumerate() {
            area.draw_text(line, &style, (60, 45 + 15 * i as i32)).map_err(to_backend_err)?;
        }
        Ok(())
    }
}

// ---- Helper methods ----

fn padded_range(values: &ndarray::Array1<f64>, fraction: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values.iter() {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = (max - min).max(1e-9);
    (min - span * fraction, max + span * fraction)
}

fn to_backend_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Backend { text: err.to_string() }
}
