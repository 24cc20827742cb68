//! Error type for goodness-of-fit diagnostics.
use std::fmt;

/// Result alias for diagnostics operations.
pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticsError {
    /// Fewer observations than free parameters leaves no degrees of freedom.
    InsufficientData {
        n_obs: usize,
        n_params: usize,
    },

    /// Chi-square statistics must be finite and non-negative.
    InvalidChiSquare {
        value: f64,
    },

    /// Residual summaries require at least two observations.
    TooFewResiduals {
        n_obs: usize,
    },
}

impl std::error::Error for DiagnosticsError {}

impl fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticsError::InsufficientData { n_obs, n_params } => {
                write!(
                    f,
                    "Cannot form degrees of freedom: {n_obs} observations for {n_params} parameters"
                )
            }
            DiagnosticsError::InvalidChiSquare { value } => {
                write!(f, "Invalid chi-square statistic: {value}, must be finite and >= 0")
            }
            DiagnosticsError::TooFewResiduals { n_obs } => {
                write!(f, "Residual summary needs at least 2 observations, got {n_obs}")
            }
        }
    }
}
