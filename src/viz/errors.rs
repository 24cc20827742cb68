//! Error type for figure rendering.
use std::fmt;

/// Result alias for rendering operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// Failure inside the drawing backend (filesystem or rendering).
    Backend {
        text: String,
    },

    /// A figure cannot be laid out (e.g., empty series).
    InvalidLayout {
        reason: &'static str,
    },
}

impl std::error::Error for PlotError {}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Backend { text } => write!(f, "Rendering failed: {text}"),
            PlotError::InvalidLayout { reason } => write!(f, "Cannot lay out figure: {reason}"),
        }
    }
}
