//! Error type for the model library.
use std::fmt;

/// Result alias for model-layer operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Parameter vector length does not match the model arity.
    ArityMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },

    /// Name not present in the built-in registry.
    UnknownModel {
        name: String,
    },
}

impl std::error::Error for ModelError {}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ArityMismatch { model, expected, actual } => {
                write!(
                    f,
                    "Parameter vector for model '{model}' has length {actual}, expected {expected}"
                )
            }
            ModelError::UnknownModel { name } => {
                write!(f, "Unknown model '{name}'")
            }
        }
    }
}
