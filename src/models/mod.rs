//! models — the candidate model family for oscillator fits.
//!
//! Purpose
//! -------
//! Provide the small, explicit set of closed-form models the fitting
//! exercises work through, from a plain cosine up to a doubly-damped,
//! modulated oscillation, together with a registry describing each model's
//! name, parameter layout, and evaluation function.
//!
//! Conventions
//! -----------
//! - Evaluators are pure `fn(t, θ) → f64` mappings over the crate-standard
//!   [`Theta`](crate::fitting::types::Theta) parameter vector.
//! - The registry is an open set closed by convention: the built-ins cover
//!   the exercise, and user code may define further [`ModelSpec`] values
//!   without touching any other module.
//!
//! Testing notes
//! -------------
//! - `functions` carries hand-checked evaluations and the zero-amplitude
//!   constancy property; `registry` covers lookup and arity enforcement.

pub mod errors;
pub mod functions;
pub mod registry;

pub use self::errors::{ModelError, ModelResult};
pub use self::registry::{ModelFn, ModelKind, ModelSpec, BUILTIN_MODELS};
