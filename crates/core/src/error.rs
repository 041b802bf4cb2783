//! Error types for tincture.

use crate::model::Model;
use thiserror::Error;

/// The category an error belongs to.
///
/// Every failure in the core is an invalid argument: either a constructor saw
/// a field outside its model's domain, or a parser rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors produced by color construction, parsing, and palette matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A constructor received a component outside the model's domain, or a
    /// non-finite number.
    #[error("parameter {field} out of range ({value})")]
    OutOfRange { field: &'static str, value: f64 },

    /// A parser rejected its input. `input` is the caller's text, unmodified.
    #[error("invalid {model} string ({input})")]
    InvalidString { model: Model, input: String },

    /// Text passed to the auto-detecting parser names no known model.
    #[error("unrecognized color string ({input})")]
    Unrecognized { input: String },

    /// A nearest-color search was given no candidates.
    #[error("cannot match against an empty palette")]
    EmptyPalette,
}

impl ColorError {
    /// The category of this error. Always [`ErrorKind::InvalidArgument`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// The offending raw input, for diagnostics.
    ///
    /// For parse failures this is the original string; for range failures it
    /// is the rejected value rendered as text.
    pub fn input(&self) -> String {
        match self {
            ColorError::OutOfRange { value, .. } => value.to_string(),
            ColorError::InvalidString { input, .. } | ColorError::Unrecognized { input } => {
                input.clone()
            }
            ColorError::EmptyPalette => String::new(),
        }
    }

    pub(crate) fn invalid_string(model: Model, input: &str) -> Self {
        log::debug!("rejected {model} string {input:?}");
        ColorError::InvalidString {
            model,
            input: input.to_owned(),
        }
    }
}

/// Checks that `value` is finite and within `[min, max]`.
pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ColorError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange { field, value })
    }
}

/// Checks that `value` is finite.
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, ColorError> {
    check_range(field, value, f64::NEG_INFINITY, f64::INFINITY)
}
