//! Error types for the scheme registry.

use thiserror::Error;
use tincture_core::ColorError;

/// Errors produced while constructing a scheme.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// The requested scheme name is not registered.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// A scheme that cannot run without a parameter was constructed without it.
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// A parameter is present but its JSON value does not describe a valid
    /// setting.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    /// A color-valued parameter did not parse.
    #[error(transparent)]
    Color(#[from] ColorError),
}
