//! The `Scheme` trait every registered palette generator implements.
//!
//! The trait is object-safe so schemes can be used as `dyn Scheme` when the
//! scheme is chosen at runtime.

use serde_json::Value;
use tincture_core::Color;

/// A palette generator configured once and applied to any base color.
pub trait Scheme {
    /// Generates the palette for `base`. Every entry is in `base`'s model.
    fn generate(&self, base: &Color) -> Vec<Color>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
